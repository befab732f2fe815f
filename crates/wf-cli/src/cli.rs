//! CLI configuration and settings management

use crate::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wf_core::ast::QualifiedName;
use wf_golang::RewriteOptions;
use wf_rewrite::RuleSet;

/// CLI configuration loaded from config files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Rewrite settings
    pub rewrite: RewriteConfig,

    /// Input discovery settings
    pub files: FilesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Rules to apply, as `namespace.name`. All built-in rules when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_rules: Option<Vec<String>>,

    /// Rules to leave out even if enabled
    pub disabled_rules: Vec<String>,

    /// Re-parse rewritten files before accepting them
    pub verify_output: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            enabled_rules: None,
            disabled_rules: Vec::new(),
            verify_output: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Globs (relative to each input directory) selecting source files
    pub include: Vec<String>,

    /// Globs excluded from directory walks
    pub exclude: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            include: vec!["**/*.go".to_string()],
            exclude: vec!["vendor/**".to_string(), "**/testdata/**".to_string()],
        }
    }
}

impl CliConfig {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let mut candidates = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("wrapfix").join("config.toml"));
        }
        if let Some(home_dir) = dirs::home_dir() {
            candidates.push(home_dir.join(".wrapfix.toml"));
        }
        candidates.push(PathBuf::from("wrapfix.toml"));

        // Later candidates are more specific and take precedence
        let mut config = Self::default();
        for candidate in candidates.iter().filter(|path| path.is_file()) {
            config = config.merge(Self::load_from_file(candidate)?);
        }
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| CliError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Merge this configuration with another, with the other taking precedence.
    ///
    /// Precedence is per section. A section of `other` equal to the defaults
    /// counts as unset, so a later file cannot reset an earlier file's section
    /// back to the default values; set `--config` to use a single file.
    pub fn merge(self, other: Self) -> Self {
        let defaults = Self::default();
        Self {
            rewrite: if other.rewrite != defaults.rewrite {
                other.rewrite
            } else {
                self.rewrite
            },
            files: if other.files != defaults.files {
                other.files
            } else {
                self.files
            },
        }
    }

    /// Built-in rule table restricted to the configured rules.
    pub fn rule_set(&self) -> Result<RuleSet> {
        let builtin = RuleSet::builtin();
        let resolve = |names: &[String]| -> Result<Vec<QualifiedName>> {
            names
                .iter()
                .map(|name| {
                    let pattern = QualifiedName::parse(name).ok_or_else(|| {
                        CliError::Config(format!("rule `{name}` is not of the form namespace.name"))
                    })?;
                    if builtin.get(&pattern).is_none() {
                        return Err(CliError::Config(format!("unknown rule `{name}`")));
                    }
                    Ok(pattern)
                })
                .collect()
        };

        let enabled = self
            .rewrite
            .enabled_rules
            .as_deref()
            .map(|names| resolve(names))
            .transpose()?;
        let disabled = resolve(&self.rewrite.disabled_rules)?;

        Ok(builtin.retain(|pattern| {
            enabled
                .as_ref()
                .map_or(true, |enabled| enabled.contains(pattern))
                && !disabled.contains(pattern)
        }))
    }

    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            verify_output: self.rewrite.verify_output,
        }
    }
}
