//! File and path utilities

use crate::cli::FilesConfig;
use crate::{CliError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Utilities for working with files and paths
pub struct FileUtils;

impl FileUtils {
    /// Find all files matching a pattern in a directory
    pub fn find_files(
        dir: &Path,
        include_patterns: &[String],
        exclude_patterns: &[String],
    ) -> Result<Vec<PathBuf>> {
        let include_set = Self::build_glob_set(include_patterns)?;
        let exclude_set = Self::build_glob_set(exclude_patterns)?;

        let mut files = Vec::new();

        for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|e| CliError::Io(e.into()))?;
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = path
                .strip_prefix(dir)
                .map_err(|_| CliError::InvalidInput("Invalid path structure".to_string()))?;

            // Check include patterns (if any)
            if !include_patterns.is_empty() && !include_set.is_match(relative_path) {
                continue;
            }

            // Check exclude patterns
            if !exclude_patterns.is_empty() && exclude_set.is_match(relative_path) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        Ok(files)
    }

    /// Expand the command-line inputs: files are taken as given, directories
    /// are searched with the configured globs.
    pub fn collect_inputs(inputs: &[PathBuf], files: &FilesConfig) -> Result<Vec<PathBuf>> {
        let mut collected = Vec::new();
        for input in inputs {
            if input.is_dir() {
                collected.extend(Self::find_files(input, &files.include, &files.exclude)?);
            } else {
                collected.push(input.clone());
            }
        }
        Ok(collected)
    }

    /// Check if a file has a Go extension
    pub fn is_go_file(path: &Path) -> bool {
        path.extension().map_or(false, |ext| ext == "go")
    }

    fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                CliError::Config(format!("Invalid glob pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| CliError::Config(format!("Failed to build glob set: {}", e)))
    }
}
