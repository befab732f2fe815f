//! Shared helpers for subcommands

use crate::cli::CliConfig;
use crate::utils::FileUtils;
use crate::{CliError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use wf_golang::{GoRewriter, RewriteOutcome};

pub fn validate_paths_exist(inputs: &[PathBuf]) -> Result<()> {
    for input in inputs {
        if !input.exists() {
            return Err(CliError::InvalidInput(format!(
                "Input path does not exist: {}",
                input.display()
            )));
        }
    }
    Ok(())
}

/// Resolve inputs to the list of files to process.
pub fn collect_go_files(inputs: &[PathBuf], config: &CliConfig) -> Result<Vec<PathBuf>> {
    validate_paths_exist(inputs)?;
    let files = FileUtils::collect_inputs(inputs, &config.files)?;
    for file in files.iter().filter(|file| !FileUtils::is_go_file(file)) {
        warn!("{} does not have a .go extension", file.display());
    }
    Ok(files)
}

/// Read one file and run it through the rewriter.
pub fn rewrite_file(rewriter: &mut GoRewriter<'_>, path: &Path) -> Result<RewriteOutcome> {
    let source = std::fs::read_to_string(path)?;
    let outcome = rewriter
        .rewrite_source(&source)
        .map_err(|error| CliError::Rewrite {
            path: path.to_path_buf(),
            source_text: source.clone(),
            error,
        })?;

    for unsupported in &outcome.report.unsupported {
        let at = unsupported
            .position
            .map(|pos| format!("{}:{}", path.display(), pos))
            .unwrap_or_else(|| path.display().to_string());
        info!("{at}: skipped {unsupported}");
    }

    Ok(outcome)
}
