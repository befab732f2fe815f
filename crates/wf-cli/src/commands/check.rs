//! Check command: report files the rewrite would change, without touching them.

use crate::{cli::CliConfig, CliError, Result};
use clap::Args;
use console::style;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use wf_golang::GoRewriter;
use wf_rewrite::RewriteReport;

use super::common::{collect_go_files, rewrite_file};

/// Arguments for the check command (also used by Clap)
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Go files or directories to check
    #[arg(required = true)]
    pub input: Vec<PathBuf>,

    /// Print the per-file reports as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FileReport<'a> {
    path: String,
    changed: bool,
    report: &'a RewriteReport,
}

/// Execute the check command. Fails with `WouldChange` if any file would be rewritten.
pub fn check_command(args: CheckArgs, config: &CliConfig) -> Result<()> {
    let rules = config.rule_set()?;
    let files = collect_go_files(&args.input, config)?;
    info!("Checking {} file(s)", files.len());

    let mut rewriter = GoRewriter::new(&rules)
        .map_err(|e| CliError::Config(e.to_string()))?
        .with_options(config.rewrite_options());

    let mut outcomes = Vec::with_capacity(files.len());
    for file in &files {
        let outcome = rewrite_file(&mut rewriter, file)?;
        outcomes.push((file, outcome));
    }

    let pending = outcomes.iter().filter(|(_, outcome)| outcome.changed()).count();

    if args.json {
        let reports: Vec<_> = outcomes
            .iter()
            .map(|(file, outcome)| FileReport {
                path: file.display().to_string(),
                changed: outcome.changed(),
                report: &outcome.report,
            })
            .collect();
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| CliError::InvalidInput(format!("Failed to serialize report: {e}")))?;
        println!("{json}");
    } else {
        for (file, outcome) in outcomes.iter().filter(|(_, outcome)| outcome.changed()) {
            for applied in &outcome.report.applied {
                let at = applied
                    .position
                    .map(|pos| format!("{}:{}", file.display(), pos))
                    .unwrap_or_else(|| file.display().to_string());
                println!("{at}: {}", applied.rule);
            }
        }
    }

    if pending > 0 {
        return Err(CliError::WouldChange(pending));
    }
    eprintln!("{} {} file(s) up to date", style("✓").green(), files.len());
    Ok(())
}
