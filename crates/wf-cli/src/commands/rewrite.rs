//! Rewrite command: apply the rule table and print or write the result.

use crate::{cli::CliConfig, Result};
use clap::Args;
use console::style;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, info_span};
use wf_golang::GoRewriter;

use super::common::{collect_go_files, rewrite_file};

/// Arguments for the rewrite command (also used by Clap)
#[derive(Debug, Clone, Args)]
pub struct RewriteArgs {
    /// Go files or directories to rewrite
    #[arg(required = true)]
    pub input: Vec<PathBuf>,

    /// Write results back to the files instead of printing them
    #[arg(short, long)]
    pub write: bool,
}

/// Execute the rewrite command.
pub fn rewrite_command(args: RewriteArgs, config: &CliConfig) -> Result<()> {
    let rules = config.rule_set()?;
    let files = collect_go_files(&args.input, config)?;
    info!("Rewriting {} file(s) with rules {}", files.len(), rules);

    let mut rewriter = GoRewriter::new(&rules)
        .map_err(|e| crate::CliError::Config(e.to_string()))?
        .with_options(config.rewrite_options());

    let mut rewritten = 0;
    let mut calls = 0;
    let mut skipped = 0;
    let stdout = std::io::stdout();

    for file in &files {
        let _span = info_span!("rewrite.file", file = %file.display()).entered();
        let outcome = rewrite_file(&mut rewriter, file)?;
        calls += outcome.report.applied.len();
        skipped += outcome.report.unsupported.len();

        if args.write {
            if outcome.changed() {
                std::fs::write(file, &outcome.output)?;
                rewritten += 1;
                info!(
                    "Rewrote {} call(s) in {}",
                    outcome.report.applied.len(),
                    file.display()
                );
            }
        } else {
            if outcome.changed() {
                rewritten += 1;
            }
            let mut out = stdout.lock();
            out.write_all(outcome.output.as_bytes())?;
            out.flush()?;
        }
    }

    eprintln!(
        "{} {} call(s) rewritten in {} of {} file(s), {} skipped",
        style("✓").green(),
        calls,
        rewritten,
        files.len(),
        skipped
    );

    Ok(())
}
