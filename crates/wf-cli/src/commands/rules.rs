//! Rules command: list the rule table in effect.

use crate::{cli::CliConfig, Result};
use clap::Args;
use console::style;

/// Arguments for the rules command (also used by Clap)
#[derive(Debug, Clone, Args)]
pub struct RulesArgs {}

pub fn rules_command(_args: RulesArgs, config: &CliConfig) -> Result<()> {
    let rules = config.rule_set()?;
    for rule in rules.rules() {
        println!("{:<22} {}", style(&rule.pattern).cyan(), rule.describe());
    }
    Ok(())
}
