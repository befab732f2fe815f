//! wrapfix CLI Library
//!
//! Command-line front end for the rewrite engine: configuration, input file
//! discovery, diagnostics and the individual subcommands.

pub mod cli;
pub mod commands;
pub mod diagnostics;
pub mod utils;

// CLI-specific error handling
pub mod error {
    use std::path::PathBuf;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Invalid input: {0}")]
        InvalidInput(String),

        #[error("{}: {error}", path.display())]
        Rewrite {
            path: PathBuf,
            source_text: String,
            #[source]
            error: wf_core::Error,
        },

        #[error("{0} file(s) would be rewritten")]
        WouldChange(usize),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
