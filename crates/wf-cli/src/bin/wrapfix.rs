//! wrapfix CLI Binary
//!
//! Migrates `github.com/pkg/errors` call sites to the standard library's
//! `fmt.Errorf` with `%w`, keeping the rest of each file byte for byte.
//!
//! # Usage
//!
//! ```bash
//! # Print the rewritten file
//! wrapfix rewrite main.go
//!
//! # Rewrite a whole module in place
//! wrapfix rewrite --write .
//!
//! # Fail (exit 1) if anything is left to migrate
//! wrapfix check ./pkg
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use wf_cli::{
    cli::CliConfig,
    commands::{self, check::CheckArgs, rewrite::RewriteArgs, rules::RulesArgs},
    diagnostics::setup_error_reporting,
    Result,
};

#[derive(Parser)]
#[command(
    name = "wrapfix",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rewrite errors.Wrap/Wrapf calls into fmt.Errorf with %w",
    long_about = r#"
wrapfix parses Go sources, rewrites calls such as

    errors.Wrapf(err, "read %s", path)

into

    fmt.Errorf("read %s: %w", path, err)

and leaves every other byte of the file as it was.

EXAMPLES:
    wrapfix rewrite main.go               # Print the rewritten file
    wrapfix rewrite --write ./pkg         # Rewrite in place
    wrapfix check ./pkg --json            # Report pending rewrites
    wrapfix rules                         # List active rules
    "#
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, global = true, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite files and print or write the result
    Rewrite(RewriteArgs),

    /// Report files that still need rewriting
    Check(CheckArgs),

    /// List the active rewrite rules
    Rules(RulesArgs),
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli) {
        use tracing::error;
        if !wf_cli::diagnostics::render_cli_error(&e) {
            // Emit via structured logging rather than printing directly
            error!("{}", e);
        }
        if verbose > 0 {
            error!(?e, "detailed error context");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up error reporting
    setup_error_reporting()?;

    // Configure logging
    setup_logging(cli.verbose, cli.quiet, cli.log, cli.log_format)?;

    // Change working directory if specified
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir).map_err(wf_cli::CliError::Io)?;
    }

    // Load configuration
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Rewrite(args) => commands::rewrite_command(args, &config)?,
        Commands::Check(args) => commands::check_command(args, &config)?,
        Commands::Rules(args) => commands::rules_command(args, &config)?,
    }

    if cli.verbose > 0 {
        info!("Command completed successfully");
    }
    Ok(())
}

fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    log_format: LogFormat,
) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(formatter)
                .with(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(formatter.json())
                .with(filter)
                .init();
        }
    }

    Ok(())
}
