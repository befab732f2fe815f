//! Integration tests for the wrapfix CLI commands

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wf_cli::cli::CliConfig;
use wf_cli::commands::check::{check_command, CheckArgs};
use wf_cli::commands::rewrite::{rewrite_command, RewriteArgs};
use wf_cli::CliError;

const PENDING: &str = r#"package main

import "github.com/pkg/errors"

func load(path string) error {
	if err := open(path); err != nil {
		return errors.Wrapf(err, "open %s", path)
	}
	return nil
}
"#;

const MIGRATED: &str = r#"package main

import "github.com/pkg/errors"

func load(path string) error {
	if err := open(path); err != nil {
		return fmt.Errorf("open %s: %w", path, err)
	}
	return nil
}
"#;

fn write_file(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_rewrite_write_in_place() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "pkg/load.go", PENDING);

    let args = RewriteArgs {
        input: vec![temp_dir.path().to_path_buf()],
        write: true,
    };
    rewrite_command(args, &CliConfig::default()).unwrap();

    let rewritten = fs::read_to_string(temp_dir.path().join("pkg/load.go")).unwrap();
    assert_eq!(rewritten, MIGRATED);
}

#[test]
fn test_rewrite_skips_vendor() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "vendor/dep/load.go", PENDING);
    write_file(temp_dir.path(), "load.go", PENDING);

    let args = RewriteArgs {
        input: vec![temp_dir.path().to_path_buf()],
        write: true,
    };
    rewrite_command(args, &CliConfig::default()).unwrap();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("load.go")).unwrap(),
        MIGRATED
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("vendor/dep/load.go")).unwrap(),
        PENDING
    );
}

#[test]
fn test_rewrite_without_write_leaves_files() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "load.go", PENDING);

    let args = RewriteArgs {
        input: vec![temp_dir.path().join("load.go")],
        write: false,
    };
    rewrite_command(args, &CliConfig::default()).unwrap();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("load.go")).unwrap(),
        PENDING
    );
}

#[test]
fn test_disabled_rule_is_not_applied() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "load.go", PENDING);

    let mut config = CliConfig::default();
    config.rewrite.disabled_rules = vec!["errors.Wrapf".to_string()];

    let args = RewriteArgs {
        input: vec![temp_dir.path().join("load.go")],
        write: true,
    };
    rewrite_command(args, &config).unwrap();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("load.go")).unwrap(),
        PENDING
    );
}

#[test]
fn test_unknown_rule_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "load.go", PENDING);

    let mut config = CliConfig::default();
    config.rewrite.enabled_rules = Some(vec!["errors.Cause".to_string()]);

    let args = RewriteArgs {
        input: vec![temp_dir.path().join("load.go")],
        write: true,
    };
    let err = rewrite_command(args, &config).unwrap_err();
    assert!(matches!(err, CliError::Config(_)), "{err}");
}

#[test]
fn test_check_reports_pending_files() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "a.go", PENDING);
    write_file(temp_dir.path(), "b.go", MIGRATED);

    let args = CheckArgs {
        input: vec![temp_dir.path().to_path_buf()],
        json: false,
    };
    let err = check_command(args, &CliConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::WouldChange(1)), "{err}");

    // check never writes
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a.go")).unwrap(),
        PENDING
    );
}

#[test]
fn test_check_clean_tree() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "b.go", MIGRATED);

    let args = CheckArgs {
        input: vec![temp_dir.path().to_path_buf()],
        json: true,
    };
    check_command(args, &CliConfig::default()).unwrap();
}

#[test]
fn test_syntax_error_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "broken.go", "package main\n\nfunc (\n");

    let args = RewriteArgs {
        input: vec![temp_dir.path().join("broken.go")],
        write: true,
    };
    match rewrite_command(args, &CliConfig::default()) {
        Err(CliError::Rewrite { path, error, .. }) => {
            assert!(path.ends_with("broken.go"));
            assert!(matches!(error, wf_core::Error::Parse(_)), "{error}");
        }
        other => panic!("expected a rewrite error, got {other:?}"),
    }
}

#[test]
fn test_missing_input_path() {
    let temp_dir = TempDir::new().unwrap();
    let args = RewriteArgs {
        input: vec![temp_dir.path().join("absent.go")],
        write: false,
    };
    let err = rewrite_command(args, &CliConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::InvalidInput(_)), "{err}");
}
