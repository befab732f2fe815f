//! Command implementations for the wrapfix CLI

pub mod check;
pub mod common;
pub mod rewrite;
pub mod rules;

// Re-export command functions
pub use check::check_command;
pub use common::validate_paths_exist;
pub use rewrite::rewrite_command;
pub use rules::rules_command;
