//! Core data model for wrapfix: spans, source positions, the syntax tree and
//! the error types shared by every stage.

pub mod ast;
pub mod error;
pub mod source_map;
pub mod span;

pub use error::{Error, Result};
