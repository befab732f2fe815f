use crate::source_map::LineCol;
use crate::span::Span;
use std::result;
use thiserror::Error;

/// Input text is not syntactically valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{position}: {message}")]
pub struct ParseError {
    pub span: Span,
    pub position: LineCol,
    pub message: String,
}

/// The printer met a tree that cannot be expressed as valid source text.
///
/// Only reachable through an engine bug: trees produced by the parser and the
/// built-in rules always satisfy the printer's invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedTreeError {
    #[error("synthesized `{kind}` node has no canonical form")]
    OpaqueSynthesized { kind: String },
    #[error("synthesized node inside parsed `{parent}` has no source anchor")]
    UnanchoredNode { parent: String },
    #[error("child {child} escapes or overlaps within parent {parent}")]
    ChildOutOfOrder { parent: Span, child: Span },
    #[error("`{text}` is not a valid identifier")]
    InvalidIdent { text: String },
    #[error("`{raw}` is not a quoted string literal")]
    InvalidStringLit { raw: String },
    #[error("callee `{kind}` cannot be printed as a call target")]
    InvalidCallee { kind: String },
    #[error("printed source no longer parses: {0}")]
    InvalidOutput(ParseError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Malformed tree: {0}")]
    MalformedTree(#[from] MalformedTreeError),
    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = result::Result<T, Error>;

// Convert from eyre::Report to our Error type
impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Generic(err.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}
