use serde::Serialize;
use thiserror::Error;
use wf_core::ast::QualifiedName;
use wf_core::source_map::LineCol;
use wf_core::span::Span;

/// Why a rule declined a call that carried its callee name.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UnsupportedReason {
    #[error("expected at least {expected} arguments, found {found}")]
    TooFewArguments { expected: usize, found: usize },
    #[error("format template is a `{found}`, not a string literal")]
    NonLiteralTemplate { found: String },
    #[error("template `{raw}` is not a quoted string literal")]
    MalformedTemplate { raw: String },
    #[error("spread argument must stay last and cannot precede the wrapped error")]
    SpreadArgument,
}

/// A call that looked like a rule's pattern but failed a precondition.
/// The call is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{rule}: {reason}")]
pub struct UnsupportedPattern {
    pub rule: QualifiedName,
    pub span: Option<Span>,
    pub position: Option<LineCol>,
    pub reason: UnsupportedReason,
}

impl UnsupportedPattern {
    pub fn new(rule: QualifiedName, span: Option<Span>, reason: UnsupportedReason) -> Self {
        Self {
            rule,
            span,
            position: None,
            reason,
        }
    }

    pub fn at(mut self, position: Option<LineCol>) -> Self {
        self.position = position;
        self
    }
}
