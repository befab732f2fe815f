use serde::Serialize;
use wf_core::ast::QualifiedName;
use wf_core::source_map::LineCol;
use wf_core::span::Span;

use crate::error::UnsupportedPattern;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedRewrite {
    pub rule: QualifiedName,
    pub span: Option<Span>,
    pub position: Option<LineCol>,
}

/// What a walk did to one tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    pub applied: Vec<AppliedRewrite>,
    pub unsupported: Vec<UnsupportedPattern>,
    /// Nodes offered to the matcher, replaced subtrees excluded.
    pub visited: usize,
}

impl RewriteReport {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}
