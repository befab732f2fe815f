use wf_core::ast::{Node, NodeKind};

use crate::error::UnsupportedPattern;
use crate::rule::RuleSet;

/// Outcome of offering one node to the rewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteResult {
    Unchanged,
    Replaced(Node),
}

impl RewriteResult {
    pub fn is_replaced(&self) -> bool {
        matches!(self, RewriteResult::Replaced(_))
    }
}

/// Applies the matching rule's transform to a single node.
#[derive(Debug, Clone, Copy)]
pub struct Rewriter<'r> {
    rules: &'r RuleSet,
}

impl<'r> Rewriter<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    /// `Ok(Unchanged)` when no rule matches, `Err` when a rule matched but
    /// declined. The input node is never modified.
    pub fn rewrite(&self, node: &Node) -> Result<RewriteResult, UnsupportedPattern> {
        let Some(rule) = self.rules.match_call(node) else {
            return Ok(RewriteResult::Unchanged);
        };
        let NodeKind::Call(call) = node.kind() else {
            return Ok(RewriteResult::Unchanged);
        };
        rule.transform
            .apply(node, call)
            .map(RewriteResult::Replaced)
            .map_err(|reason| UnsupportedPattern::new(rule.pattern.clone(), node.extent(), reason))
    }
}
