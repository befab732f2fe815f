//! Callee lookup against the rule table.

use wf_core::ast::{Node, NodeKind};

use crate::rule::{RewriteRule, RuleSet};

impl RuleSet {
    /// Rule for `node` if it is a call whose callee is a literal
    /// `namespace.name` registered in the table.
    ///
    /// Bare identifiers, deeper selector chains and computed callees never
    /// match: the parser only produces `QualifiedIdent` when the namespace is
    /// a plain identifier, everything else stays opaque.
    pub fn match_call(&self, node: &Node) -> Option<&RewriteRule> {
        let NodeKind::Call(call) = node.kind() else {
            return None;
        };
        let NodeKind::QualifiedIdent(callee) = call.callee.kind() else {
            return None;
        };
        self.rules().iter().find(|rule| callee.is(&rule.pattern))
    }
}
