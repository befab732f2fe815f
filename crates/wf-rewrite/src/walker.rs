//! Depth-first, pre-order rewrite traversal.

use tracing::{debug, trace, warn};
use wf_core::ast::{Node, NodeKind, SyntaxTree};
use wf_core::source_map::SourceMap;

use crate::report::{AppliedRewrite, RewriteReport};
use crate::rewriter::{RewriteResult, Rewriter};
use crate::rule::RuleSet;

/// Visits every node once. A replaced node is swapped into its parent slot
/// and its new subtree is not entered again, so generated calls can never be
/// rewritten a second time within one walk.
pub struct Walker<'r> {
    rewriter: Rewriter<'r>,
    report: RewriteReport,
}

impl<'r> Walker<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            rewriter: Rewriter::new(rules),
            report: RewriteReport::default(),
        }
    }

    pub fn walk(mut self, tree: &mut SyntaxTree) -> RewriteReport {
        debug!(rules = %self.rewriter.rules(), "walking syntax tree");
        let (root, source_map) = tree.root_and_map_mut();
        self.visit(root, Some(source_map));
        self.report
    }

    /// Walk a detached subtree; positions in the report are left empty.
    pub fn walk_node(mut self, node: &mut Node) -> RewriteReport {
        self.visit(node, None);
        self.report
    }

    fn visit(&mut self, node: &mut Node, source_map: Option<&SourceMap>) {
        self.report.visited += 1;

        if let NodeKind::Call(call) = node.kind() {
            let callee = call.callee_name();
            let span = node.extent();
            let position = span
                .zip(source_map)
                .map(|(span, map)| map.position(span.lo as usize));

            match self.rewriter.rewrite(node) {
                Ok(RewriteResult::Replaced(replacement)) => {
                    if let Some(rule) = callee {
                        debug!(rule = %rule, at = ?position, "rewrote call");
                        self.report.applied.push(AppliedRewrite {
                            rule,
                            span,
                            position,
                        });
                    }
                    *node = replacement;
                    return;
                }
                Ok(RewriteResult::Unchanged) => {}
                Err(unsupported) => {
                    let unsupported = unsupported.at(position);
                    warn!(
                        rule = %unsupported.rule,
                        at = ?position,
                        reason = %unsupported.reason,
                        "leaving call unchanged"
                    );
                    self.report.unsupported.push(unsupported);
                }
            }
        }

        trace!(kind = node.kind_name(), "descending");
        for child in node.children_mut() {
            self.visit(child, source_map);
        }
    }
}
