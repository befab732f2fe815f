//! Static rewrite rule table.

use itertools::Itertools;
use wf_core::ast::{Comment, ExprCall, Node, NodeKind, QualifiedIdent, QualifiedName};

use crate::error::UnsupportedReason;

/// Suffix embedded into the format template for the wrapped error.
pub const WRAP_PLACEHOLDER: &str = ": %w";

/// How a matched call is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    /// `wrap(err, "ctx", args...)` -> `target("ctx: %w", args..., err)`
    WrapToErrorf {
        target: QualifiedName,
        suffix: String,
    },
    /// `name(args...)` -> `target(args...)`, argument text untouched.
    RenameCallee { target: QualifiedName },
}

impl Transform {
    pub fn wrap_to(target: QualifiedName) -> Self {
        Transform::WrapToErrorf {
            target,
            suffix: WRAP_PLACEHOLDER.to_string(),
        }
    }

    pub fn rename_to(target: QualifiedName) -> Self {
        Transform::RenameCallee { target }
    }

    pub fn target(&self) -> &QualifiedName {
        match self {
            Transform::WrapToErrorf { target, .. } | Transform::RenameCallee { target } => target,
        }
    }

    /// Build the replacement for `node`, whose kind is `call`.
    pub fn apply(&self, node: &Node, call: &ExprCall) -> Result<Node, UnsupportedReason> {
        match self {
            Transform::WrapToErrorf { target, suffix } => {
                let rebuilt = wrap_to_errorf(call, target, suffix)?;
                Ok(Node::call(rebuilt)
                    .replacing(node.extent())
                    .with_comments(node.comments.clone()))
            }
            Transform::RenameCallee { target } => {
                let mut renamed = call.clone();
                let callee = QualifiedIdent::from(target).with_comments(selector_comments(call));
                renamed.callee =
                    Box::new(Node::qualified_ident(callee).replacing(call.callee.extent()));
                let mut replaced = Node::new(NodeKind::Call(renamed), node.origin());
                replaced.comments = node.comments.clone();
                Ok(replaced)
            }
        }
    }
}

fn wrap_to_errorf(
    call: &ExprCall,
    target: &QualifiedName,
    suffix: &str,
) -> Result<ExprCall, UnsupportedReason> {
    let [error_value, template, format_args @ ..] = call.args.as_slice() else {
        return Err(UnsupportedReason::TooFewArguments {
            expected: 2,
            found: call.args.len(),
        });
    };
    if call.spread {
        return Err(UnsupportedReason::SpreadArgument);
    }
    let NodeKind::StringLit(lit) = template.kind() else {
        return Err(UnsupportedReason::NonLiteralTemplate {
            found: template.kind_name().to_string(),
        });
    };
    let lit = lit
        .with_suffix(suffix)
        .ok_or_else(|| UnsupportedReason::MalformedTemplate {
            raw: lit.raw.clone(),
        })?;

    let mut args = Vec::with_capacity(call.args.len());
    args.push(Node::string_lit(lit).with_comments(template.comments.clone()));
    args.extend(format_args.iter().cloned());
    args.push(error_value.clone());

    let callee = QualifiedIdent::from(target).with_comments(selector_comments(call));
    Ok(ExprCall {
        callee: Box::new(Node::qualified_ident(callee)),
        args,
        callee_comments: call.callee_comments.clone(),
        trailing_comments: call.trailing_comments.clone(),
        spread: false,
    })
}

/// Comments written inside the matched selector, carried onto the new callee.
fn selector_comments(call: &ExprCall) -> Vec<Comment> {
    match call.callee.kind() {
        NodeKind::QualifiedIdent(ident) => ident.comments.clone(),
        _ => Vec::new(),
    }
}

/// `(pattern, transform)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pub pattern: QualifiedName,
    pub transform: Transform,
}

impl RewriteRule {
    pub fn new(pattern: QualifiedName, transform: Transform) -> Self {
        Self { pattern, transform }
    }

    /// One-line human description, e.g. `errors.Wrap(err, "msg", args...) -> fmt.Errorf("msg: %w", args..., err)`.
    pub fn describe(&self) -> String {
        match &self.transform {
            Transform::WrapToErrorf { target, suffix } => format!(
                "{}(err, \"msg\", args...) -> {}(\"msg{}\", args..., err)",
                self.pattern, target, suffix
            ),
            Transform::RenameCallee { target } => {
                format!("{}(args...) -> {}(args...)", self.pattern, target)
            }
        }
    }
}

/// Immutable rule table, built once and shared by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// `github.com/pkg/errors` helpers mapped onto `fmt.Errorf`.
    pub fn builtin() -> Self {
        let errorf = QualifiedName::new("fmt", "Errorf");
        let wrap = |name: &str| {
            RewriteRule::new(
                QualifiedName::new("errors", name),
                Transform::wrap_to(errorf.clone()),
            )
        };
        Self::new(vec![
            wrap("Wrap"),
            wrap("Wrapf"),
            wrap("WithMessage"),
            wrap("WithMessagef"),
            RewriteRule::new(
                QualifiedName::new("errors", "Errorf"),
                Transform::rename_to(errorf.clone()),
            ),
        ])
    }

    /// Keep only the rules whose pattern satisfies `keep`.
    pub fn retain(mut self, mut keep: impl FnMut(&QualifiedName) -> bool) -> Self {
        self.rules.retain(|rule| keep(&rule.pattern));
        self
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule registered for `pattern`.
    pub fn get(&self, pattern: &QualifiedName) -> Option<&RewriteRule> {
        self.rules.iter().find(|rule| &rule.pattern == pattern)
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.rules.iter().map(|rule| &rule.pattern).join(", "))
    }
}
