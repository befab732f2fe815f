//! Go parser built on top of `tree-sitter-go`.
//!
//! Lowering keeps only what the rewrite engine needs to see: calls, qualified
//! identifiers, identifiers and string literals. Every other named node is
//! kept as an opaque `Other` with its named children, and all text between
//! children (punctuation, whitespace, comments) stays in the source so the
//! printer can reproduce it byte for byte.

use eyre::{eyre, Result as EyreResult};
use tracing::debug;
use tree_sitter::{Node as TsNode, Parser as TsParser};
use wf_core::ast::{
    Comment, ExprCall, Ident, Node, NodeKind, OtherNode, QualifiedIdent, StringLit, SyntaxTree,
};
use wf_core::error::{ParseError, Result};
use wf_core::source_map::LineCol;
use wf_core::span::Span;

/// High-level parser that owns a tree-sitter instance for Go.
pub struct GoParser {
    parser: TsParser,
}

impl GoParser {
    /// Create a new parser instance with the Go grammar loaded.
    pub fn new() -> Result<Self> {
        let mut parser = TsParser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|err| eyre!("Failed to load tree-sitter Go grammar: {err}"))?;
        Ok(Self { parser })
    }

    /// Parse Go source into a syntax tree. Any syntax error fails the parse.
    pub fn parse_str(&mut self, source: &str) -> Result<SyntaxTree> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| eyre!("failed to parse Go source"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(syntax_error(root, source).into());
        }

        let node = lower(root, source)?;
        debug!(nodes = node.count(), bytes = source.len(), "parsed Go source");
        Ok(SyntaxTree::new(source, node))
    }
}

fn span_of(node: TsNode) -> Span {
    Span::from_range(node.start_byte()..node.end_byte())
}

fn text<'s>(node: TsNode, source: &'s str) -> EyreResult<&'s str> {
    Ok(node.utf8_text(source.as_bytes())?)
}

fn is_comment(node: &TsNode) -> bool {
    node.kind() == "comment"
}

fn lower(node: TsNode, source: &str) -> EyreResult<Node> {
    let kind = match node.kind() {
        "call_expression" => match lower_call(node, source)? {
            Some(call) => NodeKind::Call(call),
            None => lower_other(node, source)?,
        },
        "selector_expression" => match lower_selector(node, source)? {
            Some(ident) => NodeKind::QualifiedIdent(ident),
            None => lower_other(node, source)?,
        },
        "identifier" => NodeKind::Ident(Ident::new(text(node, source)?)),
        "interpreted_string_literal" | "raw_string_literal" => {
            NodeKind::StringLit(StringLit::new(text(node, source)?))
        }
        _ => lower_other(node, source)?,
    };
    Ok(Node::parsed(kind, span_of(node)))
}

fn lower_other(node: TsNode, source: &str) -> EyreResult<NodeKind> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| !is_comment(child))
        .map(|child| lower(child, source))
        .collect::<EyreResult<Vec<_>>>()?;
    Ok(NodeKind::Other(OtherNode::new(node.kind(), children)))
}

/// `operand.field` where the operand is a plain identifier.
fn lower_selector(node: TsNode, source: &str) -> EyreResult<Option<QualifiedIdent>> {
    let (Some(operand), Some(field)) = (
        node.child_by_field_name("operand"),
        node.child_by_field_name("field"),
    ) else {
        return Ok(None);
    };
    if operand.kind() != "identifier" {
        return Ok(None);
    }
    let ident = QualifiedIdent::new(text(operand, source)?, text(field, source)?);
    Ok(Some(ident.with_comments(comments_of(node, source)?)))
}

/// Comments that are direct children of `node`.
fn comments_of(node: TsNode, source: &str) -> EyreResult<Vec<Comment>> {
    let mut cursor = node.walk();
    let comments = node
        .children(&mut cursor)
        .filter(is_comment)
        .map(|child| Ok(Comment::new(text(child, source)?)))
        .collect::<EyreResult<Vec<_>>>()?;
    Ok(comments)
}

/// Calls with a plain argument list. Generic instantiations and the
/// type-taking builtins (`make`, `new`) stay opaque.
fn lower_call(node: TsNode, source: &str) -> EyreResult<Option<ExprCall>> {
    if node.child_by_field_name("type_arguments").is_some() {
        return Ok(None);
    }
    let (Some(function), Some(arguments)) = (
        node.child_by_field_name("function"),
        node.child_by_field_name("arguments"),
    ) else {
        return Ok(None);
    };
    if arguments.kind() != "argument_list" {
        return Ok(None);
    }

    let callee = lower(function, source)?;
    let callee_comments = comments_of(node, source)?;
    let mut args = Vec::new();
    let mut pending = Vec::new();
    let mut spread = false;

    let mut cursor = arguments.walk();
    for child in arguments.children(&mut cursor) {
        match child.kind() {
            "comment" => pending.push(Comment::new(text(child, source)?)),
            "..." => spread = true,
            kind if child.is_named() => {
                if kind == "variadic_argument" {
                    spread = true;
                }
                let arg = lower(child, source)?.with_comments(std::mem::take(&mut pending));
                args.push(arg);
            }
            _ => {}
        }
    }

    Ok(Some(ExprCall {
        callee: Box::new(callee),
        args,
        callee_comments,
        trailing_comments: pending,
        spread,
    }))
}

fn first_error(node: TsNode) -> Option<TsNode> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found.or(Some(node))
}

fn syntax_error(root: TsNode, source: &str) -> ParseError {
    let node = first_error(root).unwrap_or(root);
    let point = node.start_position();
    let message = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else {
        let snippet: String = source[node.start_byte()..node.end_byte()]
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(32)
            .collect();
        if snippet.trim().is_empty() {
            "unexpected end of input".to_string()
        } else {
            format!("unexpected `{}`", snippet.trim())
        }
    };
    ParseError {
        span: span_of(node),
        position: LineCol {
            line: point.row + 1,
            column: point.column + 1,
        },
        message,
    }
}
