//! Syntax tree for the rewrite engine.
//!
//! The tree owns every node. Nodes are never edited in place: a rewrite builds
//! a new node and swaps it into the parent slot, dropping the old subtree.

use serde::{Deserialize, Serialize};

use crate::source_map::{LineCol, SourceMap};
use crate::span::Span;

mod expr;
mod ident;

pub use expr::*;
pub use ident::*;

/// Where a node's text comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Origin {
    /// Text is `source[span]`, reproduced verbatim when printed.
    Parsed(Span),
    /// Built by a rewrite. `replaces` is the source range it took over.
    Synthesized { replaces: Option<Span> },
}

/// Closed set of syntactic categories the engine distinguishes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NodeKind {
    Call(ExprCall),
    QualifiedIdent(QualifiedIdent),
    StringLit(StringLit),
    Ident(Ident),
    Other(OtherNode),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub origin: Origin,
    /// Comments directly preceding this node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

impl Node {
    pub fn new(kind: NodeKind, origin: Origin) -> Self {
        Self {
            kind,
            origin,
            comments: Vec::new(),
        }
    }

    pub fn parsed(kind: NodeKind, span: Span) -> Self {
        Self::new(kind, Origin::Parsed(span))
    }

    pub fn synthesized(kind: NodeKind) -> Self {
        Self::new(kind, Origin::Synthesized { replaces: None })
    }

    pub fn call(call: ExprCall) -> Self {
        Self::synthesized(NodeKind::Call(call))
    }

    pub fn qualified_ident(ident: QualifiedIdent) -> Self {
        Self::synthesized(NodeKind::QualifiedIdent(ident))
    }

    pub fn string_lit(lit: StringLit) -> Self {
        Self::synthesized(NodeKind::StringLit(lit))
    }

    pub fn ident(ident: impl Into<Ident>) -> Self {
        Self::synthesized(NodeKind::Ident(ident.into()))
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    /// Anchor a synthesized node to the range it replaces.
    pub fn replacing(mut self, span: Option<Span>) -> Self {
        if let Origin::Synthesized { replaces } = &mut self.origin {
            *replaces = span;
        }
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_synthesized(&self) -> bool {
        matches!(self.origin, Origin::Synthesized { .. })
    }

    /// Span of verbatim source text, only for parsed nodes.
    pub fn span(&self) -> Option<Span> {
        match self.origin {
            Origin::Parsed(span) => Some(span),
            Origin::Synthesized { .. } => None,
        }
    }

    /// Source range the node occupies, parsed or replaced.
    pub fn extent(&self) -> Option<Span> {
        match self.origin {
            Origin::Parsed(span) => Some(span),
            Origin::Synthesized { replaces } => replaces,
        }
    }

    pub fn as_call(&self) -> Option<&ExprCall> {
        match &self.kind {
            NodeKind::Call(call) => Some(call),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &str {
        match &self.kind {
            NodeKind::Call(_) => "call",
            NodeKind::QualifiedIdent(_) => "qualified_ident",
            NodeKind::StringLit(_) => "string_lit",
            NodeKind::Ident(_) => "ident",
            NodeKind::Other(other) => other.kind.as_str(),
        }
    }

    /// Structural children in source order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let (head, tail): (Option<&Node>, &[Node]) = match &self.kind {
            NodeKind::Call(call) => (Some(&*call.callee), &call.args[..]),
            NodeKind::Other(other) => (None, &other.children[..]),
            NodeKind::QualifiedIdent(_) | NodeKind::StringLit(_) | NodeKind::Ident(_) => {
                (None, &[])
            }
        };
        head.into_iter().chain(tail.iter())
    }

    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        let (head, tail): (Option<&mut Node>, &mut [Node]) = match &mut self.kind {
            NodeKind::Call(call) => (Some(&mut *call.callee), &mut call.args[..]),
            NodeKind::Other(other) => (None, &mut other.children[..]),
            NodeKind::QualifiedIdent(_) | NodeKind::StringLit(_) | NodeKind::Ident(_) => {
                (None, &mut [])
            }
        };
        head.into_iter().chain(tail.iter_mut())
    }

    /// Number of nodes in this subtree, including itself.
    pub fn count(&self) -> usize {
        1 + self.children().map(Node::count).sum::<usize>()
    }
}

/// Parsed file: the source text plus the tree that covers it.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    source: String,
    source_map: SourceMap,
    pub root: Node,
}

impl SyntaxTree {
    pub fn new(source: impl Into<String>, root: Node) -> Self {
        let source = source.into();
        let source_map = SourceMap::new(&source);
        Self {
            source,
            source_map,
            root,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Mutable root alongside the read-only source map, for passes that
    /// report positions while editing.
    pub fn root_and_map_mut(&mut self) -> (&mut Node, &SourceMap) {
        (&mut self.root, &self.source_map)
    }

    pub fn text(&self, span: Span) -> &str {
        &self.source[span.range()]
    }

    pub fn position(&self, span: Span) -> LineCol {
        self.source_map.position(span.lo as usize)
    }
}
