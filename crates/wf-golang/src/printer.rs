//! Go source printer for the rewrite engine's tree.
//!
//! Parsed nodes are reproduced by copying the source between their children,
//! so untouched regions keep their exact bytes. Synthesized nodes have no
//! source text and are printed in a canonical single-line form, indented
//! after the line they replace when a comment forces a line break.

use wf_core::ast::{Comment, ExprCall, Node, NodeKind, Origin, SyntaxTree};
use wf_core::error::MalformedTreeError;
use wf_core::span::Span;

type Result<T> = std::result::Result<T, MalformedTreeError>;

/// Public entry point used by the rewrite pipeline.
#[derive(Clone, Debug, Default)]
pub struct GoPrinter;

impl GoPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, tree: &SyntaxTree) -> Result<String> {
        let mut emitter = GoEmitter::new(tree);
        emitter.emit_root()?;
        Ok(emitter.finish())
    }
}

struct GoEmitter<'t> {
    tree: &'t SyntaxTree,
    code: String,
    indent: String,
}

impl<'t> GoEmitter<'t> {
    fn new(tree: &'t SyntaxTree) -> Self {
        Self {
            tree,
            code: String::with_capacity(tree.source().len() + 64),
            indent: String::new(),
        }
    }

    fn finish(self) -> String {
        self.code
    }

    fn emit_root(&mut self) -> Result<()> {
        let root = self.tree.root();
        let source = self.tree.source();
        match root.extent() {
            Some(span) => {
                self.code.push_str(&source[..span.lo as usize]);
                self.emit(root)?;
                self.code.push_str(&source[span.hi as usize..]);
            }
            None => self.emit(root)?,
        }
        Ok(())
    }

    fn push_source(&mut self, lo: u32, hi: u32) {
        let text = self.tree.text(Span::new(lo, hi));
        self.code.push_str(text);
    }

    fn emit(&mut self, node: &Node) -> Result<()> {
        match node.origin() {
            Origin::Parsed(span) => self.emit_parsed(node, span),
            Origin::Synthesized { replaces } => {
                let saved = replaces.map(|span| {
                    let indent = self
                        .tree
                        .source_map()
                        .line_indent(self.tree.source(), span.lo as usize)
                        .to_string();
                    std::mem::replace(&mut self.indent, indent)
                });
                let result = self.emit_synthesized(node);
                if let Some(saved) = saved {
                    self.indent = saved;
                }
                result
            }
        }
    }

    /// Source gaps interleaved with children, covering `span` exactly.
    fn emit_parsed(&mut self, node: &Node, span: Span) -> Result<()> {
        let mut cursor = span.lo;
        for child in node.children() {
            let extent = child.extent().ok_or_else(|| MalformedTreeError::UnanchoredNode {
                parent: node.kind_name().to_string(),
            })?;
            if extent.lo < cursor || extent.hi > span.hi {
                return Err(MalformedTreeError::ChildOutOfOrder {
                    parent: span,
                    child: extent,
                });
            }
            self.push_source(cursor, extent.lo);
            self.emit(child)?;
            cursor = extent.hi;
        }
        self.push_source(cursor, span.hi);
        Ok(())
    }

    fn emit_synthesized(&mut self, node: &Node) -> Result<()> {
        match node.kind() {
            NodeKind::Call(call) => self.emit_call(call),
            NodeKind::QualifiedIdent(ident) => {
                for part in [&ident.namespace, &ident.name] {
                    if !part.is_valid() {
                        return Err(MalformedTreeError::InvalidIdent {
                            text: part.name.clone(),
                        });
                    }
                }
                self.code.push_str(ident.namespace.as_str());
                self.code.push('.');
                self.emit_leading_comments(&ident.comments);
                self.code.push_str(ident.name.as_str());
                Ok(())
            }
            NodeKind::Ident(ident) => {
                if !ident.is_valid() {
                    return Err(MalformedTreeError::InvalidIdent {
                        text: ident.name.clone(),
                    });
                }
                self.code.push_str(ident.as_str());
                Ok(())
            }
            NodeKind::StringLit(lit) => {
                if !lit.is_well_formed() {
                    return Err(MalformedTreeError::InvalidStringLit {
                        raw: lit.raw.clone(),
                    });
                }
                self.code.push_str(&lit.raw);
                Ok(())
            }
            NodeKind::Other(other) => Err(MalformedTreeError::OpaqueSynthesized {
                kind: other.kind.clone(),
            }),
        }
    }

    fn emit_call(&mut self, call: &ExprCall) -> Result<()> {
        self.emit_callee(&call.callee)?;
        self.code.push('(');
        self.emit_leading_comments(&call.callee_comments);
        for (idx, arg) in call.args.iter().enumerate() {
            if idx > 0 {
                self.code.push_str(", ");
            }
            self.emit_leading_comments(&arg.comments);
            self.emit(arg)?;
        }
        let spread_in_arg = call
            .args
            .last()
            .is_some_and(|arg| arg.kind_name() == "variadic_argument");
        if call.spread && !spread_in_arg {
            self.code.push_str("...");
        }
        self.emit_trailing_comments(&call.trailing_comments, !call.args.is_empty());
        self.code.push(')');
        Ok(())
    }

    fn emit_callee(&mut self, callee: &Node) -> Result<()> {
        match callee.kind() {
            NodeKind::StringLit(_) => Err(MalformedTreeError::InvalidCallee {
                kind: callee.kind_name().to_string(),
            }),
            NodeKind::Other(other) if callee.is_synthesized() => {
                Err(MalformedTreeError::InvalidCallee {
                    kind: other.kind.clone(),
                })
            }
            _ => self.emit(callee),
        }
    }

    fn push_continuation(&mut self) {
        self.code.push('\n');
        self.code.push_str(&self.indent);
        self.code.push('\t');
    }

    fn emit_leading_comments(&mut self, comments: &[Comment]) {
        for comment in comments {
            self.code.push_str(&comment.text);
            if comment.breaks_line() {
                self.push_continuation();
            } else {
                self.code.push(' ');
            }
        }
    }

    /// Comments before `)`. A comment that ends a line needs a trailing comma
    /// so the closing parenthesis can sit on the next line.
    fn emit_trailing_comments(&mut self, comments: &[Comment], has_args: bool) {
        if comments.is_empty() {
            return;
        }
        if has_args && comments.iter().any(Comment::breaks_line) {
            self.code.push(',');
        }
        let mut line_start = false;
        for comment in comments {
            if line_start {
                self.code.push_str(&self.indent);
                self.code.push('\t');
            } else {
                self.code.push(' ');
            }
            self.code.push_str(&comment.text);
            line_start = comment.breaks_line();
            if line_start {
                self.code.push('\n');
            }
        }
        if line_start {
            self.code.push_str(&self.indent);
        }
    }
}
