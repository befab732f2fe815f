use serde::{Deserialize, Serialize};

use super::{Node, NodeKind, QualifiedName};

/// Source comment kept as trivia, text includes the delimiters.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// `// ...` comments run to the end of the line.
    pub fn is_line(&self) -> bool {
        self.text.starts_with("//")
    }

    /// Acts as a newline for semicolon insertion: line comments, and block
    /// comments that span lines.
    pub fn breaks_line(&self) -> bool {
        self.is_line() || self.text.contains('\n')
    }
}

/// String literal stored exactly as written, quotes included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringLit {
    pub raw: String,
}

impl StringLit {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Delimiter of a well-formed literal: `"` or a backtick.
    pub fn quote(&self) -> Option<char> {
        let first = self.raw.chars().next()?;
        if !matches!(first, '"' | '`') || self.raw.len() < 2 || !self.raw.ends_with(first) {
            return None;
        }
        Some(first)
    }

    pub fn is_well_formed(&self) -> bool {
        self.quote().is_some()
    }

    /// New literal with `suffix` inserted before the closing quote.
    pub fn with_suffix(&self, suffix: &str) -> Option<StringLit> {
        let quote = self.quote()?;
        let body = &self.raw[..self.raw.len() - quote.len_utf8()];
        Some(StringLit::new(format!("{body}{suffix}{quote}")))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExprCall {
    pub callee: Box<Node>,
    pub args: Vec<Node>,
    /// Comments between the callee and the opening parenthesis.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub callee_comments: Vec<Comment>,
    /// Comments between the last argument and the closing parenthesis.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trailing_comments: Vec<Comment>,
    /// The last argument is spread with `...`.
    #[serde(default)]
    pub spread: bool,
}

impl ExprCall {
    pub fn new(callee: Node, args: Vec<Node>) -> Self {
        Self {
            callee: Box::new(callee),
            args,
            callee_comments: Vec::new(),
            trailing_comments: Vec::new(),
            spread: false,
        }
    }

    /// `namespace.name` of the callee, when it is a qualified identifier.
    pub fn callee_name(&self) -> Option<QualifiedName> {
        match self.callee.kind() {
            NodeKind::QualifiedIdent(ident) => Some(ident.qualified_name()),
            _ => None,
        }
    }
}

/// Any syntax the engine does not model; kept opaque and printed verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OtherNode {
    pub kind: String,
    pub children: Vec<Node>,
}

impl OtherNode {
    pub fn new(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind: kind.into(),
            children,
        }
    }
}
