//! Identifier types.
//!
//! - `Ident`: a single name like `err` or `Wrap`
//! - `QualifiedIdent`: a `namespace.name` node whose namespace is a literal identifier
//! - `QualifiedName`: the plain key used to look up rewrite rules

use serde::{Deserialize, Serialize};

use super::Comment;

/// A simple identifier - a single name like `err` or `fmt`
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }

    /// Whether the name is a syntactically valid Go identifier.
    pub fn is_valid(&self) -> bool {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) if first == '_' || first.is_alphabetic() => {
                chars.all(|ch| ch == '_' || ch.is_alphanumeric())
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::new(name)
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Ident::new(name)
    }
}

/// Two-part name `namespace.name`, e.g. `errors.Wrap`.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct QualifiedName {
    pub namespace: String,
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parse `namespace.name`; anything other than exactly two non-empty parts is rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let (namespace, name) = text.split_once('.')?;
        if namespace.is_empty() || name.is_empty() || name.contains('.') {
            return None;
        }
        Some(Self::new(namespace, name))
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Selector whose operand is a bare identifier, e.g. `errors.Wrap`.
///
/// Selectors on any other operand (`a.b.Wrap`, `f().Wrap`) are never lowered
/// into this node, so a namespace is always a literal name.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct QualifiedIdent {
    pub namespace: Ident,
    pub name: Ident,
    /// Comments inside the selector, e.g. `errors./* c */Wrap`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

impl QualifiedIdent {
    pub fn new(namespace: impl Into<Ident>, name: impl Into<Ident>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(self.namespace.as_str(), self.name.as_str())
    }

    pub fn is(&self, name: &QualifiedName) -> bool {
        self.namespace.as_str() == name.namespace && self.name.as_str() == name.name
    }
}

impl From<&QualifiedName> for QualifiedIdent {
    fn from(name: &QualifiedName) -> Self {
        QualifiedIdent::new(name.namespace.as_str(), name.name.as_str())
    }
}

impl std::fmt::Display for QualifiedIdent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}
