//! Call-expression rewriting: the rule table, the matcher that looks calls up
//! in it, the rewriter that builds replacement nodes and the walker that
//! drives both over a whole tree.

pub mod error;
pub mod matcher;
pub mod report;
pub mod rewriter;
pub mod rule;
pub mod walker;

pub use error::{UnsupportedPattern, UnsupportedReason};
pub use report::{AppliedRewrite, RewriteReport};
pub use rewriter::{RewriteResult, Rewriter};
pub use rule::{RewriteRule, RuleSet, Transform};
pub use walker::Walker;
