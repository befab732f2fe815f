//! Go support for wrapfix: a tree-sitter-go backed parser that lowers into the
//! engine's node tree, a printer that re-emits it, and the pipeline gluing
//! parse, rewrite and print together.

pub mod parser;
pub mod pipeline;
pub mod printer;

pub use parser::GoParser;
pub use pipeline::{rewrite_source, GoRewriter, RewriteOptions, RewriteOutcome};
pub use printer::GoPrinter;

#[cfg(test)]
mod tests;
