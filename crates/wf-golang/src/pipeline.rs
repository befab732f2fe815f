//! Parse → walk → print over one Go source file.

use tracing::{debug, info_span};
use wf_core::error::{Error, MalformedTreeError, Result};
use wf_rewrite::{RewriteReport, RuleSet, Walker};

use crate::parser::GoParser;
use crate::printer::GoPrinter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Re-parse the printed text and fail if it is no longer valid Go.
    pub verify_output: bool,
}

#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub output: String,
    pub report: RewriteReport,
}

impl RewriteOutcome {
    pub fn changed(&self) -> bool {
        self.report.changed()
    }
}

/// Rewrites Go sources against one rule table. Each call owns its tree, so
/// separate instances can run on separate threads without coordination.
pub struct GoRewriter<'r> {
    parser: GoParser,
    printer: GoPrinter,
    rules: &'r RuleSet,
    options: RewriteOptions,
}

impl<'r> GoRewriter<'r> {
    pub fn new(rules: &'r RuleSet) -> Result<Self> {
        Ok(Self {
            parser: GoParser::new()?,
            printer: GoPrinter::new(),
            rules,
            options: RewriteOptions::default(),
        })
    }

    pub fn with_options(mut self, options: RewriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    pub fn rewrite_source(&mut self, source: &str) -> Result<RewriteOutcome> {
        let _span = info_span!("rewrite_source", bytes = source.len()).entered();

        let mut tree = self.parser.parse_str(source)?;
        let report = Walker::new(self.rules).walk(&mut tree);
        let output = self.printer.print(&tree)?;
        debug!(
            applied = report.applied.len(),
            unsupported = report.unsupported.len(),
            visited = report.visited,
            "rewrite finished"
        );

        if self.options.verify_output && report.changed() {
            match self.parser.parse_str(&output) {
                Ok(_) => {}
                Err(Error::Parse(err)) => {
                    return Err(MalformedTreeError::InvalidOutput(err).into());
                }
                Err(err) => return Err(err),
            }
        }

        Ok(RewriteOutcome { output, report })
    }
}

/// One-shot rewrite with default options.
pub fn rewrite_source(source: &str, rules: &RuleSet) -> Result<RewriteOutcome> {
    GoRewriter::new(rules)?.rewrite_source(source)
}
