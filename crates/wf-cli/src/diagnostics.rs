//! Diagnostic and error reporting utilities

use crate::{CliError, Result};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use wf_core::error::ParseError;

/// Set up enhanced error reporting with miette
pub fn setup_error_reporting() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .map_err(|e| CliError::Config(format!("Failed to setup error reporting: {}", e)))?;

    Ok(())
}

/// User-facing diagnostic for a file that could not be rewritten
#[derive(Error, Debug, Diagnostic)]
pub enum WrapfixError {
    #[error("Syntax error: {message}")]
    #[diagnostic(
        code(wrapfix::syntax_error),
        help("wrapfix only rewrites files that already compile; fix the syntax first")
    )]
    SyntaxError {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        err_span: SourceSpan,
    },

    #[error("Internal rewrite error: {message}")]
    #[diagnostic(
        code(wrapfix::malformed_tree),
        help("the file was left untouched; please report this input")
    )]
    MalformedTree {
        message: String,
        #[source_code]
        src: NamedSource<String>,
    },
}

/// Helper function to create a syntax error with source context
pub fn syntax_error(name: &str, src: String, error: &ParseError) -> WrapfixError {
    // Zero-width spans still get a visible marker
    let len = error.span.len().max(1).min(src.len().saturating_sub(error.span.lo as usize));
    WrapfixError::SyntaxError {
        message: error.to_string(),
        src: NamedSource::new(name, src),
        err_span: SourceSpan::new((error.span.lo as usize).into(), len),
    }
}

/// Build a diagnostic for errors that carry source context.
pub fn diagnostic_for(error: &CliError) -> Option<WrapfixError> {
    let CliError::Rewrite {
        path,
        source_text,
        error,
    } = error
    else {
        return None;
    };
    let name = path.display().to_string();
    match error {
        wf_core::Error::Parse(parse) => Some(syntax_error(&name, source_text.clone(), parse)),
        wf_core::Error::MalformedTree(malformed) => Some(WrapfixError::MalformedTree {
            message: malformed.to_string(),
            src: NamedSource::new(name, source_text.clone()),
        }),
        wf_core::Error::Generic(_) => None,
    }
}

/// Render an error with miette when it carries source context.
/// Returns false when the caller should fall back to plain logging.
pub fn render_cli_error(error: &CliError) -> bool {
    match diagnostic_for(error) {
        Some(diagnostic) => {
            print_diagnostic(diagnostic);
            true
        }
        None => false,
    }
}

/// Pretty print diagnostics with context
pub fn print_diagnostic(error: WrapfixError) {
    eprintln!("{:?}", miette::Report::new(error));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wf_core::source_map::LineCol;
    use wf_core::span::Span;

    fn parse_error(lo: u32, hi: u32) -> ParseError {
        ParseError {
            span: Span::new(lo, hi),
            position: LineCol { line: 3, column: 13 },
            message: "unexpected `{`".to_string(),
        }
    }

    #[test]
    fn test_syntax_error_creation() {
        let src = "package main\n\nfunc broken( {\n}\n".to_string();
        let error = syntax_error("broken.go", src, &parse_error(26, 27));

        match error {
            WrapfixError::SyntaxError {
                message, err_span, ..
            } => {
                assert_eq!(message, "3:13: unexpected `{`");
                assert_eq!(err_span, SourceSpan::new(26.into(), 1));
            }
            _ => panic!("Expected SyntaxError"),
        }
    }

    #[test]
    fn test_zero_width_span_is_widened() {
        let src = "package main\n\nfunc f() {\n".to_string();
        let len = src.len() as u32;
        let error = syntax_error("eof.go", src, &parse_error(len - 1, len - 1));
        let WrapfixError::SyntaxError { err_span, .. } = error else {
            panic!("Expected SyntaxError");
        };
        assert_eq!(err_span.len(), 1);
    }

    #[test]
    fn test_only_rewrite_errors_have_diagnostics() {
        let io = CliError::InvalidInput("nope".to_string());
        assert!(diagnostic_for(&io).is_none());

        let rewrite = CliError::Rewrite {
            path: PathBuf::from("main.go"),
            source_text: "package main\nfunc (\n".to_string(),
            error: wf_core::Error::Parse(parse_error(18, 19)),
        };
        assert!(matches!(
            diagnostic_for(&rewrite),
            Some(WrapfixError::SyntaxError { .. })
        ));
    }
}
