use pretty_assertions::assert_eq;
use wf_core::ast::{
    ExprCall, Node, NodeKind, OtherNode, QualifiedIdent, QualifiedName, StringLit, SyntaxTree,
};
use wf_core::error::{Error, MalformedTreeError};
use wf_core::span::Span;
use wf_rewrite::{RuleSet, UnsupportedReason, Walker};

use crate::{rewrite_source, GoParser, GoPrinter, GoRewriter, RewriteOptions};

fn rewrite(source: &str) -> crate::RewriteOutcome {
    rewrite_source(source, &RuleSet::builtin()).expect("rewrite should succeed")
}

fn in_func(body: &str) -> String {
    format!("package main\n\nfunc run() error {{\n{body}}}\n")
}

#[test]
fn unmatched_source_round_trips_byte_for_byte() {
    let source = r#"// Package store keeps things.
package store

import (
	"fmt"  // formatting
	"os"
)

/* block comment
   spanning lines */
func Open(path string) (*os.File, error) {
	f, err := os.Open(path)   // odd spacing kept
	if err != nil {
		return nil, fmt.Errorf("open %s: %w", path, err)
	}
	var s = `raw
text`
	_ = s
	return f, nil
}
"#;
    let outcome = rewrite(source);
    assert_eq!(outcome.output, source);
    assert!(!outcome.changed());
    assert!(outcome.report.unsupported.is_empty());
}

#[test]
fn printing_a_parsed_tree_reproduces_source() {
    let source = "\n\n  package main\n\nfunc main() {\n\tprintln( 1,2 )\n}\n\n\n";
    let tree = GoParser::new().unwrap().parse_str(source).unwrap();
    assert_eq!(GoPrinter::new().print(&tree).unwrap(), source);
}

#[test]
fn wrap_becomes_errorf_with_placeholder() {
    let source = in_func("\treturn errors.Wrap(errBadStuff, \"some context\")\n");
    let outcome = rewrite(&source);

    assert_eq!(
        outcome.output,
        in_func("\treturn fmt.Errorf(\"some context: %w\", errBadStuff)\n")
    );
    assert_eq!(outcome.report.applied.len(), 1);
    let applied = &outcome.report.applied[0];
    assert_eq!(applied.rule, QualifiedName::new("errors", "Wrap"));
    assert_eq!(applied.position.map(|pos| pos.line), Some(4));
}

#[test]
fn wrapf_moves_error_after_format_arguments() {
    let source = in_func("\treturn errors.Wrapf(errBadStuff, \"ctx %d\", n)\n");
    assert_eq!(
        rewrite(&source).output,
        in_func("\treturn fmt.Errorf(\"ctx %d: %w\", n, errBadStuff)\n")
    );
}

#[test]
fn non_literal_template_is_left_alone() {
    let source = in_func("\treturn errors.Wrap(errBadStuff, someVar)\n");
    let outcome = rewrite(&source);

    assert_eq!(outcome.output, source);
    assert!(!outcome.changed());
    assert_eq!(outcome.report.unsupported.len(), 1);
    assert_eq!(
        outcome.report.unsupported[0].reason,
        UnsupportedReason::NonLiteralTemplate {
            found: "ident".to_string()
        }
    );
}

#[test]
fn concatenated_template_is_left_alone() {
    let source = in_func("\treturn errors.Wrap(err, \"a\" + \"b\")\n");
    let outcome = rewrite(&source);
    assert_eq!(outcome.output, source);
    assert_eq!(
        outcome.report.unsupported[0].reason,
        UnsupportedReason::NonLiteralTemplate {
            found: "binary_expression".to_string()
        }
    );
}

#[test]
fn nested_wrap_in_argument_list_is_rewritten_alone() {
    let source = in_func(
        "\tlog.Println(  \"failed:\",   errors.Wrap(err, \"load\") ) // keep\n\treturn nil\n",
    );
    assert_eq!(
        rewrite(&source).output,
        in_func(
            "\tlog.Println(  \"failed:\",   fmt.Errorf(\"load: %w\", err) ) // keep\n\treturn nil\n"
        )
    );
}

#[test]
fn sibling_calls_are_rewritten_in_source_order() {
    let source = in_func(
        "\ta := errors.Wrap(e1, \"first\")\n\tb := errors.Wrapf(e2, \"second %s\", x)\n\treturn join(a, b)\n",
    );
    let outcome = rewrite(&source);
    assert_eq!(
        outcome.output,
        in_func(
            "\ta := fmt.Errorf(\"first: %w\", e1)\n\tb := fmt.Errorf(\"second %s: %w\", x, e2)\n\treturn join(a, b)\n"
        )
    );
    let lines: Vec<_> = outcome
        .report
        .applied
        .iter()
        .filter_map(|applied| applied.position.map(|pos| pos.line))
        .collect();
    assert_eq!(lines, vec![4, 5]);
}

#[test]
fn multiline_call_is_normalized_with_comments_kept() {
    let source = in_func(
        "\treturn errors.Wrapf(\n\t\terr, // the cause\n\t\t\"read %s\", // what failed\n\t\tpath,\n\t)\n",
    );
    assert_eq!(
        rewrite(&source).output,
        in_func(
            "\treturn fmt.Errorf(// the cause\n\t\t\"read %s: %w\", // what failed\n\t\tpath, err)\n"
        )
    );
}

#[test]
fn trailing_line_comment_keeps_call_valid() {
    let source = in_func("\treturn errors.Wrap(err, \"x\", // why\n\t)\n");
    let outcome = GoRewriter::new(&RuleSet::builtin())
        .unwrap()
        .with_options(RewriteOptions {
            verify_output: true,
        })
        .rewrite_source(&source)
        .expect("output must re-parse");
    assert_eq!(
        outcome.output,
        in_func("\treturn fmt.Errorf(\"x: %w\", err, // why\n\t)\n")
    );
}

#[test]
fn trailing_multiline_block_comment_keeps_call_valid() {
    let source = in_func("\treturn errors.Wrap(err, \"x\", /* a\n\t   b */\n\t)\n");
    assert_eq!(
        rewrite(&source).output,
        in_func("\treturn fmt.Errorf(\"x: %w\", err, /* a\n\t   b */\n\t)\n")
    );
}

#[test]
fn comment_before_argument_list_is_kept() {
    let source = in_func("\treturn errors.Wrap /* c1 */ (err, \"x\")\n");
    assert_eq!(
        rewrite(&source).output,
        in_func("\treturn fmt.Errorf(/* c1 */ \"x: %w\", err)\n")
    );
}

#[test]
fn comment_inside_selector_is_kept() {
    let source = in_func("\treturn errors./* c2 */Wrap(err, \"x\")\n");
    assert_eq!(
        rewrite(&source).output,
        in_func("\treturn fmt./* c2 */ Errorf(\"x: %w\", err)\n")
    );

    let source = in_func("\treturn errors./* c2 */Errorf(\"code %d\", code)\n");
    assert_eq!(
        rewrite(&source).output,
        in_func("\treturn fmt./* c2 */ Errorf(\"code %d\", code)\n")
    );
}

#[test]
fn raw_string_template_is_extended() {
    let source = in_func("\treturn errors.WithMessage(err, `load config`)\n");
    assert_eq!(
        rewrite(&source).output,
        in_func("\treturn fmt.Errorf(`load config: %w`, err)\n")
    );
}

#[test]
fn errorf_rename_keeps_argument_layout() {
    let source = in_func("\treturn errors.Errorf(\n\t\t\"bad %s\",\n\t\tname, // who\n\t)\n");
    assert_eq!(
        rewrite(&source).output,
        in_func("\treturn fmt.Errorf(\n\t\t\"bad %s\",\n\t\tname, // who\n\t)\n")
    );
}

#[test]
fn spread_arguments_are_declined() {
    let source = in_func("\treturn errors.Wrapf(err, \"%v %v\", args...)\n");
    let outcome = rewrite(&source);
    assert_eq!(outcome.output, source);
    assert_eq!(
        outcome.report.unsupported[0].reason,
        UnsupportedReason::SpreadArgument
    );
}

#[test]
fn single_argument_wrap_is_declined() {
    let source = in_func("\treturn errors.Wrap(err)\n");
    let outcome = rewrite(&source);
    assert_eq!(outcome.output, source);
    assert_eq!(
        outcome.report.unsupported[0].reason,
        UnsupportedReason::TooFewArguments {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn non_qualified_callees_do_not_match() {
    let source = in_func(
        "\tf := errors.Wrap\n\t_ = f\n\t_ = pkg.errors.Wrap(err, \"x\")\n\t_ = factory().Wrap(err, \"x\")\n\treturn Wrap(err, \"x\")\n",
    );
    let outcome = rewrite(&source);
    assert_eq!(outcome.output, source);
    assert!(outcome.report.unsupported.is_empty());
}

#[test]
fn outer_replacement_is_not_reentered() {
    let source = in_func("\treturn errors.Wrap(errors.Wrap(err, \"inner\"), \"outer\")\n");
    let first = rewrite(&source);
    assert_eq!(
        first.output,
        in_func("\treturn fmt.Errorf(\"outer: %w\", errors.Wrap(err, \"inner\"))\n")
    );
    assert_eq!(first.report.applied.len(), 1);

    let second = rewrite(&first.output);
    assert_eq!(
        second.output,
        in_func("\treturn fmt.Errorf(\"outer: %w\", fmt.Errorf(\"inner: %w\", err))\n")
    );
}

#[test]
fn rewriting_twice_changes_nothing_more() {
    let source = in_func(
        "\tif err := do(); err != nil {\n\t\treturn errors.Wrapf(err, \"do %d\", 1)\n\t}\n\treturn errors.Errorf(\"no %s\", \"way\")\n",
    );
    let first = rewrite(&source);
    let second = rewrite(&first.output);

    assert!(first.changed());
    assert!(!second.changed());
    assert_eq!(second.output, first.output);
}

#[test]
fn syntax_errors_are_reported_with_position() {
    let source = "package main\n\nfunc broken( {\n}\n";
    let err = GoParser::new()
        .unwrap()
        .parse_str(source)
        .expect_err("invalid Go must not parse");
    match err {
        Error::Parse(parse) => {
            assert!(parse.position.line >= 3);
            assert!((parse.span.hi as usize) <= source.len());
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

fn parsed_tree(source: &str) -> SyntaxTree {
    GoParser::new().unwrap().parse_str(source).unwrap()
}

/// Replace the first call in the tree with `replacement`.
fn replace_first_call(node: &mut Node, replacement: &Node) -> bool {
    if matches!(node.kind(), NodeKind::Call(_)) {
        *node = replacement.clone();
        return true;
    }
    node.children_mut()
        .any(|child| replace_first_call(child, replacement))
}

#[test]
fn opaque_synthesized_node_is_malformed() {
    let source = in_func("\treturn f(x)\n");
    let mut tree = parsed_tree(&source);
    let call_at = source.find("f(x)").unwrap() as u32;
    let bogus = Node::synthesized(NodeKind::Other(OtherNode::new("binary_expression", vec![])))
        .replacing(Some(Span::new(call_at, call_at + 4)));
    replace_first_call(tree.root_mut(), &bogus);

    assert_eq!(
        GoPrinter::new().print(&tree),
        Err(MalformedTreeError::OpaqueSynthesized {
            kind: "binary_expression".to_string()
        })
    );
}

#[test]
fn unanchored_replacement_is_malformed() {
    let mut tree = parsed_tree(&in_func("\treturn f(x)\n"));
    replace_first_call(tree.root_mut(), &Node::ident("y"));
    assert!(matches!(
        GoPrinter::new().print(&tree),
        Err(MalformedTreeError::UnanchoredNode { .. })
    ));
}

#[test]
fn invalid_synthesized_callee_is_malformed() {
    let source = in_func("\treturn f(x)\n");
    let mut tree = parsed_tree(&source);
    let call_at = source.find("f(x)").unwrap() as u32;
    let bogus = Node::call(ExprCall::new(
        Node::string_lit(StringLit::new("\"f\"")),
        vec![Node::ident("x")],
    ))
    .replacing(Some(Span::new(call_at, call_at + 4)));
    replace_first_call(tree.root_mut(), &bogus);

    assert_eq!(
        GoPrinter::new().print(&tree),
        Err(MalformedTreeError::InvalidCallee {
            kind: "string_lit".to_string()
        })
    );
}

#[test]
fn invalid_synthesized_identifier_is_malformed() {
    let source = in_func("\treturn f(x)\n");
    let mut tree = parsed_tree(&source);
    let call_at = source.find("f(x)").unwrap() as u32;
    let bogus = Node::call(ExprCall::new(
        Node::qualified_ident(QualifiedIdent::new("fmt", "Err orf")),
        vec![Node::ident("x")],
    ))
    .replacing(Some(Span::new(call_at, call_at + 4)));
    replace_first_call(tree.root_mut(), &bogus);

    assert_eq!(
        GoPrinter::new().print(&tree),
        Err(MalformedTreeError::InvalidIdent {
            text: "Err orf".to_string()
        })
    );
}

#[test]
fn walker_and_printer_compose_over_parsed_tree() {
    let source = in_func("\treturn errors.Wrap(err, \"x\")\n");
    let mut tree = parsed_tree(&source);
    let before = GoPrinter::new().print(&tree).unwrap();

    let report = Walker::new(&RuleSet::new(Vec::new())).walk(&mut tree);

    assert!(!report.changed());
    assert_eq!(report.visited, tree.root().count());
    assert_eq!(GoPrinter::new().print(&tree).unwrap(), before);
}
