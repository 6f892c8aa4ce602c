// tests/parser_tests.rs

use dsc_expression::ast::{AccessorStep, Argument, ExpressionNode, FunctionCall, IndexValue};
use dsc_expression::lexer::Lexer;
use dsc_expression::parser::Parser;
use dsc_expression::{ParseError, ParseErrorKind, ParserConfig};

fn parse(input: &str) -> Result<ExpressionNode, ParseError> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse_expression()
}

fn call(name: &str, args: Vec<Argument>) -> ExpressionNode {
    ExpressionNode::new(FunctionCall::new(name, args), None)
}

fn str_arg(s: &str) -> Argument {
    Argument::Str(s.to_string())
}

// ============================================================================
// Function calls
// ============================================================================

#[test]
fn test_no_arguments() {
    let expr = parse("utcNow()").unwrap();
    assert_eq!(expr, call("utcNow", vec![]));
}

#[test]
fn test_argument_kinds() {
    let expr = parse("f('a', 1, -2, true, false, g())").unwrap();
    assert_eq!(
        expr.call.args,
        vec![
            str_arg("a"),
            Argument::Num(1),
            Argument::Num(-2),
            Argument::Bool(true),
            Argument::Bool(false),
            Argument::Expr(call("g", vec![])),
        ]
    );
}

#[test]
fn test_namespaced_function_name() {
    let expr = parse("Microsoft.Compute('x')").unwrap();
    assert_eq!(expr.call.name, "Microsoft.Compute");
}

#[test]
fn test_boolean_names_as_functions() {
    assert_eq!(parse("true()").unwrap(), call("true", vec![]));

    let expr = parse("not(false())").unwrap();
    assert_eq!(expr.call.args, vec![Argument::Expr(call("false", vec![]))]);
}

#[test]
fn test_nested_calls() {
    let expr = parse("concat(parameters('a'), concat('b', variables('c')))").unwrap();
    assert_eq!(
        expr,
        call(
            "concat",
            vec![
                Argument::Expr(call("parameters", vec![str_arg("a")])),
                Argument::Expr(call(
                    "concat",
                    vec![
                        str_arg("b"),
                        Argument::Expr(call("variables", vec![str_arg("c")])),
                    ]
                )),
            ]
        )
    );
}

#[test]
fn test_whitespace_between_tokens() {
    let spaced = parse("concat ( 'a' ,\n 'b' ) . x [ 0 ]").unwrap();
    let tight = parse("concat('a','b').x[0]").unwrap();
    assert_eq!(spaced, tight);
}

#[test]
fn test_string_argument_keeps_brackets_and_commas() {
    let expr = parse("f('a, b', '[c]', ')')").unwrap();
    assert_eq!(expr.call.args, vec![str_arg("a, b"), str_arg("[c]"), str_arg(")")]);
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_member_chain() {
    let expr = parse("parameters('foo').bar.baz").unwrap();
    let steps = expr.accessor.unwrap();
    assert_eq!(
        steps.steps(),
        &[
            AccessorStep::Member("bar".to_string()),
            AccessorStep::Member("baz".to_string()),
        ]
    );
}

#[test]
fn test_index_kinds() {
    let expr = parse("f()[0][-1]['key'][g('x')]").unwrap();
    let steps = expr.accessor.unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(
        steps.steps(),
        &[
            AccessorStep::Index(IndexValue::Num(0)),
            AccessorStep::Index(IndexValue::Num(-1)),
            AccessorStep::Index(IndexValue::PropertyName("key".to_string())),
            AccessorStep::Index(IndexValue::Expr(call("g", vec![str_arg("x")]))),
        ]
    );
}

#[test]
fn test_mixed_accessors() {
    let expr = parse("reference('vm').properties['os-profile'].name[2]").unwrap();
    let steps: Vec<_> = expr.accessor.unwrap().iter().cloned().collect();
    assert!(matches!(&steps[0], AccessorStep::Member(n) if n == "properties"));
    assert!(matches!(&steps[1], AccessorStep::Index(IndexValue::PropertyName(p)) if p == "os-profile"));
    assert!(matches!(&steps[2], AccessorStep::Member(n) if n == "name"));
    assert!(matches!(&steps[3], AccessorStep::Index(IndexValue::Num(2))));
}

#[test]
fn test_accessor_on_nested_argument() {
    let expr = parse("concat(parameters('a').b, 'c')").unwrap();
    match &expr.call.args[0] {
        Argument::Expr(inner) => {
            assert_eq!(inner.call.name, "parameters");
            assert_eq!(
                inner.accessor.as_ref().unwrap().steps(),
                &[AccessorStep::Member("b".to_string())]
            );
        }
        other => panic!("Expected nested expression, got {:?}", other),
    }
    assert_eq!(expr.accessor, None);
}

#[test]
fn test_accessor_on_index_expression() {
    let expr = parse("a()[b()[0]]").unwrap();
    match &expr.accessor.unwrap().steps()[0] {
        AccessorStep::Index(IndexValue::Expr(inner)) => {
            assert_eq!(inner.call.name, "b");
            assert_eq!(
                inner.accessor.as_ref().unwrap().steps(),
                &[AccessorStep::Index(IndexValue::Num(0))]
            );
        }
        other => panic!("Expected index expression, got {:?}", other),
    }
}

// ============================================================================
// Errors
// ============================================================================

fn assert_error(input: &str, kind: ParseErrorKind, offset: usize) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.kind, kind, "Failed for input: {}", input);
    assert_eq!(err.offset, offset, "Wrong offset for input: {}", input);
}

#[test]
fn test_invalid_function_name() {
    assert_error("1abc()", ParseErrorKind::InvalidFunctionName, 0);
    assert_error("'x'()", ParseErrorKind::InvalidFunctionName, 0);
}

#[test]
fn test_missing_function_name_at_end() {
    assert_error("", ParseErrorKind::UnexpectedEndOfInput, 0);
}

#[test]
fn test_expected_open_paren() {
    assert_error("foo", ParseErrorKind::ExpectedOpenParen, 3);
    assert_error("foo.bar.baz()", ParseErrorKind::ExpectedOpenParen, 7);
}

#[test]
fn test_expected_close_paren() {
    assert_error("foo(", ParseErrorKind::ExpectedCloseParen, 4);
    assert_error("foo('a' 'b')", ParseErrorKind::ExpectedCloseParen, 8);
    assert_error("foo(1]", ParseErrorKind::ExpectedCloseParen, 5);
}

#[test]
fn test_invalid_argument() {
    assert_error("concat(abc)", ParseErrorKind::InvalidArgument, 7);
    assert_error("f(,)", ParseErrorKind::InvalidArgument, 2);
    assert_error("f(truex)", ParseErrorKind::InvalidArgument, 2);
    assert_error("f(\"double\")", ParseErrorKind::InvalidArgument, 2);
}

#[test]
fn test_argument_missing_after_comma() {
    assert_error("f('a',", ParseErrorKind::UnexpectedEndOfInput, 6);
}

#[test]
fn test_invalid_number_argument() {
    assert_error("f(-)", ParseErrorKind::InvalidNumber, 2);
}

#[test]
fn test_unterminated_string_argument() {
    assert_error("concat('abc)", ParseErrorKind::UnterminatedString, 7);
}

#[test]
fn test_invalid_member_name() {
    assert_error("f().", ParseErrorKind::InvalidMemberName, 4);
    assert_error("f().'x'", ParseErrorKind::InvalidMemberName, 4);
}

#[test]
fn test_unterminated_index() {
    assert_error("f()[0", ParseErrorKind::UnterminatedIndex, 5);
    assert_error("f()[", ParseErrorKind::UnterminatedIndex, 4);
    assert_error("f()['a' 'b']", ParseErrorKind::UnterminatedIndex, 8);
}

#[test]
fn test_invalid_index_value() {
    assert_error("f()[]", ParseErrorKind::InvalidIndexValue, 4);
    assert_error("f()[name]", ParseErrorKind::InvalidIndexValue, 4);
    assert_error("f()[true]", ParseErrorKind::InvalidIndexValue, 4);
}

// ============================================================================
// Depth limit
// ============================================================================

fn nested(depth: usize) -> String {
    format!("{}{}", "f(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_depth_limit_on_arguments() {
    let config = ParserConfig::default().with_max_depth(10);

    let input10 = nested(10);
    let mut parser = Parser::with_config(Lexer::new(&input10), &config);
    assert_eq!(parser.parse_expression().unwrap().depth(), 10);

    let input11 = nested(11);
    let mut parser = Parser::with_config(Lexer::new(&input11), &config);
    let err = parser.parse_expression().unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MaxDepthExceeded);
    assert_eq!(err.offset, 20);
}

#[test]
fn test_depth_limit_on_index_expressions() {
    let config = ParserConfig::default().with_max_depth(2);
    let mut parser = Parser::with_config(Lexer::new("a()[b()[c()]]"), &config);
    let err = parser.parse_expression().unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MaxDepthExceeded);
}

#[test]
fn test_default_depth_rejects_pathological_nesting() {
    let err = parse(&nested(10_000)).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MaxDepthExceeded);
}
