use nsblock::parser::{Expr, ParseErrorKind, ParseOptions, Stmt};
use nsblock::runtime::{Function, NamespaceTable, Value};

use crate::support::{parse, parse_with};

fn literal(statement: &Stmt) -> &Value {
    match statement {
        Stmt::Expr(Expr::Literal(value)) => value,
        other => panic!("expected a literal, got {other:?}"),
    }
}

#[test]
fn literals_and_barewords_parse_to_values() {
    let mut namespaces = NamespaceTable::new();

    let compiled = parse(r#"hello; 42; "s"; 1.5; (); (7)"#, &mut namespaces)
        .expect("literals should parse");

    let values: Vec<&Value> = compiled.program.statements.iter().map(literal).collect();
    assert_eq!(
        values,
        vec![
            &Value::from("hello"),
            &Value::Integer(42),
            &Value::from("s"),
            &Value::from("1.5"),
            &Value::Unit,
            &Value::Integer(7),
        ]
    );
}

#[test]
fn empty_input_is_an_empty_program() {
    let mut namespaces = NamespaceTable::new();

    let compiled = parse("  # nothing\n;;", &mut namespaces).expect("empty program");

    assert!(compiled.program.statements.is_empty());
    assert!(namespaces.contains("main"));
}

#[test]
fn statements_need_separators_unless_they_end_in_a_block() {
    let mut namespaces = NamespaceTable::new();

    let blocks = parse("do { 1 } do { 2 }", &mut namespaces).expect("blocks chain");
    let error = parse("a b", &mut namespaces).expect_err("missing `;`");

    assert_eq!(blocks.program.statements.len(), 2);
    assert_eq!(error.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(error.found.as_deref(), Some("b"));
}

#[test]
fn calls_bind_functions_at_parse_time() {
    let mut namespaces = NamespaceTable::new();
    namespaces.bind_function("main", Function::new("first", |args| Ok(args[0].clone())));
    namespaces.bind_function("Util", Function::new("unit", |_| Ok(Value::Unit)));

    let compiled = parse("first(1, Util::unit())", &mut namespaces).expect("calls parse");

    let Stmt::Expr(Expr::Call { function, args, .. }) = &compiled.program.statements[0] else {
        panic!("expected a call");
    };
    assert_eq!(function.name(), "first");
    assert_eq!(args.len(), 2);
    assert!(matches!(&args[1], Expr::Call { function, .. } if function.name() == "unit"));
}

#[test]
fn unbound_call_is_rejected() {
    let mut namespaces = NamespaceTable::new();

    let error = parse("missing(1)", &mut namespaces).expect_err("nothing is bound");

    assert_eq!(error.kind, ParseErrorKind::UndefinedFunction);
    assert_eq!(error.to_string(), "undefined function missing");
}

#[test]
fn package_lasts_until_the_end_of_its_block() {
    let mut namespaces = NamespaceTable::new();

    let compiled = parse(
        "package Foo; do { package Bar; __NAMESPACE__ }; __NAMESPACE__",
        &mut namespaces,
    )
    .expect("packages parse");

    let Stmt::Expr(Expr::Block(block)) = &compiled.program.statements[0] else {
        panic!("expected a block");
    };
    assert_eq!(literal(&block.statements[0]), &Value::from("Bar"));
    assert_eq!(literal(&compiled.program.statements[1]), &Value::from("Foo"));
    assert!(namespaces.contains("Foo"));
    assert!(namespaces.contains("Bar"));
}

#[test]
fn version_records_the_current_namespace() {
    let mut namespaces = NamespaceTable::new();

    let compiled = parse(r#"package Foo; version 1.5; version "2""#, &mut namespaces)
        .expect("versions parse");

    assert!(matches!(
        &compiled.program.statements[0],
        Stmt::Version { namespace, literal } if namespace == "Foo" && literal == "1.5"
    ));
    assert!(matches!(
        &compiled.program.statements[1],
        Stmt::Version { literal, .. } if literal == "2"
    ));
}

#[test]
fn reserved_words_are_not_namespaces_or_expressions() {
    let mut namespaces = NamespaceTable::new();

    let package = parse("package do", &mut namespaces).expect_err("reserved name");
    let expression = parse("(declare)", &mut namespaces).expect_err("reserved expression");

    assert_eq!(package.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(expression.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(expression.found.as_deref(), Some("declare"));
}

#[test]
fn nesting_deeper_than_the_limit_fails() {
    let mut namespaces = NamespaceTable::new();
    let options = ParseOptions {
        max_nesting: 2,
        ..ParseOptions::default()
    };

    let ok = parse_with("do { do { 1 } }", options.clone(), &mut namespaces);
    let error = parse_with("do { do { do { 1 } } }", options, &mut namespaces)
        .expect_err("three levels");

    assert!(ok.is_ok());
    assert_eq!(error.kind, ParseErrorKind::NestingLimitExceeded);
}

#[test]
fn parentheses_and_calls_count_toward_the_nesting_limit() {
    let mut namespaces = NamespaceTable::new();
    namespaces.bind_function("main", Function::new("f", |args| Ok(args[0].clone())));
    let options = ParseOptions {
        max_nesting: 3,
        ..ParseOptions::default()
    };

    let ok = parse_with("f((do { 1 }))", options.clone(), &mut namespaces);
    let parens = parse_with("((((1))))", options.clone(), &mut namespaces)
        .expect_err("four parentheses");
    let calls = parse_with("f(f(f(f(1))))", options.clone(), &mut namespaces)
        .expect_err("four calls");
    let mixed = parse_with("f((do { (1) }))", options, &mut namespaces)
        .expect_err("call, parenthesis, block, parenthesis");

    assert!(ok.is_ok());
    assert_eq!(parens.kind, ParseErrorKind::NestingLimitExceeded);
    assert_eq!(calls.kind, ParseErrorKind::NestingLimitExceeded);
    assert_eq!(mixed.kind, ParseErrorKind::NestingLimitExceeded);
}

#[test]
fn very_deep_parentheses_fail_instead_of_overflowing() {
    let mut namespaces = NamespaceTable::new();
    let depth = 200_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    let error = parse(&source, &mut namespaces).expect_err("too deep");

    assert_eq!(error.kind, ParseErrorKind::NestingLimitExceeded);
    assert_eq!(error.expected, vec!["nesting <= 256".to_string()]);
}

#[test]
fn unterminated_block_reports_end_of_input() {
    let mut namespaces = NamespaceTable::new();

    let error = parse("do { 1", &mut namespaces).expect_err("no `}`");

    assert_eq!(error.kind, ParseErrorKind::UnexpectedEndOfInput);
    assert_eq!(error.expected, vec!["`}`".to_string()]);
}

#[test]
fn lexer_errors_surface_as_parse_errors() {
    let mut namespaces = NamespaceTable::new();

    let error = parse("a + b", &mut namespaces).expect_err("`+` starts no token");

    assert!(matches!(error.kind, ParseErrorKind::Lexer(_)));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn initial_namespace_is_configurable() {
    let mut namespaces = NamespaceTable::new();
    let options = ParseOptions {
        namespace: "TestA".to_string(),
        ..ParseOptions::default()
    };

    let compiled = parse_with("__NAMESPACE__", options, &mut namespaces).expect("parses");

    assert_eq!(literal(&compiled.program.statements[0]), &Value::from("TestA"));
    assert!(namespaces.contains("TestA"));
}
