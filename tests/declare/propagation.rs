use nsblock::declare::preamble::{generate, render, PLACEHOLDER};
use nsblock::declare::{normalize, Module, OptionRecord};
use nsblock::lexer::{Lexer, TokenKind};
use serde_json::{json, Value};

fn decode_declare(statement: &str) -> Value {
    let tokens = Lexer::tokenize(statement).expect("declare statement should lex");
    assert_eq!(tokens.len(), 3, "declare TYPE \"json\": {statement}");
    assert_eq!(tokens[2].kind, TokenKind::Str);
    serde_json::from_str(&tokens[2].lexeme).expect("options literal should be JSON")
}

fn normalized(raw: Value) -> OptionRecord {
    normalize(&Module, &raw).expect("options should normalize")
}

#[test]
fn reinstallation_decodes_to_the_same_record() {
    let cases = [
        json!(null),
        json!({ "alias": "package_block" }),
        json!(["Module", { "alias": "inner_kw", "preamble": ["q(\"x\")"] }, "Module"]),
        json!({ "preamble": ["say(\"a\\\\b\")", "tab(\"\t\")"] }),
    ];

    for raw in cases {
        let record = normalized(raw);
        let statements = generate("Module", "Foo", None, &record);
        let declare = statements
            .iter()
            .find(|s| s.starts_with("declare Module"))
            .expect("keyword re-installs itself");

        assert_eq!(normalized(decode_declare(declare)), record);
    }
}

#[test]
fn inner_entries_keep_their_raw_options() {
    let record = normalized(json!(["Module", { "alias": "sub" }]));

    let statements = generate("Module", "Foo", Some("1.0"), &record);

    assert_eq!(statements[0], "package Foo");
    assert_eq!(statements[1], r#"version "1.0""#);
    assert_eq!(decode_declare(&statements[3]), json!({ "alias": "sub" }));
}

#[test]
fn rendered_preamble_ends_with_the_placeholder() {
    let rendered = render(&["package Foo".to_string()]);

    assert_eq!(rendered, format!(" package Foo; {PLACEHOLDER};"));
}
