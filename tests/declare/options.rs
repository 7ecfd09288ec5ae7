use nsblock::declare::{normalize, ConfigurationError, InnerKeyword, Module};
use serde_json::{json, Value};

#[test]
fn absent_options_take_every_default() {
    let record = normalize(&Module, &Value::Null).expect("defaults should normalize");

    assert_eq!(record.alias, "module");
    assert!(record.inner.is_empty());
    assert!(record.preamble.is_empty());
}

#[test]
fn a_list_is_shorthand_for_inner_keywords() {
    let record = normalize(&Module, &json!(["Module", { "alias": "sub" }, "Other"]))
        .expect("inner shorthand should normalize");

    assert_eq!(
        record.inner,
        vec![
            InnerKeyword {
                declarator: "Module".to_string(),
                options: json!({ "alias": "sub" }),
            },
            InnerKeyword {
                declarator: "Other".to_string(),
                options: Value::Null,
            },
        ]
    );
}

#[test]
fn a_mapping_sets_individual_fields() {
    let record = normalize(
        &Module,
        &json!({ "alias": "package_block", "preamble": ["setup()"] }),
    )
    .expect("mapping should normalize");

    assert_eq!(record.alias, "package_block");
    assert_eq!(record.preamble, vec!["setup()".to_string()]);
}

#[test]
fn scalar_options_are_rejected() {
    let error = normalize(&Module, &json!("not-a-mapping-or-list"))
        .expect_err("a string is not valid options");

    assert!(matches!(error, ConfigurationError::InvalidOptions { .. }));
    assert!(error.to_string().contains("Module"));
}

#[test]
fn alias_must_be_an_identifier_string() {
    let not_string = normalize(&Module, &json!({ "alias": 3 })).expect_err("number alias");
    let dotted = normalize(&Module, &json!({ "alias": "Foo::bar" })).expect_err("dotted alias");
    let digit = normalize(&Module, &json!({ "alias": "1x" })).expect_err("leading digit");

    assert!(matches!(not_string, ConfigurationError::AliasNotString { .. }));
    assert!(matches!(dotted, ConfigurationError::InvalidAlias { .. }));
    assert!(matches!(digit, ConfigurationError::InvalidAlias { .. }));
}

#[test]
fn inner_entries_must_start_with_a_type_name() {
    let not_list = normalize(&Module, &json!({ "inner": "Module" })).expect_err("string inner");
    let leading_options =
        normalize(&Module, &json!([{ "alias": "x" }])).expect_err("options without a type");
    let doubled_options = normalize(&Module, &json!(["Module", {}, {}]))
        .expect_err("two option entries in a row");

    assert!(matches!(not_list, ConfigurationError::InnerNotList { .. }));
    assert!(matches!(
        leading_options,
        ConfigurationError::InvalidInnerEntry { .. }
    ));
    assert!(matches!(
        doubled_options,
        ConfigurationError::InvalidInnerEntry { .. }
    ));
}

#[test]
fn preamble_must_be_a_list_of_strings() {
    let not_list = normalize(&Module, &json!({ "preamble": "x()" })).expect_err("string preamble");
    let not_strings =
        normalize(&Module, &json!({ "preamble": ["x()", 1] })).expect_err("number statement");

    assert!(matches!(not_list, ConfigurationError::PreambleNotList { .. }));
    assert!(matches!(
        not_strings,
        ConfigurationError::PreambleEntryNotString { .. }
    ));
}

#[test]
fn unknown_keys_are_rejected() {
    let error = normalize(&Module, &json!({ "alais": "typo" })).expect_err("misspelled key");

    assert_eq!(
        error,
        ConfigurationError::UnknownOption {
            key: "alais".to_string(),
            declarator: "Module".to_string(),
        }
    );
}

#[test]
fn raw_form_normalizes_back_to_the_same_record() {
    let record = normalize(
        &Module,
        &json!({
            "alias": "block",
            "inner": ["Module", { "alias": "sub" }, "Module"],
            "preamble": ["a()", "b()"],
        }),
    )
    .expect("options should normalize");

    let reparsed = normalize(&Module, &record.to_raw()).expect("raw form should normalize");

    assert_eq!(reparsed, record);
}
