use std::rc::Rc;

use nsblock::declare::{install, install_multiple, ConfigurationError, DeclaratorRegistry, Module};
use serde_json::json;

use crate::support::RecordingTarget;

#[test]
fn each_block_installs_under_its_key() {
    let mut target = RecordingTarget::default();

    install_multiple(
        Rc::new(Module),
        &DeclaratorRegistry::with_defaults(),
        &mut target,
        "main",
        &json!({ "class": null, "role": { "preamble": ["r()"] } }),
        &json!({ "preamble": ["shared()"] }),
    )
    .expect("batch should install");

    assert_eq!(target.aliases(), vec!["class", "role"]);
    assert_eq!(target.trampolines.len(), 2);
    let role = &target.keywords[1].2;
    assert_eq!(
        role.options().preamble,
        vec!["shared()".to_string(), "r()".to_string()]
    );
    let class = &target.keywords[0].2;
    assert_eq!(class.options().preamble, vec!["shared()".to_string()]);
}

#[test]
fn one_invalid_block_installs_nothing() {
    let mut target = RecordingTarget::default();

    let error = install_multiple(
        Rc::new(Module),
        &DeclaratorRegistry::with_defaults(),
        &mut target,
        "main",
        &json!({ "good": null, "bad": { "preamble": [1] } }),
        &json!(null),
    )
    .expect_err("bad block should fail");

    assert!(matches!(
        error,
        ConfigurationError::PreambleEntryNotString { .. }
    ));
    assert!(target.keywords.is_empty());
    assert!(target.trampolines.is_empty());
}

#[test]
fn blocks_must_be_a_mapping() {
    let mut target = RecordingTarget::default();

    let error = install_multiple(
        Rc::new(Module),
        &DeclaratorRegistry::with_defaults(),
        &mut target,
        "main",
        &json!(["module"]),
        &json!(null),
    )
    .expect_err("a list is not a block mapping");

    assert!(matches!(error, ConfigurationError::InvalidBlocks { .. }));
}

#[test]
fn single_install_binds_keyword_and_trampoline_together() {
    let mut target = RecordingTarget::default();

    let registry = DeclaratorRegistry::with_defaults();
    install(
        Rc::new(Module),
        &registry,
        &mut target,
        "Pkg",
        &json!({ "alias": "block" }),
    )
        .expect("install should succeed");

    assert_eq!(target.keywords.len(), 1);
    assert_eq!(target.keywords[0].0, "Pkg");
    assert_eq!(target.keywords[0].1, "block");
    assert_eq!(target.trampolines[0].1, "block");
}

#[test]
fn invalid_single_install_touches_nothing() {
    let mut target = RecordingTarget::default();

    let error = install(
        Rc::new(Module),
        &DeclaratorRegistry::with_defaults(),
        &mut target,
        "Pkg",
        &json!("not-a-mapping-or-list"),
    )
    .expect_err("scalar options");

    assert!(matches!(error, ConfigurationError::InvalidOptions { .. }));
    assert!(target.keywords.is_empty());
}

#[test]
fn nested_inner_options_are_checked_before_install() {
    let mut target = RecordingTarget::default();

    let error = install(
        Rc::new(Module),
        &DeclaratorRegistry::with_defaults(),
        &mut target,
        "Pkg",
        &json!({ "inner": ["Module", { "inner": ["Module", { "preamble": "x()" }] }] }),
    )
    .expect_err("doubly nested preamble is not a list");

    assert!(matches!(error, ConfigurationError::PreambleNotList { .. }));
    assert!(target.keywords.is_empty());
    assert!(target.trampolines.is_empty());
}

#[test]
fn inner_types_resolve_through_the_registry() {
    let mut target = RecordingTarget::default();

    let error = install(
        Rc::new(Module),
        &DeclaratorRegistry::new(),
        &mut target,
        "Pkg",
        &json!(["Module"]),
    )
    .expect_err("empty registry knows no inner type");

    assert_eq!(
        error,
        ConfigurationError::UnknownDeclarator("Module".to_string())
    );
    assert!(target.keywords.is_empty());
}
