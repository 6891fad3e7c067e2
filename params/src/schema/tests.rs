use googletest::prelude::*;
use serde_json::json;
use test_casing::{TestCases, cases, test_casing};
use utils::ErrorKind;

use super::*;

#[gtest]
fn test_fills_defaults() -> Result<()> {
    let def = validate("threshold", &json!({"type": "int", "default": 5}))?;
    expect_that!(
        def.to_value(),
        eq(&json!({
            "type": "int",
            "full_name": "threshold",
            "description": "",
            "optional": false,
            "is_active": true,
            "value": 5,
            "default": 5,
            "properties": {"minimum": 0, "maximum": 99, "single_step": 1},
            "children": {},
        }))
    );
    Ok(())
}

const DEFAULT_PROPAGATION_CASES: TestCases<(&'static str, Value)> = cases! {
    [
        ("int", json!(3)),
        ("float", json!(0.5)),
        ("string", json!("hello")),
        ("list", json!(2)),
        ("named_list", json!("a")),
        ("bool", json!(true)),
    ]
};

#[test]
fn test_default_propagation_cases_len() {
    assert_eq!(6, DEFAULT_PROPAGATION_CASES.into_iter().count());
}

#[test_casing(6, DEFAULT_PROPAGATION_CASES)]
#[gtest]
fn test_value_defaults_to_default(type_name: &'static str, default: Value) -> Result<()> {
    let def = validate("p", &json!({"type": type_name, "default": default}))?;
    expect_that!(def.value, eq(&default));
    expect_that!(def.default, eq(&default));
    Ok(())
}

#[gtest]
fn test_supplied_value_kept() -> Result<()> {
    let def = validate("p", &json!({"type": "string", "default": "a", "value": "b"}))?;
    expect_that!(def.value, eq(&json!("b")));
    expect_that!(def.default, eq(&json!("a")));
    Ok(())
}

#[gtest]
fn test_int_with_float_bound() -> Result<()> {
    let def = validate(
        "p",
        &json!({"type": "int", "default": 5, "properties": {"maximum": 100.0}}),
    )?;
    let canonical = def.to_value();
    expect_that!(canonical["properties"]["maximum"], eq(&json!(100.0)));
    Ok(())
}

#[gtest]
fn test_group_ignores_value_and_default() -> Result<()> {
    let def = validate(
        "g",
        &json!({"type": "folder", "default": 1, "value": 2, "properties": {"minimum": 1}}),
    )?;
    expect_that!(def.param_type(), eq(ParamType::Group));
    expect_that!(def.value, eq(&Value::Null));
    expect_that!(def.default, eq(&Value::Null));
    expect_that!(def.properties, eq(&Properties::Group));
    Ok(())
}

const ACTIVE_CASES: TestCases<(Value, bool)> = cases! {
    [
        (json!({"type": "bool", "default": true}), true),
        (json!({"type": "bool", "default": true, "is_active": false}), true),
        (json!({"type": "bool", "default": true, "optional": true}), true),
        (json!({"type": "bool", "default": true, "optional": true, "is_active": false}), false),
        (json!({"type": "bool", "default": true, "optional": false, "is_active": false}), true),
    ]
};

#[test]
fn test_active_cases_len() {
    assert_eq!(5, ACTIVE_CASES.into_iter().count());
}

#[test_casing(5, ACTIVE_CASES)]
#[gtest]
fn test_is_active_resolution(input: Value, expected: bool) -> Result<()> {
    let def = validate("p", &input)?;
    expect_that!(def.is_active, eq(expected));
    Ok(())
}

#[gtest]
fn test_type_alias_normalisation() -> Result<()> {
    expect_that!(
        validate("g", &json!({"type": "Folder"}))?.param_type(),
        eq(ParamType::Group)
    );
    expect_that!(
        validate("i", &json!({"type": "INTEGER", "default": 1}))?.param_type(),
        eq(ParamType::Int)
    );
    expect_that!(
        validate("b", &json!({"type": " bool ", "default": false}))?.param_type(),
        eq(ParamType::Bool)
    );
    Ok(())
}

#[gtest]
fn test_children_kept_raw_and_ordered() -> Result<()> {
    let def = validate(
        "g",
        &json!({
            "type": "group",
            "children": {
                "zeta": {"type": "int", "default": 1},
                "alpha": {"type": "nonsense"},
            },
        }),
    )?;
    expect_that!(
        def.children.keys().collect::<Vec<_>>(),
        elements_are![eq(&"zeta"), eq(&"alpha")]
    );
    expect_that!(def.children["alpha"], eq(&json!({"type": "nonsense"})));
    Ok(())
}

#[gtest]
fn test_canonical_form_is_fixed_point() -> Result<()> {
    let def = validate(
        "choice",
        &json!({
            "type": "named_list",
            "default": "b",
            "optional": true,
            "is_active": false,
            "properties": {"options": {"a": 1, "b": [2, 3]}},
        }),
    )?;
    let again = validate("choice", &def.to_value())?;
    expect_that!(again, eq(&def));
    expect_that!(again.to_value(), eq(&def.to_value()));
    Ok(())
}

const INVALID_CASES: TestCases<(Value, ErrorKind)> = cases! {
    [
        (json!([]), ErrorKind::Type),
        (json!("int"), ErrorKind::Type),
        (json!({"default": 1}), ErrorKind::Key),
        (json!({"type": "int"}), ErrorKind::Key),
        (json!({"type": "dict", "default": 1}), ErrorKind::Value),
        (json!({"type": 1, "default": 1}), ErrorKind::Type),
        (json!({"type": "int", "default": 1, "properties": []}), ErrorKind::Type),
        (json!({"type": "group", "children": []}), ErrorKind::Type),
        (json!({"type": "int", "default": 1, "full_name": 2}), ErrorKind::Type),
        (json!({"type": "int", "default": 1, "description": null}), ErrorKind::Type),
        (json!({"type": "int", "default": 1, "optional": "yes"}), ErrorKind::Type),
        (
            json!({
                "type": "list",
                "default": 1,
                "properties": {"options": [1, 2], "option_descriptions": ["a"]},
            }),
            ErrorKind::Value,
        ),
    ]
};

#[test]
fn test_invalid_cases_len() {
    assert_eq!(12, INVALID_CASES.into_iter().count());
}

#[test_casing(12, INVALID_CASES)]
#[gtest]
fn test_invalid(input: Value, expected: ErrorKind) {
    expect_that!(
        validate("p", &input),
        err(testutils::has_kind(ParamError::kind, eq(expected)))
    );
}

#[gtest]
fn test_missing_type_reported_before_missing_default() {
    expect_that!(
        validate("p", &json!({})),
        err(eq(&ParamError::MissingField {
            name: "p".into(),
            field: "type",
        }))
    );
}

#[gtest]
fn test_deterministic() -> Result<()> {
    let input = json!({"type": "float", "default": 0.25, "children": {}});
    expect_that!(validate("p", &input)?, eq(&validate("p", &input)?));
    Ok(())
}
