use googletest::prelude::*;
use strum::IntoEnumIterator;
use test_casing::{TestCases, cases, test_casing};
use utils::ErrorKind;

use super::*;

const VALID_CASES: TestCases<(&'static str, ParamType)> = cases! {
    [
        ("int", ParamType::Int),
        ("INTEGER", ParamType::Int),
        ("float", ParamType::Float),
        ("str", ParamType::String),
        ("String", ParamType::String),
        ("text", ParamType::String),
        ("list", ParamType::List),
        ("ComboBox", ParamType::List),
        ("named_list", ParamType::NamedList),
        (" bool ", ParamType::Bool),
        ("boolean", ParamType::Bool),
        ("Folder", ParamType::Group),
        ("category", ParamType::Group),
        ("group\n", ParamType::Group),
    ]
};

#[test]
fn test_valid_cases_len() {
    assert_eq!(14, VALID_CASES.into_iter().count());
}

#[test_casing(14, VALID_CASES)]
#[gtest]
fn test_parse_valid(input: &'static str, expected: ParamType) {
    expect_that!(ParamType::parse(input), ok(eq(&expected)));
}

const INVALID_CASES: TestCases<&'static str> = cases! {
    [
        "",
        "integers",
        "named list",
        "dict",
        "in t",
    ]
};

#[test]
fn test_invalid_cases_len() {
    assert_eq!(5, INVALID_CASES.into_iter().count());
}

#[test_casing(5, INVALID_CASES)]
#[gtest]
fn test_parse_invalid(input: &'static str) {
    expect_that!(
        ParamType::parse(input),
        err(testutils::has_kind(ParamError::kind, eq(ErrorKind::Value)))
    );
}

#[gtest]
fn test_canonical_names_reparse() -> Result<()> {
    for param_type in ParamType::iter() {
        expect_that!(ParamType::parse(param_type.as_str()), ok(eq(&param_type)));
        expect_that!(param_type.to_string(), eq(param_type.as_str()));
        expect_that!(
            serde_json::to_value(param_type)?,
            eq(&serde_json::Value::from(param_type.as_str()))
        );
    }
    Ok(())
}

#[gtest]
fn test_only_group_has_no_value() {
    for param_type in ParamType::iter() {
        expect_that!(param_type.has_value(), eq(param_type != ParamType::Group));
    }
}
