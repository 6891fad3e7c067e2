use googletest::prelude::*;
use serde_json::json;
use testutils::{DefaultForTest, Recorder};
use utils::ErrorKind;

use super::*;

fn record_events(model: &mut ParameterModel) -> Recorder<String> {
    let events = Recorder::new();
    let signals = model.signals_mut();

    let rec = events.clone();
    signals
        .parameter_changed
        .connect(move |param: &Parameter| rec.push(format!("changed {}", param.name())));
    let rec = events.clone();
    signals
        .parameter_toggled
        .connect(move |param: &Parameter| rec.push(format!("toggled {}", param.name())));
    let rec = events.clone();
    signals
        .model_change
        .connect(move |_: &()| rec.push("model".to_string()));

    events
}

#[gtest]
fn test_active_filtering() -> Result<()> {
    let model = ParameterModel::create(&json!({
        "x": {"type": "int", "default": 5, "optional": true, "is_active": false},
        "y": {"type": "string", "default": "hi"},
    }))?;

    expect_that!(model.get_values(true)?, eq(&IndexMap::from([("y".to_string(), json!("hi"))])));
    expect_that!(
        model.get_values(false)?,
        eq(&IndexMap::from([
            ("x".to_string(), json!(5)),
            ("y".to_string(), json!("hi")),
        ]))
    );
    Ok(())
}

#[gtest]
fn test_values_skip_groups_and_resolve_named_lists() -> Result<()> {
    let model = ParameterModel::default_for_test();
    let values = model.get_values(false)?;

    expect_that!(
        values.keys().collect::<Vec<_>>(),
        elements_are![
            eq(&"sigma"),
            eq(&"mode"),
            eq(&"truncate"),
            eq(&"invert"),
            eq(&"label"),
        ]
    );
    expect_that!(values["mode"], eq(&json!("nearest")));
    Ok(())
}

#[gtest]
fn test_round_trip() -> Result<()> {
    let model = ParameterModel::default_for_test();
    let serialized = model.serialize();

    let rebuilt = ParameterModel::create(&serialized)?;
    expect_that!(rebuilt.serialize(), eq(&serialized));
    expect_that!(rebuilt.root(), eq(model.root()));
    Ok(())
}

#[gtest]
fn test_round_trip_after_mutation() -> Result<()> {
    let mut model = ParameterModel::default_for_test();
    model.set_value("mode", json!("wrap"))?;
    model.set_active("sigma", false)?;

    let rebuilt = ParameterModel::create(&model.serialize())?;
    expect_that!(rebuilt.serialize(), eq(&model.serialize()));
    let active = rebuilt.get_values(true)?;
    expect_that!(active.get("sigma"), none());
    expect_that!(active.get("mode"), some(eq(&json!("wrap-around"))));
    Ok(())
}

#[gtest]
fn test_duplicate_names_rejected() {
    expect_that!(
        ParameterModel::create(&json!({
            "blur": {
                "type": "group",
                "children": {
                    "size": {"type": "int", "default": 3},
                },
            },
            "sharpen": {
                "type": "group",
                "children": {
                    "size": {"type": "int", "default": 3},
                },
            },
        })),
        err(eq(&ParamError::DuplicateName {
            name: "size".into(),
        }))
    );
}

#[gtest]
fn test_root_name_is_reserved() {
    expect_that!(
        ParameterModel::create(&json!({"root": {"type": "bool", "default": true}})),
        err(testutils::has_kind(ParamError::kind, eq(ErrorKind::Value)))
    );
}

#[gtest]
fn test_unique_names_accepted() -> Result<()> {
    let model = ParameterModel::default_for_test();
    expect_that!(model.len(), eq(7));
    expect_that!(model.is_empty(), eq(false));
    Ok(())
}

#[gtest]
fn test_non_mapping_rejected() {
    expect_that!(
        ParameterModel::create(&json!(["x"])),
        err(testutils::has_kind(ParamError::kind, eq(ErrorKind::Type)))
    );
}

#[gtest]
fn test_empty() -> Result<()> {
    let model = ParameterModel::create(&json!({}))?;
    expect_that!(model.is_empty(), eq(true));
    expect_that!(model.serialize(), eq(&json!({})));
    expect_that!(ParameterModel::default().serialize(), eq(&json!({})));
    expect_that!(model.root(), eq(ParameterModel::default().root()));
    Ok(())
}

#[gtest]
#[test_log::test]
fn test_value_change_events() -> Result<()> {
    let mut model = ParameterModel::default_for_test();
    let events = record_events(&mut model);

    model.set_value("truncate", json!(6))?;
    model.set_value("truncate", json!(6))?;
    model.set_value("label", json!("out"))?;

    expect_that!(
        events.take(),
        elements_are![
            eq("changed truncate"),
            eq("model"),
            eq("changed label"),
            eq("model"),
        ]
    );
    expect_that!(
        model.get("truncate").map(Parameter::stored_value),
        some(eq(&json!(6)))
    );
    Ok(())
}

#[gtest]
#[test_log::test]
fn test_toggle_events() -> Result<()> {
    let mut model = ParameterModel::default_for_test();
    let events = record_events(&mut model);

    model.set_active("sigma", false)?;
    model.set_active("sigma", true)?;

    expect_that!(
        events.take(),
        elements_are![
            eq("toggled sigma"),
            eq("model"),
            eq("toggled sigma"),
            eq("model"),
        ]
    );
    Ok(())
}

#[gtest]
fn test_reset_value() -> Result<()> {
    let mut model = ParameterModel::default_for_test();
    model.set_value("truncate", json!(9))?;
    let events = record_events(&mut model);

    model.reset_value("truncate")?;

    expect_that!(events.take(), elements_are![eq("changed truncate"), eq("model")]);
    expect_that!(
        model.get("truncate").map(Parameter::is_modified),
        some(eq(false))
    );
    Ok(())
}

#[gtest]
fn test_rejected_mutations() -> Result<()> {
    let mut model = ParameterModel::default_for_test();
    let events = record_events(&mut model);

    expect_that!(
        model.set_value("missing", json!(1)),
        err(testutils::has_kind(ParamError::kind, eq(ErrorKind::Key)))
    );
    expect_that!(
        model.set_value("advanced", json!(1)),
        err(testutils::has_kind(ParamError::kind, eq(ErrorKind::Value)))
    );
    expect_that!(
        model.set_active("truncate", false),
        err(testutils::has_kind(ParamError::kind, eq(ErrorKind::Value)))
    );
    expect_that!(
        model.set_value("root", json!(1)),
        err(testutils::has_kind(ParamError::kind, eq(ErrorKind::Key)))
    );
    expect_that!(events.is_empty(), eq(true));
    Ok(())
}

#[gtest]
fn test_readonly() -> Result<()> {
    let mut model = ParameterModel::default_for_test();
    let before = model.serialize();
    let events = record_events(&mut model);

    model.set_readonly(true);
    expect_that!(model.is_readonly(), eq(true));
    expect_that!(
        model.parameters().all(|param| param.is_readonly()),
        eq(true)
    );
    expect_that!(
        model.set_value("truncate", json!(1)),
        err(testutils::has_kind(ParamError::kind, eq(ErrorKind::ReadOnly)))
    );
    expect_that!(
        model.set_active("sigma", false),
        err(testutils::has_kind(ParamError::kind, eq(ErrorKind::ReadOnly)))
    );
    expect_that!(model.serialize(), eq(&before));
    expect_that!(events.is_empty(), eq(true));

    model.set_readonly(false);
    model.set_value("truncate", json!(1))?;
    expect_that!(events.len(), eq(2));
    Ok(())
}

#[gtest]
#[test_log::test]
fn test_metadata_setters() -> Result<()> {
    let mut model = ParameterModel::default_for_test();
    let events = record_events(&mut model);

    model.set_full_name("truncate", "Truncate at")?;
    model.set_full_name("truncate", "Truncate at")?;
    model.set_description("truncate", "Kernel radius in sigmas.")?;
    model.set_default("truncate", json!(3))?;
    model.set_type("label", ParamType::Int)?;

    expect_that!(
        events.take(),
        elements_are![
            eq("changed truncate"),
            eq("model"),
            eq("changed truncate"),
            eq("model"),
            eq("changed truncate"),
            eq("model"),
            eq("changed label"),
            eq("model"),
        ]
    );
    let Some(truncate) = model.get("truncate") else {
        panic!("expected truncate parameter");
    };
    expect_that!(truncate.full_name(), eq("Truncate at"));
    expect_that!(truncate.description(), eq("Kernel radius in sigmas."));
    expect_that!(truncate.default(), eq(&json!(3)));
    expect_that!(truncate.is_modified(), eq(true));
    expect_that!(
        model.get("label").map(Parameter::param_type),
        some(eq(ParamType::Int))
    );
    expect_that!(
        model.set_default("advanced", json!(1)),
        err(testutils::has_kind(ParamError::kind, eq(ErrorKind::Value)))
    );
    Ok(())
}

#[gtest]
fn test_set_optional_activates() -> Result<()> {
    let mut model = ParameterModel::default_for_test();
    model.set_active("sigma", false)?;
    let events = record_events(&mut model);

    model.set_optional("sigma", false)?;
    model.set_optional("truncate", true)?;

    expect_that!(
        events.take(),
        elements_are![
            eq("changed sigma"),
            eq("toggled sigma"),
            eq("model"),
            eq("changed truncate"),
            eq("model"),
        ]
    );
    expect_that!(model.get("sigma").map(Parameter::is_active), some(eq(true)));
    expect_that!(
        model.get("truncate").map(Parameter::optional),
        some(eq(true))
    );
    Ok(())
}

#[gtest]
fn test_metadata_setters_readonly() {
    let mut model = ParameterModel::default_for_test();
    model.set_readonly(true);
    let events = record_events(&mut model);

    let read_only = || testutils::has_kind(ParamError::kind, eq(ErrorKind::ReadOnly));
    expect_that!(model.set_full_name("sigma", "S"), err(read_only()));
    expect_that!(model.set_description("sigma", "S"), err(read_only()));
    expect_that!(model.set_default("sigma", json!(2.0)), err(read_only()));
    expect_that!(model.set_optional("sigma", false), err(read_only()));
    expect_that!(model.set_type("sigma", ParamType::Int), err(read_only()));
    expect_that!(events.is_empty(), eq(true));
}

#[gtest]
fn test_bool_parameters() {
    let model = ParameterModel::default_for_test();
    expect_that!(model.bool_parameters(), elements_are![eq(&"invert")]);
}

#[gtest]
fn test_display() -> Result<()> {
    let model = ParameterModel::create(&json!({"s": {"type": "text", "default": ""}}))?;
    expect_that!(model.to_string(), starts_with("<ParameterModel>{\"s\":{\"type\":\"string\""));
    Ok(())
}
