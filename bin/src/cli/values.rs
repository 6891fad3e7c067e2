use anyhow::{Context, Result};
use clap::Args;
use params::ParameterModel;
use serde_json::{Map, Value};

use super::input::InputArgs;

/// Prints the effective value of each parameter, as passed to a filter function.
#[derive(Args, Debug)]
pub struct Command {
    #[command(flatten)]
    input: InputArgs,

    /// Include inactive parameters.
    #[arg(long)]
    all: bool,
}

pub fn run(cmd: &Command) -> Result<Value> {
    values(&cmd.input.load()?, !cmd.all)
}

fn values(raw: &Value, only_active: bool) -> Result<Value> {
    let model = ParameterModel::create(raw).with_context(|| "building parameter model")?;
    let values = model
        .get_values(only_active)
        .with_context(|| "resolving parameter values")?;
    Ok(Value::Object(values.into_iter().collect::<Map<_, _>>()))
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use testutils::WrapError;

    use super::*;

    fn params() -> Value {
        json!({
            "mode": {
                "type": "named_list",
                "default": "a",
                "properties": {"options": {"a": 1, "b": 2}},
            },
            "extra": {"type": "bool", "default": true, "optional": true, "is_active": false},
        })
    }

    #[gtest]
    fn test_values() -> googletest::Result<()> {
        expect_that!(values(&params(), true).wrap_error()?, eq(&json!({"mode": 1})));
        expect_that!(
            values(&params(), false).wrap_error()?,
            eq(&json!({"mode": 1, "extra": true}))
        );
        Ok(())
    }

    #[gtest]
    fn test_unknown_option() {
        let mut raw = params();
        raw["mode"]["value"] = json!("c");
        expect_that!(values(&raw, true), err(anything()));
    }
}
