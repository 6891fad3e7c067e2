use anyhow::{Context, Result};
use clap::Args;
use params::ParameterModel;
use serde_json::Value;

use super::input::InputArgs;

/// Builds a parameter model from a mapping of parameter options, and prints its canonical form,
/// with aliases resolved and defaults filled in.
#[derive(Args, Debug)]
pub struct Command {
    #[command(flatten)]
    input: InputArgs,
}

pub fn run(cmd: &Command) -> Result<Value> {
    canonical(&cmd.input.load()?)
}

fn canonical(raw: &Value) -> Result<Value> {
    let model = ParameterModel::create(raw).with_context(|| "building parameter model")?;
    log::info!("Parameter model holds {} parameters.", model.len());
    Ok(model.serialize())
}
