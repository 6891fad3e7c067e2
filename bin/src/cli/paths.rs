use anyhow::{Context, Result};
use clap::Args;
use saveinfo::SaveModel;
use serde_json::Value;

use super::input::InputArgs;

/// Prints the type and path of each save in a list of save options.
#[derive(Args, Debug)]
pub struct Command {
    #[command(flatten)]
    input: InputArgs,

    /// Include inactive saves.
    #[arg(long)]
    all: bool,
}

pub fn run(cmd: &Command) -> Result<Value> {
    paths(&cmd.input.load()?, !cmd.all)
}

fn paths(raw: &Value, only_active: bool) -> Result<Value> {
    let model = SaveModel::create(raw).with_context(|| "building save model")?;
    Ok(serde_json::to_value(model.get_paths(only_active))?)
}
