use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tree::FilterTree;

use super::input::InputArgs;

/// Builds a filter tree from a list of item options, and prints its canonical form.
#[derive(Args, Debug)]
pub struct Command {
    #[command(flatten)]
    input: InputArgs,
}

pub fn run(cmd: &Command) -> Result<Value> {
    canonical(&cmd.input.load()?)
}

fn canonical(raw: &Value) -> Result<Value> {
    let tree = FilterTree::from_value(raw).with_context(|| "building filter tree")?;
    for item in tree.items() {
        log::info!(
            "{} {:?}: {} parameters, {} saves.",
            item.item_type(),
            item.name(),
            item.params().len(),
            item.save_info().len(),
        );
    }
    Ok(tree.serialize())
}
