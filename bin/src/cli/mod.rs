use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::LevelFilter;

mod checkparams;
mod checktree;
mod input;
mod paths;
mod values;

/// Validates and inspects filter trees, parameter models and save lists stored as JSON or YAML.
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Logging level.
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    CheckParams(checkparams::Command),
    Values(values::Command),
    Paths(paths::Command),
    CheckTree(checktree::Command),
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default())
        .with_context(|| "configuring logging")?;

    use Command::*;
    let output = match &args.command {
        CheckParams(cmd) => checkparams::run(cmd),
        Values(cmd) => values::run(cmd),
        Paths(cmd) => paths::run(cmd),
        CheckTree(cmd) => checktree::run(cmd),
    }?;

    println!(
        "{}",
        utils::codec::to_string_pretty(&output).with_context(|| "formatting output")?
    );
    Ok(())
}
