use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;

/// Encoding of an input file.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Returns `format` if given, otherwise guesses from the path's extension.
    pub fn resolve_auto(format: Option<Format>, path: &Path) -> Format {
        format.unwrap_or_else(|| {
            let is_yaml = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
            if is_yaml { Format::Yaml } else { Format::Json }
        })
    }

    /// Decodes `content` in this format.
    pub fn decode(self, content: &str) -> Result<Value, utils::codec::CodecError> {
        match self {
            Format::Json => utils::codec::from_str(content),
            Format::Yaml => utils::codec::from_yaml_str(content),
        }
    }
}

/// CLI arguments naming the file to read.
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    /// Path to the input file.
    input: PathBuf,

    /// Encoding of the input file.
    ///
    /// By default, files ending in ".yaml" or ".yml" are read as YAML, and anything else as JSON.
    #[arg(long)]
    format: Option<Format>,
}

impl InputArgs {
    /// Reads and decodes the input file.
    pub fn load(&self) -> Result<Value> {
        load(&self.input, self.format)
    }
}

pub fn load(path: &Path, format: Option<Format>) -> Result<Value> {
    let format = Format::resolve_auto(format, path);
    log::debug!("Reading {path:?} as {format:?}.");

    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading input file {path:?}"))?;
    format
        .decode(&content)
        .with_context(|| format!("decoding {path:?} as {format:?}"))
}
