use std::str::FromStr;

use serde_derive::Serialize;

use crate::TreeError;

/// The role of a [crate::FilterItem] in the processing tree.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum ItemType {
    #[default]
    #[strum(to_string = "generic", serialize = "default", serialize = "none")]
    Generic,
    #[strum(to_string = "filter")]
    Filter,
    #[strum(to_string = "modifier")]
    Modifier,
    /// Only organises its children.
    #[strum(to_string = "group", serialize = "folder")]
    Group,
    /// Produces the data that the rest of the tree processes.
    #[strum(to_string = "input", serialize = "in")]
    Input,
    #[strum(to_string = "output", serialize = "out")]
    Output,
}

impl ItemType {
    /// Resolves a type name or alias, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, TreeError> {
        Self::from_str(value.trim()).map_err(|_| TreeError::UnknownType {
            value: value.to_string(),
        })
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
