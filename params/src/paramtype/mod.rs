//! The closed set of parameter types.

#[cfg(test)]
mod tests;

use std::str::FromStr;

use serde_derive::Serialize;

use crate::ParamError;

/// Semantic type of a [crate::Parameter].
///
/// Parsing is case-insensitive and accepts aliases, e.g. `"INTEGER"` or `"Folder"`. Display and
/// serialisation always produce the canonical name.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum ParamType {
    #[strum(to_string = "int", serialize = "integer")]
    Int,
    #[strum(to_string = "float")]
    Float,
    #[strum(to_string = "string", serialize = "str", serialize = "text")]
    String,
    #[strum(to_string = "list", serialize = "combobox")]
    List,
    #[strum(to_string = "named_list")]
    NamedList,
    #[strum(to_string = "bool", serialize = "boolean")]
    Bool,
    #[strum(to_string = "group", serialize = "folder", serialize = "category")]
    Group,
}

impl ParamType {
    /// Resolves a type name or alias, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, ParamError> {
        Self::from_str(value.trim()).map_err(|_| ParamError::UnknownType {
            value: value.to_string(),
        })
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// True for types that carry a value and a default.
    pub fn has_value(&self) -> bool {
        !matches!(self, Self::Group)
    }
}
