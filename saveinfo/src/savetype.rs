use std::str::FromStr;

use serde_derive::Serialize;

use crate::SaveError;

/// Where a [crate::Save] writes to.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum SaveType {
    /// A local file or directory.
    #[strum(to_string = "disk", serialize = "file", serialize = "local")]
    Disk,
    /// A remote location, addressed by URL.
    #[strum(to_string = "web", serialize = "internet", serialize = "remote")]
    Web,
}

impl SaveType {
    /// Resolves a type name or alias, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, SaveError> {
        Self::from_str(value.trim()).map_err(|_| SaveError::UnknownType {
            value: value.to_string(),
        })
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
