//! A single save destination.


use serde_derive::Serialize;
use serde_json::{Map, Value};
use utils::ItemFlags;

use crate::{SaveError, SaveType};

/// A disk or web location that output is saved to, and whether saving there is enabled.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Save {
    #[serde(rename = "type")]
    save_type: SaveType,
    path: String,
    is_active: bool,
    /// Reserved for type-specific settings. Always empty for the current types.
    properties: Map<String, Value>,
    #[serde(skip)]
    readonly: bool,
}

impl Save {
    pub fn from_parts(save_type: SaveType, path: impl Into<String>) -> Self {
        Self {
            save_type,
            path: path.into(),
            is_active: true,
            properties: Map::new(),
            readonly: false,
        }
    }

    /// Validates and normalises raw save options.
    pub fn new(raw: &Value) -> Result<Self, SaveError> {
        let Value::Object(opts) = raw else {
            return Err(SaveError::NotAMapping);
        };

        let save_type = match opts.get("type") {
            None => return Err(SaveError::MissingField { field: "type" }),
            Some(Value::String(t)) => SaveType::parse(t)?,
            Some(_) => {
                return Err(SaveError::InvalidField {
                    field: "type",
                    expected: "a string",
                });
            }
        };
        let is_active = match opts.get("is_active") {
            None => true,
            Some(v) => v.as_bool().ok_or(SaveError::InvalidField {
                field: "is_active",
                expected: "a bool",
            })?,
        };
        let path = match opts.get("path") {
            None => String::new(),
            Some(v) => v
                .as_str()
                .ok_or(SaveError::InvalidField {
                    field: "path",
                    expected: "a string",
                })?
                .to_string(),
        };
        match opts.get("properties") {
            None | Some(Value::Object(_)) => {}
            Some(_) => {
                return Err(SaveError::InvalidField {
                    field: "properties",
                    expected: "a mapping",
                });
            }
        }

        Ok(Self {
            is_active,
            ..Self::from_parts(save_type, path)
        })
    }

    pub fn save_type(&self) -> SaveType {
        self.save_type
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Changes the type. Properties are reset, as they are specific to a type.
    pub fn set_save_type(&mut self, save_type: SaveType) {
        self.save_type = save_type;
        self.properties.clear();
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn set_is_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    /// Capabilities of the type label, which carries the activation checkbox.
    pub fn type_flags(&self) -> ItemFlags {
        ItemFlags::label(true, self.readonly)
    }

    /// Capabilities of the path editor.
    pub fn path_flags(&self) -> ItemFlags {
        ItemFlags::editor(self.readonly)
    }

    /// Returns the mapping form, as accepted by [Save::new].
    pub fn serialize(&self) -> Value {
        // Cannot fail, all map keys are strings.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl std::fmt::Display for Save {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Save>{}", self.serialize())
    }
}
