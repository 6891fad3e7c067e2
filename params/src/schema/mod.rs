//! Normalisation of raw parameter option mappings.
//!
//! [validate] turns a user-supplied mapping into a fully populated [ParamDefinition], or fails
//! with the first problem found. The steps run in a fixed order, so that e.g. a missing `type`
//! is reported before a missing `default`.

#[cfg(test)]
mod tests;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{ParamError, ParamType, Properties};

/// Canonical, fully populated options of one parameter.
///
/// `children` holds the still-raw options of each child, in their given order; each child is
/// validated when its own node is built.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamDefinition {
    pub full_name: String,
    pub description: String,
    pub optional: bool,
    pub is_active: bool,
    pub value: Value,
    pub default: Value,
    pub properties: Properties,
    pub children: IndexMap<String, Value>,
}

impl ParamDefinition {
    pub fn param_type(&self) -> ParamType {
        self.properties.param_type()
    }

    /// Canonical mapping form, which [validate] accepts and returns unchanged.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), self.param_type().as_str().into());
        map.insert("full_name".into(), self.full_name.clone().into());
        map.insert("description".into(), self.description.clone().into());
        map.insert("optional".into(), self.optional.into());
        map.insert("is_active".into(), self.is_active.into());
        map.insert("value".into(), self.value.clone());
        map.insert("default".into(), self.default.clone());
        map.insert("properties".into(), self.properties.to_value());
        map.insert(
            "children".into(),
            Value::Object(
                self.children
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
        );
        Value::Object(map)
    }
}

/// Validates and normalises the raw options of the parameter called `name`.
pub fn validate(name: &str, raw: &Value) -> Result<ParamDefinition, ParamError> {
    let Value::Object(opts) = raw else {
        return Err(ParamError::NotAMapping {
            name: name.to_string(),
        });
    };

    let full_name = match opts.get("full_name") {
        None => name.to_string(),
        Some(v) => string_field(name, "full_name", v)?,
    };
    let description = match opts.get("description") {
        None => String::new(),
        Some(v) => string_field(name, "description", v)?,
    };
    let optional = match opts.get("optional") {
        None => false,
        Some(v) => bool_field(name, "optional", v)?,
    };
    let is_active = match opts.get("is_active") {
        Some(v) if optional => bool_field(name, "is_active", v)?,
        _ => true,
    };

    let param_type = match opts.get("type") {
        None => {
            return Err(ParamError::MissingField {
                name: name.to_string(),
                field: "type",
            });
        }
        Some(Value::String(t)) => ParamType::parse(t)?,
        Some(_) => return Err(ParamError::invalid_field(name, "type", "a string")),
    };

    let (value, default) = if param_type.has_value() {
        let default = opts
            .get("default")
            .cloned()
            .ok_or_else(|| ParamError::MissingField {
                name: name.to_string(),
                field: "default",
            })?;
        let value = opts.get("value").cloned().unwrap_or_else(|| default.clone());
        (value, default)
    } else {
        (Value::Null, Value::Null)
    };

    let properties = match opts.get("properties") {
        None => Properties::from_raw(name, param_type, &Map::new())?,
        Some(Value::Object(props)) => Properties::from_raw(name, param_type, props)?,
        Some(_) => return Err(ParamError::invalid_field(name, "properties", "a mapping")),
    };

    let children = match opts.get("children") {
        None => IndexMap::new(),
        Some(Value::Object(children)) => children
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        Some(_) => return Err(ParamError::invalid_field(name, "children", "a mapping")),
    };

    Ok(ParamDefinition {
        full_name,
        description,
        optional,
        is_active,
        value,
        default,
        properties,
        children,
    })
}

fn string_field(name: &str, field: &'static str, value: &Value) -> Result<String, ParamError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ParamError::invalid_field(name, field, "a string"))
}

fn bool_field(name: &str, field: &'static str, value: &Value) -> Result<bool, ParamError> {
    value
        .as_bool()
        .ok_or_else(|| ParamError::invalid_field(name, field, "a bool"))
}
