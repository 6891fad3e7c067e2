//! Type-specific properties of a parameter.
//!
//! [Properties] is the single place where behaviour differs per [ParamType]: the variant
//! determines the type, and every type-specific decision is one `match` over it.


use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde_json::{Map, Number, Value};

use crate::{ParamError, ParamType};

/// Bounds and step for an `int` parameter's editor.
///
/// Bounds are kept as the number they were given as, so `100.0` stays a float.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntRange {
    pub minimum: Number,
    pub maximum: Number,
    pub single_step: Number,
}

impl Default for IntRange {
    fn default() -> Self {
        Self {
            minimum: Number::from(0),
            maximum: Number::from(99),
            single_step: Number::from(1),
        }
    }
}

/// Bounds and step for a `float` parameter's editor.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatRange {
    pub minimum: f64,
    pub maximum: f64,
    pub single_step: f64,
}

impl Default for FloatRange {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            single_step: 0.1,
        }
    }
}

/// Choices of a `list` parameter. Both sequences always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListOptions {
    options: Vec<Value>,
    option_descriptions: Vec<String>,
}

impl ListOptions {
    pub fn new(options: Vec<Value>, option_descriptions: Vec<String>) -> Result<Self, ParamError> {
        check_counts("list", options.len(), option_descriptions.len())?;
        Ok(Self {
            options,
            option_descriptions,
        })
    }

    pub fn options(&self) -> &[Value] {
        &self.options
    }

    pub fn option_descriptions(&self) -> &[String] {
        &self.option_descriptions
    }
}

/// Choices of a `named_list` parameter, keyed by option name. Both mappings always have the
/// same number of entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NamedListOptions {
    options: IndexMap<String, Value>,
    option_descriptions: IndexMap<String, String>,
}

impl NamedListOptions {
    pub fn new(
        options: IndexMap<String, Value>,
        option_descriptions: IndexMap<String, String>,
    ) -> Result<Self, ParamError> {
        check_counts("named_list", options.len(), option_descriptions.len())?;
        Ok(Self {
            options,
            option_descriptions,
        })
    }

    pub fn options(&self) -> &IndexMap<String, Value> {
        &self.options
    }

    pub fn option_descriptions(&self) -> &IndexMap<String, String> {
        &self.option_descriptions
    }

    /// Returns the value mapped to the option named `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

fn check_counts(name: &str, options: usize, descriptions: usize) -> Result<(), ParamError> {
    if options != descriptions {
        return Err(ParamError::OptionCountMismatch {
            name: name.to_string(),
            options,
            descriptions,
        });
    }
    Ok(())
}

/// Type and type-specific properties of a parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Properties {
    Int(IntRange),
    Float(FloatRange),
    String,
    List(ListOptions),
    NamedList(NamedListOptions),
    Bool,
    Group,
}

impl Properties {
    /// Fully defaulted properties for `param_type`.
    pub fn defaults_for(param_type: ParamType) -> Self {
        match param_type {
            ParamType::Int => Self::Int(IntRange::default()),
            ParamType::Float => Self::Float(FloatRange::default()),
            ParamType::String => Self::String,
            ParamType::List => Self::List(ListOptions::default()),
            ParamType::NamedList => Self::NamedList(NamedListOptions::default()),
            ParamType::Bool => Self::Bool,
            ParamType::Group => Self::Group,
        }
    }

    pub fn param_type(&self) -> ParamType {
        match self {
            Self::Int(_) => ParamType::Int,
            Self::Float(_) => ParamType::Float,
            Self::String => ParamType::String,
            Self::List(_) => ParamType::List,
            Self::NamedList(_) => ParamType::NamedList,
            Self::Bool => ParamType::Bool,
            Self::Group => ParamType::Group,
        }
    }

    /// Normalises a raw properties mapping for `param_type`, filling in every missing entry.
    ///
    /// `name` is the owning parameter's name, used in errors. Entries that `param_type` has no
    /// use for are dropped.
    pub fn from_raw(
        name: &str,
        param_type: ParamType,
        raw: &Map<String, Value>,
    ) -> Result<Self, ParamError> {
        Ok(match param_type {
            ParamType::Int => {
                let defaults = IntRange::default();
                let int_field = |field: &'static str, default: Number| match raw.get(field) {
                    None => Ok(default),
                    Some(Value::Number(n)) => Ok(n.clone()),
                    Some(_) => Err(ParamError::invalid_field(name, field, "a number")),
                };
                Self::Int(IntRange {
                    minimum: int_field("minimum", defaults.minimum)?,
                    maximum: int_field("maximum", defaults.maximum)?,
                    single_step: int_field("single_step", defaults.single_step)?,
                })
            }
            ParamType::Float => {
                let defaults = FloatRange::default();
                let float_field = |field: &'static str, default: f64| match raw.get(field) {
                    None => Ok(default),
                    Some(v) => v
                        .as_f64()
                        .ok_or_else(|| ParamError::invalid_field(name, field, "a number")),
                };
                Self::Float(FloatRange {
                    minimum: float_field("minimum", defaults.minimum)?,
                    maximum: float_field("maximum", defaults.maximum)?,
                    single_step: float_field("single_step", defaults.single_step)?,
                })
            }
            ParamType::List => {
                let options = match raw.get("options") {
                    None => Vec::new(),
                    Some(Value::Array(options)) => options.clone(),
                    Some(_) => {
                        return Err(ParamError::invalid_field(name, "options", "a list"));
                    }
                };
                let option_descriptions: Vec<String> = match raw.get("option_descriptions") {
                    None => vec![String::new(); options.len()],
                    Some(Value::Array(descriptions)) => descriptions
                        .iter()
                        .map(|d| description_string(name, d))
                        .collect::<Result<_, _>>()?,
                    Some(_) => {
                        return Err(ParamError::invalid_field(
                            name,
                            "option_descriptions",
                            "a list",
                        ));
                    }
                };
                Self::List(
                    ListOptions::new(options, option_descriptions)
                        .map_err(|e| with_param_name(e, name))?,
                )
            }
            ParamType::NamedList => {
                let options: IndexMap<String, Value> = match raw.get("options") {
                    None => IndexMap::new(),
                    Some(Value::Object(options)) => options
                        .iter()
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect(),
                    Some(_) => {
                        return Err(ParamError::invalid_field(name, "options", "a mapping"));
                    }
                };
                let option_descriptions: IndexMap<String, String> = match raw
                    .get("option_descriptions")
                {
                    None => options.keys().map(|k| (k.clone(), String::new())).collect(),
                    Some(Value::Object(descriptions)) => descriptions
                        .iter()
                        .map(|(k, d)| Ok((k.clone(), description_string(name, d)?)))
                        .collect::<Result<_, ParamError>>()?,
                    Some(_) => {
                        return Err(ParamError::invalid_field(
                            name,
                            "option_descriptions",
                            "a mapping",
                        ));
                    }
                };
                Self::NamedList(
                    NamedListOptions::new(options, option_descriptions)
                        .map_err(|e| with_param_name(e, name))?,
                )
            }
            ParamType::String | ParamType::Bool | ParamType::Group => {
                Self::defaults_for(param_type)
            }
        })
    }

    /// Resolves a stored value into the value that it stands for.
    ///
    /// Only `named_list` stores something other than its value: it stores the option name,
    /// which resolves to the option's mapped value.
    pub fn resolve<'a>(&'a self, name: &str, stored: &'a Value) -> Result<&'a Value, ParamError> {
        match self {
            Self::NamedList(named) => stored
                .as_str()
                .and_then(|key| named.get(key))
                .ok_or_else(|| ParamError::UnknownOption {
                    name: name.to_string(),
                    key: match stored {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    },
                }),
            _ => Ok(stored),
        }
    }

    /// Canonical mapping form, as accepted by [Properties::from_raw].
    pub fn to_value(&self) -> Value {
        // Cannot fail, all map keys are strings.
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

fn description_string(name: &str, description: &Value) -> Result<String, ParamError> {
    description
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ParamError::invalid_field(name, "option_descriptions", "strings"))
}

fn with_param_name(error: ParamError, name: &str) -> ParamError {
    match error {
        ParamError::OptionCountMismatch {
            options,
            descriptions,
            ..
        } => ParamError::OptionCountMismatch {
            name: name.to_string(),
            options,
            descriptions,
        },
        other => other,
    }
}

impl serde::Serialize for Properties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Int(range) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("minimum", &range.minimum)?;
                map.serialize_entry("maximum", &range.maximum)?;
                map.serialize_entry("single_step", &range.single_step)?;
                map.end()
            }
            Self::Float(range) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("minimum", &range.minimum)?;
                map.serialize_entry("maximum", &range.maximum)?;
                map.serialize_entry("single_step", &range.single_step)?;
                map.end()
            }
            Self::List(list) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("options", &list.options)?;
                map.serialize_entry("option_descriptions", &list.option_descriptions)?;
                map.end()
            }
            Self::NamedList(named) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("options", &named.options)?;
                map.serialize_entry("option_descriptions", &named.option_descriptions)?;
                map.end()
            }
            Self::String | Self::Bool | Self::Group => serializer.serialize_map(Some(0))?.end(),
        }
    }
}
