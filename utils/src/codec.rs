//! Strict encoding and decoding of serialised models.
//!
//! Serialised state is plain JSON-compatible data. Non-finite numbers are never valid in it,
//! whichever format it was read from.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    #[error("number {0} is not JSON compliant")]
    NonFiniteNumber(f64),
    #[error("mapping key {0:?} is not a string")]
    NonStringKey(String),
}

impl CodecError {
    pub fn kind(&self) -> crate::ErrorKind {
        use CodecError::*;
        match self {
            Json(_) | Yaml(_) | NonFiniteNumber(_) => crate::ErrorKind::Value,
            NonStringKey(_) => crate::ErrorKind::Type,
        }
    }
}

/// Encodes `value` as compact JSON.
pub fn to_string(value: &Value) -> Result<String, CodecError> {
    Ok(serde_json::to_string(value)?)
}

/// Encodes `value` as indented JSON.
pub fn to_string_pretty(value: &Value) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decodes JSON text. `NaN` and `Infinity` literals are rejected by the parser.
pub fn from_str(s: &str) -> Result<Value, CodecError> {
    Ok(serde_json::from_str(s)?)
}

/// Decodes YAML text into the same data model as [from_str].
///
/// YAML can express `.nan` and `.inf`, which would otherwise silently decode as `null`.
pub fn from_yaml_str(s: &str) -> Result<Value, CodecError> {
    let yaml: serde_yaml_ng::Value = serde_yaml_ng::from_str(s)?;
    yaml_to_json(yaml)
}

fn yaml_to_json(yaml: serde_yaml_ng::Value) -> Result<Value, CodecError> {
    use serde_yaml_ng::Value as Y;

    Ok(match yaml {
        Y::Null => Value::Null,
        Y::Bool(b) => Value::Bool(b),
        Y::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                let number =
                    serde_json::Number::from_f64(f).ok_or(CodecError::NonFiniteNumber(f))?;
                Value::Number(number)
            }
        }
        Y::String(s) => Value::String(s),
        Y::Sequence(seq) => Value::Array(
            seq.into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Y::Mapping(mapping) => {
            let mut map = serde_json::Map::with_capacity(mapping.len());
            for (k, v) in mapping {
                let key = match k {
                    Y::String(s) => s,
                    other => {
                        return Err(CodecError::NonStringKey(format!("{other:?}")));
                    }
                };
                map.insert(key, yaml_to_json(v)?);
            }
            Value::Object(map)
        }
        Y::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}
