use utils::ErrorKind;

/// Describes a failure to build or mutate parameters.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("options of parameter {name:?} must be passed as a mapping")]
    NotAMapping { name: String },
    #[error("{field} of parameter {name:?} must be {expected}")]
    InvalidField {
        name: String,
        field: &'static str,
        expected: &'static str,
    },
    #[error("could not find {field:?} in options of parameter {name:?}")]
    MissingField { name: String, field: &'static str },
    #[error("invalid parameter type: {value:?}")]
    UnknownType { value: String },
    #[error(
        "option count of parameter {name:?} is {options} but {descriptions} option descriptions were given"
    )]
    OptionCountMismatch {
        name: String,
        options: usize,
        descriptions: usize,
    },
    #[error("parameter and group names must be unique within a parameter model, {name:?} is repeated")]
    DuplicateName { name: String },
    #[error("{key:?} is not an option of parameter {name:?}")]
    UnknownOption { name: String, key: String },
    #[error("no parameter named {name:?}")]
    UnknownParameter { name: String },
    #[error("parameter {name:?} is a group and has no value")]
    GroupHasNoValue { name: String },
    #[error("parameter {name:?} is not optional and is always active")]
    NotOptional { name: String },
    #[error("parameter {name:?} is read-only")]
    ReadOnly { name: String },
}

impl ParamError {
    pub fn kind(&self) -> ErrorKind {
        use ParamError::*;
        match self {
            NotAMapping { .. } | InvalidField { .. } => ErrorKind::Type,
            UnknownType { .. }
            | OptionCountMismatch { .. }
            | DuplicateName { .. }
            | GroupHasNoValue { .. }
            | NotOptional { .. } => ErrorKind::Value,
            MissingField { .. } | UnknownOption { .. } | UnknownParameter { .. } => ErrorKind::Key,
            ReadOnly { .. } => ErrorKind::ReadOnly,
        }
    }

    pub(crate) fn invalid_field(name: &str, field: &'static str, expected: &'static str) -> Self {
        Self::InvalidField {
            name: name.to_string(),
            field,
            expected,
        }
    }
}
