use params::ParamError;
use saveinfo::SaveError;
use utils::ErrorKind;

/// Describes a failure to build a filter tree.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TreeError {
    #[error("items must be passed as a mapping")]
    NotAMapping,
    #[error("{what} must be passed as a list")]
    NotAList { what: &'static str },
    #[error("{field} of an item must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    #[error("could not find {field:?} in item options")]
    MissingField { field: &'static str },
    #[error("invalid item type: {value:?}")]
    UnknownType { value: String },
    #[error("parameters of item {item:?} are invalid: {source}")]
    Params {
        item: String,
        #[source]
        source: ParamError,
    },
    #[error("saves of item {item:?} are invalid: {source}")]
    Saves {
        item: String,
        #[source]
        source: SaveError,
    },
}

impl TreeError {
    pub fn kind(&self) -> ErrorKind {
        use TreeError::*;
        match self {
            NotAMapping | NotAList { .. } | InvalidField { .. } => ErrorKind::Type,
            UnknownType { .. } => ErrorKind::Value,
            MissingField { .. } => ErrorKind::Key,
            Params { source, .. } => source.kind(),
            Saves { source, .. } => source.kind(),
        }
    }
}
