use utils::ErrorKind;

/// Describes a failure to build or mutate saves.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SaveError {
    #[error("save options must be passed as a mapping")]
    NotAMapping,
    #[error("saves must be passed as a list")]
    NotAList,
    #[error("{field} of a save must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    #[error("could not find {field:?} in save options")]
    MissingField { field: &'static str },
    #[error("invalid save type: {value:?}")]
    UnknownType { value: String },
    #[error("no save with id {id}")]
    SaveNotFound { id: u64 },
    #[error("saves are read-only")]
    ReadOnly,
}

impl SaveError {
    pub fn kind(&self) -> ErrorKind {
        use SaveError::*;
        match self {
            NotAMapping | NotAList | InvalidField { .. } => ErrorKind::Type,
            UnknownType { .. } => ErrorKind::Value,
            MissingField { .. } | SaveNotFound { .. } => ErrorKind::Key,
            ReadOnly => ErrorKind::ReadOnly,
        }
    }
}
