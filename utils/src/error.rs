//! Coarse classification of validation and mutation errors.

/// The broad class that an error belongs to.
///
/// Each crate has its own error type carrying the details, and exposes the class through a
/// `kind()` method so that callers can react to the class without matching every variant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum_macros::Display)]
pub enum ErrorKind {
    /// A value had the wrong shape, e.g. a list where a mapping was required.
    #[strum(to_string = "type error")]
    Type,
    /// A value had the right shape but was not acceptable.
    #[strum(to_string = "value error")]
    Value,
    /// A required field or a looked up entry was missing.
    #[strum(to_string = "key error")]
    Key,
    /// A mutation was attempted on something in read-only mode.
    #[strum(to_string = "read-only error")]
    ReadOnly,
}
