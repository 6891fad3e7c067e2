//! Pieces shared by the filter tree crates that have no dependency on parameters or saves.

pub mod codec;
pub mod error;
pub mod flags;
pub mod signal;

pub use error::ErrorKind;
pub use flags::ItemFlags;
pub use signal::Signal;
