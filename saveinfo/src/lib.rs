//! Destinations that a filter's output is saved to, kept in a flat ordered list.

mod error;
pub mod model;
pub mod save;
pub mod savetype;
#[cfg(any(test, feature = "testing"))]
mod test_defaults;

pub use error::SaveError;
pub use model::{SaveId, SaveModel};
pub use save::Save;
pub use savetype::SaveType;
