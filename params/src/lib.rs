//! Typed, self-describing parameters arranged in a tree.
//!
//! Raw option mappings are normalised by [schema::validate] into a [schema::ParamDefinition],
//! built into [parameter::Parameter] nodes, and owned as a whole by a [model::ParameterModel].

mod error;
pub mod model;
pub mod parameter;
pub mod paramtype;
pub mod properties;
pub mod schema;
#[cfg(any(test, feature = "testing"))]
mod test_defaults;

pub use error::ParamError;
pub use model::ParameterModel;
pub use parameter::Parameter;
pub use paramtype::ParamType;
pub use properties::Properties;
