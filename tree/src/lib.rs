//! The tree of processing steps, each carrying a [params::ParameterModel] and a
//! [saveinfo::SaveModel].

mod error;
pub mod filtertree;
pub mod item;
pub mod itemtype;
#[cfg(any(test, feature = "testing"))]
mod test_defaults;

pub use error::TreeError;
pub use filtertree::FilterTree;
pub use item::FilterItem;
pub use itemtype::ItemType;
