mod error;
mod getter;
mod load;
mod node;
mod selector;
mod value;

/// Error and result aliases.
pub use error::{Error, LoadError, Result};
/// Chainable navigation contract.
pub use getter::Getter;
/// Decode and encode entry points.
pub use load::{LoadOptions, dumps, load, load_with, loads};
/// Navigable decoded node.
pub use node::Node;
/// Single navigation step.
pub use selector::Selector;
/// Decoded runtime value types.
pub use value::{Number, Value, ValueKind};
