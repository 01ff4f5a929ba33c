use tracing::{debug, trace};

use crate::json::{Error, Result, Selector, Value, ValueKind};

/// Navigable handle to one node of a decoded document.
///
/// A node never changes after construction. Children returned by [`Node::get`] share the selected sub-tree with
/// their parent, so handles are cheap to clone and can be read from many threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
	value: Value,
}

impl Node {
	/// Wrap a value as a root node.
	pub fn new(value: impl Into<Value>) -> Self {
		Self { value: value.into() }
	}

	/// Borrow the wrapped value.
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Unwrap into the underlying value.
	pub fn into_value(self) -> Value {
		self.value
	}

	/// Runtime type of the wrapped value.
	pub fn kind(&self) -> ValueKind {
		self.value.kind()
	}

	/// Descend one step into an object member or array element.
	///
	/// Objects accept [`Selector::Key`] and arrays accept [`Selector::Index`]. An index used on an object looks up
	/// the empty key, and a key used on an array is an index that was never supplied. A key present with a JSON
	/// `null` value yields a null node, only absent keys fail with [`Error::KeyNotFound`]. Scalars and null refuse
	/// every selector with [`Error::Unsupported`].
	pub fn get(&self, selector: impl Into<Selector>) -> Result<Node> {
		let selector = selector.into();
		let selected = match (&self.value, &selector) {
			(Value::Object(members), Selector::Key(key)) => members.get(key).cloned().ok_or_else(|| Error::KeyNotFound { key: key.clone() }),
			// An index carries no key, so the lookup falls back to the empty key.
			(Value::Object(members), Selector::Index(_)) => members.get("").cloned().ok_or_else(|| Error::KeyNotFound { key: String::new() }),
			(Value::Array(items), Selector::Index(index)) => items.get(*index).cloned().ok_or(Error::IndexOutOfRange {
				index: Some(*index),
				len: items.len(),
			}),
			(Value::Array(items), Selector::Key(_)) => Err(Error::IndexOutOfRange { index: None, len: items.len() }),
			(Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_), _) => Err(Error::Unsupported { kind: self.kind() }),
		};

		match selected {
			Ok(value) => {
				trace!(%selector, kind = %value.kind(), "descended");
				Ok(Self { value })
			}
			Err(err) => {
				debug!(%selector, from = %self.kind(), error = %err, "get failed");
				Err(err)
			}
		}
	}

	/// Serialize the wrapped value as compact JSON text.
	pub fn string(&self) -> Result<String> {
		Ok(serde_json::to_string(&self.value)?)
	}

	/// Serialize the wrapped value as compact JSON bytes.
	pub fn bytes(&self) -> Result<Vec<u8>> {
		self.string().map(String::into_bytes)
	}

	/// Serialize the wrapped value as indented JSON text.
	pub fn to_pretty_string(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(&self.value)?)
	}
}

impl From<Value> for Node {
	fn from(value: Value) -> Self {
		Self { value }
	}
}

#[cfg(test)]
mod tests;
