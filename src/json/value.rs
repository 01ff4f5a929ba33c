use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

/// Decoded JSON node.
///
/// Containers hold their children behind `Arc`, so cloning a value or handing out a child never copies the
/// nested structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// JSON `null`.
	Null,
	/// JSON `true` / `false`.
	Bool(bool),
	/// JSON number.
	Number(Number),
	/// JSON string.
	String(Arc<str>),
	/// JSON array.
	Array(Arc<[Value]>),
	/// JSON object, keyed in sorted order.
	Object(Arc<BTreeMap<String, Value>>),
}

/// JSON number, split by the representation it was decoded from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// Integer that fits in `i64`.
	Int(i64),
	/// Positive integer above `i64::MAX`.
	UInt(u64),
	/// Floating point number.
	Float(f64),
}

/// Runtime type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	/// JSON object.
	Object,
	/// JSON array.
	Array,
	/// JSON string.
	String,
	/// JSON number.
	Number,
	/// JSON boolean.
	Boolean,
	/// JSON null.
	Null,
}

impl ValueKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Object => "object",
			Self::Array => "array",
			Self::String => "string",
			Self::Number => "number",
			Self::Boolean => "boolean",
			Self::Null => "null",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Value {
	/// Runtime type of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Null => ValueKind::Null,
			Self::Bool(_) => ValueKind::Boolean,
			Self::Number(_) => ValueKind::Number,
			Self::String(_) => ValueKind::String,
			Self::Array(_) => ValueKind::Array,
			Self::Object(_) => ValueKind::Object,
		}
	}

	/// Return true for JSON `null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Borrow string contents, if this is a string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text),
			_ => None,
		}
	}

	/// Borrow array elements, if this is an array.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow object members, if this is an object.
	pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
		match self {
			Self::Object(members) => Some(members),
			_ => None,
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(flag) => Self::Bool(flag),
			serde_json::Value::Number(number) => Self::Number(Number::from(number)),
			serde_json::Value::String(text) => Self::from(text),
			serde_json::Value::Array(items) => items.into_iter().map(Self::from).collect::<Vec<_>>().into(),
			serde_json::Value::Object(members) => members
				.into_iter()
				.map(|(key, item)| (key, Self::from(item)))
				.collect::<BTreeMap<_, _>>()
				.into(),
		}
	}
}

impl From<serde_json::Number> for Number {
	fn from(number: serde_json::Number) -> Self {
		if let Some(value) = number.as_i64() {
			Self::Int(value)
		} else if let Some(value) = number.as_u64() {
			Self::UInt(value)
		} else {
			Self::Float(number.as_f64().unwrap_or(f64::NAN))
		}
	}
}

impl From<bool> for Value {
	fn from(flag: bool) -> Self {
		Self::Bool(flag)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Number(Number::Int(value))
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(value) => Self::Number(Number::Int(value)),
			Err(_) => Self::Number(Number::UInt(value)),
		}
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(Number::Float(value))
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Self::String(Arc::from(text))
	}
}

impl From<String> for Value {
	fn from(text: String) -> Self {
		Self::String(Arc::from(text))
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(Arc::from(items))
	}
}

impl From<BTreeMap<String, Value>> for Value {
	fn from(members: BTreeMap<String, Value>) -> Self {
		Self::Object(Arc::new(members))
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(flag) => serializer.serialize_bool(*flag),
			Self::Number(number) => number.serialize(serializer),
			Self::String(text) => serializer.serialize_str(text),
			Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items.iter() {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Object(members) => {
				let mut map = serializer.serialize_map(Some(members.len()))?;
				for (key, item) in members.iter() {
					map.serialize_entry(key, item)?;
				}
				map.end()
			}
		}
	}
}

impl Serialize for Number {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match *self {
			Self::Int(value) => serializer.serialize_i64(value),
			Self::UInt(value) => serializer.serialize_u64(value),
			// JSON has no spelling for NaN or the infinities.
			Self::Float(value) if !value.is_finite() => Err(S::Error::custom(format!("cannot serialize non-finite number {value}"))),
			Self::Float(value) => serializer.serialize_f64(value),
		}
	}
}
