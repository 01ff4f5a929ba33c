use thiserror::Error;

use crate::json::ValueKind;

/// Crate-local result type for navigation and serialization.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while reading and decoding a document.
///
/// These are ordinary recoverable failures: the caller decides whether to retry, report, or give up.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The byte source failed while being drained.
	#[error(transparent)]
	Read(#[from] std::io::Error),
	/// Input is not valid JSON text.
	#[error(transparent)]
	Decode(#[from] serde_json::Error),
	/// Input exceeded the configured read limit.
	#[error("input exceeded limit {limit} bytes")]
	InputTooLarge {
		/// Maximum allowed input bytes.
		limit: usize,
	},
}

/// Errors produced while navigating or serializing a decoded node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// Object lookup found no member with the requested key.
	#[error("key error: {key:?} not found")]
	KeyNotFound {
		/// Requested key; empty when an index was used against an object.
		key: String,
	},
	/// Array lookup was out of bounds, or no index was supplied.
	#[error("index error: {}", describe_index(.index, .len))]
	IndexOutOfRange {
		/// Requested index, `None` when the selector carried a key instead.
		index: Option<usize>,
		/// Length of the array being indexed.
		len: usize,
	},
	/// Navigation was attempted on a scalar or null node.
	#[error("not implemented for {kind}")]
	Unsupported {
		/// Runtime type of the node.
		kind: ValueKind,
	},
	/// The encoder could not represent the value.
	#[error("{message}")]
	Serialization {
		/// Encoder message.
		message: String,
	},
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Serialization { message: err.to_string() }
	}
}

fn describe_index(index: &Option<usize>, len: &usize) -> String {
	match index {
		Some(index) => format!("index {index} out of range for array of length {len}"),
		None => format!("missing index for array of length {len}"),
	}
}
