use std::io::Read;

use serde::Serialize;
use tracing::debug;

use crate::json::{LoadError, Node, Result, Value};

const READ_CHUNK_BYTES: usize = 8192;

/// Limits applied while draining a byte source.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
	/// Maximum number of bytes read before giving up.
	pub max_input_bytes: usize,
}

impl Default for LoadOptions {
	fn default() -> Self {
		Self {
			max_input_bytes: 512 * 1024 * 1024,
		}
	}
}

/// Decode JSON text into a root [`Node`].
///
/// Parser diagnostics are returned untouched in [`LoadError::Decode`].
pub fn loads(raw: &[u8]) -> std::result::Result<Node, LoadError> {
	let tree: serde_json::Value = serde_json::from_slice(raw)?;
	let value = Value::from(tree);
	debug!(bytes = raw.len(), kind = %value.kind(), "decoded document");
	Ok(Node::new(value))
}

/// Drain `source` with default [`LoadOptions`] and decode it.
///
/// The source is borrowed, not closed: pass `&mut reader` to keep using the handle afterwards.
pub fn load(source: impl Read) -> std::result::Result<Node, LoadError> {
	load_with(source, &LoadOptions::default())
}

/// Drain `source` up to `options.max_input_bytes` and decode it.
pub fn load_with(mut source: impl Read, options: &LoadOptions) -> std::result::Result<Node, LoadError> {
	let mut out = Vec::new();
	let mut buf = [0_u8; READ_CHUNK_BYTES];

	loop {
		let read = match source.read(&mut buf) {
			Ok(read) => read,
			Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
			Err(err) => return Err(LoadError::Read(err)),
		};
		if read == 0 {
			break;
		}

		if out.len() + read > options.max_input_bytes {
			return Err(LoadError::InputTooLarge {
				limit: options.max_input_bytes,
			});
		}

		out.extend_from_slice(&buf[..read]);
	}

	loads(&out)
}

/// Serialize any in-process value to compact JSON bytes.
pub fn dumps<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
	Ok(serde_json::to_vec(value)?)
}
