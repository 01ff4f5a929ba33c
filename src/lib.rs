//! Decode JSON documents and walk them one key or index at a time.

/// Decoded JSON tree, chained navigation, and serialization back to text.
pub mod json;
