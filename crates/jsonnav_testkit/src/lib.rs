//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Actor listing used across navigation tests.
pub const SAMPLE_JSON: &str = r#"{
	"Actors": [
		{
			"name": "Tom Cruise",
			"age": 56,
			"Born At": "Syracuse, NY",
			"Birthdate": "July 3, 1962",
			"hasChildren": true,
			"hasTwitterAccount": true,
			"hasGreyHair": false,
			"wife": null,
			"weight": 67.5,
			"photo": "https://jsonformatter.org/img/tom-cruise.jpg"
		},
		{
			"name": "Robert Downey Jr.",
			"age": 53,
			"Born At": "New York City, NY",
			"Birthdate": "April 4, 1965",
			"photo": "https://jsonformatter.org/img/Robert-Downey-Jr.jpg"
		}
	]
}
"#;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read and parse a fixture with `serde_json`, for cross-checking navigation results.
pub fn fixture_reference(name: &str) -> serde_json::Value {
	let bytes = std::fs::read(fixture_path(name)).expect("fixture reads");
	serde_json::from_slice(&bytes).expect("fixture is valid json")
}

/// Parse [`SAMPLE_JSON`] with `serde_json`.
pub fn sample_reference() -> serde_json::Value {
	serde_json::from_str(SAMPLE_JSON).expect("sample is valid json")
}
