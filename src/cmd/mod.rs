use thiserror::Error;

/// Selected-node output command.
pub mod get;
/// Runtime kind command.
pub mod kind;
/// Document loading and selector chaining shared by commands.
pub mod util;

/// Result type for command entry points.
pub type Result<T> = std::result::Result<T, CmdError>;

/// Failures surfaced by a command.
#[derive(Debug, Error)]
pub enum CmdError {
	/// The input file could not be opened.
	#[error("open {path}: {source}")]
	Open {
		/// Path as given on the command line.
		path: String,
		/// Underlying open failure.
		source: std::io::Error,
	},
	/// Reading or decoding the document failed.
	#[error(transparent)]
	Load(#[from] jsonnav::json::LoadError),
	/// Navigation or serialization failed.
	#[error(transparent)]
	Json(#[from] jsonnav::json::Error),
}
