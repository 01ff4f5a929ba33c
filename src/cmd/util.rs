use std::fs::File;
use std::io;
use std::path::Path;

use jsonnav::json::{self, Getter, Node, Selector, load};
use tracing::debug;

use crate::cmd::{CmdError, Result};

/// Load a document from `path`, or from stdin when `path` is `-`.
pub(crate) fn open_document(path: &Path) -> Result<Node> {
	if path.as_os_str() == "-" {
		return Ok(load(io::stdin().lock())?);
	}

	let mut file = File::open(path).map_err(|source| CmdError::Open {
		path: path.display().to_string(),
		source,
	})?;
	Ok(load(&mut file)?)
}

/// Apply `selectors` one `get` at a time, stopping at the first failure.
pub(crate) fn select(root: Node, selectors: &[Selector]) -> Result<Node> {
	debug!(steps = selectors.len(), "selecting");
	let start: json::Result<Node> = Ok(root);
	let selected = selectors.iter().fold(start, |node, selector| node.get(selector))?;
	Ok(selected)
}
