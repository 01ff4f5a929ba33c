use std::path::PathBuf;

use jsonnav::json::Selector;

use crate::cmd::Result;
use crate::cmd::util::{open_document, select};

#[derive(clap::Args)]
pub struct Args {
	/// Input file, or `-` for stdin.
	pub path: PathBuf,
	/// Steps to apply in order: `[N]` for an index, anything else for a key.
	pub selectors: Vec<Selector>,
}

/// Print the runtime kind of the selected node.
pub fn run(args: Args) -> Result<()> {
	let Args { path, selectors } = args;

	let node = select(open_document(&path)?, &selectors)?;
	println!("{}", node.kind());

	Ok(())
}
