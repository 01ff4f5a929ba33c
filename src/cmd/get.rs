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
	/// Indent the output.
	#[arg(long)]
	pub pretty: bool,
}

/// Print the selected node as JSON text.
pub fn run(args: Args) -> Result<()> {
	let Args { path, selectors, pretty } = args;

	let node = select(open_document(&path)?, &selectors)?;
	let text = if pretty { node.to_pretty_string()? } else { node.string()? };
	println!("{text}");

	Ok(())
}
