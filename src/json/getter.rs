use crate::json::{Node, Result, Selector};

/// Chainable navigation contract.
///
/// Implemented for [`Node`] and for `Result<Node>`, so a navigation chain reads left to right and the first
/// failure is carried through every later step unchanged:
///
/// ```
/// use jsonnav::json::{Getter, loads};
///
/// let root = loads(br#"{"Actors":[{"name":"Tom Cruise","age":56}]}"#).unwrap();
/// assert_eq!(root.key("Actors").index(0).key("name").string().unwrap(), "\"Tom Cruise\"");
/// assert!(root.key("Actors").index(0).key("names").is_err());
/// ```
pub trait Getter {
	/// Descend one step.
	fn get(&self, selector: impl Into<Selector>) -> Result<Node>;

	/// Serialize as compact JSON text.
	fn string(&self) -> Result<String>;

	/// Serialize as compact JSON bytes.
	fn bytes(&self) -> Result<Vec<u8>>;

	/// Descend into the object member named `key`.
	fn key(&self, key: &str) -> Result<Node> {
		self.get(Selector::Key(key.to_owned()))
	}

	/// Descend into the array element at `index`.
	fn index(&self, index: usize) -> Result<Node> {
		self.get(Selector::Index(index))
	}
}

impl Getter for Node {
	fn get(&self, selector: impl Into<Selector>) -> Result<Node> {
		Node::get(self, selector)
	}

	fn string(&self) -> Result<String> {
		Node::string(self)
	}

	fn bytes(&self) -> Result<Vec<u8>> {
		Node::bytes(self)
	}
}

impl Getter for Result<Node> {
	fn get(&self, selector: impl Into<Selector>) -> Result<Node> {
		self.as_ref().map_err(Clone::clone)?.get(selector)
	}

	fn string(&self) -> Result<String> {
		self.as_ref().map_err(Clone::clone)?.string()
	}

	fn bytes(&self) -> Result<Vec<u8>> {
		self.as_ref().map_err(Clone::clone)?.bytes()
	}
}
