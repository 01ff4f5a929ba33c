use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One navigation step into an object or array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
	/// Select an object member by key.
	Key(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

impl From<&str> for Selector {
	fn from(key: &str) -> Self {
		Self::Key(key.to_owned())
	}
}

impl From<String> for Selector {
	fn from(key: String) -> Self {
		Self::Key(key)
	}
}

impl From<&String> for Selector {
	fn from(key: &String) -> Self {
		Self::Key(key.clone())
	}
}

impl From<usize> for Selector {
	fn from(index: usize) -> Self {
		Self::Index(index)
	}
}

impl From<&Selector> for Selector {
	fn from(selector: &Selector) -> Self {
		selector.clone()
	}
}

/// Parse the command-line form of a selector.
///
/// `[N]` with decimal `N` selects an index. Every other string is a key taken literally, except that exactly one
/// leading `\` is dropped, so `\[0]` reaches the key `[0]` and `\\x` reaches `\x`.
impl FromStr for Selector {
	type Err = Infallible;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		if let Some(escaped) = input.strip_prefix('\\') {
			return Ok(Self::Key(escaped.to_owned()));
		}

		let index = input
			.strip_prefix('[')
			.and_then(|rest| rest.strip_suffix(']'))
			.filter(|digits| !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()))
			.and_then(|digits| digits.parse::<usize>().ok());

		Ok(match index {
			Some(index) => Self::Index(index),
			None => Self::Key(input.to_owned()),
		})
	}
}

impl fmt::Display for Selector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Key(key) if key.starts_with(['[', '\\']) => write!(f, "\\{key}"),
			Self::Key(key) => f.write_str(key),
			Self::Index(index) => write!(f, "[{index}]"),
		}
	}
}
