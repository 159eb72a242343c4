use std::fmt;

/// A whitespace-delimited unit of the source text.
///
/// Tokens are compared by exact string equality.
pub type Token = String;

/// An ordered pair of two consecutive tokens, used as a chain table key.
///
/// Two bigrams with the same tokens are the same key, wherever they
/// were observed in the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bigram {
	first: Token,
	second: Token,
}

impl Bigram {
	/// Creates a bigram from two tokens, in order.
	pub fn new(first: impl Into<Token>, second: impl Into<Token>) -> Self {
		Self {
			first: first.into(),
			second: second.into(),
		}
	}

	pub fn first(&self) -> &str {
		&self.first
	}

	pub fn second(&self) -> &str {
		&self.second
	}

	/// Slides the window one token forward: `(a, b)` advanced by `c` is `(b, c)`.
	pub fn advance(&self, next: &str) -> Self {
		Self::new(self.second.as_str(), next)
	}

	/// Consumes the bigram and returns both tokens.
	pub fn into_tokens(self) -> (Token, Token) {
		(self.first, self.second)
	}
}

impl fmt::Display for Bigram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.first, self.second)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn advance_slides_window() {
		let key = Bigram::new("hi", "there");
		let next = key.advance("mary");
		assert_eq!(next, Bigram::new("there", "mary"));
		assert_eq!(next.to_string(), "(there, mary)");
	}

	#[test]
	fn order_matters() {
		assert_ne!(Bigram::new("a", "b"), Bigram::new("b", "a"));
	}
}
