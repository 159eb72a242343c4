//! Tokenization of source text.

use crate::model::bigram::Token;

/// Splits text into tokens on runs of whitespace.
///
/// Empty fragments are discarded and punctuation stays attached to the
/// surrounding word, so `"Sam-I-am!"` is a single token.
pub fn tokenize(text: &str) -> Vec<Token> {
	text.split_whitespace().map(str::to_owned).collect()
}
