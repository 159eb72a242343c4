use super::bigram::{Bigram, Token};
use crate::text::tokenize;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;

/// A bigram key together with every token observed right after it.
///
/// Successors are kept in observation order and duplicates are preserved,
/// so a token seen twice after the key is twice as likely to be sampled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
	key: Bigram,
	successors: Vec<Token>,
}

impl Chain {
	pub fn key(&self) -> &Bigram {
		&self.key
	}

	pub fn successors(&self) -> &[Token] {
		&self.successors
	}

	/// Picks one successor uniformly over the recorded occurrences.
	///
	/// Returns `None` only if the chain has no successor, which the table
	/// never stores.
	pub fn choose_successor<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Token> {
		self.successors.choose(rng)
	}
}

/// Order-2 Markov chain table over word tokens.
///
/// Maps each bigram `(t[i], t[i+1])` of the source to the list of tokens
/// `t[i+2]` that followed it.
///
/// # Invariants
/// - Every key has at least one successor
/// - The last bigram of the source is only a key if it also occurs earlier
///   with a follower; otherwise it is the one bigram a walk can reach
///   without finding a chain, which is how walks stop (see `has_exit`)
/// - Keys are stored once, in first-seen order, so a key can be sampled
///   uniformly by index regardless of how often it was observed
/// - The table is never mutated after `build`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainTable {
	/// Position of each key in `chains`
	index: HashMap<Bigram, usize>,

	/// Distinct keys in first-seen order with their successors
	chains: Vec<Chain>,

	/// Number of (key, successor) observations folded into the table
	observations: usize,

	/// Last bigram of the source, if it had at least two tokens
	terminal: Option<Bigram>,
}

impl ChainTable {
	/// Builds the chain table from a token sequence.
	///
	/// For each index `i` in `0..=len - 3`, the successor `tokens[i + 2]` is
	/// appended to the entry for `(tokens[i], tokens[i + 1])`.
	///
	/// # Notes
	/// - Fewer than three tokens give an empty table; this is not an error.
	/// - The final bigram is skipped on purpose: nothing follows it, and its
	///   absence is what ends a walk.
	pub fn build<S: AsRef<str>>(tokens: &[S]) -> Self {
		let mut table = Self::default();

		for window in tokens.windows(3) {
			let key = Bigram::new(window[0].as_ref(), window[1].as_ref());
			table.push(key, window[2].as_ref().to_owned());
		}

		if let [.., second_last, last] = tokens {
			table.terminal = Some(Bigram::new(second_last.as_ref(), last.as_ref()));
		}

		debug!(
			"built chain table: {} tokens, {} observations, {} distinct keys",
			tokens.len(),
			table.observations,
			table.chains.len()
		);
		table
	}

	/// Tokenizes `text` on whitespace and builds the table from it.
	pub fn from_text(text: &str) -> Self {
		Self::build(&tokenize(text))
	}

	fn push(&mut self, key: Bigram, successor: Token) {
		self.observations += 1;
		match self.index.get(&key) {
			Some(&position) => self.chains[position].successors.push(successor),
			None => {
				self.index.insert(key.clone(), self.chains.len());
				self.chains.push(Chain { key, successors: vec![successor] });
			}
		}
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.chains.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chains.is_empty()
	}

	/// Number of observations folded into the table (`max(L - 2, 0)` for `L` tokens).
	pub fn observations(&self) -> usize {
		self.observations
	}

	/// Last bigram of the source this table was built from.
	pub fn terminal(&self) -> Option<&Bigram> {
		self.terminal.as_ref()
	}

	/// Whether a walk over this table can end on its own.
	///
	/// A walk only stops when it reaches a bigram without chain, and the
	/// source's last bigram is the only candidate. If that bigram also occurs
	/// earlier with a follower, every walk cycles forever.
	pub fn has_exit(&self) -> bool {
		match &self.terminal {
			Some(terminal) => !self.is_empty() && !self.contains_key(terminal),
			None => false,
		}
	}

	/// Returns the successors recorded for `key`, if it is in the table.
	pub fn get(&self, key: &Bigram) -> Option<&[Token]> {
		self.chain(key).map(Chain::successors)
	}

	/// Returns the chain stored for `key`, if any.
	pub fn chain(&self, key: &Bigram) -> Option<&Chain> {
		self.index.get(key).map(|&position| &self.chains[position])
	}

	pub fn contains_key(&self, key: &Bigram) -> bool {
		self.index.contains_key(key)
	}

	/// Iterates over the distinct keys, in first-seen order.
	pub fn keys(&self) -> impl Iterator<Item = &Bigram> {
		self.chains.iter().map(Chain::key)
	}

	/// Iterates over the chains, in first-seen key order.
	pub fn iter(&self) -> impl Iterator<Item = &Chain> {
		self.chains.iter()
	}

	/// Picks a chain uniformly over the set of distinct keys.
	///
	/// Returns `None` if the table is empty.
	pub fn random_chain<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Chain> {
		self.chains.choose(rng)
	}
}
