use crate::error::{MarkovError, Result};

/// Parameters for one generation request.
///
/// `GenerationInput` groups everything a caller can tune about a run,
/// independently from the chain table it runs on.
///
/// # Invariants
/// - `count` is always >= 1
/// - `max_words`, when set, is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Seed of the random generator. `None` draws a fresh one per request.
	pub seed: Option<u64>,

	/// Number of independent texts to generate.
	count: usize,

	/// Optional cap on the number of words of each text.
	max_words: Option<usize>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { seed: None, count: 1, max_words: None }
	}
}

impl GenerationInput {
	/// Creates an input generating a single text, seeded with `seed`.
	pub fn seeded(seed: u64) -> Self {
		Self { seed: Some(seed), ..Self::default() }
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn max_words(&self) -> Option<usize> {
		self.max_words
	}

	/// Sets how many texts to generate.
	///
	/// # Errors
	/// Returns an error if `count` is 0.
	pub fn set_count(&mut self, count: usize) -> Result<()> {
		if count == 0 {
			return Err(MarkovError::InvalidConfig("count must be at least 1".to_owned()));
		}
		self.count = count;
		Ok(())
	}

	/// Sets or clears the word cap.
	///
	/// # Errors
	/// Returns an error if the cap is `Some(0)`.
	pub fn set_max_words(&mut self, max_words: Option<usize>) -> Result<()> {
		if max_words == Some(0) {
			return Err(MarkovError::InvalidConfig("max_words must be at least 1".to_owned()));
		}
		self.max_words = max_words;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_one_unbounded_text() {
		let input = GenerationInput::default();
		assert_eq!(input.count(), 1);
		assert_eq!(input.max_words(), None);
		assert_eq!(input.seed, None);
	}

	#[test]
	fn rejects_zero_count() {
		let mut input = GenerationInput::seeded(7);
		let err = input.set_count(0).expect_err("zero count must fail");
		assert!(matches!(err, MarkovError::InvalidConfig(message) if message.contains("count")));
		assert_eq!(input.count(), 1);
	}

	#[test]
	fn rejects_zero_word_cap() {
		let mut input = GenerationInput::default();
		assert!(input.set_max_words(Some(0)).is_err());
		input.set_max_words(Some(12)).expect("cap should be accepted");
		assert_eq!(input.max_words(), Some(12));
		input.set_max_words(None).expect("clearing the cap is allowed");
		assert_eq!(input.max_words(), None);
	}
}
