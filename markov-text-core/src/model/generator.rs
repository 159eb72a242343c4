use super::bigram::Token;
use super::chain_table::{Chain, ChainTable};
use super::generation_input::GenerationInput;
use crate::error::{MarkovError, Result};
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::mpsc;
use std::thread;

/// Word cap applied to tables whose walks can never end on their own,
/// as a multiple of the source length.
const CYCLIC_WORD_FACTOR: usize = 10;

/// Words emitted by one random walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
	words: Vec<Token>,
	completed: bool,
}

impl Walk {
	pub fn words(&self) -> &[Token] {
		&self.words
	}

	/// `true` if the walk stopped on a bigram without chain,
	/// `false` if it was cut by a word cap.
	pub fn is_completed(&self) -> bool {
		self.completed
	}

	/// Joins the words with single spaces.
	pub fn into_text(self) -> String {
		self.words.join(" ")
	}
}

impl fmt::Display for Walk {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.words.join(" "))
	}
}

/// Random text generator over a `ChainTable`.
///
/// # Responsibilities
/// - Walk the table from a uniformly chosen key, sampling one successor per step
/// - Stop on the first bigram that has no chain and emit it as the tail
/// - Run several independent walks over the same table in parallel
///
/// The table is only borrowed: any number of generators can share it
/// without locking, each walk keeps its own state.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'t> {
	table: &'t ChainTable,

	/// Cap forced on every walk when the table has no exit
	fallback_cap: Option<usize>,
}

impl<'t> Generator<'t> {
	/// Creates a generator reading from `table`.
	///
	/// If no walk over the table can ever stop (the source's last bigram also
	/// occurs earlier with a follower), walks are capped to
	/// `CYCLIC_WORD_FACTOR` times the source length.
	pub fn new(table: &'t ChainTable) -> Self {
		let fallback_cap = if table.is_empty() || table.has_exit() {
			None
		} else {
			let cap = CYCLIC_WORD_FACTOR * (table.observations() + 2);
			warn!("source text only ends inside a cycle, capping generated texts to {cap} words");
			Some(cap)
		};
		Self { table, fallback_cap }
	}

	pub fn table(&self) -> &'t ChainTable {
		self.table
	}

	/// Generates one text.
	///
	/// # Errors
	/// - `MarkovError::EmptyModel` if the table has no key.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		Ok(self.walk(rng, None)?.into_text())
	}

	/// Performs one random walk over the table.
	///
	/// # Parameters
	/// - `rng`: Source of randomness. A seeded `StdRng` makes the walk reproducible.
	/// - `max_words`: Optional cap on the number of emitted words.
	///
	/// # Behavior
	/// - Picks a starting key uniformly over distinct keys, then one of its successors.
	/// - Emits the first token of each key the walk moves to.
	/// - When the next key `(second, successor)` has no chain, emits both of its
	///   tokens and stops. That bigram is always the source's last one.
	///
	/// # Errors
	/// - `MarkovError::EmptyModel` if the table has no key.
	pub fn walk<R: Rng + ?Sized>(&self, rng: &mut R, max_words: Option<usize>) -> Result<Walk> {
		let start = self.table.random_chain(rng).ok_or(MarkovError::EmptyModel)?;
		let max_words = max_words.or(self.fallback_cap);

		let mut current = start.key().clone();
		let mut successor = Self::pick(start, rng)?;
		let mut words = vec![current.first().to_owned()];
		trace!("walk starts at {current}");

		let reached_end = loop {
			if max_words.is_some_and(|max| words.len() >= max) {
				break false;
			}

			let candidate = current.advance(successor);
			match self.table.chain(&candidate) {
				Some(chain) => {
					successor = Self::pick(chain, rng)?;
					words.push(candidate.first().to_owned());
					current = candidate;
				}
				None => {
					trace!("no chain for {candidate}, walk ends after {} words", words.len() + 2);
					let (first, second) = candidate.into_tokens();
					words.push(first);
					words.push(second);
					break true;
				}
			}
		};

		let mut completed = reached_end;
		if let Some(max) = max_words {
			if words.len() > max {
				words.truncate(max);
				completed = false;
			}
		}

		Ok(Walk { words, completed })
	}

	fn pick<'c, R: Rng + ?Sized>(chain: &'c Chain, rng: &mut R) -> Result<&'c Token> {
		chain
			.choose_successor(rng)
			.ok_or_else(|| MarkovError::Internal(format!("no successor recorded for {}", chain.key())))
	}

	/// Generates `input.count()` independent texts from the shared table.
	///
	/// # Behavior
	/// - Work is split over up to `num_cpus::get()` scoped threads.
	/// - Text `i` is generated with a `StdRng` seeded by `seed + i`, so the
	///   output does not depend on how the work was scheduled and text 0
	///   equals `generate` with the same seed.
	/// - Without a seed, a base seed is drawn from the thread RNG.
	///
	/// # Errors
	/// - `MarkovError::EmptyModel` if the table has no key.
	pub fn generate_many(&self, input: &GenerationInput) -> Result<Vec<String>> {
		if self.table.is_empty() {
			return Err(MarkovError::EmptyModel);
		}

		let count = input.count();
		let base_seed = input.seed.unwrap_or_else(|| rand::rng().random());
		let workers = num_cpus::get().clamp(1, count);
		debug!("generating {count} text(s) on {workers} thread(s), base seed {base_seed}");

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for worker in 0..workers {
				let tx = tx.clone();
				scope.spawn(move || {
					for index in (worker..count).step_by(workers) {
						let mut rng = Self::rng_for(base_seed, index);
						let walk = self.walk(&mut rng, input.max_words());
						if tx.send((index, walk)).is_err() {
							return;
						}
					}
				});
			}
		});
		drop(tx);

		let mut walks: Vec<(usize, Result<Walk>)> = rx.iter().collect();
		if walks.len() != count {
			return Err(MarkovError::Internal(format!(
				"expected {count} generated texts, got {}",
				walks.len()
			)));
		}
		walks.sort_by_key(|(index, _)| *index);

		walks.into_iter().map(|(_, walk)| walk.map(Walk::into_text)).collect()
	}

	/// RNG of the `index`-th text of a batch.
	pub fn rng_for(base_seed: u64, index: usize) -> StdRng {
		StdRng::seed_from_u64(base_seed.wrapping_add(index as u64))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::bigram::Bigram;
	use std::collections::HashSet;

	const EXAMPLE: &str = "hi there mary hi there juanita";

	#[test]
	fn empty_table_is_rejected() {
		let table = ChainTable::from_text("only two");
		let generator = Generator::new(&table);
		let err = generator.generate(&mut Generator::rng_for(1, 0)).expect_err("no keys");
		assert!(matches!(err, MarkovError::EmptyModel));
		let err = generator
			.generate_many(&GenerationInput::seeded(1))
			.expect_err("no keys");
		assert!(matches!(err, MarkovError::EmptyModel));
	}

	#[test]
	fn example_walks_end_on_source_tail() {
		let table = ChainTable::from_text(EXAMPLE);
		let generator = Generator::new(&table);
		for seed in 0..200 {
			let walk = generator.walk(&mut Generator::rng_for(seed, 0), None).expect("walk");
			assert!(walk.is_completed());
			assert!(walk.words().ends_with(&["there".to_owned(), "juanita".to_owned()]));
		}
	}

	#[test]
	fn example_walk_from_mary_hi() {
		let table = ChainTable::from_text(EXAMPLE);
		let generator = Generator::new(&table);
		let texts: HashSet<String> = (0..500)
			.map(|seed| generator.generate(&mut Generator::rng_for(seed, 0)).expect("generate"))
			.collect();
		assert!(texts.contains("mary hi there juanita"), "got {texts:?}");
		assert!(texts.contains("there mary hi there juanita"), "got {texts:?}");
	}

	#[test]
	fn shortest_source_emits_itself() {
		let table = ChainTable::from_text("one two three");
		let generator = Generator::new(&table);
		let text = generator.generate(&mut rand::rng()).expect("generate");
		assert_eq!(text, "one two three");
	}

	#[test]
	fn same_seed_same_text() {
		let table = ChainTable::from_text("a b c a b d a b c e f a b d g");
		let generator = Generator::new(&table);
		let first = generator.generate(&mut Generator::rng_for(42, 0)).expect("generate");
		let second = generator.generate(&mut Generator::rng_for(42, 0)).expect("generate");
		assert_eq!(first, second);
	}

	#[test]
	fn word_cap_truncates_walk() {
		let table = ChainTable::from_text("a b a b a b a b c");
		let generator = Generator::new(&table);
		for seed in 0..50 {
			let walk = generator.walk(&mut Generator::rng_for(seed, 0), Some(3)).expect("walk");
			assert!(walk.words().len() <= 3);
			if !walk.is_completed() {
				assert_eq!(walk.words().len(), 3);
			}
		}
	}

	#[test]
	fn cyclic_source_is_capped() {
		let table = ChainTable::from_text("a b a b");
		assert!(table.contains_key(&Bigram::new("a", "b")));
		let generator = Generator::new(&table);
		let walk = generator.walk(&mut Generator::rng_for(3, 0), None).expect("walk");
		assert!(!walk.is_completed());
		assert_eq!(walk.words().len(), CYCLIC_WORD_FACTOR * 4);
	}

	#[test]
	fn batch_matches_single_generation() {
		let table = ChainTable::from_text("the cat sat on the mat and the cat ran off the mat today");
		let generator = Generator::new(&table);
		let mut input = GenerationInput::seeded(9);
		input.set_count(16).expect("count");
		let texts = generator.generate_many(&input).expect("batch");
		assert_eq!(texts.len(), 16);
		for (index, text) in texts.iter().enumerate() {
			let single = generator.generate(&mut Generator::rng_for(9, index)).expect("generate");
			assert_eq!(text, &single);
		}
	}
}
