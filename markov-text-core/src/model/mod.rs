//! Word-level order-2 Markov chain model.
//!
//! This module provides:
//! - Bigram keys and tokens (`Bigram`, `Token`)
//! - The chain table built from a token sequence (`ChainTable`)
//! - Generation parameters (`GenerationInput`)
//! - The random walk generator (`Generator`)

/// Tokens and the ordered token pairs used as table keys.
pub mod bigram;

/// Chain table mapping each bigram to the tokens observed after it.
///
/// Built once from a token sequence and read-only afterwards.
pub mod chain_table;

/// Random walk over a chain table, single or batched.
pub mod generator;

/// Generation parameters: seed, number of texts, word cap.
pub mod generation_input;
