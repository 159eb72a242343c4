//! Word-level Markov chain text generation library.
//!
//! This crate provides:
//! - Whitespace tokenization of source text
//! - Construction of an order-2 chain table (bigram → observed successors)
//! - Random walks over that table producing new text, one or many at a time
//! - Loading of the source text from disk
//!
//! # Example
//! ```
//! use markov_text_core::model::chain_table::ChainTable;
//! use markov_text_core::model::generator::Generator;
//! use rand::SeedableRng;
//!
//! let table = ChainTable::from_text("hi there mary hi there juanita");
//! let generator = Generator::new(&table);
//! let text = generator
//! 	.generate(&mut rand::rngs::StdRng::seed_from_u64(7))
//! 	.expect("table is not empty");
//! assert!(text.ends_with("there juanita"));
//! ```

/// Chain table, generation parameters and the generator.
pub mod model;

/// Error type and result alias.
pub mod error;

/// Source text loading.
pub mod io;

/// Tokenization of source text.
pub mod text;

pub use error::{MarkovError, Result};
pub use model::bigram::{Bigram, Token};
pub use model::chain_table::ChainTable;
pub use model::generation_input::GenerationInput;
pub use model::generator::{Generator, Walk};
