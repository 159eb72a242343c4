//! Error type shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = MarkovError> = std::result::Result<T, E>;

/// Failures raised while loading source text, configuring or running a generation.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// Generation was requested on a chain table without any key.
	///
	/// Happens when the source text had fewer than three tokens.
	#[error("cannot generate text from an empty model (the source needs at least 3 words)")]
	EmptyModel,
	/// The source text could not be read.
	#[error("io error while reading {path:?}: {source}")]
	Io {
		/// Underlying IO error.
		source: std::io::Error,
		/// Path of the source, if known.
		path: Option<PathBuf>,
	},
	/// A generation parameter was rejected.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
	/// A chain table invariant did not hold.
	#[error("internal error: {0}")]
	Internal(String),
}

impl MarkovError {
	/// Wraps an IO error with the path it relates to.
	pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
		Self::Io { source, path }
	}
}
