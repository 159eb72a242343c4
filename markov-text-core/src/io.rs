use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{MarkovError, Result};

/// Reads a source text file and returns its whole content.
///
/// - Reads the entire file into memory
/// - Fails with `MarkovError::Io` (carrying the path) if the file cannot be
///   opened or is not valid UTF-8
pub fn read_source<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|err| MarkovError::io(err, Some(path.to_path_buf())))?;
	debug!("read {} bytes from {}", contents.len(), path.display());
	Ok(contents)
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn reads_whole_file() {
		let dir = tempdir().expect("create tempdir");
		let path = dir.path().join("source.txt");
		std::fs::write(&path, "one two\nthree").expect("write source");
		let text = read_source(&path).expect("source should be readable");
		assert_eq!(text, "one two\nthree");
	}

	#[test]
	fn missing_file_reports_path() {
		let dir = tempdir().expect("create tempdir");
		let path = dir.path().join("missing.txt");
		let err = read_source(&path).expect_err("missing file must fail");
		assert!(matches!(err, MarkovError::Io { path: Some(p), .. } if p == path));
	}
}
