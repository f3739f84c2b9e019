use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Reads the first line of a file, trimmed.
///
/// Used for credential files holding a single key.
/// An empty file yields an empty string.
pub(crate) fn read_first_line<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut reader = BufReader::new(File::open(filename)?);
	let mut line = String::new();
	reader.read_line(&mut line)?;
	Ok(line.trim().to_owned())
}
