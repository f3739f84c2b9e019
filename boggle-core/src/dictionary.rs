//! Word validity oracles.
//!
//! A game only scores words that are both real words and traceable on the
//! board. This module answers the first question, either through the
//! Merriam-Webster collegiate dictionary API or through a local word list.

use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::io::{read_file, read_first_line};

#[derive(thiserror::Error, Debug)]
pub enum DictionaryError {
	#[error("io error: {0}")]
	Io(#[from] io::Error),
	#[error("dictionary API key file {0} is empty")]
	MissingKey(String),
	#[error("dictionary request failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("invalid dictionary URL: {0}")]
	InvalidUrl(String),
	#[error("malformed dictionary response: {0}")]
	Decode(#[from] serde_json::Error),
}

/// Decides whether a string is a recognized dictionary word.
pub trait WordOracle {
	/// Returns `Ok(true)` if `word` is a dictionary entry.
	///
	/// # Errors
	/// Returns an error if the lookup itself failed (not when the word is unknown).
	fn is_word(&self, word: &str) -> Result<bool, DictionaryError>;
}

/// Blocking client for the dictionary API.
///
/// Sends `GET {base_url}/{word}?key={api_key}` and inspects the first
/// returned entry. The word is percent-encoded as a single path segment.
///
/// # Notes
/// - Must not be created or used from inside an async runtime
///   (reqwest blocking client).
pub struct DictionaryClient {
	client: Client,
	base_url: Url,
	api_key: String,
}

impl DictionaryClient {
	/// Creates a client with a 5 second timeout.
	///
	/// # Errors
	/// - `InvalidUrl` if `base_url` does not parse or cannot take path segments
	/// - `Http` if the HTTP client cannot be built
	pub fn new(base_url: &str, api_key: &str) -> Result<Self, DictionaryError> {
		let base_url = Url::parse(base_url.trim_end_matches('/'))
			.map_err(|e| DictionaryError::InvalidUrl(format!("{base_url}: {e}")))?;
		if base_url.cannot_be_a_base() {
			return Err(DictionaryError::InvalidUrl(base_url.to_string()));
		}
		let client = Client::builder()
			.timeout(Duration::new(5, 0))
			.build()?;
		Ok(Self {
			client,
			base_url,
			api_key: api_key.to_owned(),
		})
	}

	/// Creates a client reading the API key from the first line of `key_file`.
	///
	/// # Errors
	/// - `Io` if the file cannot be read
	/// - `MissingKey` if the first line is blank
	pub fn from_key_file<P: AsRef<Path>>(base_url: &str, key_file: P) -> Result<Self, DictionaryError> {
		let api_key = read_first_line(&key_file)?;
		if api_key.is_empty() {
			return Err(DictionaryError::MissingKey(key_file.as_ref().display().to_string()));
		}
		Self::new(base_url, &api_key)
	}

	/// Lookup URL for `word`, without the key.
	///
	/// `word` becomes one escaped path segment, so `/`, `?` or `#` in it
	/// cannot alter the request.
	pub fn word_url(&self, word: &str) -> Result<Url, DictionaryError> {
		let mut url = self.base_url.clone();
		url.path_segments_mut()
			.map_err(|_| DictionaryError::InvalidUrl(self.base_url.to_string()))?
			.pop_if_empty()
			.push(word);
		Ok(url)
	}
}

impl WordOracle for DictionaryClient {
	fn is_word(&self, word: &str) -> Result<bool, DictionaryError> {
		debug!("Checking if word ({}) is in dictionary", word);
		let body = self.client
			.get(self.word_url(word)?)
			.query(&[("key", self.api_key.as_str())])
			.send()?
			.error_for_status()?
			.text()?;

		let found = is_entry_for(word, &body)?;
		if !found {
			debug!("Word ({}) not found in dictionary", word);
		}
		Ok(found)
	}
}

/// Interprets a dictionary API response body for `word`.
///
/// The API answers with a JSON array:
/// - entries (objects) when the word is known, the first one carrying
///   `meta.id` such as `"cat:1"`
/// - spelling suggestions (strings) or nothing when it is not
///
/// The word matches when the id, without its `:n` homograph suffix, equals it.
pub fn is_entry_for(word: &str, body: &str) -> Result<bool, DictionaryError> {
	let entries: Vec<Value> = serde_json::from_str(body)?;
	let Some(first) = entries.first() else {
		return Ok(false);
	};

	let id = first
		.get("meta")
		.and_then(|meta| meta.get("id"))
		.and_then(Value::as_str);

	match id {
		Some(id) => {
			let head = id.split(':').next().unwrap_or(id);
			Ok(head.eq_ignore_ascii_case(word))
		}
		None => {
			if first.is_object() {
				warn!("Dictionary entry for ({}) has no meta.id", word);
			}
			Ok(false)
		}
	}
}

/// Offline oracle backed by a set of known words.
///
/// Words are stored lowercase; lookups are case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct WordList {
	words: HashSet<String>,
}

impl WordList {
	/// Builds a word list from any collection of words. Blank entries are skipped.
	pub fn from_words<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let words = words
			.into_iter()
			.map(|w| w.as_ref().trim().to_lowercase())
			.filter(|w| !w.is_empty())
			.collect();
		Self { words }
	}

	/// Loads a newline-separated word file.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, DictionaryError> {
		let list = Self::from_words(read_file(&filepath)?);
		debug!("Loaded {} words from {}", list.len(), filepath.as_ref().display());
		Ok(list)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

impl WordOracle for WordList {
	fn is_word(&self, word: &str) -> Result<bool, DictionaryError> {
		Ok(self.words.contains(&word.to_lowercase()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_entry_hit() {
		let body = r#"[{"meta":{"id":"cat:1","stems":["cat","cats"]},"fl":"noun"},{"meta":{"id":"cat:2"}}]"#;
		assert!(is_entry_for("cat", body).unwrap());
	}

	#[test]
	fn test_entry_without_suffix() {
		assert!(is_entry_for("Men", r#"[{"meta":{"id":"men"}}]"#).unwrap());
	}

	#[test]
	fn test_suggestions_are_a_miss() {
		assert!(!is_entry_for("xqz", r#"["quiz","fez"]"#).unwrap());
	}

	#[test]
	fn test_empty_is_a_miss() {
		assert!(!is_entry_for("xqz", "[]").unwrap());
	}

	#[test]
	fn test_other_headword_is_a_miss() {
		assert!(!is_entry_for("at", r#"[{"meta":{"id":"cat:1"}}]"#).unwrap());
	}

	#[test]
	fn test_malformed_body() {
		assert!(matches!(is_entry_for("cat", "<html>"), Err(DictionaryError::Decode(_))));
	}

	#[test]
	fn test_word_list() {
		let list = WordList::from_words(["Cat", "", "  dog  "]);
		assert_eq!(list.len(), 2);
		assert!(list.is_word("cat").unwrap());
		assert!(list.is_word("DOG").unwrap());
		assert!(!list.is_word("cow").unwrap());
	}

	#[test]
	fn test_word_url_appends_segment() {
		let client = DictionaryClient::new("https://example.com/api/json/", "k").unwrap();
		assert_eq!(client.word_url("cat").unwrap().as_str(), "https://example.com/api/json/cat");
	}

	#[test]
	fn test_word_url_escapes_word() {
		let client = DictionaryClient::new("https://example.com/api/json", "k").unwrap();
		let url = client.word_url("a/b?key=x#frag").unwrap();
		assert_eq!(url.path(), "/api/json/a%2Fb%3Fkey=x%23frag");
		assert_eq!(url.query(), None);
		assert_eq!(url.fragment(), None);
		assert_eq!(url.path_segments().unwrap().count(), 3);
	}

	#[test]
	fn test_invalid_base_url() {
		assert!(matches!(DictionaryClient::new("not a url", "k"), Err(DictionaryError::InvalidUrl(_))));
		assert!(matches!(DictionaryClient::new("mailto:someone@example.com", "k"), Err(DictionaryError::InvalidUrl(_))));
	}

	#[test]
	fn test_missing_key_file() {
		let result = DictionaryClient::from_key_file("http://localhost", "/nonexistent/.dictapikey");
		assert!(matches!(result, Err(DictionaryError::Io(_))));
	}
}
