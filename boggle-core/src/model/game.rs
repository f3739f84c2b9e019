use std::collections::BTreeMap;

use log::{debug, info};

use super::board::{Board, BoardError, BoardSetup};
use super::position::Position;
use super::score::score_word;
use super::search::find_path;
use crate::dictionary::{DictionaryError, WordOracle};

/// Outcome of a playable word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Play {
	pub word: String,
	pub score: u32,
	/// Cells spelling the word, one per letter.
	pub path: Vec<Position>,
}

/// A single Boggle game played on one board.
///
/// # Responsibilities
/// - Reject malformed words before any lookup
/// - Combine the word oracle with the board trace to decide playability
/// - Record each playable word once with its score
///
/// # Invariants
/// - The board never changes during a game
/// - A word appears at most once in `scored_words`; entries are never removed
/// - `paths` holds the traced path of every scored word
#[derive(Clone, Debug)]
pub struct Game {
	board: Board,
	scored_words: BTreeMap<String, u32>,
	paths: BTreeMap<String, Vec<Position>>,
}

impl Game {
	/// Starts a game on an existing board.
	pub fn new(board: Board) -> Self {
		Self { board, scored_words: BTreeMap::new(), paths: BTreeMap::new() }
	}

	/// Starts a game on a new board built from `setup`.
	///
	/// # Errors
	/// Returns a `BoardError` if the setup is invalid.
	pub fn from_setup(setup: BoardSetup) -> Result<Self, BoardError> {
		Ok(Self::new(Board::new(setup)?))
	}

	pub fn board(&self) -> &Board {
		&self.board
	}

	/// Plays a word.
	///
	/// Same as [`Game::play`], without the traced path.
	///
	/// # Returns
	/// - `Ok(Some((word, score)))` if the word is playable
	/// - `Ok(None)` if it is not
	///
	/// # Errors
	/// Propagates oracle failures (network, decoding).
	pub fn play_word<O: WordOracle + ?Sized>(&mut self, word: &str, oracle: &O) -> Result<Option<(String, u32)>, DictionaryError> {
		Ok(self.play(word, oracle)?.map(|play| (play.word, play.score)))
	}

	/// Plays a word and reports where it lies on the board.
	///
	/// # Behavior
	/// - Trims and lowercases the input.
	/// - Words shorter than 2 letters or with non-letters are not playable
	///   and the oracle is not consulted.
	/// - Asks the oracle, then traces the word on the board (once).
	/// - A playable word is recorded with its score and path; playing it
	///   again returns the same entry and changes nothing.
	///
	/// # Errors
	/// Propagates oracle failures (network, decoding).
	pub fn play<O: WordOracle + ?Sized>(&mut self, word: &str, oracle: &O) -> Result<Option<Play>, DictionaryError> {
		let word = word.trim().to_lowercase();
		debug!("Checking if word is playable: [{}]", word);

		if word.chars().count() < 2 || !word.chars().all(|c| c.is_ascii_alphabetic()) {
			debug!("\"{}\" is not a valid Boggle word", word);
			return Ok(None);
		}

		if let (Some(score), Some(path)) = (self.scored_words.get(&word), self.paths.get(&word)) {
			return Ok(Some(Play { score: *score, path: path.clone(), word }));
		}

		if !oracle.is_word(&word)? {
			debug!("\"{}\" is not in the dictionary", word);
			return Ok(None);
		}

		let Some(path) = find_path(&self.board, &word) else {
			debug!("\"{}\" is not playable on this board", word);
			return Ok(None);
		};

		let score = score_word(&word);
		info!("Scored \"{}\" for {} points", word, score);
		self.scored_words.insert(word.clone(), score);
		self.paths.insert(word.clone(), path.clone());
		Ok(Some(Play { word, score, path }))
	}

	/// Plays several words, returning the playable ones with their score.
	///
	/// # Errors
	/// Stops at the first oracle failure.
	pub fn play_word_list<O, I, S>(&mut self, words: I, oracle: &O) -> Result<BTreeMap<String, u32>, DictionaryError>
	where
		O: WordOracle + ?Sized,
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut results = BTreeMap::new();
		for word in words {
			if let Some((word, score)) = self.play_word(word.as_ref(), oracle)? {
				results.insert(word, score);
			}
		}
		Ok(results)
	}

	/// Scored words in alphabetical order.
	pub fn current_words(&self) -> Vec<&str> {
		self.scored_words.keys().map(String::as_str).collect()
	}

	/// Total of all scored words.
	pub fn current_score(&self) -> u32 {
		self.scored_words.values().sum()
	}

	pub fn scored_words(&self) -> &BTreeMap<String, u32> {
		&self.scored_words
	}
}
