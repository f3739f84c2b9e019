use std::fmt;

use log::debug;
use rand::Rng;

use super::letters::sample_letter;
use super::position::{self, Direction, Position};
use crate::config::{DEFAULT_SIZE, MAX_SIZE};

/// Errors raised while building a board.
///
/// A board is never partially built: any of these aborts construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
	#[error("invalid board size: {0} (must be between 2 and {max})", max = MAX_SIZE)]
	InvalidSize(usize),
	#[error("invalid input character list: {0:?} (letters a-z only)")]
	NonAlphabetic(String),
	#[error("input character list has length {len}, board {size}x{size} needs {expected}")]
	LengthMismatch { size: usize, len: usize, expected: usize },
	#[error("input character list has length {0}, which is not a square of an integer between 2 and {max}", max = MAX_SIZE)]
	NotSquare(usize),
}

/// How a board is populated.
///
/// # Variants
/// - `FromLetters(String)`: use the given letters, row-major. The side length
///   is derived from the letter count, which must be a perfect square.
/// - `FromRandom(usize)`: draw `size * size` letters by weighted random sampling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardSetup {
	FromLetters(String),
	FromRandom(usize),
}

impl Default for BoardSetup {
	fn default() -> Self {
		BoardSetup::FromRandom(DEFAULT_SIZE)
	}
}

/// Square letter board of a Boggle game.
///
/// # Responsibilities
/// - Validate explicit letters or draw random ones
/// - Answer letter, neighbor and occurrence queries by position
/// - Expose the full matrix for display
///
/// # Invariants
/// - `2 <= size <= MAX_SIZE`
/// - `cells.len() == size * size`, row-major
/// - Every cell holds one lowercase ASCII letter
/// - Never modified after construction
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
	size: usize,
	cells: Vec<char>,
}

/// Number of cells of a `size`×`size` board.
///
/// # Errors
/// Returns `InvalidSize` if `size` is outside `2..=MAX_SIZE`.
fn cell_count(size: usize) -> Result<usize, BoardError> {
	if !(2..=MAX_SIZE).contains(&size) {
		return Err(BoardError::InvalidSize(size));
	}
	size.checked_mul(size).ok_or(BoardError::InvalidSize(size))
}

impl Board {
	/// Builds a board from a setup variant.
	///
	/// # Errors
	/// Returns a `BoardError` if the letters or the size are invalid.
	pub fn new(setup: BoardSetup) -> Result<Self, BoardError> {
		match setup {
			BoardSetup::FromLetters(letters) => Self::from_letters(&letters),
			BoardSetup::FromRandom(size) => Self::random(size),
		}
	}

	/// Builds a board from letters only, deriving the size.
	///
	/// # Errors
	/// - `NotSquare` if the letter count is not the square of a size in `2..=MAX_SIZE`
	/// - `NonAlphabetic` if any character is not an ASCII letter
	pub fn from_letters(letters: &str) -> Result<Self, BoardError> {
		let len = letters.chars().count();
		let size = (len as f64).sqrt().round() as usize;
		if size < 2 || size > MAX_SIZE || size * size != len {
			return Err(BoardError::NotSquare(len));
		}
		Self::with_letters(size, letters)
	}

	/// Builds a `size`×`size` board from explicit letters.
	///
	/// Letters are stored lowercase.
	///
	/// # Errors
	/// - `InvalidSize` if `size` is outside `2..=MAX_SIZE`
	/// - `NonAlphabetic` if any character is not an ASCII letter
	/// - `LengthMismatch` if `letters` does not hold exactly `size * size` characters
	pub fn with_letters(size: usize, letters: &str) -> Result<Self, BoardError> {
		let expected = cell_count(size)?;
		if !letters.chars().all(|c| c.is_ascii_alphabetic()) {
			return Err(BoardError::NonAlphabetic(letters.to_owned()));
		}
		let len = letters.chars().count();
		if len != expected {
			return Err(BoardError::LengthMismatch { size, len, expected });
		}

		let cells = letters.chars().map(|c| c.to_ascii_lowercase()).collect();
		Ok(Self { size, cells })
	}

	/// Builds a random `size`×`size` board using the thread RNG.
	///
	/// # Errors
	/// Returns `InvalidSize` if `size` is outside `2..=MAX_SIZE`.
	pub fn random(size: usize) -> Result<Self, BoardError> {
		Self::random_with(size, &mut rand::rng())
	}

	/// Builds a random board drawing from the given RNG.
	///
	/// Each cell is drawn independently (with replacement) from the
	/// letter frequency table. A seeded RNG gives a reproducible board.
	///
	/// # Errors
	/// Returns `InvalidSize` if `size` is outside `2..=MAX_SIZE`.
	pub fn random_with<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, BoardError> {
		let count = cell_count(size)?;
		let cells: Vec<char> = (0..count).map(|_| sample_letter(&mut *rng)).collect();
		debug!("Random board {}x{}: {}", size, size, cells.iter().collect::<String>());
		Ok(Self { size, cells })
	}

	/// Side length of the board.
	pub fn size(&self) -> usize {
		self.size
	}

	/// All letters in row-major order.
	///
	/// Feeding this back into `BoardSetup::FromLetters` recreates the board.
	pub fn letters(&self) -> String {
		self.cells.iter().collect()
	}

	/// Rows of the board, top to bottom.
	pub fn rows(&self) -> impl Iterator<Item = &[char]> {
		self.cells.chunks(self.size)
	}

	/// Returns `true` if `pos` lies on the board.
	pub fn contains(&self, pos: Position) -> bool {
		pos.row < self.size && pos.col < self.size
	}

	/// Letter at `pos`.
	///
	/// # Panics
	/// Panics if `pos` is outside the board. Positions handed to a board
	/// must come from that board.
	pub fn letter_at(&self, pos: Position) -> char {
		assert!(self.contains(pos), "position {:?} outside {}x{} board", pos, self.size, self.size);
		self.cells[pos.row * self.size + pos.col]
	}

	/// Compass map of the neighbors of `pos` (`None` past the edges).
	pub fn neighbor_map(&self, pos: Position) -> [(Direction, Option<Position>); 8] {
		position::neighbor_map(pos, self.size)
	}

	/// Valid neighbors of `pos` with their letters, in compass order.
	pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = (Position, char)> + '_ {
		position::neighbors(pos, self.size).map(move |n| (n, self.letter_at(n)))
	}

	/// Every position holding `letter`, in row-major order.
	///
	/// Matching is case-insensitive. Returns an empty list if the letter
	/// is not on the board.
	pub fn positions_of(&self, letter: char) -> Vec<Position> {
		let letter = letter.to_ascii_lowercase();
		self.cells
			.iter()
			.enumerate()
			.filter(|(_, c)| **c == letter)
			.map(|(i, _)| Position::new(i / self.size, i % self.size))
			.collect()
	}
}

impl fmt::Display for Board {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let border = "-".repeat(3 * self.size + 4);
		writeln!(f, "{}", border)?;
		for row in self.rows() {
			let row_chars: String = row.iter().map(|c| format!(" {} ", c)).collect();
			writeln!(f, "| {} |", row_chars)?;
		}
		write!(f, "{}", border)
	}
}
