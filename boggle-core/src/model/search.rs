use log::debug;

use super::board::Board;
use super::position::Position;

/// Returns `true` if `word` can be traced on `board`.
///
/// See [`find_path`] for the rules of a trace.
pub fn can_trace(board: &Board, word: &str) -> bool {
	find_path(board, word).is_some()
}

/// Finds a path of adjacent cells spelling `word`.
///
/// # Behavior
/// - Tries every occurrence of the first letter as a start, in row-major order.
/// - From each cell, explores neighbors in compass order and backtracks
///   through every neighbor holding the next letter, not only the first one.
/// - A cell is used at most once per path.
///
/// # Returns
/// - `Some(path)`: one position per letter, each adjacent to the previous one.
/// - `None`: the word is empty, its first letter is absent, or no path exists.
///
/// # Notes
/// - Matching is case-insensitive (board letters are lowercase).
/// - Does not check dictionary validity or minimum length.
pub fn find_path(board: &Board, word: &str) -> Option<Vec<Position>> {
	let letters: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
	let (&first, rest) = letters.split_first()?;

	// A letter may appear more than once: every occurrence is a candidate start
	let starts = board.positions_of(first);
	if starts.is_empty() {
		debug!("First letter '{}' of \"{}\" is not on the board", first, word);
		return None;
	}
	debug!("Start positions for \"{}\": {:?}", word, starts);

	for start in starts {
		let mut path = Vec::with_capacity(letters.len());
		path.push(start);
		if extend_path(board, start, rest, &mut path) {
			debug!("\"{}\" traced along {:?}", word, path);
			return Some(path);
		}
	}

	debug!("\"{}\" cannot be traced on this board", word);
	None
}

/// Depth-first extension of `path` from `current` with the `remaining` letters.
///
/// On success `path` holds the full trace; on failure it is left as it was.
fn extend_path(board: &Board, current: Position, remaining: &[char], path: &mut Vec<Position>) -> bool {
	let Some((&next, rest)) = remaining.split_first() else {
		return true;
	};

	for (neighbor, letter) in board.neighbors(current) {
		if letter != next || path.contains(&neighbor) {
			continue;
		}
		path.push(neighbor);
		if extend_path(board, neighbor, rest, path) {
			return true;
		}
		path.pop();
	}

	false
}
