use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, 0-indexed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
	pub row: usize,
	pub col: usize,
}

impl Position {
	pub fn new(row: usize, col: usize) -> Self {
		Self { row, col }
	}
}

impl From<(usize, usize)> for Position {
	fn from((row, col): (usize, usize)) -> Self {
		Self { row, col }
	}
}

/// The eight compass directions around a cell.
///
/// `Direction::ALL` fixes the order in which neighbors are explored:
/// orthogonal first (left, right, up, down), then the four diagonals.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
	Left,
	Right,
	Up,
	Down,
	UpLeft,
	UpRight,
	DownLeft,
	DownRight,
}

impl Direction {
	pub const ALL: [Direction; 8] = [
		Direction::Left,
		Direction::Right,
		Direction::Up,
		Direction::Down,
		Direction::UpLeft,
		Direction::UpRight,
		Direction::DownLeft,
		Direction::DownRight,
	];

	/// Row and column deltas of this direction.
	pub fn delta(self) -> (isize, isize) {
		match self {
			Direction::Left => (0, -1),
			Direction::Right => (0, 1),
			Direction::Up => (-1, 0),
			Direction::Down => (1, 0),
			Direction::UpLeft => (-1, -1),
			Direction::UpRight => (-1, 1),
			Direction::DownLeft => (1, -1),
			Direction::DownRight => (1, 1),
		}
	}

	/// Applies this direction to `pos` on a `size`×`size` grid.
	///
	/// Returns `None` when the step would leave the grid.
	pub fn step(self, pos: Position, size: usize) -> Option<Position> {
		let (d_row, d_col) = self.delta();
		let row = pos.row.checked_add_signed(d_row)?;
		let col = pos.col.checked_add_signed(d_col)?;
		if row < size && col < size {
			Some(Position { row, col })
		} else {
			None
		}
	}
}

/// Compass map of the neighbors of `pos`, in `Direction::ALL` order.
///
/// Directions falling outside the grid map to `None`.
pub fn neighbor_map(pos: Position, size: usize) -> [(Direction, Option<Position>); 8] {
	Direction::ALL.map(|direction| (direction, direction.step(pos, size)))
}

/// Valid neighbors of `pos`, in `Direction::ALL` order.
///
/// Corner cells have 3, edge cells 5 and interior cells 8.
pub fn neighbors(pos: Position, size: usize) -> impl Iterator<Item = Position> {
	Direction::ALL.into_iter().filter_map(move |direction| direction.step(pos, size))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn expected_count(pos: Position, size: usize) -> usize {
		let edge = size - 1;
		let on_row_edge = pos.row == 0 || pos.row == edge;
		let on_col_edge = pos.col == 0 || pos.col == edge;
		match (on_row_edge, on_col_edge) {
			(true, true) => 3,
			(true, false) | (false, true) => 5,
			(false, false) => 8,
		}
	}

	#[test]
	fn test_neighbor_counts() {
		for size in 2..=6 {
			for row in 0..size {
				for col in 0..size {
					let pos = Position::new(row, col);
					assert_eq!(
						neighbors(pos, size).count(),
						expected_count(pos, size),
						"size={size} pos={pos:?}"
					);
				}
			}
		}
	}

	#[test]
	fn test_corner_map() {
		let map = neighbor_map(Position::new(0, 0), 4);
		assert_eq!(map[0], (Direction::Left, None));
		assert_eq!(map[1], (Direction::Right, Some(Position::new(0, 1))));
		assert_eq!(map[2], (Direction::Up, None));
		assert_eq!(map[3], (Direction::Down, Some(Position::new(1, 0))));
		assert_eq!(map[7], (Direction::DownRight, Some(Position::new(1, 1))));
	}

	#[test]
	fn test_neighbors_are_adjacent_and_distinct() {
		let pos = Position::new(2, 2);
		let found: Vec<Position> = neighbors(pos, 5).collect();
		assert_eq!(found.len(), 8);
		for n in &found {
			assert!(n.row.abs_diff(pos.row) <= 1 && n.col.abs_diff(pos.col) <= 1);
			assert_ne!(*n, pos);
		}
		let mut unique = found.clone();
		unique.sort();
		unique.dedup();
		assert_eq!(unique.len(), 8);
	}

	#[test]
	fn test_compass_order() {
		let found: Vec<Position> = neighbors(Position::new(1, 1), 3).collect();
		assert_eq!(found[0], Position::new(1, 0));
		assert_eq!(found[1], Position::new(1, 2));
		assert_eq!(found[2], Position::new(0, 1));
		assert_eq!(found[3], Position::new(2, 1));
		assert_eq!(found[4], Position::new(0, 0));
	}
}
