//! End-to-end checks of board construction, tracing and game scoring
//! through the public API.

use boggle_core::dictionary::WordList;
use boggle_core::model::board::{Board, BoardError, BoardSetup};
use boggle_core::model::game::Game;
use boggle_core::model::position::Position;
use boggle_core::model::search::{can_trace, find_path};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn cats_board() -> Board {
	Board::new(BoardSetup::FromLetters("catsoxxxxxxxxxxx".to_owned())).unwrap()
}

#[test]
fn test_cat_cats_cot() {
	let board = cats_board();
	assert!(can_trace(&board, "cat"));
	assert!(can_trace(&board, "cats"));
	assert!(!can_trace(&board, "cot"));
}

#[test]
fn test_both_occurrences_of_start_letter_are_tried() {
	// first 'a' is boxed in by 'x', second one sits next to 'n'
	let board = Board::from_letters("axxxxxxxxxxxxxan").unwrap();
	assert_eq!(board.positions_of('a').len(), 2);
	assert_eq!(
		find_path(&board, "an"),
		Some(vec![Position::new(3, 2), Position::new(3, 3)])
	);
}

#[test]
fn test_length_ten_on_size_three_is_rejected() {
	let err = Board::with_letters(3, "abcdefghij").unwrap_err();
	assert!(matches!(err, BoardError::LengthMismatch { size: 3, len: 10, expected: 9 }));
	assert!(Board::new(BoardSetup::FromLetters("abcdefghij".to_owned())).is_err());
}

#[test]
fn test_every_random_board_is_square() {
	let mut rng = StdRng::seed_from_u64(2024);
	for size in 2..=8 {
		let board = Board::random_with(size, &mut rng).unwrap();
		let rows: Vec<&[char]> = board.rows().collect();
		assert_eq!(rows.len(), size);
		assert!(rows.iter().all(|row| row.len() == size));
	}
}

#[test]
fn test_every_traced_path_is_valid_on_random_boards() {
	let mut rng = StdRng::seed_from_u64(5);
	for _ in 0..50 {
		let board = Board::random_with(4, &mut rng).unwrap();
		let letters = board.letters();
		// words made of consecutive board cells along the first row are always traceable
		let first_row: String = letters.chars().take(4).collect();
		let path = find_path(&board, &first_row).unwrap();
		assert_eq!(path.len(), 4);
		let mut seen = path.clone();
		seen.sort();
		seen.dedup();
		assert_eq!(seen.len(), path.len());
	}
}

#[test]
fn test_game_round() {
	let oracle = WordList::from_words(["cat", "cats", "cot", "sat"]);
	let mut game = Game::new(cats_board());
	let results = game.play_word_list(["cat", "cats", "cot", "sat", "cat"], &oracle).unwrap();
	assert_eq!(results.len(), 2);
	assert_eq!(game.current_words(), vec!["cat", "cats"]);
	assert_eq!(game.current_score(), 11);
}

#[test]
fn test_recreate_board_from_letters() {
	let board = Board::random(5).unwrap();
	let game = Game::from_setup(BoardSetup::FromLetters(board.letters())).unwrap();
	assert_eq!(game.board(), &board);
}
