/// Points for words of length 2, 3, 4 and 5.
const WORD_LENGTH_SCORE: [(usize, u32); 4] = [(2, 2), (3, 5), (4, 6), (5, 8)];

/// Points for any word of 6 letters or more.
pub const MAX_SCORE: u32 = 10;

/// Point value of a word of `length` letters.
///
/// Lengths below 2 are never playable and score 0.
pub fn score_for_length(length: usize) -> u32 {
	if length < 2 {
		return 0;
	}
	WORD_LENGTH_SCORE
		.iter()
		.find(|(len, _)| *len == length)
		.map_or(MAX_SCORE, |(_, score)| *score)
}

/// Point value of `word`, counted in characters.
pub fn score_word(word: &str) -> u32 {
	score_for_length(word.chars().count())
}
