use rand::Rng;

/// Relative frequency (percent) of each letter in English words.
///
/// Random boards are drawn from this distribution rather than uniformly,
/// so common letters show up more often and boards stay playable.
pub(crate) static LETTER_FREQUENCY: [(char, f32); 26] = [
	('e', 12.02),
	('t', 9.10),
	('a', 8.12),
	('o', 7.68),
	('i', 7.31),
	('n', 6.95),
	('s', 6.28),
	('r', 6.02),
	('h', 5.92),
	('d', 4.32),
	('l', 3.98),
	('u', 2.88),
	('c', 2.71),
	('m', 2.61),
	('f', 2.30),
	('y', 2.11),
	('w', 2.09),
	('g', 2.03),
	('p', 1.82),
	('b', 1.49),
	('v', 1.11),
	('k', 0.69),
	('x', 0.17),
	('q', 0.11),
	('j', 0.10),
	('z', 0.07),
];

/// Integer weight of a table entry (hundredths of a percent).
fn bucket(weight: f32) -> u32 {
	(weight * 100.0).round() as u32
}

/// Draws one letter using weighted random sampling.
///
/// The probability of selecting a letter is proportional to its
/// frequency in `LETTER_FREQUENCY`.
///
/// This method performs:
/// - an O(26) scan over the table
/// - a cumulative subtraction to select a bucket
pub(crate) fn sample_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
	let total: u32 = LETTER_FREQUENCY.iter().map(|(_, weight)| bucket(*weight)).sum();
	let mut r = rng.random_range(0..total);

	for (letter, weight) in &LETTER_FREQUENCY {
		let occurrence = bucket(*weight);
		if r < occurrence {
			return *letter;
		}
		r -= occurrence;
	}

	// Unreachable: r < total
	LETTER_FREQUENCY[0].0
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_table_covers_alphabet() {
		let mut letters: Vec<char> = LETTER_FREQUENCY.iter().map(|(c, _)| *c).collect();
		letters.sort_unstable();
		let alphabet: Vec<char> = ('a'..='z').collect();
		assert_eq!(letters, alphabet);
	}

	#[test]
	fn test_weights_sum_to_about_100() {
		let sum: f32 = LETTER_FREQUENCY.iter().map(|(_, w)| w).sum();
		assert!((sum - 100.0).abs() < 0.5, "sum was {sum}");
	}

	#[test]
	fn test_common_letters_drawn_more_often() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut e_count = 0;
		let mut z_count = 0;
		for _ in 0..20_000 {
			match sample_letter(&mut rng) {
				'e' => e_count += 1,
				'z' => z_count += 1,
				_ => (),
			}
		}
		assert!(e_count > z_count * 10, "e={e_count} z={z_count}");
	}
}
