use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use boggle_core::config::GameConfig;
use boggle_core::dictionary::{DictionaryClient, WordList, WordOracle};
use boggle_core::model::board::BoardSetup;
use boggle_core::model::game::Game;

/// Interactive Boggle game in the terminal.
///
/// Settings come from `BOGGLE_*` environment variables, flags override them.
#[derive(Parser, Debug)]
#[command(name = "boggle", version, about = "Play Boggle in the terminal")]
struct Cli {
	/// Board side length (random board)
	#[arg(long, value_name = "N")]
	size: Option<usize>,
	/// Explicit board letters, row-major (length must be a perfect square)
	#[arg(long, value_name = "LETTERS", conflicts_with = "size")]
	letters: Option<String>,
	/// File holding the dictionary API key on its first line
	#[arg(long, value_name = "FILE")]
	key_file: Option<PathBuf>,
	/// Offline word list (one word per line) used instead of the dictionary API
	#[arg(long, value_name = "FILE")]
	word_list: Option<PathBuf>,
	/// Dictionary API base URL
	#[arg(long, value_name = "URL")]
	api_url: Option<String>,
}

impl Cli {
	/// Applies flags on top of the environment configuration.
	fn config(&self) -> GameConfig {
		let mut config = GameConfig::from_env();
		if let Some(size) = self.size {
			config.size = size;
		}
		if let Some(key_file) = &self.key_file {
			config.key_file = key_file.clone();
		}
		if let Some(word_list) = &self.word_list {
			config.word_list = Some(word_list.clone());
		}
		if let Some(api_url) = &self.api_url {
			config.api_url = api_url.clone();
		}
		config
	}

	fn setup(&self, config: &GameConfig) -> BoardSetup {
		match &self.letters {
			Some(letters) => BoardSetup::FromLetters(letters.trim().to_owned()),
			None => BoardSetup::FromRandom(config.size),
		}
	}
}

/// Word list if configured, dictionary API otherwise.
fn make_oracle(config: &GameConfig) -> Result<Box<dyn WordOracle>, Box<dyn std::error::Error>> {
	match &config.word_list {
		Some(path) => {
			info!("Using word list {}", path.display());
			Ok(Box::new(WordList::from_file(path)?))
		}
		None => {
			info!("Using dictionary API, key from {}", config.key_file.display());
			Ok(Box::new(DictionaryClient::from_key_file(&config.api_url, &config.key_file)?))
		}
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	let cli = Cli::parse();
	let config = cli.config();
	let mut game = Game::from_setup(cli.setup(&config))?;
	let oracle = make_oracle(&config)?;

	let stdin = io::stdin();
	let mut stdout = io::stdout();
	println!("{}", game.board());

	loop {
		println!("Enter a playable word...  Enter QUIT to stop");
		stdout.flush()?;

		let mut line = String::new();
		// EOF ends the game like QUIT
		if stdin.lock().read_line(&mut line)? == 0 {
			break;
		}
		let word = line.trim();
		if word == "QUIT" {
			break;
		}

		if game.play_word(word, oracle.as_ref())?.is_none() {
			println!("\"{}\" is not a playable word", word);
		}
		println!("CURRENT SCORE: {}", game.current_score());
		println!("SCORED-WORDS:");
		for (word, score) in game.scored_words() {
			println!("  {}: {}", word, score);
		}
		println!("{}", game.board());
	}

	println!("\nThanks for playing!");
	Ok(())
}
