use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, middleware, put, web, App, HttpResponse, HttpServer, Responder};
use log::info;
use serde::{Deserialize, Serialize};

use boggle_core::config::GameConfig;
use boggle_core::dictionary::WordList;
use boggle_core::model::board::{Board, BoardSetup};
use boggle_core::model::game::Game;
use boggle_core::model::position::Position;

/// Query parameters of `/v1/new_game`
#[derive(Deserialize)]
struct NewGameParams {
	size: Option<usize>,
	letters: Option<String>,
}

/// Query parameters of `/v1/play`
#[derive(Deserialize)]
struct PlayParams {
	word: Option<String>,
}

#[derive(Serialize)]
struct BoardBody {
	size: usize,
	letters: String,
	rows: Vec<Vec<char>>,
}

impl From<&Board> for BoardBody {
	fn from(board: &Board) -> Self {
		Self {
			size: board.size(),
			letters: board.letters(),
			rows: board.rows().map(|row| row.to_vec()).collect(),
		}
	}
}

#[derive(Serialize)]
struct PlayBody {
	word: String,
	playable: bool,
	score: Option<u32>,
	path: Option<Vec<Position>>,
}

#[derive(Serialize)]
struct ScoreBody<'a> {
	score: u32,
	words: &'a std::collections::BTreeMap<String, u32>,
}

/// One game shared by every client; the mutex serializes plays.
struct SharedData {
	game: Game,
	words: WordList,
	default_size: usize,
}

impl NewGameParams {
	/// Letters take precedence over size; neither means a random board of the default size.
	fn setup(&self, default_size: usize) -> BoardSetup {
		match (&self.letters, self.size) {
			(Some(letters), _) => BoardSetup::FromLetters(letters.trim().to_owned()),
			(None, Some(size)) => BoardSetup::FromRandom(size),
			(None, None) => BoardSetup::FromRandom(default_size),
		}
	}
}

#[get("/v1/board")]
async fn get_board(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Game lock failed"),
	};
	HttpResponse::Ok().json(BoardBody::from(shared_data.game.board()))
}

/// HTTP PUT endpoint `/v1/new_game`
///
/// Replaces the current game with a new board. The previous scores are dropped.
#[put("/v1/new_game")]
async fn put_new_game(data: web::Data<Mutex<SharedData>>, query: web::Query<NewGameParams>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Game lock failed"),
	};

	let setup = query.setup(shared_data.default_size);
	match Game::from_setup(setup) {
		Ok(game) => {
			info!("New game on board {}", game.board().letters());
			shared_data.game = game;
			HttpResponse::Ok().json(BoardBody::from(shared_data.game.board()))
		}
		Err(e) => HttpResponse::BadRequest().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/play`
///
/// Plays a word against the shared game and reports its score and path.
#[get("/v1/play")]
async fn get_play(data: web::Data<Mutex<SharedData>>, query: web::Query<PlayParams>) -> impl Responder {
	let word = match &query.word {
		Some(s) if !s.trim().is_empty() => s.trim().to_lowercase(),
		_ => return HttpResponse::BadRequest().body("Missing or empty word"),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Game lock failed"),
	};
	let SharedData { game, words, .. } = &mut *shared_data;

	match game.play(&word, &*words) {
		Ok(Some(play)) => HttpResponse::Ok().json(PlayBody {
			word: play.word,
			playable: true,
			score: Some(play.score),
			path: Some(play.path),
		}),
		Ok(None) => HttpResponse::Ok().json(PlayBody { word, playable: false, score: None, path: None }),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

#[get("/v1/score")]
async fn get_score(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Game lock failed"),
	};
	HttpResponse::Ok().json(ScoreBody {
		score: shared_data.game.current_score(),
		words: shared_data.game.scored_words(),
	})
}

/// Main entry point for the server.
///
/// Loads the word list, starts a random game, wraps it in a `Mutex`
/// and starts an Actix-web HTTP server.
///
/// # Notes
/// - The word list is required (`BOGGLE_WORD_LIST`): the blocking dictionary
///   API client cannot run on the server's async workers.
/// - The bind address comes from `BOGGLE_BIND_HOST` / `BOGGLE_BIND_PORT`
///   (default 127.0.0.1:5000).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = GameConfig::from_env();
	let word_list_path = config.word_list.clone().ok_or_else(|| {
		std::io::Error::new(std::io::ErrorKind::InvalidInput, "BOGGLE_WORD_LIST must point to a word list")
	})?;
	let words = WordList::from_file(&word_list_path).map_err(std::io::Error::other)?;
	let game = Game::from_setup(BoardSetup::FromRandom(config.size)).map_err(std::io::Error::other)?;
	info!("Loaded {} words, board {}", words.len(), game.board().letters());

	let shared_data = SharedData {
		game,
		words,
		default_size: config.size,
	};
	let shared_game = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET", "PUT"]))
			.app_data(shared_game.clone())
			.service(get_board)
			.service(put_new_game)
			.service(get_play)
			.service(get_score)
	})
		.bind((config.bind_host.as_str(), config.bind_port))?
		.run()
		.await
}
