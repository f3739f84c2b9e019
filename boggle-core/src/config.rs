use std::path::PathBuf;

/// Default board side length.
pub const DEFAULT_SIZE: usize = 5;

/// Largest accepted board side length.
pub const MAX_SIZE: usize = 64;

/// Merriam-Webster collegiate dictionary endpoint. The word is appended to the path.
pub const DICT_API_URL: &str = "https://www.dictionaryapi.com/api/v3/references/collegiate/json";

/// File holding the dictionary API key on its first line.
pub const DICT_API_KEY_FILE: &str = ".dictapikey";

/// Server bind address.
pub const DEFAULT_BIND: (&str, u16) = ("127.0.0.1", 5000);

/// Settings shared by the binaries.
///
/// Built from defaults, then overridden by environment variables:
/// - `BOGGLE_SIZE`: board size
/// - `BOGGLE_KEY_FILE`: dictionary API key file
/// - `BOGGLE_WORD_LIST`: offline word list (takes precedence over the API)
/// - `BOGGLE_BIND_HOST` / `BOGGLE_BIND_PORT`: server address
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
	pub size: usize,
	pub api_url: String,
	pub key_file: PathBuf,
	pub word_list: Option<PathBuf>,
	pub bind_host: String,
	pub bind_port: u16,
}

impl Default for GameConfig {
	fn default() -> Self {
		Self {
			size: DEFAULT_SIZE,
			api_url: DICT_API_URL.to_owned(),
			key_file: PathBuf::from(DICT_API_KEY_FILE),
			word_list: None,
			bind_host: DEFAULT_BIND.0.to_owned(),
			bind_port: DEFAULT_BIND.1,
		}
	}
}

impl GameConfig {
	/// Defaults with environment overrides applied.
	///
	/// Unparsable numeric values are ignored and the default is kept.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
		let mut config = Self::default();
		if let Some(size) = lookup("BOGGLE_SIZE").and_then(|s| s.parse().ok()) {
			config.size = size;
		}
		if let Some(path) = lookup("BOGGLE_KEY_FILE") {
			config.key_file = PathBuf::from(path);
		}
		if let Some(path) = lookup("BOGGLE_WORD_LIST").filter(|s| !s.trim().is_empty()) {
			config.word_list = Some(PathBuf::from(path));
		}
		if let Some(host) = lookup("BOGGLE_BIND_HOST") {
			config.bind_host = host;
		}
		if let Some(port) = lookup("BOGGLE_BIND_PORT").and_then(|s| s.parse().ok()) {
			config.bind_port = port;
		}
		config
	}
}
