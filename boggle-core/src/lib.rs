//! Boggle board generation and word tracing library.
//!
//! This crate provides the pieces of a Boggle-style word game:
//! - A square letter board, random (frequency weighted) or from given letters
//! - Path search deciding whether a word can be traced on adjacent cells
//! - Word scoring and a game session tracking scored words
//! - Word oracles (remote dictionary API or offline word list)
//!
//! The board and the search are pure; only the game session holds mutable state.

/// Board, search, scoring and game session.
pub mod model;

/// Word validity oracles.
pub mod dictionary;

/// Default settings and environment overrides.
pub mod config;

/// I/O utilities (key file and word list loading).
///
/// Not exposed
pub(crate) mod io;
