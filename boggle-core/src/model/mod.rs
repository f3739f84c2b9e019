//! Top-level module for the Boggle game model.
//!
//! This module provides:
//! - The letter frequency table used for random boards (`letters`)
//! - Grid coordinates and compass neighbors (`Position`, `Direction`)
//! - The immutable letter board (`Board`)
//! - Path search over adjacent cells (`search`)
//! - Word scoring (`score`)
//! - A game session tracking scored words (`Game`)

/// Letter frequency table and weighted letter sampling.
///
/// Not exposed directly; boards draw from it.
mod letters;

/// Grid coordinates and the eight compass directions.
pub mod position;

/// Square letter board.
///
/// Handles validation of explicit letters, weighted random generation,
/// neighbor and occurrence queries.
pub mod board;

/// Depth-first path search deciding whether a word can be traced on a board.
pub mod search;

/// Word length to point value lookup.
pub mod score;

/// Game session: oracle check, board trace and scored-word bookkeeping.
pub mod game;
