//! Core types for the gambit move generator.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Player`] for the two sides
//! - [`Square`] for board coordinates
//! - [`Piece`] and [`PieceKind`] for piece representation
//! - [`Move`] for (from, to) move pairs

mod mov;
mod piece;
mod player;
mod square;

pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use player::Player;
pub use square::{Square, SquareParseError};
