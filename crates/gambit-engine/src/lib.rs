//! Board state and move generation for an 8x8 chess board.
//!
//! This crate provides:
//! - [`Board`] - mailbox piece placement with handle-based piece identity
//! - [`Game`] - a board plus the last-move record needed for en passant
//! - Per-piece destination enumeration and the [`is_square_attacked`]
//!   primitive used for castling legality
//!
//! # Architecture
//!
//! The board is an 8x8 grid of optional piece handles backed by an arena that
//! maps each [`PieceId`] to its piece value and current square, so locating a
//! piece by identity is a constant-time lookup rather than a board scan.
//!
//! Move enumeration is deliberately permissive: it ignores whether a move
//! would leave the mover's own king in check. The only legality scanning
//! performed is the attacked-square check gating castling.
//!
//! # Example
//!
//! ```
//! use gambit_core::{Piece, Player, Square};
//! use gambit_engine::Game;
//!
//! let mut game = Game::new();
//! let pawn = game.board_mut().place(Square::at(1, 4), Piece::pawn(Player::White));
//! let moves = game.available_moves(pawn).unwrap();
//! assert!(moves.contains(&Square::at(3, 4)));
//!
//! game.make_move(pawn, Square::at(3, 4)).unwrap();
//! assert_eq!(game.board().locate(pawn).unwrap(), Square::at(3, 4));
//! ```

mod board;
mod game;
mod movegen;

pub use board::{Board, BoardError, PieceId};
pub use game::{Game, LastMove, MoveError};
pub use movegen::is_square_attacked;
