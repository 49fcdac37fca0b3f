//! Game state: a board plus the last-move record.

use crate::board::{Board, BoardError, PieceId};
use crate::movegen;
use gambit_core::{Move, Piece, PieceKind, Square};
use thiserror::Error;

/// Error type for move application.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The piece handle does not name a piece currently on the board.
    #[error(transparent)]
    PieceNotOnBoard(#[from] BoardError),
    /// The destination holds an enemy king. Capturing a king is refused as a
    /// safety net; the move is rejected with no state change.
    #[error("cannot capture a king")]
    KingCapture,
}

/// The most recent successful move: which piece moved and where.
///
/// Overwritten on every move application and consumed only by the pawn
/// en-passant check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    piece: Piece,
    mov: Move,
}

impl LastMove {
    /// Returns the piece that moved, as it was when the move was applied.
    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// Returns the (from, to) pair of the move.
    #[inline]
    pub const fn mov(&self) -> Move {
        self.mov
    }
}

/// A board together with the last-move record.
///
/// This is the unit of state an embedding game driver threads through calls.
/// There is no global state: hypothetical moves are tried by cloning the
/// whole value, and thread confinement is the caller's choice.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    last_move: Option<LastMove>,
}

impl Game {
    /// Creates a game over an empty board with no move history.
    pub fn new() -> Self {
        Game {
            board: Board::empty(),
            last_move: None,
        }
    }

    /// Creates a game over the standard starting position.
    pub fn standard() -> Self {
        Game {
            board: Board::starting_position(),
            last_move: None,
        }
    }

    /// Returns the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board mutably, for piece setup by the embedding caller.
    ///
    /// Direct placement never touches moved flags or the last-move record;
    /// only [`Game::make_move`] does.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the most recent applied move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    /// Enumerates the squares the piece named by `id` may move to.
    ///
    /// Enumeration ignores whether the move would leave the mover's own king
    /// in check; see the crate docs for the model's scope.
    pub fn available_moves(&self, id: PieceId) -> Result<Vec<Square>, BoardError> {
        movegen::available_moves(self, id)
    }

    /// Applies a move of the piece named by `id` to `to`.
    ///
    /// On top of the relocation this updates the last-move record, sets the
    /// king/rook moved flags, teleports the rook on a castle, and removes the
    /// captured pawn on an en passant. The destination is not checked against
    /// [`Game::available_moves`]; the only refusal is a destination holding
    /// an enemy king, which leaves the game unchanged.
    pub fn make_move(&mut self, id: PieceId, to: Square) -> Result<(), MoveError> {
        let from = self.board.locate(id)?;
        let piece = *self.board.piece(id).ok_or(BoardError::PieceNotOnBoard)?;

        if let Some(target) = self.board.piece_at(to) {
            if target.kind() == PieceKind::King && target.is_enemy_of(piece.player()) {
                return Err(MoveError::KingCapture);
            }
        }

        let dest_was_empty = self.board.piece_at(to).is_none();
        self.board.relocate(from, to);
        self.last_move = Some(LastMove {
            piece,
            mov: Move::new(from, to),
        });

        if matches!(piece.kind(), PieceKind::King | PieceKind::Rook) {
            if let Some(moved) = self.board.piece_mut(id) {
                moved.mark_moved();
            }
        }

        // A king travelling two columns is a castle: teleport the corner
        // rook next to it. The rook is re-created, not relocated, so its
        // handle is not preserved.
        if piece.kind() == PieceKind::King && (to.col() - from.col()).abs() == 2 {
            let kingside = to.col() > from.col();
            let corner_col = if kingside { 7 } else { 0 };
            let rook_col = if kingside {
                corner_col - 2
            } else {
                corner_col + 3
            };
            let corner = Square::at(from.row(), corner_col);
            if self.board.clear(corner).is_some() {
                self.board
                    .place(Square::at(from.row(), rook_col), Piece::rook(piece.player()));
            }
        }

        // A pawn landing diagonally on a pre-move-empty square is an en
        // passant capture: the victim sits one rank behind the destination.
        if piece.kind() == PieceKind::Pawn && dest_was_empty && to.col() != from.col() {
            let behind = to.offset(-piece.player().pawn_direction(), 0);
            self.board.clear(behind);
        }

        Ok(())
    }
}
