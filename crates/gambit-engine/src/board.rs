//! Mailbox board representation with handle-based piece identity.

use gambit_core::{Piece, PieceKind, Player, Square};
use std::fmt;
use thiserror::Error;

/// Errors for board lookups.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The piece handle does not name a piece currently on the board.
    #[error("piece is not on the board")]
    PieceNotOnBoard,
}

/// A handle identifying a piece placed on a specific [`Board`].
///
/// Handles are only meaningful for the board that issued them. A handle goes
/// stale when its piece is captured or cleared; [`Board::locate`] reports
/// that as [`BoardError::PieceNotOnBoard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(u32);

#[derive(Debug, Clone)]
struct Entry {
    piece: Piece,
    square: Square,
}

/// An 8x8 board owning the pieces placed on it.
///
/// The grid holds piece handles; the arena behind it holds each piece's value
/// and current square. The two are kept in sync by every mutation, which is
/// what makes [`Board::locate`] O(1). Invariants: at most one piece per
/// square, and a handle is never addressable at two squares.
///
/// The board performs no game-rule checks. Placement overwrites, relocation
/// tramples whatever sits on the target square, and callers enforce legality.
#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Option<PieceId>; 8]; 8],
    entries: Vec<Option<Entry>>,
}

impl Board {
    /// Creates a board with all squares unoccupied.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            entries: Vec::new(),
        }
    }

    /// Creates a board with both players' pieces in the standard starting
    /// arrangement.
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for player in [Player::White, Player::Black] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.place(
                    Square::at(player.back_rank(), col as i8),
                    Piece::new(kind, player),
                );
            }
            for col in 0..8 {
                board.place(Square::at(player.pawn_rank(), col), Piece::pawn(player));
            }
        }
        board
    }

    fn indices(square: Square) -> Option<(usize, usize)> {
        square
            .on_board()
            .then(|| (square.row() as usize, square.col() as usize))
    }

    /// Returns the handle of the piece on `square`, if any.
    ///
    /// Off-board squares are unoccupied by definition.
    pub fn id_at(&self, square: Square) -> Option<PieceId> {
        let (row, col) = Self::indices(square)?;
        self.grid[row][col]
    }

    /// Returns the piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.piece(self.id_at(square)?)
    }

    /// Returns the piece named by `id`, if it is still on the board.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.entries
            .get(id.0 as usize)?
            .as_ref()
            .map(|entry| &entry.piece)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.entries
            .get_mut(id.0 as usize)?
            .as_mut()
            .map(|entry| &mut entry.piece)
    }

    /// Returns the square currently holding the piece named by `id`.
    ///
    /// This is a constant-time arena lookup, not a board scan. Calling it
    /// with a stale handle is a precondition breach and fails loudly.
    pub fn locate(&self, id: PieceId) -> Result<Square, BoardError> {
        self.entries
            .get(id.0 as usize)
            .and_then(|slot| slot.as_ref())
            .map(|entry| entry.square)
            .ok_or(BoardError::PieceNotOnBoard)
    }

    /// Places `piece` on `square`, returning its handle.
    ///
    /// Any piece already on the square is dropped and its handle goes stale.
    ///
    /// # Panics
    ///
    /// Panics if `square` is off the board.
    pub fn place(&mut self, square: Square, piece: Piece) -> PieceId {
        let (row, col) = Self::indices(square).expect("cannot place a piece off the board");
        if let Some(old) = self.grid[row][col] {
            self.entries[old.0 as usize] = None;
        }
        let id = PieceId(self.entries.len() as u32);
        self.entries.push(Some(Entry { piece, square }));
        self.grid[row][col] = Some(id);
        id
    }

    /// Removes and returns the piece on `square`, if any.
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        let (row, col) = Self::indices(square)?;
        let id = self.grid[row][col].take()?;
        let entry = self.entries[id.0 as usize].take();
        entry.map(|e| e.piece)
    }

    /// Moves whatever is at `from` onto `to` and clears `from`.
    ///
    /// A piece already on `to` is dropped. This is raw board plumbing with no
    /// game-rule awareness; off-board endpoints make it a no-op.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let Some((from_row, from_col)) = Self::indices(from) else {
            return;
        };
        let Some((to_row, to_col)) = Self::indices(to) else {
            return;
        };
        let Some(id) = self.grid[from_row][from_col].take() else {
            return;
        };
        if let Some(old) = self.grid[to_row][to_col] {
            self.entries[old.0 as usize] = None;
        }
        self.grid[to_row][to_col] = Some(id);
        if let Some(entry) = self.entries[id.0 as usize].as_mut() {
            entry.square = to;
        }
    }

    /// Iterates over all pieces on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, Square, &Piece)> + '_ {
        (0i8..8).flat_map(move |row| {
            (0i8..8).filter_map(move |col| {
                let id = self.grid[row as usize][col as usize]?;
                let piece = self.piece(id)?;
                Some((id, Square::at(row, col), piece))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0i8..8).rev() {
            for col in 0i8..8 {
                let c = self
                    .piece_at(Square::at(row, col))
                    .map(|piece| piece.to_char())
                    .unwrap_or('.');
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::empty();
        assert_eq!(board.pieces().count(), 0);
        assert!(board.piece_at(Square::at(0, 0)).is_none());
    }

    #[test]
    fn place_and_lookup() {
        let mut board = Board::empty();
        let square = Square::at(3, 4);
        let id = board.place(square, Piece::knight(Player::White));

        assert_eq!(board.id_at(square), Some(id));
        assert_eq!(board.piece_at(square), Some(&Piece::knight(Player::White)));
        assert_eq!(board.locate(id), Ok(square));
    }

    #[test]
    fn place_overwrites_existing_piece() {
        let mut board = Board::empty();
        let square = Square::at(3, 4);
        let old = board.place(square, Piece::pawn(Player::White));
        let new = board.place(square, Piece::queen(Player::Black));

        assert_eq!(board.piece_at(square), Some(&Piece::queen(Player::Black)));
        assert_eq!(board.locate(old), Err(BoardError::PieceNotOnBoard));
        assert_eq!(board.locate(new), Ok(square));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn clear_returns_piece() {
        let mut board = Board::empty();
        let square = Square::at(6, 1);
        let id = board.place(square, Piece::bishop(Player::Black));

        assert_eq!(board.clear(square), Some(Piece::bishop(Player::Black)));
        assert!(board.piece_at(square).is_none());
        assert_eq!(board.locate(id), Err(BoardError::PieceNotOnBoard));
        assert_eq!(board.clear(square), None);
    }

    #[test]
    fn relocate_moves_the_piece() {
        let mut board = Board::empty();
        let from = Square::at(1, 4);
        let to = Square::at(3, 4);
        let id = board.place(from, Piece::pawn(Player::White));

        board.relocate(from, to);

        assert!(board.piece_at(from).is_none());
        assert_eq!(board.id_at(to), Some(id));
        assert_eq!(board.locate(id), Ok(to));
    }

    #[test]
    fn relocate_captures_target() {
        let mut board = Board::empty();
        let from = Square::at(1, 4);
        let to = Square::at(3, 4);
        let mover = board.place(from, Piece::rook(Player::White));
        let victim = board.place(to, Piece::pawn(Player::Black));

        board.relocate(from, to);

        assert_eq!(board.id_at(to), Some(mover));
        assert_eq!(board.locate(victim), Err(BoardError::PieceNotOnBoard));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn relocate_from_empty_square_is_a_no_op() {
        let mut board = Board::empty();
        let id = board.place(Square::at(3, 4), Piece::pawn(Player::White));

        board.relocate(Square::at(0, 0), Square::at(3, 4));

        assert_eq!(board.locate(id), Ok(Square::at(3, 4)));
    }

    #[test]
    fn off_board_lookups_are_empty() {
        let board = Board::starting_position();
        assert!(board.piece_at(Square::at(-1, 0)).is_none());
        assert!(board.piece_at(Square::at(0, 8)).is_none());
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.piece_at(Square::at(0, 4)),
            Some(&Piece::king(Player::White))
        );
        assert_eq!(
            board.piece_at(Square::at(7, 3)),
            Some(&Piece::queen(Player::Black))
        );
        assert_eq!(
            board.piece_at(Square::at(0, 0)),
            Some(&Piece::rook(Player::White))
        );
        for col in 0..8 {
            assert_eq!(
                board.piece_at(Square::at(1, col)),
                Some(&Piece::pawn(Player::White))
            );
            assert_eq!(
                board.piece_at(Square::at(6, col)),
                Some(&Piece::pawn(Player::Black))
            );
        }
    }

    #[test]
    fn pieces_iterates_row_major() {
        let mut board = Board::empty();
        board.place(Square::at(5, 2), Piece::queen(Player::Black));
        board.place(Square::at(0, 7), Piece::rook(Player::White));
        board.place(Square::at(0, 1), Piece::knight(Player::White));

        let squares: Vec<Square> = board.pieces().map(|(_, sq, _)| sq).collect();
        assert_eq!(
            squares,
            vec![Square::at(0, 1), Square::at(0, 7), Square::at(5, 2)]
        );
    }

    #[test]
    fn display_renders_grid() {
        let mut board = Board::empty();
        board.place(Square::at(0, 4), Piece::king(Player::White));
        board.place(Square::at(7, 4), Piece::king(Player::Black));

        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "....k...");
        assert_eq!(lines[7], "....K...");
    }
}
