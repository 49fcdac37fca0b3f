//! Destination enumeration for each piece kind.
//!
//! Enumeration is permissive by design: it never asks whether a move would
//! leave the mover's own king in check, and a king may step onto an attacked
//! square. The only attack scanning performed is [`is_square_attacked`],
//! which gates castling.

use crate::board::{Board, BoardError, PieceId};
use crate::game::Game;
use gambit_core::{Piece, PieceKind, Player, Square};

const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Enumerates the squares the piece named by `id` may move to.
pub(crate) fn available_moves(game: &Game, id: PieceId) -> Result<Vec<Square>, BoardError> {
    let from = game.board().locate(id)?;
    let piece = *game.board().piece(id).ok_or(BoardError::PieceNotOnBoard)?;
    Ok(moves_from(game, from, piece, true))
}

/// Enumerates destinations for `piece` standing on `from`.
///
/// `include_castling` is false only when a king is being enumerated as an
/// attacker during another king's castling check. That suppression breaks
/// the mutual recursion between castling legality and attack detection; it
/// is a required special case, not an optimization.
fn moves_from(game: &Game, from: Square, piece: Piece, include_castling: bool) -> Vec<Square> {
    let player = piece.player();
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(game, from, player),
        PieceKind::Knight => offset_moves(game.board(), from, player, &KNIGHT_OFFSETS),
        PieceKind::Bishop => ray_moves(game.board(), from, player, &DIAGONALS),
        PieceKind::Rook => ray_moves(game.board(), from, player, &ORTHOGONALS),
        PieceKind::Queen => ray_moves(game.board(), from, player, &ALL_DIRECTIONS),
        PieceKind::King => king_moves(game, from, piece, include_castling),
    }
}

/// Returns true if some piece of `attacker` can reach `square`.
///
/// "Can reach" means the square appears in that piece's own destination
/// enumeration, so under this model a pawn also "attacks" the push squares
/// in front of it. Kings are enumerated without castling reachability.
pub fn is_square_attacked(game: &Game, square: Square, attacker: Player) -> bool {
    game.board().pieces().any(|(_, from, piece)| {
        piece.player() == attacker && moves_from(game, from, *piece, false).contains(&square)
    })
}

fn pawn_moves(game: &Game, from: Square, player: Player) -> Vec<Square> {
    let board = game.board();
    let dir = player.pawn_direction();
    let mut moves = Vec::new();

    let one_ahead = from.offset(dir, 0);
    if one_ahead.on_board() && board.piece_at(one_ahead).is_none() {
        moves.push(one_ahead);
    }

    // The double-step is keyed to the starting rank, not a per-pawn moved
    // flag: a pawn standing on its home rank qualifies no matter how it got
    // there.
    let two_ahead = from.offset(2 * dir, 0);
    if from.row() == player.pawn_rank()
        && board.piece_at(one_ahead).is_none()
        && board.piece_at(two_ahead).is_none()
    {
        moves.push(two_ahead);
    }

    for dc in [-1, 1] {
        let target = from.offset(dir, dc);
        if !target.on_board() {
            continue;
        }
        let is_capture = matches!(board.piece_at(target), Some(p) if p.is_enemy_of(player));
        if is_capture || is_en_passant(game, from, player, target) {
            moves.push(target);
        }
    }

    moves
}

/// En passant onto the (empty) diagonal `target`: the last move must have
/// been an adjacent-column pawn double-step, and the square one rank behind
/// the target, toward the mover's own side, must hold the enemy piece.
fn is_en_passant(game: &Game, from: Square, player: Player, target: Square) -> bool {
    let Some(last) = game.last_move() else {
        return false;
    };
    if last.piece().kind() != PieceKind::Pawn {
        return false;
    }
    if last.mov().row_distance() != 2 {
        return false;
    }
    if (last.mov().to().col() - from.col()).abs() != 1 {
        return false;
    }
    let behind = target.offset(-player.pawn_direction(), 0);
    matches!(game.board().piece_at(behind), Some(p) if p.is_enemy_of(player))
}

fn offset_moves(
    board: &Board,
    from: Square,
    player: Player,
    offsets: &[(i8, i8)],
) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dr, dc) in offsets {
        let target = from.offset(dr, dc);
        if !target.on_board() {
            continue;
        }
        match board.piece_at(target) {
            Some(p) if !p.is_enemy_of(player) => {}
            _ => moves.push(target),
        }
    }
    moves
}

fn ray_moves(board: &Board, from: Square, player: Player, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dr, dc) in directions {
        for step in 1..8 {
            let target = from.offset(dr * step, dc * step);
            if !target.on_board() {
                break;
            }
            match board.piece_at(target) {
                None => moves.push(target),
                Some(p) => {
                    if p.is_enemy_of(player) {
                        moves.push(target);
                    }
                    // Friendly or enemy, the ray stops here.
                    break;
                }
            }
        }
    }
    moves
}

fn king_moves(game: &Game, from: Square, piece: Piece, include_castling: bool) -> Vec<Square> {
    let mut moves = offset_moves(game.board(), from, piece.player(), &KING_OFFSETS);
    if include_castling && !piece.has_moved() {
        // Kingside corner first, then queenside.
        for rook_col in [7, 0] {
            if let Some(dest) = castle_destination(game, from, piece.player(), rook_col) {
                moves.push(dest);
            }
        }
    }
    moves
}

/// Checks castling toward the rook corner at `rook_col` (7 kingside, 0
/// queenside) and returns the king's destination square if the castle is
/// available. The caller has already checked the king's own moved flag.
fn castle_destination(
    game: &Game,
    king_sq: Square,
    player: Player,
    rook_col: i8,
) -> Option<Square> {
    let board = game.board();
    let corner = Square::at(king_sq.row(), rook_col);
    match board.piece_at(corner) {
        Some(p) if p.kind() == PieceKind::Rook && p.player() == player && !p.has_moved() => {}
        _ => return None,
    }

    // Every square strictly between king and rook must be empty. On the
    // queenside that is one more square than the attack scan below covers.
    let step: i8 = if rook_col > king_sq.col() { 1 } else { -1 };
    let mut col = king_sq.col() + step;
    while col != rook_col {
        if board.piece_at(Square::at(king_sq.row(), col)).is_some() {
            return None;
        }
        col += step;
    }

    // The king's square and the two squares it crosses must not be attacked.
    for i in 0..=2 {
        let crossed = Square::at(king_sq.row(), king_sq.col() + step * i);
        if is_square_attacked(game, crossed, player.opposite()) {
            return None;
        }
    }

    // The common contract still applies: a king closer to the corner than
    // usual would land off the board or on its own rook.
    let dest = king_sq.offset(0, 2 * step);
    (dest.on_board() && board.piece_at(dest).is_none()).then_some(dest)
}
