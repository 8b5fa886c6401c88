//! Check detection: locating a king and testing whether a square is
//! attacked. Attack testing uses the raw movement predicates only and
//! never consults the legality layer, so there is no mutual recursion
//! between "is this move legal" and "is the king in check".

use itertools::Itertools;

use common::{Board, PieceColour, PieceKind, Square};
use rules;
use EngineError;

/// Scans the board for `side`'s king. A missing king means the board is
/// corrupted, which is surfaced as a fatal error rather than swallowed.
pub fn find_king(board: &Board, side: PieceColour) -> Result<Square, EngineError> {
    (0..8)
        .cartesian_product(0..8)
        .filter_map(|(row, col)| Square::new(row, col))
        .find(|&square| match board.piece_at(square) {
            Some(piece) => piece.kind == PieceKind::King && piece.colour == side,
            None => false,
        })
        .ok_or(EngineError::KingMissing(side))
}

/// True iff any piece opposing `side` has an attack on `target`.
pub fn square_attacked(board: &Board, target: Square, side: PieceColour) -> bool {
    (0..8)
        .cartesian_product(0..8)
        .filter_map(|(row, col)| Square::new(row, col))
        .any(|from| match board.piece_at(from) {
            Some(piece) if piece.colour != side => {
                rules::piece_move_ok(board, piece, from, target)
            }
            _ => false,
        })
}

pub fn in_check(board: &Board, side: PieceColour) -> Result<bool, EngineError> {
    let king = find_king(board, side)?;
    Ok(square_attacked(board, king, side))
}
