//! The full move legality test: ownership and self-capture rules, the
//! per-piece movement predicate, and the self-check constraint evaluated
//! by simulating the move on a scratch copy of the board.

use common::{Board, PieceColour, Square};
use check;
use rules;
use EngineError;

/// Decides whether `side` may play `from` -> `to` on `board`. The board
/// is never mutated; the self-check simulation runs on a snapshot.
///
/// A `false` result is the complete error signal for bad input (empty or
/// opposing origin, self-capture, impossible geometry); only a corrupted
/// board produces an `Err`.
pub fn is_legal(
    board: &Board,
    from: Square,
    to: Square,
    side: PieceColour,
) -> Result<bool, EngineError> {
    debug!(
        "({}, {}) -> ({}, {}): {:?}",
        from.row(),
        from.col(),
        to.row(),
        to.col(),
        board.piece_at(from)
    );

    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => {
            info!(
                "Move rejected as there is no piece at ({}, {})",
                from.row(),
                from.col()
            );
            return Ok(false);
        }
    };

    if piece.colour != side {
        info!(
            "Move rejected as piece colour ({:?}) != current turn player ({:?})",
            piece.colour, side
        );
        return Ok(false);
    }

    if board.occupied_by(to, side) {
        info!("Move rejected as you cannot take your own piece");
        return Ok(false);
    }

    if !rules::piece_move_ok(board, piece, from, to) {
        info!(
            "Move rejected as a {:?} cannot move from ({}, {}) to ({}, {})",
            piece.kind,
            from.row(),
            from.col(),
            to.row(),
            to.col()
        );
        return Ok(false);
    }

    // Simulate on a scratch copy so the live board is untouched on every
    // path out of here.
    let mut scratch = board.snapshot();
    scratch.apply(from, to);
    if check::in_check(&scratch, side)? {
        info!("Move rejected as it would leave the {:?} king in check", side);
        return Ok(false);
    }

    Ok(true)
}
