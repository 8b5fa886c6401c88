//! Per-piece movement predicates. These are pure: they read the board
//! only to test obstruction (sliding pieces) and destination occupancy
//! (pawns), and never mutate anything. Ownership of the destination
//! square and the self-check rule are the legality layer's concern.

use common::{Board, Piece, PieceColour, PieceKind, Square};

/// True iff `piece`, standing on `from`, could move to `to` under its
/// movement rule alone.
pub fn piece_move_ok(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_move_ok(board, piece.colour, from, to),
        PieceKind::Rook => rook_move_ok(board, from, to),
        PieceKind::Knight => knight_move_ok(from, to),
        PieceKind::Bishop => bishop_move_ok(board, from, to),
        PieceKind::Queen => rook_move_ok(board, from, to) || bishop_move_ok(board, from, to),
        PieceKind::King => king_move_ok(from, to),
    }
}

fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

/// White pawns move towards row 0, black pawns towards row 7. Straight
/// steps require an empty destination; the double step is only available
/// from the starting rank and also requires the square stepped over to be
/// empty. Diagonal steps are captures only.
fn pawn_move_ok(board: &Board, colour: PieceColour, from: Square, to: Square) -> bool {
    let (dir, start_row): (i8, u8) = match colour {
        PieceColour::White => (-1, 6),
        PieceColour::Black => (1, 1),
    };
    let (dr, dc) = deltas(from, to);

    if dc == 0 {
        if board.piece_at(to).is_some() {
            return false;
        }
        if dr == dir {
            return true;
        }
        if dr == 2 * dir && from.row() == start_row {
            return match Square::new((from.row() as i8 + dir) as u8, from.col()) {
                Some(mid) => board.piece_at(mid).is_none(),
                None => false,
            };
        }
        false
    } else if dc.abs() == 1 && dr == dir {
        match board.piece_at(to) {
            Some(target) => target.colour != colour,
            None => false,
        }
    } else {
        false
    }
}

/// The row scan and the column scan are deliberately two separate cases.
fn rook_move_ok(board: &Board, from: Square, to: Square) -> bool {
    if from.row() == to.row() && from.col() != to.col() {
        row_clear_between(board, from.row(), from.col(), to.col())
    } else if from.col() == to.col() && from.row() != to.row() {
        col_clear_between(board, from.col(), from.row(), to.row())
    } else {
        false
    }
}

/// True iff every square strictly between the two columns on `row` is
/// empty. Both endpoints are excluded.
fn row_clear_between(board: &Board, row: u8, a: u8, b: u8) -> bool {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    (lo + 1..hi).all(|col| board.0[row as usize][col as usize].is_none())
}

fn col_clear_between(board: &Board, col: u8, a: u8, b: u8) -> bool {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    (lo + 1..hi).all(|row| board.0[row as usize][col as usize].is_none())
}

fn knight_move_ok(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    (dr.abs() == 2 && dc.abs() == 1) || (dr.abs() == 1 && dc.abs() == 2)
}

fn bishop_move_ok(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    if dr.abs() != dc.abs() || dr == 0 {
        return false;
    }
    let step_r = dr.signum();
    let step_c = dc.signum();
    let mut row = from.row() as i8 + step_r;
    let mut col = from.col() as i8 + step_c;
    while row != to.row() as i8 {
        if board.0[row as usize][col as usize].is_some() {
            return false;
        }
        row += step_r;
        col += step_c;
    }
    true
}

/// Any adjacent square. The null move survives this predicate but is
/// always thrown out by the self-capture rule upstream.
fn king_move_ok(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    dr.abs() <= 1 && dc.abs() <= 1
}
