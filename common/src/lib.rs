#[macro_use]
extern crate serde_derive;

#[cfg(test)]
extern crate serde_json;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceColour {
    White,
    Black,
}

impl PieceColour {
    pub fn opponent(self) -> PieceColour {
        match self {
            PieceColour::White => PieceColour::Black,
            PieceColour::Black => PieceColour::White,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub colour: PieceColour,
}

/// A board coordinate. Values of this type are always on the board; the
/// only way to build one is through `Square::new`, which range-checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row: row, col: col })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }
}

/// Row-major grid, row 0 at black's back rank, row 7 at white's.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Board(pub [[Option<Piece>; 8]; 8]);

impl Board {
    pub fn empty() -> Board {
        Board([[None; 8]; 8])
    }

    /// The standard starting position.
    pub fn initial() -> Board {
        use PieceKind::*;

        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut grid = [[None; 8]; 8];
        for col in 0..8 {
            grid[0][col] = Some(Piece {
                kind: back[col],
                colour: PieceColour::Black,
            });
            grid[1][col] = Some(Piece {
                kind: Pawn,
                colour: PieceColour::Black,
            });
            grid[6][col] = Some(Piece {
                kind: Pawn,
                colour: PieceColour::White,
            });
            grid[7][col] = Some(Piece {
                kind: back[col],
                colour: PieceColour::White,
            });
        }
        Board(grid)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.0[square.row() as usize][square.col() as usize]
    }

    pub fn occupied_by(&self, square: Square, colour: PieceColour) -> bool {
        match self.piece_at(square) {
            Some(piece) => piece.colour == colour,
            None => false,
        }
    }

    /// Relocates whatever stands on `from` to `to`, capturing anything
    /// already there. Does not check legality and does not touch the turn;
    /// a no-op when `from` is empty or equals `to`.
    pub fn apply(&mut self, from: Square, to: Square) {
        if from == to {
            return;
        }
        if let Some(piece) = self.0[from.row() as usize][from.col() as usize].take() {
            self.0[to.row() as usize][to.col() as usize] = Some(piece);
        }
    }

    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    pub fn restore(&mut self, snapshot: Board) {
        *self = snapshot;
    }
}

/// A raw move request off the wire; coordinates are unchecked (row, col)
/// pairs until the engine validates them into `Square`s.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub from: (u8, u8),
    pub to: (u8, u8),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected,
    AppliedContinue,
    AppliedCheck(PieceColour),
    AppliedGameOver(PieceColour),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StateChange {
    pub board: Board,
    pub turn: PieceColour,
}
