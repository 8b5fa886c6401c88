//! Turn sequencing on top of the legality checker. Applies legal moves,
//! runs post-move check detection, and implements the simplified game
//! end: any delivered check ends the game immediately in the mover's
//! favour. There is no verification that the checked side has no reply.

use common::{Board, MoveOutcome, Piece, PieceColour, Square, StateChange};
use check;
use legality;
use EngineError;

/// Where the click-driven interaction currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected(Square),
    GameOver,
}

pub struct Game {
    board: Board,
    turn: PieceColour,
    phase: Phase,
}

impl Game {
    /// A fresh game: standard starting position, white to move.
    pub fn new() -> Game {
        Game {
            board: Board::initial(),
            turn: PieceColour::White,
            phase: Phase::AwaitingSelection,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn turn(&self) -> PieceColour {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The render payload: current board plus side to move.
    pub fn state_change(&self) -> StateChange {
        StateChange {
            board: self.board.clone(),
            turn: self.turn,
        }
    }

    /// The king square of the side standing in check, for a renderer to
    /// highlight. `None` when there is no check. Once the game has ended
    /// the turn stays with the winner, so the checked king is the
    /// opponent's; otherwise it is the side to move's.
    pub fn checked_king(&self) -> Result<Option<Square>, EngineError> {
        let side = match self.phase {
            Phase::GameOver => self.turn.opponent(),
            _ => self.turn,
        };
        if check::in_check(&self.board, side)? {
            Ok(Some(check::find_king(&self.board, side)?))
        } else {
            Ok(None)
        }
    }

    /// Attempts `from` -> `to` for the side to move. Rejection leaves the
    /// board untouched; a legal move is applied and then the opponent's
    /// king is examined. Check ends the game on the spot. A finished game
    /// is reset to the starting position before the request is processed.
    pub fn attempt_move(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<MoveOutcome, EngineError> {
        if self.phase == Phase::GameOver {
            self.reset();
        }

        if !legality::is_legal(&self.board, from, to, self.turn)? {
            return Ok(MoveOutcome::Rejected);
        }

        self.board.apply(from, to);
        let mover = self.turn;
        let opponent = mover.opponent();

        if check::in_check(&self.board, opponent)? {
            info!("{:?} is in check: {:?} wins", opponent, mover);
            self.phase = Phase::GameOver;
            return Ok(MoveOutcome::AppliedGameOver(mover));
        }

        self.turn = opponent;
        Ok(MoveOutcome::AppliedContinue)
    }

    /// Click-style driver over `attempt_move`, for board UIs: the first
    /// click selects one of the mover's pieces, the second names the
    /// target. Returns `None` when the click only changed the selection.
    pub fn click(&mut self, square: Square) -> Result<Option<MoveOutcome>, EngineError> {
        match self.phase {
            Phase::GameOver => {
                self.reset();
                Ok(None)
            }
            Phase::AwaitingSelection => {
                if self.board.occupied_by(square, self.turn) {
                    self.phase = Phase::PieceSelected(square);
                }
                Ok(None)
            }
            Phase::PieceSelected(selected) => {
                // selection is spent whether or not the move is legal
                self.phase = Phase::AwaitingSelection;
                let outcome = self.attempt_move(selected, square)?;
                Ok(Some(outcome))
            }
        }
    }

    fn reset(&mut self) {
        info!("Starting a new game");
        self.board = Board::initial();
        self.turn = PieceColour::White;
        self.phase = Phase::AwaitingSelection;
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
