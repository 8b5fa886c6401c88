//! The chess rules engine: movement predicates, the full move legality
//! test (including the self-check constraint), check detection and the
//! turn state machine. All functions take the board explicitly; there is
//! no process-wide state.

extern crate common;
extern crate itertools;

#[macro_use]
extern crate log;

use std::error;
use std::fmt;

use common::PieceColour;

pub mod check;
pub mod game;
pub mod legality;
pub mod rules;

/// A board with no king for one of the sides is corrupted: every caller
/// is expected to keep exactly one king per side on the board. This is a
/// fatal condition, distinct from an ordinary move rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    KingMissing(PieceColour),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EngineError::KingMissing(colour) => {
                write!(f, "corrupted board: no {:?} king found", colour)
            }
        }
    }
}

impl error::Error for EngineError {}
