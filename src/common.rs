//! Common types: game errors and shot outcomes.

use std::fmt;
use std::io;

use crate::ship::Orientation;

/// Result of handing one coordinate pair to [`Game::fire`](crate::Game::fire).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    /// Row or column was non-positive; nothing was fired.
    Aborted,
    /// Row or column exceeded the board; nothing was fired.
    OutOfRange,
    /// A shot was fired and counted.
    Fired {
        hit: bool,
        /// The cell had already been fired upon.
        repeated: bool,
    },
}

/// Errors returned by game operations.
#[derive(Debug)]
pub enum GameError {
    /// Requested ship placement does not fit on the board.
    PlacementOutOfBounds {
        orientation: Orientation,
        lane: usize,
        offset: usize,
    },
    /// Reading input or writing output failed.
    Io(io::Error),
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::PlacementOutOfBounds {
                orientation,
                lane,
                offset,
            } => write!(
                f,
                "{:?} ship in lane {} at offset {} does not fit on the board",
                orientation, lane, offset
            ),
            GameError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}
