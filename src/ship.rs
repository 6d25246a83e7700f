//! The hidden ship: a single straight line of cells with per-cell hit flags.

use core::fmt;
use rand::Rng;

use crate::common::GameError;
use crate::config::{BOARD_SIZE, MAX_OFFSET, SHIP_LENGTH};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct Segment {
    row: usize,
    col: usize,
    hit: bool,
}

/// A ship spanning `SHIP_LENGTH` consecutive cells, 1-indexed.
///
/// Coordinates stay private; callers can only ask whether a shot hit and
/// whether the ship is sunk.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    segments: [Segment; SHIP_LENGTH],
}

impl Ship {
    /// Lay the ship along `lane` (a row when horizontal, a column when
    /// vertical) starting at `offset`.
    pub fn new(orientation: Orientation, lane: usize, offset: usize) -> Result<Self, GameError> {
        if lane == 0 || lane > BOARD_SIZE || offset == 0 || offset > MAX_OFFSET {
            return Err(GameError::PlacementOutOfBounds {
                orientation,
                lane,
                offset,
            });
        }

        Ok(Self::lay_out(orientation, lane, offset))
    }

    /// Place a ship uniformly at random: orientation 50/50, any lane, any
    /// offset that keeps it on the board.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let orientation = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let offset = rng.random_range(1..=MAX_OFFSET);
        let lane = rng.random_range(1..=BOARD_SIZE);
        Self::lay_out(orientation, lane, offset)
    }

    fn lay_out(orientation: Orientation, lane: usize, offset: usize) -> Self {
        let segments = core::array::from_fn(|i| {
            let (row, col) = match orientation {
                Orientation::Horizontal => (lane, offset + i),
                Orientation::Vertical => (offset + i, lane),
            };
            Segment {
                row,
                col,
                hit: false,
            }
        });
        Ship {
            orientation,
            segments,
        }
    }

    /// Check a shot at (`row`, `col`). Marks the matching segment and
    /// returns `true` on a hit. A segment that is already hit does not match
    /// again.
    pub fn is_hit(&mut self, row: usize, col: usize) -> bool {
        for seg in self.segments.iter_mut() {
            if !seg.hit && seg.row == row && seg.col == col {
                seg.hit = true;
                return true;
            }
        }
        false
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.segments.iter().all(|s| s.hit)
    }

    /// Number of segments hit so far.
    pub fn hits(&self) -> usize {
        self.segments.iter().filter(|s| s.hit).count()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells as 1-based (row, col) pairs, in placement order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.segments.iter().map(|s| (s.row, s.col))
    }
}

impl fmt::Debug for Ship {
    // Keeps the position out of debug logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, hits: {}, sunk: {} }}",
            SHIP_LENGTH,
            self.hits(),
            self.is_sunk()
        )
    }
}
