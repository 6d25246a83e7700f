//! One game: a board, a hidden ship and the firing loop.

use std::num::IntErrorKind;

use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::board::{Board, Cell};
use crate::common::{GameError, Shot};
use crate::config::BOARD_SIZE;
use crate::io::{InputReader, OutputWriter, Prompt};
use crate::ship::Ship;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub game: u32,
    pub shots: u32,
    pub hits: u32,
    pub sunk: bool,
}

/// A single game from ship placement until the ship sinks or the player quits.
#[derive(Debug)]
pub struct Game {
    number: u32,
    board: Board,
    ship: Ship,
    shots: u32,
    hits: u32,
}

impl Game {
    /// Start game `number` with a randomly placed ship.
    pub fn new<R: Rng>(number: u32, rng: &mut R) -> Self {
        Self::with_ship(number, Ship::random(rng))
    }

    /// Start game `number` with a known ship.
    pub fn with_ship(number: u32, ship: Ship) -> Self {
        Self {
            number,
            board: Board::new(),
            ship,
            shots: 0,
            hits: 0,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_sunk(&self) -> bool {
        self.ship.is_sunk()
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            game: self.number,
            shots: self.shots,
            hits: self.hits,
            sunk: self.ship.is_sunk(),
        }
    }

    /// Fire at (`row`, `col`), both 1-based.
    ///
    /// Non-positive values abort and out-of-range values are rejected; in
    /// both cases the board, the ship and the counters are left untouched.
    /// Firing at a cell that was already shot still counts as a shot.
    pub fn fire(&mut self, row: i64, col: i64) -> Shot {
        if row <= 0 || col <= 0 {
            return Shot::Aborted;
        }
        let limit = BOARD_SIZE as i64;
        if row > limit || col > limit {
            return Shot::OutOfRange;
        }
        let (r, c) = (row as usize, col as usize);

        let repeated = self.board.is_fired(r, c);
        self.shots += 1;
        let hit = self.ship.is_hit(r, c);
        if hit {
            self.hits += 1;
            self.board.mark(r, c, Cell::Hit);
        } else {
            self.board.mark(r, c, Cell::Miss);
        }
        debug!(
            "game {} shot {} at ({}, {}): hit={} repeated={}",
            self.number, self.shots, r, c, hit, repeated
        );
        Shot::Fired { hit, repeated }
    }

    /// Board followed by the status line, preceded by `message`.
    pub fn render_state(&self, message: &str) -> String {
        format!(
            "\n{}\n{}Game #{}   Shots: {}   Hits: {}",
            message, self.board, self.number, self.shots, self.hits
        )
    }

    pub fn display_state<O: OutputWriter + ?Sized>(
        &self,
        message: &str,
        output: &mut O,
    ) -> Result<(), GameError> {
        output.writeln(&self.render_state(message))?;
        Ok(())
    }

    /// Run the firing loop until the ship sinks, the player enters a
    /// non-positive coordinate, or input runs out.
    pub fn play<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<GameSummary, GameError>
    where
        I: InputReader + ?Sized,
        O: OutputWriter + ?Sized,
    {
        info!("game {} started", self.number);
        let mut message = format!("Game {}: find the ship!", self.number);

        while !self.ship.is_sunk() {
            self.display_state(&message, output)?;

            let Some(row) = read_coord(input, Prompt::Row)? else {
                break;
            };
            let Some(col) = read_coord(input, Prompt::Column)? else {
                break;
            };

            match self.fire(row, col) {
                Shot::Aborted => {
                    output.writeln("Game aborted.")?;
                    break;
                }
                Shot::OutOfRange => {
                    message = format!(
                        "({}, {}) is off the board. Row and column must be 1 to {}.",
                        row, col, BOARD_SIZE
                    );
                }
                Shot::Fired { hit, repeated } => {
                    if repeated {
                        output.writeln(&format!("You already fired at ({}, {}).", row, col))?;
                    }
                    message = if hit {
                        format!("({}, {}) is a HIT!", row, col)
                    } else {
                        format!("({}, {}) is a miss.", row, col)
                    };
                }
            }
        }

        if self.ship.is_sunk() {
            let done = format!("You sank the ship in {} shots!", self.shots);
            self.display_state(&done, output)?;
        }
        let summary = self.summary();
        info!(
            "game {} over: shots={} hits={} sunk={}",
            summary.game, summary.shots, summary.hits, summary.sunk
        );
        Ok(summary)
    }
}

/// Read one coordinate. End of input yields `None`. Integers too large for
/// `i64` saturate so they keep their sign; any other token that is not an
/// integer reads as 0, which the caller treats as an abort.
fn read_coord<I: InputReader + ?Sized>(
    input: &mut I,
    prompt: Prompt,
) -> Result<Option<i64>, GameError> {
    let Some(token) = input.read_token(prompt)? else {
        return Ok(None);
    };
    let value = match token.trim().parse::<i64>() {
        Ok(v) => v,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                warn!("unreadable coordinate {:?}, treating as 0", token);
                0
            }
        },
    };
    Ok(Some(value))
}
