//! Session driver: plays games back to back and asks whether to continue.

use log::{info, warn};
use rand::Rng;
use serde::Serialize;

use crate::common::GameError;
use crate::config::{MAX_GAMES, MAX_PROMPT_RETRIES};
use crate::game::{Game, GameSummary};
use crate::io::{InputReader, OutputWriter, Prompt};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The player answered no.
    Declined,
    /// The game limit was reached.
    MaxGames,
    /// Too many unreadable answers to the replay prompt.
    RetriesExhausted,
    /// Input ended.
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub games: Vec<GameSummary>,
    pub stop: StopReason,
}

enum Answer {
    Yes,
    No,
    GaveUp,
    Closed,
}

pub struct Session<R: Rng> {
    rng: R,
    max_games: u32,
    max_prompt_retries: u32,
}

impl<R: Rng> Session<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_games: MAX_GAMES,
            max_prompt_retries: MAX_PROMPT_RETRIES,
        }
    }

    pub fn max_games(mut self, max_games: u32) -> Self {
        self.max_games = max_games;
        self
    }

    pub fn max_prompt_retries(mut self, retries: u32) -> Self {
        self.max_prompt_retries = retries;
        self
    }

    /// Play games until the player declines, the game limit is hit, or the
    /// replay prompt cannot be answered.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<SessionSummary, GameError>
    where
        I: InputReader + ?Sized,
        O: OutputWriter + ?Sized,
    {
        let mut games = Vec::new();
        let mut number = 0;
        let stop = loop {
            if number >= self.max_games {
                output.writeln(&format!("That's {} games. Thanks for playing!", number))?;
                break StopReason::MaxGames;
            }
            number += 1;
            let mut game = Game::new(number, &mut self.rng);
            games.push(game.play(input, output)?);

            if number >= self.max_games {
                continue;
            }
            match self.ask_replay(input, output)? {
                Answer::Yes => {}
                Answer::No => {
                    output.writeln("Thanks for playing!")?;
                    break StopReason::Declined;
                }
                Answer::GaveUp => {
                    warn!(
                        "no valid answer after {} attempts, ending session",
                        self.max_prompt_retries
                    );
                    output.writeln("No valid answer. Goodbye!")?;
                    break StopReason::RetriesExhausted;
                }
                Answer::Closed => break StopReason::InputClosed,
            }
        };
        info!("session ended after {} games: {:?}", games.len(), stop);
        Ok(SessionSummary { games, stop })
    }

    fn ask_replay<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<Answer, GameError>
    where
        I: InputReader + ?Sized,
        O: OutputWriter + ?Sized,
    {
        for _ in 0..self.max_prompt_retries {
            let Some(token) = input.read_token(Prompt::Replay)? else {
                return Ok(Answer::Closed);
            };
            match token.chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('y') => return Ok(Answer::Yes),
                Some('n') => return Ok(Answer::No),
                _ => output.writeln("Please answer y or n.")?,
            }
        }
        Ok(Answer::GaveUp)
    }
}
