use std::io;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::BOARD_SIZE;
use crate::io::{InputReader, Prompt};

/// Input source that plays by itself: it fires at every cell once in a
/// shuffled order and always agrees to another game.
pub struct AutoGunner<R: Rng> {
    rng: R,
    targets: Vec<(usize, usize)>,
    pending_col: Option<usize>,
}

impl<R: Rng> AutoGunner<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            targets: Vec::new(),
            pending_col: None,
        }
    }

    fn next_target(&mut self) -> (usize, usize) {
        loop {
            if let Some(target) = self.targets.pop() {
                return target;
            }
            self.targets = (1..=BOARD_SIZE)
                .flat_map(|r| (1..=BOARD_SIZE).map(move |c| (r, c)))
                .collect();
            self.targets.shuffle(&mut self.rng);
        }
    }
}

impl<R: Rng> InputReader for AutoGunner<R> {
    fn read_token(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        let token = match prompt {
            Prompt::Row => {
                let (r, c) = self.next_target();
                self.pending_col = Some(c);
                r.to_string()
            }
            Prompt::Column => {
                let c = match self.pending_col.take() {
                    Some(c) => c,
                    None => self.next_target().1,
                };
                c.to_string()
            }
            Prompt::Replay => {
                // New game, new ship.
                self.targets.clear();
                "y".to_string()
            }
        };
        Ok(Some(token))
    }
}
