//! Salvo: find and sink a single hidden ship on a small grid.

mod board;
mod common;
mod config;
mod game;
mod gunner;
pub mod io;
mod logging;
mod session;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use gunner::AutoGunner;
pub use io::{InputReader, NullOutput, OutputWriter, Prompt, TerminalInput, TerminalOutput};
pub use logging::init_logging;
pub use session::*;
pub use ship::*;
