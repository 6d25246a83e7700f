/// Side length of the square board.
pub const BOARD_SIZE: usize = 5;
/// Number of cells the hidden ship occupies.
pub const SHIP_LENGTH: usize = BOARD_SIZE - 1;
/// Largest 1-based starting offset that still keeps the ship on the board.
pub const MAX_OFFSET: usize = BOARD_SIZE - SHIP_LENGTH + 1;

/// Games played in one session before the driver stops asking.
pub const MAX_GAMES: u32 = 10;
/// Invalid replay answers tolerated before the session stops.
pub const MAX_PROMPT_RETRIES: u32 = 3;
