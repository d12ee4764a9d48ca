//! Per-game settings shared by the engine and the driver

use static_assertions::*;

use std::str::FromStr;
use std::time::Duration;

/// The default number of rows on the board
pub const DEFAULT_ROWS: usize = 7;

/// The default number of columns on the board
pub const DEFAULT_COLS: usize = 6;

/// The default number of adjacent pieces needed to win
pub const DEFAULT_WIN_LENGTH: usize = 4;

/// The largest board accepted, in cells
pub const MAX_CELLS: usize = 1 << 16;

/// The default delay between animation frames of a falling piece, in milliseconds
pub const DEFAULT_FALL_DELAY_MS: u64 = 70;

// the default game must be winnable in at least one direction
const_assert!(DEFAULT_ROWS >= 1 && DEFAULT_COLS >= 1);
const_assert!(DEFAULT_WIN_LENGTH >= 1);
const_assert!(DEFAULT_WIN_LENGTH <= DEFAULT_ROWS || DEFAULT_WIN_LENGTH <= DEFAULT_COLS);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid game configuration: {0}")]
    Validation(String),

    #[error("invalid player kind '{0}', expected one of human, person, 1, computer, com, cpu, 0")]
    InvalidPlayer(String),
}

/// Dimensions and rules of a single game. Immutable once the game starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
    fall_delay: Duration,
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::Validation("rows must be > 0".into()));
        }
        if cols == 0 {
            return Err(ConfigError::Validation("cols must be > 0".into()));
        }
        if win_length == 0 {
            return Err(ConfigError::Validation("win length must be > 0".into()));
        }
        if rows.checked_mul(cols).map_or(true, |cells| cells > MAX_CELLS) {
            return Err(ConfigError::Validation(format!(
                "a {}x{} board is too large, at most {} cells are allowed",
                rows, cols, MAX_CELLS
            )));
        }
        Ok(Self {
            rows,
            cols,
            win_length,
            fall_delay: Duration::from_millis(DEFAULT_FALL_DELAY_MS),
        })
    }

    /// Sets the presentation delay between frames of a falling piece.
    /// A zero delay disables the animation.
    pub fn with_fall_delay(mut self, fall_delay: Duration) -> Self {
        self.fall_delay = fall_delay;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn fall_delay(&self) -> Duration {
        self.fall_delay
    }

    /// Total number of cells, which is also the number of moves in a drawn game
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_length: DEFAULT_WIN_LENGTH,
            fall_delay: Duration::from_millis(DEFAULT_FALL_DELAY_MS),
        }
    }
}

/// Who picks the moves for a seat at the table
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl FromStr for PlayerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "person" | "human" => Ok(PlayerKind::Human),
            "0" | "com" | "computer" | "cpu" => Ok(PlayerKind::Computer),
            _ => Err(ConfigError::InvalidPlayer(s.to_string())),
        }
    }
}
