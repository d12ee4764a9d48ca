//! A rules engine and heuristic opponent for gravity-based connection games
//! such as 'Connect 4', on a board of any size and any winning line length.
//!
//! # Basic Usage
//!
//! ```
//! use gravity_connect::{Board, GameConfig, HeuristicPlayer, Piece};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::from_moves(GameConfig::default(), "112233")?;
//! let mut ai = HeuristicPlayer::with_seed(7);
//!
//! let column = ai.choose_column(&board, Piece::PlayerOne, Piece::PlayerTwo);
//! assert_eq!(column, 3);
//!
//! board.place(Piece::PlayerOne, column as isize)?;
//! assert!(board.is_terminal());
//!# Ok(())
//!# }
//! ```

pub use anyhow;

pub mod config;

pub mod board;

pub mod policy;


pub use board::{Board, Cell, MoveError, Outcome, Piece};
pub use config::{ConfigError, GameConfig, PlayerKind};
pub use policy::HeuristicPlayer;
