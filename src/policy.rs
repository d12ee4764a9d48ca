//! A rule-based automated player
//!
//! The player looks a single move ahead. It takes a winning column if one
//! exists, otherwise blocks the opponent's winning column, and otherwise
//! picks a random column that does not hand the opponent a win.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Piece};

/// The number of random columns sampled before giving up on finding a safe one
pub const RETRY_BUDGET: usize = 100;

pub struct HeuristicPlayer {
    rng: StdRng,
}

impl HeuristicPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A player whose random choices repeat for the same seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks a column for `me` to play in. The board is not modified.
    ///
    /// The returned column is never full, provided the board has at least one
    /// playable column.
    pub fn choose_column(&mut self, board: &Board, me: Piece, opponent: Piece) -> usize {
        if let Some(column) = Self::winning_column(board, me) {
            debug!("player {} takes the win in column {}", me.number(), column + 1);
            return column;
        }

        if let Some(column) = Self::winning_column(board, opponent) {
            debug!("player {} blocks column {}", me.number(), column + 1);
            return column;
        }

        self.random_safe_column(board, opponent)
    }

    /// The leftmost column where dropping `piece` would complete a line
    pub fn winning_column(board: &Board, piece: Piece) -> Option<usize> {
        (0..board.cols()).find(|&column| match board.drop_row(column) {
            Some(row) => board.check_win(piece, row, column),
            None => false,
        })
    }

    /// Whether playing `column` leaves the cell above the landing cell
    /// free of an immediate win for `opponent`
    pub fn is_safe(board: &Board, column: usize, opponent: Piece) -> bool {
        match board.drop_row(column) {
            Some(0) => true,
            Some(row) => !board.check_win(opponent, row - 1, column),
            None => false,
        }
    }

    fn random_safe_column(&mut self, board: &Board, opponent: Piece) -> usize {
        let mut fallback = None;

        for _ in 0..RETRY_BUDGET {
            let column = self.rng.random_range(0..board.cols());
            if !board.playable(column) {
                continue;
            }
            if Self::is_safe(board, column, opponent) {
                debug!("random safe column {}", column + 1);
                return column;
            }
            fallback = Some(column);
        }

        // every sample was unsafe or full, settle for the last playable one
        let column = fallback
            .or_else(|| board.playable_columns().next())
            .unwrap_or(0);
        debug!("no safe column found, falling back to column {}", column + 1);
        column
    }
}

impl Default for HeuristicPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use anyhow::Result;

    #[test]
    fn prefers_winning_over_blocking() -> Result<()> {
        // player one has three on the bottom row, player two three up column 7
        let board = Board::from_moves(GameConfig::new(6, 7, 4)?, "172737")?;
        let mut player = HeuristicPlayer::with_seed(1);
        assert_eq!(player.choose_column(&board, Piece::PlayerOne, Piece::PlayerTwo), 3);
        Ok(())
    }

    #[test]
    fn winning_column_is_leftmost() -> Result<()> {
        // player one can win at either end of an open three
        let board = Board::from_moves(GameConfig::new(6, 7, 4)?, "26364")?;
        assert_eq!(
            HeuristicPlayer::winning_column(&board, Piece::PlayerOne),
            Some(0)
        );
        Ok(())
    }

    #[test]
    fn no_winning_column_on_empty_board() {
        let board = Board::new(GameConfig::default());
        assert_eq!(HeuristicPlayer::winning_column(&board, Piece::PlayerOne), None);
        assert_eq!(HeuristicPlayer::winning_column(&board, Piece::PlayerTwo), None);
    }

    #[test]
    fn does_not_modify_board() -> Result<()> {
        let board = Board::from_moves(GameConfig::default(), "1122")?;
        let before = board.clone();
        let mut player = HeuristicPlayer::with_seed(3);
        player.choose_column(&board, Piece::PlayerOne, Piece::PlayerTwo);
        assert_eq!(board.num_moves(), before.num_moves());
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                assert_eq!(board.cell(row, col), before.cell(row, col));
            }
        }
        Ok(())
    }

    #[test]
    fn is_safe_looks_one_row_up() -> Result<()> {
        // player two has three on the second row over columns 2-4, so filling
        // the bottom of column 1 or 5 lets them complete the line above
        let board = Board::from_moves(GameConfig::new(6, 7, 4)?, "23427374")?;
        assert!(!HeuristicPlayer::is_safe(&board, 0, Piece::PlayerTwo));
        assert!(!HeuristicPlayer::is_safe(&board, 4, Piece::PlayerTwo));
        assert!(HeuristicPlayer::is_safe(&board, 5, Piece::PlayerTwo));
        assert!(HeuristicPlayer::is_safe(&board, 6, Piece::PlayerTwo));
        Ok(())
    }

    #[test]
    fn full_columns_are_never_safe() -> Result<()> {
        let board = Board::from_moves(GameConfig::new(2, 3, 3)?, "11")?;
        assert!(!HeuristicPlayer::is_safe(&board, 0, Piece::PlayerTwo));
        Ok(())
    }

    #[test]
    fn fallback_avoids_unsafe_columns() -> Result<()> {
        let board = Board::from_moves(GameConfig::new(6, 7, 4)?, "23427374")?;
        assert_eq!(HeuristicPlayer::winning_column(&board, Piece::PlayerOne), None);
        assert_eq!(HeuristicPlayer::winning_column(&board, Piece::PlayerTwo), None);
        for seed in 0..50 {
            let mut player = HeuristicPlayer::with_seed(seed);
            let column = player.choose_column(&board, Piece::PlayerOne, Piece::PlayerTwo);
            assert!(column != 0 && column != 4, "seed {} chose an unsafe column", seed);
            assert!(board.playable(column));
        }
        Ok(())
    }

    #[test]
    fn fallback_returns_playable_column_when_nothing_is_safe() -> Result<()> {
        // OXX.
        // OOX.
        // only column 4 is left, and it lets player two win on top of it
        let board = Board::from_moves(GameConfig::new(2, 4, 3)?, "132213")?;
        assert!(!HeuristicPlayer::is_safe(&board, 3, Piece::PlayerTwo));
        let mut player = HeuristicPlayer::with_seed(9);
        assert_eq!(player.choose_column(&board, Piece::PlayerOne, Piece::PlayerTwo), 3);
        Ok(())
    }
}
