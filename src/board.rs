//! The grid, gravity placement and win detection

use anyhow::{anyhow, Result};

use std::convert::TryFrom;

use crate::config::GameConfig;

/// Axes a winning line can follow, as (row, column) steps.
/// Each axis is scanned in both directions from the pivot.
const AXES: [(isize, isize); 4] = [
    (1, 0),  // vertical
    (0, 1),  // horizontal
    (1, 1),  // diagonal, down-right / up-left
    (1, -1), // diagonal, down-left / up-right
];

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    PlayerOne,
    PlayerTwo,
}

impl Piece {
    pub fn other(self) -> Self {
        match self {
            Piece::PlayerOne => Piece::PlayerTwo,
            Piece::PlayerTwo => Piece::PlayerOne,
        }
    }

    /// The 1-based player number shown to users
    pub fn number(self) -> usize {
        match self {
            Piece::PlayerOne => 1,
            Piece::PlayerTwo => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    InProgress,
    Won(Piece),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {column} out of range. Columns must be between 1 and {cols}")]
    InvalidColumn { column: isize, cols: usize },

    #[error("Invalid move, column {} full", .column + 1)]
    ColumnFull { column: usize },

    #[error("Invalid move, the game is already over")]
    GameOver,
}

#[derive(Clone, Debug)]
pub struct Board {
    cells: Vec<Cell>, // cells are stored left-to-right, top-to-bottom
    config: GameConfig,
    num_moves: usize,
    outcome: Outcome,
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        Self {
            cells: vec![Cell::Empty; config.cell_count()],
            config,
            num_moves: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Builds a position from a string of 1-based column digits,
    /// alternating pieces starting with player one.
    pub fn from_moves<S: AsRef<str>>(config: GameConfig, moves: S) -> Result<Self> {
        let mut board = Self::new(config);

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let piece = board.next_piece();
                    board.play_checked(piece, column as usize)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Empties the grid for a new game with the same configuration
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Empty);
        self.num_moves = 0;
        self.outcome = Outcome::InProgress;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows()
    }

    pub fn cols(&self) -> usize {
        self.config.cols()
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Player one always moves first, so the turn follows from the move count
    pub fn next_piece(&self) -> Piece {
        if self.num_moves % 2 == 0 {
            Piece::PlayerOne
        } else {
            Piece::PlayerTwo
        }
    }

    /// # Panics
    /// Panics if `row` or `col` is outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows() && col < self.cols());
        self.cells[self.index(row, col)]
    }

    pub fn is_full(&self) -> bool {
        self.num_moves == self.config.cell_count()
    }

    pub fn playable(&self, col: usize) -> bool {
        col < self.cols() && self.cells[self.index(0, col)].is_empty()
    }

    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols()).filter(move |&col| self.playable(col))
    }

    /// The row a piece dropped in `col` would land in, or `None` if the column is full.
    /// `col` must be in range.
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        (0..self.rows())
            .rev()
            .find(|&row| self.cells[self.index(row, col)].is_empty())
    }

    /// The rows a piece dropped in `col` passes through, from the top of the
    /// board down to its landing row. Empty if the column is full.
    pub fn fall_path(&self, col: usize) -> impl Iterator<Item = usize> {
        let landing = self.drop_row(col).map_or(0, |row| row + 1);
        0..landing
    }

    /// Drops `piece` into the 1-based column, as columns are numbered for users
    pub fn play_checked(
        &mut self,
        piece: Piece,
        column_one_indexed: usize,
    ) -> Result<usize, MoveError> {
        self.place(piece, Self::user_column(column_one_indexed))
    }

    /// Converts a 1-based column to the 0-based index `place` takes.
    /// Values too large for an `isize` map to a column that is always out of range.
    pub fn user_column(column_one_indexed: usize) -> isize {
        isize::try_from(column_one_indexed).map_or(isize::MAX, |column| column - 1)
    }

    /// Drops `piece` into `col` and updates the outcome.
    /// Returns the row the piece landed in.
    pub fn place(&mut self, piece: Piece, col: isize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if col < 0 || col >= self.cols() as isize {
            return Err(MoveError::InvalidColumn {
                column: col.saturating_add(1),
                cols: self.cols(),
            });
        }
        let col = col as usize;
        let row = self.drop_row(col).ok_or(MoveError::ColumnFull { column: col })?;

        let index = self.index(row, col);
        self.cells[index] = Cell::Occupied(piece);
        self.num_moves += 1;

        // a win on the last free cell is still a win
        if self.check_win(piece, row, col) {
            self.outcome = Outcome::Won(piece);
        } else if self.is_full() {
            self.outcome = Outcome::Draw;
        }
        Ok(row)
    }

    /// Whether a `piece` at (`row`, `col`) is part of a line of at least the
    /// winning length. The pivot cell itself is not read, so this also answers
    /// whether a hypothetical piece at an empty cell would win.
    pub fn check_win(&self, piece: Piece, row: usize, col: usize) -> bool {
        if row >= self.rows() || col >= self.cols() {
            return false;
        }
        let target = self.config.win_length();

        AXES.iter().any(|&(d_row, d_col)| {
            let mut run = 1;
            for &sign in [-1isize, 1].iter() {
                let mut r = row as isize + sign * d_row;
                let mut c = col as isize + sign * d_col;
                while run < target && self.occupied_by(r, c, piece) {
                    run += 1;
                    r += sign * d_row;
                    c += sign * d_col;
                }
            }
            run >= target
        })
    }

    fn occupied_by(&self, row: isize, col: isize, piece: Piece) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.rows()
            && (col as usize) < self.cols()
            && self.cells[self.index(row as usize, col as usize)] == Cell::Occupied(piece)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols() + col
    }
}
