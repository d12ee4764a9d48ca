use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use std::io::{stdout, Write};

use gravity_connect::{Board, Cell, Outcome, Piece};

/// A piece drawn mid-fall, at (row, column), before it is placed on the board
pub type Falling = (usize, usize, Piece);

fn piece_color(piece: Piece) -> Color {
    match piece {
        Piece::PlayerOne => Color::Red,
        Piece::PlayerTwo => Color::Yellow,
    }
}

fn piece_symbol(piece: Piece) -> &'static str {
    match piece {
        Piece::PlayerOne => "O",
        Piece::PlayerTwo => "X",
    }
}

fn solid_line(cols: usize) -> String {
    "+---".repeat(cols) + "+\n"
}

/// Clears the terminal and draws the board, plus an optional falling piece
pub fn draw(board: &Board, falling: Option<Falling>) -> Result<()> {
    let mut stdout = stdout();
    stdout.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;

    // column numbers are 1-based for players
    let header: String = (1..=board.cols()).map(|col| format!("{:3} ", col)).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    for row in 0..board.rows() {
        stdout.queue(PrintStyledContent(style(solid_line(board.cols()))))?;
        for col in 0..board.cols() {
            let piece = match falling {
                Some((f_row, f_col, piece)) if (f_row, f_col) == (row, col) => Some(piece),
                _ => match board.cell(row, col) {
                    Cell::Occupied(piece) => Some(piece),
                    Cell::Empty => None,
                },
            };
            stdout.queue(PrintStyledContent(style("| ")))?;
            match piece {
                Some(piece) => stdout.queue(PrintStyledContent(
                    style(piece_symbol(piece))
                        .attribute(Attribute::Bold)
                        .with(piece_color(piece)),
                ))?,
                None => stdout.queue(PrintStyledContent(style(" ")))?,
            };
            stdout.queue(PrintStyledContent(style(" ")))?;
        }
        stdout.queue(PrintStyledContent(style("|\n")))?;
    }
    stdout.queue(PrintStyledContent(style(solid_line(board.cols()))))?;

    // legs
    let leg = format!("|{}   |\n", "    ".repeat(board.cols() - 1));
    for _ in 0..2 {
        stdout.queue(PrintStyledContent(style(leg.clone())))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Draws the piece at each row it passes through on its way down `col`,
/// waiting the configured fall delay between frames
pub fn animate_fall(board: &Board, piece: Piece, col: usize) -> Result<()> {
    let delay = board.config().fall_delay();
    if delay.as_millis() == 0 {
        return Ok(());
    }
    for row in board.fall_path(col) {
        draw(board, Some((row, col, piece)))?;
        std::thread::sleep(delay);
    }
    Ok(())
}

pub fn outcome_banner(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won(piece) => Some(format!("- - - - P{} WON - - - -", piece.number())),
        Outcome::Draw => Some("- - - - DRAW - - - -".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners() {
        assert_eq!(outcome_banner(Outcome::InProgress), None);
        assert_eq!(
            outcome_banner(Outcome::Won(Piece::PlayerTwo)).as_deref(),
            Some("- - - - P2 WON - - - -")
        );
        assert_eq!(
            outcome_banner(Outcome::Draw).as_deref(),
            Some("- - - - DRAW - - - -")
        );
    }

    #[test]
    fn frame_lines() {
        assert_eq!(solid_line(3), "+---+---+---+\n");
        assert_eq!(solid_line(1), "+---+\n");
    }
}
