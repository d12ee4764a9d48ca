use anyhow::{anyhow, Result};

use std::io::{stdout, BufRead, Write};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("No column given")]
    Empty,

    #[error("Invalid number: {0}")]
    NotANumber(String),
}

/// Parses a line of user input as a 1-based column number.
/// Range checking is left to the board.
pub fn parse_column(line: &str) -> Result<usize, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse::<usize>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Prints `prompt` and reads one line. Fails once the input is closed.
pub fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    stdout().flush()?;

    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer)
}

/// Asks a y/n question until it gets an answer
pub fn ask_yes_no<R: BufRead>(input: &mut R, prompt: &str) -> Result<bool> {
    loop {
        let buffer = read_line(input, prompt)?;
        match buffer.trim().to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_columns() {
        assert_eq!(parse_column("4\n"), Ok(4));
        assert_eq!(parse_column("  12 \r\n"), Ok(12));
        assert_eq!(parse_column("0"), Ok(0));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_column("\n"), Err(InputError::Empty));
        assert_eq!(parse_column("abc"), Err(InputError::NotANumber("abc".into())));
        assert_eq!(parse_column("-1"), Err(InputError::NotANumber("-1".into())));
        assert_eq!(parse_column("3x"), Err(InputError::NotANumber("3x".into())));
    }

    #[test]
    fn huge_column_is_rejected_by_the_board() {
        use gravity_connect::{Board, GameConfig, MoveError, Piece};

        let mut board = Board::new(GameConfig::default());
        for line in ["9223372036854775808\n", "18446744073709551615\n", "0\n"].iter() {
            let column = parse_column(line).map(Board::user_column);
            let column = column.expect("digits parse as a column");
            assert!(matches!(
                board.place(Piece::PlayerOne, column),
                Err(MoveError::InvalidColumn { .. })
            ));
        }
        assert_eq!(board.num_moves(), 0);
    }

    #[test]
    fn yes_no_retries_until_answered() -> Result<()> {
        let mut input = "maybe\nYes\n".as_bytes();
        assert!(ask_yes_no(&mut input, "")?);

        let mut input = "n\n".as_bytes();
        assert!(!ask_yes_no(&mut input, "")?);
        Ok(())
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = "".as_bytes();
        assert!(ask_yes_no(&mut input, "").is_err());
    }
}
