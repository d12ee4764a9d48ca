use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use std::io::{stdin, BufRead};
use std::time::Duration;

use gravity_connect::config::{
    DEFAULT_COLS, DEFAULT_FALL_DELAY_MS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH,
};
use gravity_connect::*;

mod display;
mod input;

#[derive(Parser, Debug)]
#[command(name = "gravity-connect", about = "A gravity-based connection game for two players")]
struct Args {
    /// Either human (1, person, human) or computer (0, com, computer, cpu) as player 1
    #[arg(long, default_value = "human")]
    player1: PlayerKind,

    /// Either human (1, person, human) or computer (0, com, computer, cpu) as player 2
    #[arg(long, default_value = "computer")]
    player2: PlayerKind,

    /// Number of columns on the board
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Number of rows on the board
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of adjacent pieces needed to win
    #[arg(long = "win", default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,

    /// Delay between frames of a falling piece in milliseconds, 0 to disable
    #[arg(long, default_value_t = DEFAULT_FALL_DELAY_MS)]
    falldelay: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = GameConfig::new(args.rows, args.cols, args.win_length)?
        .with_fall_delay(Duration::from_millis(args.falldelay));
    let players = [args.player1, args.player2];
    info!("starting with {:?}, players {:?}", config, players);

    let mut board = Board::new(config);
    let mut ai = HeuristicPlayer::new();
    let stdin = stdin();
    let mut reader = stdin.lock();

    loop {
        board.reset();
        let outcome = play_game(&mut board, players, &mut ai, &mut reader)?;
        info!("game over after {} moves: {:?}", board.num_moves(), outcome);

        if !input::ask_yes_no(&mut reader, "Play again? y/n: ")? {
            println!("Exiting...");
            break;
        }
    }
    Ok(())
}

/// Runs one game to completion on a freshly reset board
fn play_game<R: BufRead>(
    board: &mut Board,
    players: [PlayerKind; 2],
    ai: &mut HeuristicPlayer,
    reader: &mut R,
) -> Result<Outcome> {
    // shown under the board on the next redraw
    let mut message: Option<String> = None;

    loop {
        display::draw(board, None)?;
        if let Some(text) = message.take() {
            println!("{}", text);
        }

        if let Some(banner) = display::outcome_banner(board.outcome()) {
            println!("{}", banner);
            return Ok(board.outcome());
        }

        let piece = board.next_piece();
        let column = match players[piece.number() - 1] {
            PlayerKind::Computer => ai.choose_column(board, piece, piece.other()) as isize,
            PlayerKind::Human => {
                let prompt = format!(
                    "Player {} choose column (1-{}) > ",
                    piece.number(),
                    board.cols()
                );
                let line = input::read_line(reader, &prompt)?;
                match input::parse_column(&line) {
                    // range checking happens in the board
                    Ok(column) => Board::user_column(column),
                    Err(err) => {
                        message = Some(err.to_string());
                        continue;
                    }
                }
            }
        };

        if column >= 0 && board.playable(column as usize) {
            display::animate_fall(board, piece, column as usize)?;
        }
        match board.place(piece, column) {
            Ok(row) => debug!(
                "player {} landed at row {} column {}",
                piece.number(),
                row,
                column + 1
            ),
            Err(err) => message = Some(err.to_string()),
        }
    }
}
