//! Interactive terminal front-end for the free-placement board.
//!
//! Stands in for a click-to-select UI: reads one command per line, applies
//! it to a single owned `BoardState`, and re-renders after every mutation.
//! A move from an empty square is reported and ignored, the same way the
//! UI clears its selection and re-prompts.
//!
//! Commands:
//! `move <from_row> <from_col> <to_row> <to_col>` | `board` | `history` |
//! `reset` | `quit`

use std::io::{self, BufRead, Write};

use free_chess::board_state::board_state::BoardState;
use free_chess::utils::render_board::render_board;

fn main() {
    env_logger::init();

    let mut state = BoardState::new();
    println!("{}", render_board(state.board()));
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        match run_command(&mut state, &line) {
            Command::Continue => {}
            Command::Quit => break,
        }
        prompt();
    }
}

enum Command {
    Continue,
    Quit,
}

fn run_command(state: &mut BoardState, line: &str) -> Command {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("move") => {
            let coords: Vec<usize> = parts.filter_map(|p| p.parse().ok()).collect();
            if coords.len() != 4 {
                println!("usage: move <from_row> <from_col> <to_row> <to_col>");
                return Command::Continue;
            }
            match state.move_piece(coords[0], coords[1], coords[2], coords[3]) {
                Ok(true) => println!("{}", render_board(state.board())),
                Ok(false) => println!("no piece on ({},{})", coords[0], coords[1]),
                Err(error) => println!("{}", error),
            }
        }
        Some("board") => println!("{}", render_board(state.board())),
        Some("history") => {
            if state.history().is_empty() {
                println!("(no moves yet)");
            }
            for record in state.history().records() {
                println!("[{}] {}", record.time, record);
            }
        }
        Some("reset") => {
            state.reset();
            println!("{}", render_board(state.board()));
        }
        Some("quit") | Some("exit") => return Command::Quit,
        Some(other) => println!("unknown command: {}", other),
        None => {}
    }
    Command::Continue
}

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}
