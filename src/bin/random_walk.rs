//! Standalone random free-play driver.
//!
//! Run with:
//! `cargo run --bin random_walk`
//! `cargo run --bin random_walk -- --moves 200 --seed 7 --verbose`
//!
//! Draws uniformly random square pairs and applies them as free-placement
//! moves, then prints the final board, the applied/empty-draw counts, and
//! the capped history length. Handy as a scriptable smoke run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use free_chess::board_state::board_state::BoardState;
use free_chess::utils::render_board::render_board;

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let moves = parse_flag(&args, "--moves").unwrap_or(120);
    let seed = parse_flag(&args, "--seed").unwrap_or(1234) as u64;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = BoardState::new();

    let mut applied = 0usize;
    let mut empty_draws = 0usize;
    for _ in 0..moves {
        let from_row: usize = rng.random_range(0..8);
        let from_col: usize = rng.random_range(0..8);
        let to_row: usize = rng.random_range(0..8);
        let to_col: usize = rng.random_range(0..8);

        match state.move_piece(from_row, from_col, to_row, to_col) {
            Ok(true) => {
                applied += 1;
                if verbose {
                    if let Some(record) = state.history().records().front() {
                        println!("[{}] {}", record.time, record);
                    }
                }
            }
            Ok(false) => empty_draws += 1,
            Err(error) => return Err(error.to_string()),
        }
    }

    println!("{}", render_board(state.board()));
    println!(
        "applied {} of {} draws ({} hit empty squares); history holds {} records",
        applied,
        moves,
        empty_draws,
        state.history().len()
    );
    Ok(())
}

fn parse_flag(args: &[String], name: &str) -> Option<usize> {
    let position = args.iter().position(|a| a == name)?;
    args.get(position + 1)?.parse().ok()
}
