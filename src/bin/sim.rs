use clap::Parser;
use gameboard::prelude::*;
use gameboard::CELLS;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Place a random fleet and fire at it until every ship is sunk.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Print the final board to stderr")]
    show_board: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut board = Board::new();
    board.place_ships_randomly(&mut rng);

    let mut targets: Vec<usize> = (0..CELLS).collect();
    targets.shuffle(&mut rng);

    let (mut hits, mut misses) = (0usize, 0usize);
    let mut sunk = Vec::new();
    for index in targets {
        if board.is_game_over() {
            break;
        }
        let (row, col) = ((index / BOARD_SIZE) as isize, (index % BOARD_SIZE) as isize);
        match board.attack(row, col)? {
            Shot::Miss => misses += 1,
            Shot::Hit { .. } => hits += 1,
            Shot::Sink { name, .. } => {
                hits += 1;
                sunk.push(name);
            }
        }
    }

    if cli.show_board {
        eprintln!("{}", board);
    }

    let result = json!({
        "seed": seed,
        "shots": hits + misses,
        "hits": hits,
        "misses": misses,
        "missed_cells": board.missed_cells().iter_set_bits().collect::<Vec<_>>(),
        "sunk": sunk,
        "game_over": board.is_game_over(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
