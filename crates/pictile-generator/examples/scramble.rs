//! Example demonstrating scramble generation.
//!
//! Prints a scrambled board as a grid, together with the seed that reproduces
//! it and the length of its solution trace.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example scramble
//! ```
//!
//! Reproduce a specific scramble:
//!
//! ```sh
//! cargo run --example scramble -- --seed 42
//! ```
//!
//! Pick the grid and the walk length:
//!
//! ```sh
//! cargo run --example scramble -- --side 5 --steps 40
//! ```

use std::process;

use clap::Parser;
use pictile_core::{GridSize, solvability};
use pictile_generator::Scrambler;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length (3, 4, or 5).
    #[arg(long, value_name = "SIDE", default_value_t = 4)]
    side: usize,

    /// Seed to reproduce a scramble; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Walk length; defaults to ten steps per cell.
    #[arg(long, value_name = "STEPS")]
    steps: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(size) = GridSize::from_side(args.side) else {
        eprintln!("unsupported grid side {}; expected 3, 4, or 5", args.side);
        process::exit(1);
    };

    let mut scrambler = match args.seed {
        Some(seed) => Scrambler::from_seed(seed),
        None => Scrambler::new(),
    };
    if let Some(steps) = args.steps {
        scrambler = scrambler.walk_steps(steps);
    }

    let scrambled = scrambler.scramble(size);
    println!("seed: {}", scrambled.seed);
    println!("trace length: {}", scrambled.trace.len());
    println!("solvable: {}", solvability::is_solvable(&scrambled.board));
    println!();

    let blank = scrambled.board.size().blank_tile();
    for row in scrambled.board.tiles().chunks(size.side()) {
        let cells: Vec<String> = row
            .iter()
            .map(|&tile| {
                if tile == blank {
                    "  .".to_string()
                } else {
                    format!("{:>3}", tile.value())
                }
            })
            .collect();
        println!("{}", cells.join(" "));
    }
}
