use c4bot::perft::{divide, perft};
use c4bot::GameEngine;
use clap::Parser;
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Move-generation node counter for c4bot")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Starting moves as a column string, e.g. "3342"
    #[arg(long, default_value = "")]
    moves: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print per-column counts
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn parse_moves(s: &str) -> anyhow::Result<Vec<usize>> {
    s.chars()
        .map(|ch| ch.to_digit(10).map(|d| d as usize).ok_or_else(|| anyhow::anyhow!("bad column '{}'", ch)))
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let game = GameEngine::from_moves(&parse_moves(&args.moves)?)?;

    if args.divide {
        let mut total = 0u64;
        for (col, n) in divide(&game, args.depth) {
            println!("{}: {}", col, n);
            total += n;
        }
        println!("nodes: {}", total);
        return Ok(());
    }

    let t0 = Instant::now();
    let nodes = if args.threads <= 1 || args.depth == 0 || game.game_over() {
        perft(&game, args.depth)
    } else {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads).build()?;
        pool.install(|| {
            game.get_valid_locations().par_iter().map(|&col| {
                let mut child = game.clone();
                child.apply_move(col);
                perft(&child, args.depth - 1)
            }).sum::<u64>()
        })
    };
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }
    Ok(())
}
