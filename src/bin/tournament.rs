use clap::Parser;
use c4bot::selfplay::{run_tournament_with, write_report, MatchGame, TournamentParams, DEFAULT_MAX_PLIES};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "c4bot-tournament", about = "Round-robin tournament between search depths")]
struct Args {
    #[arg(long, value_delimiter = ',', default_values_t = vec![2u32, 3, 4, 5, 6])]
    depths: Vec<u32>,
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
    max_plies: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Worker threads (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
    #[arg(long, default_value_t = false)]
    no_book: bool,
    #[arg(long, default_value = "out/tournament.json")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    if a.depths.len() < 2 {
        anyhow::bail!("need at least two depths");
    }
    if a.threads > 0 {
        rayon::ThreadPoolBuilder::new().num_threads(a.threads).build_global()?;
    }

    let params = TournamentParams {
        depths: a.depths.clone(),
        games_per_matchup: a.games,
        max_plies: a.max_plies,
        seed: a.seed,
        use_book: !a.no_book,
    };
    let n = params.depths.len();
    let total = (n * (n - 1) / 2 * params.games_per_matchup) as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );
    let report = run_tournament_with(&params, |g: &MatchGame| {
        pb.set_message(format!("d{} vs d{}", g.depth1, g.depth2));
        pb.inc(1);
    });
    pb.finish_with_message("done");

    print!("{:>8}", "");
    for d in &report.depths { print!("{:>8}", format!("d{}", d)); }
    println!();
    for (i, d) in report.depths.iter().enumerate() {
        print!("{:>8}", format!("d{}", d));
        for j in 0..n {
            if i == j {
                print!("{:>8}", "-");
            } else {
                print!("{:>8}", format!("{}/{}", report.win_matrix[i][j], report.draw_matrix[i][j]));
            }
        }
        println!();
    }
    println!("(cells: wins/draws of row depth against column depth)");
    println!();
    for (rank, d) in report.ranking.iter().enumerate() {
        let i = report.depths.iter().position(|x| x == d).unwrap_or(0);
        println!("{}. depth {} - {} wins", rank + 1, d, report.total_wins[i]);
    }

    write_report(&report, &a.out)?;
    println!("wrote {}", a.out.display());
    Ok(())
}
