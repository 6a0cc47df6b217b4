use anyhow::Result;
use c4bot::config::EngineConfig;
use c4bot::search::MoveSource;
use c4bot::{GameEngine, GameStatus, Player, COLS};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Connect Four against the c4bot engine", long_about = None)]
struct Args {
    /// Search depth in plies (overrides the config file)
    #[arg(long)]
    depth: Option<u32>,

    /// Which side you play: '1' moves first, '2' second, 'none' watches the engine play itself
    #[arg(long, default_value = "1")]
    human: String,

    /// Search threads (root split)
    #[arg(long)]
    threads: Option<usize>,

    /// Fixed RNG seed for reproducible engine play
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the opening book
    #[arg(long, default_value_t = false)]
    no_book: bool,

    /// JSON engine config; missing file means defaults
    #[arg(long, default_value = "c4bot.json")]
    config: PathBuf,

    /// Print search statistics after each engine move
    #[arg(long)]
    verbose: bool,
}

fn parse_human(s: &str) -> Result<Option<Player>> {
    match s.to_lowercase().as_str() {
        "1" | "first" | "x" => Ok(Some(Player::One)),
        "2" | "second" | "o" => Ok(Some(Player::Two)),
        "none" | "0" => Ok(None),
        _ => anyhow::bail!("Invalid --human value: use '1', '2' or 'none'"),
    }
}

/// Reads columns from stdin until a legal one arrives. `None` on end of input.
fn read_human_move(game: &GameEngine, input: &mut impl BufRead) -> Result<Option<usize>> {
    loop {
        print!("Your move (0-{}), q to quit: ", COLS - 1);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(col) if game.is_valid_location(col) => return Ok(Some(col)),
            Ok(col) => println!("Column {} is not playable", col),
            Err(_) => println!("Enter a column number"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let human = parse_human(&args.human)?;

    let mut config = EngineConfig::load_or_default(&args.config)?;
    if let Some(d) = args.depth { config.search.depth = d; }
    if let Some(t) = args.threads { config.search.threads = t; }
    if args.seed.is_some() { config.search.seed = args.seed; }
    if args.no_book { config.search.use_book = false; }
    config.validate()?;

    let mut searcher = config.build_searcher();
    let depth = config.search.depth;
    let mut game = GameEngine::default();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !game.game_over() {
        println!("\n{}", game);
        let side = game.current_player();
        println!("{} ({}) to move", if Some(side) == human { "You" } else { "Engine" }, side.symbol());

        if Some(side) == human {
            let Some(col) = read_human_move(&game, &mut input)? else {
                println!("Bye!");
                return Ok(());
            };
            game.try_apply_move(col)?;
            continue;
        }

        let t0 = Instant::now();
        let res = searcher.search(&game, side, depth);
        let elapsed = t0.elapsed();
        let Some(col) = res.column else {
            println!("Engine has no legal move");
            break;
        };
        if args.verbose {
            let s = res.stats;
            let how = match res.source {
                MoveSource::Book => "book",
                MoveSource::Search => "search",
                MoveSource::Fallback => "fallback",
            };
            println!(
                "[{}] depth {} score {} nodes {} cutoffs {} elapsed {:.1}ms",
                how, depth, res.score, s.nodes, s.cutoffs(), elapsed.as_secs_f64() * 1000.0
            );
        }
        println!("Engine plays column {}", col);
        game.try_apply_move(col)?;
    }

    println!("\n{}", game);
    match (game.status(), game.winner()) {
        (GameStatus::Win, Some(p)) if Some(p) == human => println!("You win!"),
        (GameStatus::Win, Some(p)) => println!("Player {} wins!", p.symbol()),
        (GameStatus::Draw, _) => println!("Draw: the board is full"),
        _ => {}
    }
    Ok(())
}
