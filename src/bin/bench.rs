use clap::Parser;
use c4bot::scenarios::{run_scenarios, standard_scenarios};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "c4bot-bench", version, about = "Latency and move-quality benchmark over the scenario suite")]
struct Args {
    /// Depths to run, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = vec![1u32, 2, 3, 4, 5, 6, 7])]
    depths: Vec<u32>,

    /// Only run scenarios whose name contains this string
    #[arg(long)]
    filter: Option<String>,

    /// RNG seed for every searcher
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write per-run results as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenarios: Vec<_> = standard_scenarios()
        .into_iter()
        .filter(|s| args.filter.as_deref().map_or(true, |f| s.name.contains(f)))
        .collect();
    if scenarios.is_empty() {
        anyhow::bail!("no scenario matches the filter");
    }

    let results = run_scenarios(&scenarios, &args.depths, args.seed)?;

    println!("{:<28} {:>5} {:>10} {:>6} {:>10} {:>9} {:>8}", "scenario", "depth", "ms", "move", "nodes", "cutoffs", "optimal");
    for r in &results {
        let mv = r.column.map_or_else(|| "-".to_string(), |c| c.to_string());
        let opt = match r.expected {
            Some(_) if r.is_optimal => "yes",
            Some(_) => "NO",
            None => "n/a",
        };
        println!(
            "{:<28} {:>5} {:>10.2} {:>6} {:>10} {:>9} {:>8}",
            r.name, r.depth, r.latency_ms, mv, r.nodes, r.cutoffs, opt
        );
    }

    // depth -> (total ms, runs, optimal, graded)
    let mut per_depth: BTreeMap<u32, (f64, usize, usize, usize)> = BTreeMap::new();
    for r in &results {
        let e = per_depth.entry(r.depth).or_default();
        e.0 += r.latency_ms;
        e.1 += 1;
        if r.expected.is_some() {
            e.3 += 1;
            if r.is_optimal { e.2 += 1; }
        }
    }
    println!();
    for (depth, (ms, runs, ok, graded)) in &per_depth {
        println!("depth {:>2}: mean {:>9.2}ms  optimal {}/{}", depth, ms / *runs as f64, ok, graded);
    }

    if let Some(path) = args.json {
        std::fs::write(&path, serde_json::to_string_pretty(&results)?)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
