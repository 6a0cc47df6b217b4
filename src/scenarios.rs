//! Named benchmark positions for latency and move-quality runs.

use std::time::Instant;

use serde::Serialize;

use crate::board::GameEngine;
use crate::error::MoveError;
use crate::search::{MoveSource, Searcher};

#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub moves: Vec<usize>,
    /// Column the side to move must play, when there is a single right answer.
    pub optimal: Option<usize>,
}

impl Scenario {
    pub fn game(&self) -> Result<GameEngine, MoveError> { GameEngine::from_moves(&self.moves) }
}

pub fn standard_scenarios() -> Vec<Scenario> {
    let s = |name, moves: &[usize], optimal| Scenario { name, moves: moves.to_vec(), optimal };
    vec![
        s("empty_board", &[], Some(3)),
        s("early_game_1", &[3], Some(3)),
        s("early_game_2", &[3, 3], Some(3)),
        s("early_game_3", &[3, 2, 3], None),
        s("mid_game", &[3, 3, 4, 4, 2, 2], None),
        s("win_opportunity_horizontal", &[0, 6, 1, 6, 2, 6], Some(3)),
        s("win_opportunity_vertical", &[3, 0, 3, 1, 3, 2], Some(3)),
        s("win_before_block", &[3, 0, 4, 1, 5, 2], Some(6)),
        s("must_block_horizontal", &[0, 4, 0, 5, 1, 6], Some(3)),
        s("must_block_vertical", &[0, 3, 1, 3, 2, 3], Some(3)),
        s("complex", &[3, 3, 4, 2, 5, 4, 2, 5, 1, 6], None),
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    pub depth: u32,
    pub latency_ms: f64,
    pub column: Option<usize>,
    pub source: MoveSource,
    pub nodes: u64,
    pub cutoffs: u64,
    pub expected: Option<usize>,
    pub is_optimal: bool,
}

/// Runs every scenario at every depth with a freshly seeded searcher.
pub fn run_scenarios(scenarios: &[Scenario], depths: &[u32], seed: u64) -> Result<Vec<ScenarioResult>, MoveError> {
    let mut out = Vec::with_capacity(scenarios.len() * depths.len());
    for sc in scenarios {
        let game = sc.game()?;
        if game.game_over() { continue; }
        for &depth in depths {
            let mut searcher = Searcher::with_seed(seed);
            let t0 = Instant::now();
            let res = searcher.search(&game, game.current_player(), depth);
            let latency_ms = t0.elapsed().as_secs_f64() * 1000.0;
            out.push(ScenarioResult {
                name: sc.name.to_string(),
                depth,
                latency_ms,
                column: res.column,
                source: res.source,
                nodes: res.stats.nodes,
                cutoffs: res.stats.cutoffs(),
                expected: sc.optimal,
                is_optimal: sc.optimal.map_or(true, |o| res.column == Some(o)),
            });
        }
    }
    Ok(out)
}
