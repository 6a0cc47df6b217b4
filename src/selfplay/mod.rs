use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{GameEngine, Player};
use crate::error::MoveError;
use crate::openings::OpeningBook;
use crate::search::{fallback, Evaluator, SearchParams, Searcher};

/// Ply cap per game, as a guard against runaway loops.
pub const DEFAULT_MAX_PLIES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agent {
    Random,
    Minimax { depth: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub winner: Option<Player>,
    pub plies: usize,
    pub duration_ms: f64,
}

impl GameRecord {
    pub fn replay(&self) -> Result<GameEngine, MoveError> { GameEngine::from_moves(&self.moves) }
}

enum Brain {
    Random(SmallRng),
    Minimax(Searcher, u32),
}

impl Brain {
    fn new(agent: Agent, seed: u64, use_book: bool) -> Self {
        match agent {
            Agent::Random => Brain::Random(SmallRng::seed_from_u64(seed)),
            Agent::Minimax { depth } => {
                let params = SearchParams { depth, use_book, seed: Some(seed), ..SearchParams::default() };
                let book = if use_book { OpeningBook::standard() } else { OpeningBook::empty() };
                Brain::Minimax(Searcher::new(params, Evaluator::default(), book), depth)
            }
        }
    }

    fn choose(&mut self, game: &GameEngine) -> Option<usize> {
        match self {
            Brain::Random(rng) => fallback::random_legal_column(game, rng),
            Brain::Minimax(s, depth) => s.find_best_move(game, game.current_player(), *depth),
        }
    }
}

/// Plays one game; `first` moves as player one. Stops at a result, when an
/// agent has no move, or after `max_plies`.
pub fn play_game(first: Agent, second: Agent, max_plies: usize, seed: u64, use_book: bool) -> GameRecord {
    let mut brains = [
        Brain::new(first, seed, use_book),
        Brain::new(second, seed.rotate_left(17) ^ 0x9E37_79B9_7F4A_7C15, use_book),
    ];
    let mut game = GameEngine::new(Player::One);
    let t0 = Instant::now();
    while !game.game_over() && game.move_count() < max_plies {
        let idx = if game.current_player() == Player::One { 0 } else { 1 };
        match brains[idx].choose(&game) {
            Some(col) if game.apply_move(col) => {}
            _ => break,
        }
    }
    GameRecord {
        moves: game.move_history().to_vec(),
        winner: game.winner(),
        plies: game.move_count(),
        duration_ms: t0.elapsed().as_secs_f64() * 1000.0,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentParams {
    pub depths: Vec<u32>,
    pub games_per_matchup: usize,
    pub max_plies: usize,
    pub seed: u64,
    pub use_book: bool,
}

impl Default for TournamentParams {
    fn default() -> Self {
        Self { depths: vec![2, 3, 4, 5, 6], games_per_matchup: 100, max_plies: DEFAULT_MAX_PLIES, seed: 42, use_book: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchGame {
    pub depth1: u32,
    pub depth2: u32,
    pub game_number: usize,
    pub winner_depth: Option<u32>,
    pub total_moves: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentReport {
    pub depths: Vec<u32>,
    /// `win_matrix[i][j]`: games `depths[i]` won against `depths[j]`.
    pub win_matrix: Vec<Vec<u32>>,
    pub draw_matrix: Vec<Vec<u32>>,
    pub total_wins: Vec<u32>,
    /// Depths sorted by total wins, best first.
    pub ranking: Vec<u32>,
    pub games: Vec<MatchGame>,
}

/// Round-robin over every pair of depths. Within a matchup the first player
/// alternates: even game indices give the earlier entry of `depths` the first move.
pub fn run_tournament(params: &TournamentParams) -> TournamentReport {
    run_tournament_with(params, |_| {})
}

pub fn run_tournament_with<F>(params: &TournamentParams, on_game: F) -> TournamentReport
where
    F: Fn(&MatchGame) + Sync,
{
    let n = params.depths.len();
    let mut jobs: Vec<(usize, usize, usize)> = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            for g in 0..params.games_per_matchup { jobs.push((i, j, g)); }
        }
    }
    info!("tournament: {} matchups, {} games", n * n.saturating_sub(1) / 2, jobs.len());

    let games: Vec<(usize, usize, MatchGame)> = jobs.par_iter().enumerate().map(|(k, &(i, j, g))| {
        let (d1, d2) = (params.depths[i], params.depths[j]);
        let a1 = Agent::Minimax { depth: d1 };
        let a2 = Agent::Minimax { depth: d2 };
        let seed = params.seed.wrapping_mul(0x2545_F491_4F6C_DD1D).wrapping_add(k as u64);
        let d1_first = g % 2 == 0;
        let rec = if d1_first {
            play_game(a1, a2, params.max_plies, seed, params.use_book)
        } else {
            play_game(a2, a1, params.max_plies, seed, params.use_book)
        };
        let d1_player = if d1_first { Player::One } else { Player::Two };
        let winner_depth = rec.winner.map(|w| if w == d1_player { d1 } else { d2 });
        let mg = MatchGame {
            depth1: d1,
            depth2: d2,
            game_number: g + 1,
            winner_depth,
            total_moves: rec.plies,
            duration_ms: rec.duration_ms,
        };
        on_game(&mg);
        (i, j, mg)
    }).collect();

    let mut win_matrix = vec![vec![0u32; n]; n];
    let mut draw_matrix = vec![vec![0u32; n]; n];
    for (i, j, mg) in &games {
        let (i, j) = (*i, *j);
        match mg.winner_depth {
            // same depth on both sides counts for the first entry
            Some(w) if w == mg.depth1 => win_matrix[i][j] += 1,
            Some(_) => win_matrix[j][i] += 1,
            None => {
                draw_matrix[i][j] += 1;
                draw_matrix[j][i] += 1;
            }
        }
    }
    let total_wins: Vec<u32> = win_matrix.iter().map(|row| row.iter().sum()).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| total_wins[b].cmp(&total_wins[a]));
    let ranking = order.iter().map(|&i| params.depths[i]).collect();

    TournamentReport {
        depths: params.depths.clone(),
        win_matrix,
        draw_matrix,
        total_wins,
        ranking,
        games: games.into_iter().map(|(_, _, mg)| mg).collect(),
    }
}

pub fn write_report<P: AsRef<Path>>(report: &TournamentReport, path: P) -> std::io::Result<()> {
    if let Some(parent) = path.as_ref().parent() { create_dir_all(parent)?; }
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, report)?;
    w.flush()
}

/// One JSON object per line.
pub fn write_games<P: AsRef<Path>>(games: &[GameRecord], path: P) -> std::io::Result<()> {
    if let Some(parent) = path.as_ref().parent() { create_dir_all(parent)?; }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn read_games<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
