use std::panic::{self, AssertUnwindSafe};

use log::{debug, trace, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{GameEngine, Player, CENTER_COL};
use crate::openings::OpeningBook;
use crate::search::eval::{Evaluator, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use crate::search::fallback;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub depth: u32,
    pub threads: usize,
    pub use_book: bool,
    pub center_ordering: bool,
    /// Fixed RNG seed for tie-breaks and fallbacks; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: 7, threads: 1, use_book: true, center_ordering: true, seed: None }
    }
}

/// Counters collected over one search. `beta_cutoffs` are taken at
/// maximizing nodes, `alpha_cutoffs` at minimizing nodes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub alpha_cutoffs: u64,
    pub beta_cutoffs: u64,
    pub terminal_nodes: u64,
    pub leaf_evaluations: u64,
    pub max_depth_reached: u32,
}

impl SearchStats {
    pub fn cutoffs(&self) -> u64 { self.alpha_cutoffs + self.beta_cutoffs }

    fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.alpha_cutoffs += other.alpha_cutoffs;
        self.beta_cutoffs += other.beta_cutoffs;
        self.terminal_nodes += other.terminal_nodes;
        self.leaf_evaluations += other.leaf_evaluations;
        self.max_depth_reached = self.max_depth_reached.max(other.max_depth_reached);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveSource {
    Book,
    Search,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub column: Option<usize>,
    /// Score from the searching player's point of view; 0 for book and fallback moves.
    pub score: i64,
    pub source: MoveSource,
    pub stats: SearchStats,
}

pub struct Searcher {
    evaluator: Evaluator,
    book: OpeningBook,
    params: SearchParams,
    rng: SmallRng,
    stats: SearchStats,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchParams::default(), Evaluator::default(), OpeningBook::standard())
    }
}

impl Searcher {
    pub fn new(params: SearchParams, evaluator: Evaluator, book: OpeningBook) -> Self {
        let rng = match params.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_entropy(),
        };
        Self { evaluator, book, params, rng, stats: SearchStats::default() }
    }

    /// Default engine with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        let params = SearchParams { seed: Some(seed), ..SearchParams::default() };
        Self::new(params, Evaluator::default(), OpeningBook::standard())
    }

    fn worker(evaluator: Evaluator, params: SearchParams, seed: u64) -> Self {
        let params = SearchParams { threads: 1, seed: Some(seed), ..params };
        Self::new(params, evaluator, OpeningBook::empty())
    }

    pub fn params(&self) -> &SearchParams { &self.params }
    pub fn evaluator(&self) -> &Evaluator { &self.evaluator }
    pub fn book(&self) -> &OpeningBook { &self.book }

    pub fn set_threads(&mut self, threads: usize) { self.params.threads = threads.max(1); }
    pub fn set_use_book(&mut self, on: bool) { self.params.use_book = on; }
    pub fn set_center_ordering(&mut self, on: bool) { self.params.center_ordering = on; }
    pub fn set_book(&mut self, book: OpeningBook) { self.book = book; }

    /// Best column for `player` in `game`, looking `depth` plies ahead.
    /// `None` only when no legal move exists.
    pub fn find_best_move(&mut self, game: &GameEngine, player: Player, depth: u32) -> Option<usize> {
        self.search(game, player, depth).column
    }

    pub fn search_with_params(&mut self, game: &GameEngine, player: Player, params: SearchParams) -> SearchResult {
        if let Some(seed) = params.seed { self.rng = SmallRng::seed_from_u64(seed); }
        self.params = SearchParams { threads: params.threads.max(1), ..params };
        self.search(game, player, params.depth)
    }

    pub fn search(&mut self, game: &GameEngine, player: Player, depth: u32) -> SearchResult {
        self.stats = SearchStats::default();
        let valid = if game.game_over() { Vec::new() } else { game.get_valid_locations() };
        if valid.is_empty() {
            return SearchResult { column: None, score: DRAW_SCORE, source: MoveSource::Search, stats: self.stats };
        }

        if self.params.use_book {
            if let Some(col) = self.book.suggest(game) {
                debug!("book move {} after {:?}", col, game.move_history());
                return SearchResult { column: Some(col), score: 0, source: MoveSource::Book, stats: self.stats };
            }
        }

        // The side to move at the root is the maximizer when it is `player`.
        let maximizing = game.current_player() == player;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.search_root(game, player, depth, maximizing)));
        match outcome {
            Ok(Some((col, score))) if game.is_valid_location(col) => {
                debug!("depth {} picked column {} score {} nodes {}", depth, col, score, self.stats.nodes);
                SearchResult { column: Some(col), score, source: MoveSource::Search, stats: self.stats }
            }
            Ok(_) => {
                warn!("search returned no usable move; falling back to a random column");
                self.fallback_result(&valid)
            }
            Err(_) => {
                warn!("search panicked; falling back to a random column");
                self.fallback_result(&valid)
            }
        }
    }

    fn fallback_result(&mut self, valid: &[usize]) -> SearchResult {
        let column = fallback::random_column(valid, &mut self.rng);
        SearchResult { column, score: 0, source: MoveSource::Fallback, stats: self.stats }
    }

    fn search_root(&mut self, game: &GameEngine, player: Player, depth: u32, maximizing: bool) -> Option<(usize, i64)> {
        if self.params.threads > 1 && depth > 1 {
            return self.search_root_parallel(game, player, depth, maximizing);
        }
        let (col, score) = self.minimax(game, depth, i64::MIN, i64::MAX, maximizing, player, 0);
        col.map(|c| (c, score))
    }

    /// Searches each root column independently with a full window on the
    /// rayon pool, then keeps the best one (earliest in move order on ties).
    fn search_root_parallel(&mut self, game: &GameEngine, player: Player, depth: u32, maximizing: bool) -> Option<(usize, i64)> {
        let moves = self.order_moves(game.get_valid_locations());
        if moves.is_empty() { return None; }
        let base_seed: u64 = self.rng.gen();
        let evaluator = self.evaluator;
        let params = self.params;

        let results: Vec<(usize, i64, SearchStats)> = moves.par_iter().enumerate().map(|(i, &col)| {
            let mut child = game.clone();
            child.apply_move(col);
            let mut w = Searcher::worker(evaluator, params, base_seed.wrapping_add(i as u64));
            let (_, score) = w.minimax(&child, depth - 1, i64::MIN, i64::MAX, !maximizing, player, 1);
            (col, score, w.stats)
        }).collect();

        self.stats.nodes += 1;
        let mut best: Option<(usize, i64)> = None;
        for (col, score, stats) in results {
            trace!("root column {} score {}", col, score);
            self.stats.merge(&stats);
            let better = match best {
                None => true,
                Some((_, b)) => if maximizing { score > b } else { score < b },
            };
            if better { best = Some((col, score)); }
        }
        best
    }

    fn order_moves(&self, mut moves: Vec<usize>) -> Vec<usize> {
        if self.params.center_ordering {
            moves.sort_by_key(|&c| c.abs_diff(CENTER_COL));
        }
        moves
    }

    /// Plain minimax with alpha-beta bounds, always scored from `player`'s view.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        game: &GameEngine,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        player: Player,
        ply: u32,
    ) -> (Option<usize>, i64) {
        self.stats.nodes += 1;
        self.stats.max_depth_reached = self.stats.max_depth_reached.max(ply);

        let won = game.check_win(player);
        let lost = game.check_win(player.other());
        let valid = game.get_valid_locations();
        if won || lost || valid.is_empty() {
            self.stats.terminal_nodes += 1;
            let score = if won { WIN_SCORE } else if lost { LOSS_SCORE } else { DRAW_SCORE };
            return (None, score);
        }
        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            return (None, self.evaluator.evaluate(game, player));
        }

        let moves = self.order_moves(valid);
        // Seeded so the node always holds a legal column, whatever the children return.
        let mut best_col = fallback::random_column(&moves, &mut self.rng);

        if maximizing {
            let mut value = i64::MIN;
            for &col in &moves {
                let mut child = game.clone();
                child.apply_move(col);
                let (_, score) = self.minimax(&child, depth - 1, alpha, beta, false, player, ply + 1);
                if score > value {
                    value = score;
                    best_col = Some(col);
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
            }
            (best_col, value)
        } else {
            let mut value = i64::MAX;
            for &col in &moves {
                let mut child = game.clone();
                child.apply_move(col);
                let (_, score) = self.minimax(&child, depth - 1, alpha, beta, true, player, ply + 1);
                if score < value {
                    value = score;
                    best_col = Some(col);
                }
                beta = beta.min(value);
                if alpha >= beta {
                    self.stats.alpha_cutoffs += 1;
                    break;
                }
            }
            (best_col, value)
        }
    }

    /// Last search's counters.
    pub fn stats(&self) -> &SearchStats { &self.stats }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_scores_the_root_statically() {
        let game = GameEngine::from_moves(&[0, 6]).unwrap();
        let mut s = Searcher::with_seed(1);
        s.set_use_book(false);
        let res = s.search(&game, Player::One, 0);
        // No children are explored, so the random fallback supplies the move.
        assert_eq!(res.source, MoveSource::Fallback);
        assert!(game.is_valid_location(res.column.unwrap()));
        assert_eq!(res.stats.leaf_evaluations, 1);
    }

    #[test]
    fn stats_count_nodes() {
        let game = GameEngine::from_moves(&[0, 6]).unwrap();
        let mut s = Searcher::with_seed(1);
        s.set_use_book(false);
        let res = s.search(&game, Player::One, 2);
        // root + 7 children + 49 grandchildren at most
        assert!(res.stats.nodes > 7 && res.stats.nodes <= 57, "nodes={}", res.stats.nodes);
        assert_eq!(res.stats.max_depth_reached, 2);
    }
}
