pub mod alphabeta;
pub mod eval;
pub mod fallback;

pub use alphabeta::{MoveSource, SearchParams, SearchResult, SearchStats, Searcher};
pub use eval::{EvalWeights, Evaluator};
