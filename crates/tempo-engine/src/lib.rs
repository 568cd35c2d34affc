//! Search and evaluation for tempo.

pub mod eval;
pub mod search;

pub use eval::{BoardEvaluator, MaterialEvaluator, StandardEvaluator};
pub use search::minimax::MiniMax;
pub use search::worker::{SearchError, SearchTask, spawn_search, spawn_search_with};
pub use search::{MoveStrategy, SearchResult};
