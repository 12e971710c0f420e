//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{AlphaBetaSearcher, Deadline, SearchError};
pub use crate::board::{Board, BoardError, Mark, Position, BOARD_SIZE, WIN_LENGTH};
pub use crate::evaluate::GameEnding;
pub use crate::game::engine::{Engine, EngineConfig, EngineError};
