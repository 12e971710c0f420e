//! Adversarial search for the computer player.

mod deadline;
mod search;


pub use deadline::Deadline;
pub use search::{AlphaBetaSearcher, SearchError};
