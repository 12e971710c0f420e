//! Depth-limited, time-bounded alpha-beta search.
//!
//! The searcher plays its candidates directly on the caller's board and
//! retracts each one with `undo_move` before trying the next, so the board
//! is never copied. Every placement is undone before its frame returns,
//! whether the loop finishes, prunes, or the node is a cutoff.
//!
//! Moves are always tried in the board's row-major order. Together with the
//! strict `>` comparison at the root this makes the chosen move deterministic
//! for a given board and depth, unless the time budget stops the root early.

use std::cmp::{max, min};
use std::time::Duration;

use log::{debug, info, trace};
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::deadline::Deadline;
use crate::board::{Board, Mark, Position};
use crate::evaluate;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("the game is already over")]
    GameOver,
    #[error("depth must be at least 1")]
    DepthTooLow,
}

/// Statistics collected during search.
#[derive(Debug, Clone, Default)]
struct SearchStats {
    position_count: usize,
    prune_count: usize,
    candidates_searched: usize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, score: i32, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

pub struct AlphaBetaSearcher {
    engine_mark: Mark,
    opponent_mark: Mark,
    stats: SearchStats,
}

impl AlphaBetaSearcher {
    pub fn new(engine_mark: Mark) -> Self {
        Self {
            engine_mark,
            opponent_mark: engine_mark.opposite(),
            stats: SearchStats::default(),
        }
    }

    pub fn engine_mark(&self) -> Mark {
        self.engine_mark
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn prune_count(&self) -> usize {
        self.stats.prune_count
    }

    /// Root candidates fully evaluated by the last search.
    pub fn candidates_searched(&self) -> usize {
        self.stats.candidates_searched
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Picks the move for `engine_mark` with the highest alpha-beta value.
    ///
    /// Each candidate is searched to `max_depth - 1` further plies with a full
    /// window, opponent to move. Ties keep the earliest candidate. Once
    /// `time_limit` has elapsed after a candidate finishes, the remaining
    /// candidates are skipped and the best one so far is returned, so at
    /// least one candidate is always evaluated.
    ///
    /// # Returns
    ///
    /// - `Ok(best_move)` - The best move found
    /// - `Err(SearchError::DepthTooLow)` - If `max_depth` is 0
    /// - `Err(SearchError::GameOver)` - If the board already has a winner
    /// - `Err(SearchError::NoAvailableMoves)` - If the board is full
    #[must_use = "search returns the best move found"]
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn get_best_move(
        &mut self,
        board: &mut Board,
        max_depth: u8,
        time_limit: Duration,
    ) -> Result<Position, SearchError> {
        if max_depth < 1 {
            return Err(SearchError::DepthTooLow);
        }
        if board.winner().is_some() {
            return Err(SearchError::GameOver);
        }

        self.reset_stats();
        let deadline = Deadline::start(time_limit);
        let candidates = board.valid_moves();

        if candidates.is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }

        debug!(
            "alpha-beta search for {}: depth {}, {} candidates, budget {:?}",
            self.engine_mark,
            max_depth,
            candidates.len(),
            time_limit
        );

        let mut best: Option<(Position, i32)> = None;

        for position in candidates {
            if board.make_move(position, self.engine_mark).is_err() {
                continue;
            }
            let score = self.alpha_beta(board, max_depth - 1, i32::MIN, i32::MAX, false, deadline);
            board.undo_move(position);

            self.stats.candidates_searched += 1;
            debug!("candidate {} scored {}", position, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((position, score));
            }

            if deadline.is_expired() {
                debug!(
                    "time limit of {:?} reached after {} candidates",
                    deadline.budget(),
                    self.stats.candidates_searched
                );
                break;
            }
        }

        let (best_move, best_score) = best.ok_or(SearchError::NoAvailableMoves)?;
        self.stats.record_result(best_score, deadline.elapsed());

        info!(
            "{} plays {} (score {}, {} positions, {} prunes, {:?})",
            self.engine_mark,
            best_move,
            best_score,
            self.stats.position_count,
            self.stats.prune_count,
            deadline.elapsed()
        );

        Ok(best_move)
    }

    /// Minimax value of `board` with alpha-beta pruning, from the engine's
    /// point of view.
    ///
    /// Returns the static evaluation when `depth` is 0, the deadline has
    /// passed, or either side already has four in a line. A node with no
    /// empty cells outside those cases returns its starting sentinel
    /// (`i32::MIN` when maximizing, `i32::MAX` when minimizing).
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        deadline: Deadline,
    ) -> i32 {
        self.stats.position_count += 1;

        if depth == 0
            || deadline.is_expired()
            || board.check_win(self.engine_mark)
            || board.check_win(self.opponent_mark)
        {
            let score = evaluate::score(board, self.engine_mark);
            trace!("cutoff at depth {}: {}", depth, score);
            return score;
        }

        if maximizing {
            let mut value = i32::MIN;
            for position in board.valid_moves() {
                if board.make_move(position, self.engine_mark).is_err() {
                    continue;
                }
                value = max(
                    value,
                    self.alpha_beta(board, depth - 1, alpha, beta, false, deadline),
                );
                board.undo_move(position);

                alpha = max(alpha, value);
                if alpha >= beta {
                    self.stats.prune_count += 1;
                    break;
                }
            }
            value
        } else {
            let mut value = i32::MAX;
            for position in board.valid_moves() {
                if board.make_move(position, self.opponent_mark).is_err() {
                    continue;
                }
                value = min(
                    value,
                    self.alpha_beta(board, depth - 1, alpha, beta, true, deadline),
                );
                board.undo_move(position);

                beta = min(beta, value);
                if alpha >= beta {
                    self.stats.prune_count += 1;
                    break;
                }
            }
            value
        }
    }
}
