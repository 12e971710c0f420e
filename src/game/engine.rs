use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::{AlphaBetaSearcher, SearchError};
use crate::board::{Board, BoardError, Mark, Position};
use crate::evaluate::{self, GameEnding};
use crate::input_handler::MoveInput;

/// Core engine state and configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub time_limit: Duration,
    pub computer_mark: Mark,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 4,
            time_limit: Duration::from_secs(5),
            computer_mark: Mark::X,
            starting_position: Board::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid move: {error}")]
    InvalidMove { error: BoardError },
    #[error("The game is already over")]
    GameOver,
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

/// Owns the live board for one game and runs the search for computer turns.
pub struct Engine {
    board: Board,
    move_history: Vec<(Position, Mark)>,
    searcher: AlphaBetaSearcher,
    search_depth: u8,
    time_limit: Duration,
    computer_mark: Mark,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            move_history: Vec::new(),
            searcher: AlphaBetaSearcher::new(config.computer_mark),
            search_depth: config.search_depth,
            time_limit: config.time_limit,
            computer_mark: config.computer_mark,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.valid_moves()
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        evaluate::game_ending(&self.board)
    }

    pub fn last_move(&self) -> Option<(Position, Mark)> {
        self.move_history.last().copied()
    }

    pub fn move_history(&self) -> &[(Position, Mark)] {
        &self.move_history
    }

    pub fn make_move(&mut self, position: Position, mark: Mark) -> Result<(), EngineError> {
        if self.board.is_game_over() {
            return Err(EngineError::GameOver);
        }

        self.board
            .make_move(position, mark)
            .map_err(|error| EngineError::InvalidMove { error })?;

        self.move_history.push((position, mark));
        Ok(())
    }

    pub fn get_best_move(&mut self) -> Result<Position, EngineError> {
        self.get_best_move_for(self.computer_mark)
    }

    /// Searches for `mark`. The searcher is rebuilt when the side changes,
    /// which only happens when the computer plays both sides.
    pub fn get_best_move_for(&mut self, mark: Mark) -> Result<Position, EngineError> {
        if self.searcher.engine_mark() != mark {
            self.searcher = AlphaBetaSearcher::new(mark);
        }

        self.searcher
            .get_best_move(&mut self.board, self.search_depth, self.time_limit)
            .map_err(|error| match error {
                SearchError::GameOver => EngineError::GameOver,
                error => EngineError::SearchError { error },
            })
    }

    pub fn make_best_move(&mut self) -> Result<Position, EngineError> {
        self.make_best_move_for(self.computer_mark)
    }

    pub fn make_best_move_for(&mut self, mark: Mark) -> Result<Position, EngineError> {
        let best_move = self.get_best_move_for(mark)?;
        self.make_move(best_move, mark)?;
        info!("{} played {}", mark, best_move);
        Ok(best_move)
    }

    pub fn make_move_from_input(
        &mut self,
        input: MoveInput,
        mark: Mark,
    ) -> Result<Position, EngineError> {
        match input {
            MoveInput::Place { position } => {
                self.make_move(position, mark)?;
                Ok(position)
            }
            MoveInput::UseEngine => self.make_best_move_for(mark),
        }
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.searcher.searched_position_count(),
            prunes: self.searcher.prune_count(),
            depth: self.search_depth,
            time_limit: self.time_limit,
            last_score: self.searcher.last_score(),
            last_search_duration: self.searcher.last_search_duration(),
        }
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub prunes: usize,
    pub depth: u8,
    pub time_limit: Duration,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::four_position;

    fn engine_with(starting_position: Board, search_depth: u8) -> Engine {
        Engine::with_config(EngineConfig {
            search_depth,
            time_limit: Duration::from_secs(60),
            computer_mark: Mark::X,
            starting_position,
        })
    }

    #[test]
    fn test_human_move_on_occupied_cell_is_rejected() {
        let mut engine = Engine::new();
        let position = Position::new(4, 4);
        engine.make_move(position, Mark::O).unwrap();

        let result = engine.make_move(position, Mark::X);
        assert!(matches!(result, Err(EngineError::InvalidMove { .. })));
        assert_eq!(Some((position, Mark::O)), engine.last_move());
        assert_eq!(1, engine.move_history().len());
    }

    #[test]
    fn test_make_best_move_plays_computer_mark() {
        let mut engine = engine_with(Board::new(), 2);
        let best_move = engine.make_best_move().unwrap();

        assert_eq!(Position::new(0, 0), best_move);
        assert_eq!(Some(Mark::X), engine.board().get_piece(best_move));
        assert_eq!(Some((best_move, Mark::X)), engine.last_move());

        let stats = engine.get_search_stats();
        assert_eq!(2, stats.depth);
        assert_eq!(Some(0), stats.last_score);
        assert!(stats.positions_searched > 0);
    }

    #[test]
    fn test_computer_completes_row_and_wins() {
        let starting_position = four_position! {
            .......O
            ........
            ........
            XXX.....
            ........
            ........
            ........
            .....O..
        };
        let mut engine = engine_with(starting_position, 2);

        let best_move = engine
            .make_move_from_input(MoveInput::UseEngine, Mark::X)
            .unwrap();

        assert_eq!(Position::new(3, 3), best_move);
        assert_eq!(Some(GameEnding::Win(Mark::X)), engine.check_game_over());
        assert!(matches!(
            engine.make_move(Position::new(0, 0), Mark::O),
            Err(EngineError::GameOver)
        ));
        assert!(matches!(engine.get_best_move(), Err(EngineError::GameOver)));
    }

    #[test]
    fn test_search_for_other_side() {
        let mut engine = engine_with(Board::new(), 1);
        engine.make_move(Position::new(0, 0), Mark::X).unwrap();

        let reply = engine.make_best_move_for(Mark::O).unwrap();
        assert_eq!(Some(Mark::O), engine.board().get_piece(reply));
        assert_eq!(Some((reply, Mark::O)), engine.last_move());
    }
}
