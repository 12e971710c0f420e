//! Static evaluation of a board from one player's point of view.
//!
//! Every full row and every full column is scored independently: a line
//! holding two or more of the engine's marks adds that count, and a line
//! holding two or more of the opponent's marks subtracts it. Diagonals are
//! not scored even though they win games.

use std::fmt;

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::{Board, Mark, Position, BOARD_SIZE};

/// Lines with fewer marks than this contribute nothing.
const MIN_SCORING_COUNT: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Win(Mark),
    Draw,
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnding::Win(mark) => write!(f, "{} wins", mark),
            GameEnding::Draw => write!(f, "draw"),
        }
    }
}

pub fn game_ending(board: &Board) -> Option<GameEnding> {
    if let Some(mark) = board.winner() {
        return Some(GameEnding::Win(mark));
    }

    if board.is_full() {
        return Some(GameEnding::Draw);
    }

    None
}

/// Scores `board` for `engine_mark`; positive values favor the engine.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn score(board: &Board, engine_mark: Mark) -> i32 {
    let mut score = 0;

    for row in 0..BOARD_SIZE {
        let cells = (0..BOARD_SIZE).map(|col| Position::new(row, col));
        score += line_score(board, cells, engine_mark);
    }

    for col in 0..BOARD_SIZE {
        let cells = (0..BOARD_SIZE).map(|row| Position::new(row, col));
        score += line_score(board, cells, engine_mark);
    }

    score
}

fn line_score(board: &Board, cells: impl Iterator<Item = Position>, engine_mark: Mark) -> i32 {
    let mut engine_count = 0;
    let mut opponent_count = 0;

    for position in cells {
        match board.get_piece(position) {
            Some(mark) if mark == engine_mark => engine_count += 1,
            Some(_) => opponent_count += 1,
            None => (),
        }
    }

    let mut score = 0;
    if engine_count >= MIN_SCORING_COUNT {
        score += engine_count;
    }
    if opponent_count >= MIN_SCORING_COUNT {
        score -= opponent_count;
    }
    score
}
