//! Board state for the 8x8 four-in-a-row game.

pub mod error;
pub mod mark;
pub mod position;

mod display;


use std::str::FromStr;

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::input_handler::notation::{parse_position, NotationParseError};

pub use error::BoardError;
pub use mark::Mark;
pub use position::Position;

pub const BOARD_SIZE: usize = 8;
pub const WIN_LENGTH: usize = 4;

/// Horizontal, vertical, and the two diagonals. Each is walked both ways.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The first completed line of the game, and the cell whose placement completed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct WinRecord {
    mark: Mark,
    position: Position,
}

/// Represents the state of the board: the mark in each cell, and the first
/// player to complete a line of four.
///
/// The winner is sticky during play. It is only retracted when the search
/// undoes the very placement that recorded it, so a `make_move` followed by
/// an `undo_move` at the same position always restores an equal board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
    winner: Option<WinRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            winner: None,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline(always)]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.get_piece(position).is_some()
    }

    #[inline(always)]
    pub fn get_piece(&self, position: Position) -> Option<Mark> {
        self.cells[position.row()][position.col()]
    }

    #[must_use = "placing a mark fails if the cell is occupied"]
    pub fn make_move(&mut self, position: Position, mark: Mark) -> Result<(), BoardError> {
        if self.is_occupied(position) {
            return Err(BoardError::CellOccupied { position });
        }

        self.cells[position.row()][position.col()] = Some(mark);

        // first recorded winner keeps precedence
        if self.winner.is_none() && self.completes_line(position, mark) {
            self.winner = Some(WinRecord { mark, position });
        }

        Ok(())
    }

    /// Clears the cell without any checks. Only the search uses this, to
    /// retract a placement it has just made.
    ///
    /// Undoing in reverse order of placement restores the exact prior board.
    /// When the cell that recorded the winner is cleared, the board is
    /// rescanned and any line still standing becomes the new winner.
    pub fn undo_move(&mut self, position: Position) {
        self.cells[position.row()][position.col()] = None;

        if self.winner.map_or(false, |record| record.position == position) {
            self.winner = self.find_line();
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winner.map(|record| record.mark)
    }

    /// Scans the whole board for a line of four `mark`s, independent of the
    /// recorded winner.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn check_win(&self, mark: Mark) -> bool {
        Position::all()
            .any(|position| self.get_piece(position) == Some(mark) && self.completes_line(position, mark))
    }

    /// All empty cells, row-major.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::all()
            .filter(|&position| !self.is_occupied(position))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    /// First cell in row-major order that anchors a line, with its mark.
    fn find_line(&self) -> Option<WinRecord> {
        Position::all().find_map(|position| {
            let mark = self.get_piece(position)?;
            self.completes_line(position, mark)
                .then(|| WinRecord { mark, position })
        })
    }

    fn completes_line(&self, anchor: Position, mark: Mark) -> bool {
        DIRECTIONS.iter().any(|&(d_row, d_col)| {
            let count = 1
                + self.run_length(anchor, mark, d_row, d_col)
                + self.run_length(anchor, mark, -d_row, -d_col);
            count >= WIN_LENGTH
        })
    }

    /// Consecutive `mark`s stepping away from `anchor`, not counting the anchor.
    fn run_length(&self, anchor: Position, mark: Mark, d_row: isize, d_col: isize) -> usize {
        let mut count = 0;
        let mut current = anchor;
        while count < WIN_LENGTH - 1 {
            match current.offset(d_row, d_col) {
                Some(next) if self.get_piece(next) == Some(mark) => {
                    count += 1;
                    current = next;
                }
                _ => break,
            }
        }
        count
    }
}

impl FromStr for Board {
    type Err = NotationParseError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        parse_position(notation)
    }
}
