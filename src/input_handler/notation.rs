//! Compact text notation for a whole position.
//!
//! Eight rows separated by `/`, row A first. Each row holds eight cells:
//! `.` for empty, `X` or `O` for a mark (either case).
//!
//! ```text
//! ......../......../...X..../...OX.../......../......../......../........
//! ```

use thiserror::Error;

use crate::board::position::row_label;
use crate::board::{Board, BoardError, Mark, Position, BOARD_SIZE};

pub const EMPTY_POSITION_NOTATION: &str =
    "......../......../......../......../......../......../......../........";

const ROW_SEPARATOR: &str = "/";
const EMPTY_CELL: char = '.';

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotationParseError {
    #[error("expected {expected} rows separated by `/`, found {found}")]
    InvalidRowCount { expected: usize, found: usize },
    #[error("row {row} must have {expected} cells, found {found}")]
    InvalidRowLength {
        row: char,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell `{character}` in row {row}")]
    InvalidCell { row: char, character: char },
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Builds a board from notation. Marks are placed in row-major order, so a
/// position that contains a line records its winner as play would.
pub fn parse_position(notation: &str) -> Result<Board, NotationParseError> {
    let rows: Vec<&str> = notation.trim().split(ROW_SEPARATOR).collect();
    if rows.len() != BOARD_SIZE {
        return Err(NotationParseError::InvalidRowCount {
            expected: BOARD_SIZE,
            found: rows.len(),
        });
    }

    let mut board = Board::new();
    for (row, cells) in rows.iter().enumerate() {
        let found = cells.chars().count();
        if found != BOARD_SIZE {
            return Err(NotationParseError::InvalidRowLength {
                row: row_label(row),
                expected: BOARD_SIZE,
                found,
            });
        }

        for (col, character) in cells.chars().enumerate() {
            if character == EMPTY_CELL {
                continue;
            }
            let mark = Mark::from_char(character).ok_or(NotationParseError::InvalidCell {
                row: row_label(row),
                character,
            })?;
            board.make_move(Position::new(row, col), mark)?;
        }
    }

    Ok(board)
}

pub fn to_notation(board: &Board) -> String {
    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    board
                        .get_piece(Position::new(row, col))
                        .map_or(EMPTY_CELL, |mark| mark.to_char())
                })
                .collect()
        })
        .collect();
    rows.join(ROW_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::four_position;

    #[test]
    fn test_parse_empty_position() {
        let board = parse_position(EMPTY_POSITION_NOTATION).unwrap();
        assert_eq!(Board::new(), board);
    }

    #[test]
    fn test_parse_marks_lowercase_and_uppercase() {
        let board =
            parse_position("x......./......../......../...Xo.../......../......../......../.......O")
                .unwrap();
        assert_eq!(Some(Mark::X), board.get_piece(Position::new(0, 0)));
        assert_eq!(Some(Mark::X), board.get_piece(Position::new(3, 3)));
        assert_eq!(Some(Mark::O), board.get_piece(Position::new(3, 4)));
        assert_eq!(Some(Mark::O), board.get_piece(Position::new(7, 7)));
        assert_eq!(4, board.occupied_count());
    }

    #[test]
    fn test_serialize_matches_macro_position() {
        let board = four_position! {
            X.......
            ........
            ........
            ...XO...
            ........
            ........
            ........
            .......O
        };
        assert_eq!(
            "X......./......../......../...XO.../......../......../......../.......O",
            to_notation(&board)
        );
        assert_eq!(board, to_notation(&board).parse::<Board>().unwrap());
    }

    #[test]
    fn test_parse_records_winner() {
        let board =
            parse_position("OOOO..../......../......../......../......../......../......../........")
                .unwrap();
        assert_eq!(Some(Mark::O), board.winner());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Err(NotationParseError::InvalidRowCount {
                expected: 8,
                found: 7
            }),
            parse_position("......../......../......../......../......../......../........")
        );
        assert_eq!(
            Err(NotationParseError::InvalidRowLength {
                row: 'B',
                expected: 8,
                found: 7
            }),
            parse_position("......../......./......../......../......../......../......../........")
        );
        assert_eq!(
            Err(NotationParseError::InvalidCell {
                row: 'C',
                character: '-'
            }),
            parse_position("......../......../...-..../......../......../......../......../........")
        );
    }
}
