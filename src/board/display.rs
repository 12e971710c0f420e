use super::position::row_label;
use super::{Board, Position, BOARD_SIZE};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " ")?;
        for col in 1..=BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{}", row_label(row))?;
            for col in 0..BOARD_SIZE {
                let cell = self
                    .get_piece(Position::new(row, col))
                    .map_or('.', |mark| mark.to_char());
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! four_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(cells.len(), 64, "Invalid number of cells. Expected 64, got {}", cells.len());
        // The first character is A1, the top left cell, and rows run top to bottom.
        for (i, &c) in cells.iter().enumerate() {
            let mark = match c {
                '.' => continue,
                'X' => $crate::board::Mark::X,
                'O' => $crate::board::Mark::O,
                _ => panic!("Invalid character in four-in-a-row position"),
            };
            let position = $crate::board::Position::new(i / 8, i % 8);
            board.make_move(position, mark).unwrap();
        }
        board
    }};
}
