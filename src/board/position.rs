use std::fmt;
use std::str::FromStr;

use super::BOARD_SIZE;

/// A cell on the board, addressed by 0-indexed row and column.
///
/// Positions order row-major (row first, then column), which is the order
/// in which the board enumerates its empty cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Callers must pass `row` and `col` within `[0, BOARD_SIZE)`.
    pub const fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self::new(row, col))
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn row(&self) -> usize {
        self.row as usize
    }

    #[inline(always)]
    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// The neighbouring position `(row + d_row, col + d_col)`, or `None` past the edge.
    #[inline]
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row() as isize + d_row;
        let col = self.col() as isize + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::try_new(row as usize, col as usize)
    }

    /// Every position on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Parses a two-character token such as `E5`: a row letter `A`-`H`
    /// followed by a column number `1`-`8`.
    pub fn from_notation(notation: &str) -> Option<Self> {
        let mut chars = notation.chars();
        let (row_char, col_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(row), Some(col), None) => (row.to_ascii_uppercase(), col),
            _ => return None,
        };
        if !row_char.is_ascii_uppercase() || !col_char.is_ascii_digit() {
            return None;
        }

        let row = (row_char as u8).checked_sub(b'A')? as usize;
        let col = (col_char as u8).checked_sub(b'1')? as usize;
        Self::try_new(row, col)
    }

    pub fn to_notation(&self) -> String {
        format!("{}{}", row_label(self.row()), self.col + 1)
    }
}

pub(crate) fn row_label(row: usize) -> char {
    (b'A' + row as u8) as char
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.to_notation(), self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = &'static str;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        Self::from_notation(notation).ok_or("invalid move; expected a row A-H and a column 1-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_round_trip_corners() {
        assert_eq!(Some(Position::new(0, 0)), Position::from_notation("A1"));
        assert_eq!(Some(Position::new(7, 7)), Position::from_notation("H8"));
        assert_eq!(Some(Position::new(4, 4)), Position::from_notation("e5"));
        assert_eq!("E5", Position::new(4, 4).to_notation());
        assert_eq!("A8", Position::new(0, 7).to_notation());
    }

    #[test]
    fn test_invalid_notation() {
        for input in ["", "A", "A0", "A9", "I1", "11", "AA", "A10", "E5 "] {
            assert_eq!(None, Position::from_notation(input), "{:?}", input);
        }
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(Some(Position::new(7, 0)), Position::try_new(7, 0));
        assert_eq!(None, Position::try_new(8, 0));
        assert_eq!(None, Position::try_new(0, 256));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_new_out_of_range_panics_in_debug() {
        let _ = Position::new(256, 0);
    }

    #[test]
    fn test_offset_respects_edges() {
        let corner = Position::new(0, 7);
        assert_eq!(None, corner.offset(-1, 0));
        assert_eq!(None, corner.offset(0, 1));
        assert_eq!(Some(Position::new(1, 6)), corner.offset(1, -1));
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(BOARD_SIZE * BOARD_SIZE, all.len());
        assert_eq!(Position::new(0, 0), all[0]);
        assert_eq!(Position::new(0, 1), all[1]);
        assert_eq!(Position::new(1, 0), all[BOARD_SIZE]);
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
