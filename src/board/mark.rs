use std::fmt;
use std::str::FromStr;

/// One of the two symbols a player places on the board.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    pub fn opposite(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Mark {
    type Err = ParseError;
    fn from_str(mark: &str) -> Result<Self, Self::Err> {
        let mut chars = mark.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Mark::from_char(c).ok_or("invalid mark; options are: X, O"),
            _ => Err("invalid mark; options are: X, O"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Mark::O, Mark::X.opposite());
        assert_eq!(Mark::X, Mark::O.opposite());
    }

    #[test]
    fn test_parse_marks() {
        assert_eq!(Mark::X, Mark::from_str("X").unwrap());
        assert_eq!(Mark::X, Mark::from_str("x").unwrap());
        assert_eq!(Mark::O, Mark::from_str("o").unwrap());
    }

    #[test]
    fn test_parse_invalid_mark() {
        assert!(Mark::from_str("").is_err());
        assert!(Mark::from_str("XO").is_err());
        assert!(Mark::from_str("-").is_err());
    }
}
