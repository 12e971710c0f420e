use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Who places the first mark in a human vs. computer game.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum FirstPlayer {
    Human,
    Computer,
}

impl FirstPlayer {
    pub fn random() -> Self {
        if rand::thread_rng().gen_bool(0.5) {
            FirstPlayer::Human
        } else {
            FirstPlayer::Computer
        }
    }
}

impl fmt::Display for FirstPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirstPlayer::Human => write!(f, "human"),
            FirstPlayer::Computer => write!(f, "computer"),
        }
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for FirstPlayer {
    type Err = ParseError;
    fn from_str(first: &str) -> Result<Self, Self::Err> {
        match first.to_lowercase().as_str() {
            "human" | "y" | "yes" => Ok(FirstPlayer::Human),
            "computer" | "n" | "no" => Ok(FirstPlayer::Computer),
            "random" => Ok(FirstPlayer::random()),
            _ => Err("invalid first player; options are: human, computer, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_player() {
        assert_eq!(FirstPlayer::Human, FirstPlayer::from_str("human").unwrap());
        assert_eq!(FirstPlayer::Human, FirstPlayer::from_str("Y").unwrap());
        assert_eq!(
            FirstPlayer::Computer,
            FirstPlayer::from_str("computer").unwrap()
        );
        assert_eq!(FirstPlayer::Computer, FirstPlayer::from_str("n").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let first = FirstPlayer::from_str("random").unwrap();
        assert!([FirstPlayer::Human, FirstPlayer::Computer].contains(&first));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(FirstPlayer::from_str("maybe").is_err());
    }
}
