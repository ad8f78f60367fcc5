use crate::Arbitrary;

/// One of the three throws. Compactly encoded as 0 = rock, 1 = paper, 2 = scissors.
/// The encoding is internal; the wire uses the single-letter symbols.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Wire symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Rock => "r",
            Self::Paper => "p",
            Self::Scissors => "s",
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
    /// Cyclic dominance: paper covers rock, scissors cut paper, rock breaks scissors.
    pub fn beats(&self, other: &Self) -> bool {
        (u8::from(*self) + 3 - u8::from(*other)) % 3 == 1
    }
}

impl From<Move> for u8 {
    fn from(m: Move) -> Self {
        match m {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }
}

impl From<u8> for Move {
    /// Reduces modulo 3, so any byte maps onto a move.
    fn from(n: u8) -> Self {
        match n % 3 {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

/// Rejection for a move symbol outside {r, p, s}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMoveError(pub String);

impl std::fmt::Display for InvalidMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid move: {:?} (expected r, p or s)", self.0)
    }
}

impl std::error::Error for InvalidMoveError {}

impl TryFrom<&str> for Move {
    type Error = InvalidMoveError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            _ => Err(InvalidMoveError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Self::from(rand::random_range(0..3u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_symbols() {
        assert_eq!(Move::try_from("r"), Ok(Move::Rock));
        assert_eq!(Move::try_from("p"), Ok(Move::Paper));
        assert_eq!(Move::try_from("s"), Ok(Move::Scissors));
    }
    #[test]
    fn parse_words_and_case() {
        assert_eq!(Move::try_from("Rock"), Ok(Move::Rock));
        assert_eq!(Move::try_from(" PAPER "), Ok(Move::Paper));
        assert_eq!(Move::try_from("S"), Ok(Move::Scissors));
    }
    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Move::try_from("x"), Err(InvalidMoveError("x".into())));
        assert!(Move::try_from("").is_err());
        assert!(Move::try_from("lizard").is_err());
    }
    #[test]
    fn display_is_wire_symbol() {
        let symbols = Move::ALL.map(|m| m.to_string());
        assert_eq!(symbols, ["r", "p", "s"]);
    }
    #[test]
    fn encoding_is_compact() {
        for m in Move::ALL {
            assert_eq!(Move::from(u8::from(m)), m);
        }
        assert_eq!(Move::from(4), Move::Paper);
    }
    #[test]
    fn dominance_is_cyclic() {
        assert!(Move::Paper.beats(&Move::Rock));
        assert!(Move::Scissors.beats(&Move::Paper));
        assert!(Move::Rock.beats(&Move::Scissors));
        for m in Move::ALL {
            assert!(!m.beats(&m));
        }
    }
    #[test]
    fn random_is_a_move() {
        for _ in 0..64 {
            assert!(Move::ALL.contains(&Move::random()));
        }
    }
}
