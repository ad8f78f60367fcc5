use super::*;
use crate::DRAW_POINTS;
use crate::Score;
use crate::WIN_POINTS;

/// Result of a single round from the point of view of seat order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Draw,
    FirstWins,
    SecondWins,
}

impl Outcome {
    /// Points for (first, second) under the leaderboard policy.
    pub fn points(&self) -> (Score, Score) {
        match self {
            Self::Draw => (DRAW_POINTS, DRAW_POINTS),
            Self::FirstWins => (WIN_POINTS, 0),
            Self::SecondWins => (0, WIN_POINTS),
        }
    }
    /// Wire name of the winner.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::FirstWins => "p1",
            Self::SecondWins => "p2",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resolves a round. With d = (b - a) mod 3: 0 draws, 1 means b wins, 2 means a wins.
pub fn resolve(a: Move, b: Move) -> Outcome {
    match (u8::from(b) + 3 - u8::from(a)) % 3 {
        0 => Outcome::Draw,
        1 => Outcome::SecondWins,
        _ => Outcome::FirstWins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Move::*;
    use crate::gameplay::Outcome::*;

    #[test]
    fn resolves_all_nine_pairs() {
        let table = [
            (Rock, Rock, Draw),
            (Rock, Paper, SecondWins),
            (Rock, Scissors, FirstWins),
            (Paper, Rock, FirstWins),
            (Paper, Paper, Draw),
            (Paper, Scissors, SecondWins),
            (Scissors, Rock, SecondWins),
            (Scissors, Paper, FirstWins),
            (Scissors, Scissors, Draw),
        ];
        for (a, b, expected) in table {
            assert_eq!(resolve(a, b), expected, "{} vs {}", a, b);
        }
    }
    #[test]
    fn resolution_agrees_with_dominance() {
        for a in Move::ALL {
            for b in Move::ALL {
                match resolve(a, b) {
                    Draw => assert_eq!(a, b),
                    FirstWins => assert!(a.beats(&b)),
                    SecondWins => assert!(b.beats(&a)),
                }
            }
        }
    }
    #[test]
    fn swapping_seats_mirrors_outcome() {
        for a in Move::ALL {
            for b in Move::ALL {
                let mirrored = match resolve(a, b) {
                    Draw => Draw,
                    FirstWins => SecondWins,
                    SecondWins => FirstWins,
                };
                assert_eq!(resolve(b, a), mirrored);
            }
        }
    }
    #[test]
    fn scoring_policy() {
        assert_eq!(Draw.points(), (1, 1));
        assert_eq!(FirstWins.points(), (2, 0));
        assert_eq!(SecondWins.points(), (0, 2));
    }
    #[test]
    fn wire_labels() {
        assert_eq!(Draw.to_string(), "draw");
        assert_eq!(FirstWins.to_string(), "p1");
        assert_eq!(SecondWins.to_string(), "p2");
    }
}
