use crate::Score;
use crate::Username;
use std::collections::BTreeMap;

/// Process-lifetime leaderboard. Scores never decrease.
/// Only humans are ever enrolled; the Computer has no entry.
#[derive(Debug, Default)]
pub struct Ledger(BTreeMap<Username, Score>);

impl Ledger {
    /// Creates a zero entry on first sight. Existing scores are kept.
    pub fn enroll(&mut self, name: &str) {
        if !self.0.contains_key(name) {
            self.0.insert(name.to_string(), 0);
        }
    }
    /// Adds points and returns the new total.
    pub fn award(&mut self, name: &str, points: Score) -> Score {
        let score = self.0.entry(name.to_string()).or_default();
        *score = score.saturating_add(points);
        *score
    }
    pub fn get(&self, name: &str) -> Option<Score> {
        self.0.get(name).copied()
    }
    /// Highest score; ties go to the lexicographically smallest name.
    pub fn leader(&self) -> Option<(&Username, Score)> {
        self.0
            .iter()
            .map(|(name, score)| (name, *score))
            .fold(None, |best, (name, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((name, score)),
            })
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enroll_starts_at_zero() {
        let mut ledger = Ledger::default();
        ledger.enroll("alice");
        assert_eq!(ledger.get("alice"), Some(0));
        assert_eq!(ledger.get("bob"), None);
    }
    #[test]
    fn enroll_keeps_existing_score() {
        let mut ledger = Ledger::default();
        ledger.award("alice", 4);
        ledger.enroll("alice");
        assert_eq!(ledger.get("alice"), Some(4));
    }
    #[test]
    fn award_accumulates() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.award("alice", 2), 2);
        assert_eq!(ledger.award("alice", 1), 3);
        assert_eq!(ledger.award("alice", 0), 3);
    }
    #[test]
    fn award_saturates() {
        let mut ledger = Ledger::default();
        ledger.award("alice", Score::MAX);
        assert_eq!(ledger.award("alice", 2), Score::MAX);
    }
    #[test]
    fn leader_of_empty_is_none() {
        assert_eq!(Ledger::default().leader(), None);
    }
    #[test]
    fn leader_is_max() {
        let mut ledger = Ledger::default();
        ledger.award("alice", 1);
        ledger.award("bob", 5);
        ledger.award("carol", 3);
        assert_eq!(ledger.leader(), Some((&"bob".to_string(), 5)));
    }
    #[test]
    fn leader_ties_go_to_smallest_name() {
        let mut ledger = Ledger::default();
        ledger.award("zed", 2);
        ledger.award("amy", 2);
        ledger.award("max", 1);
        assert_eq!(ledger.leader(), Some((&"amy".to_string(), 2)));
    }
}
