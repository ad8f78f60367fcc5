use crate::Username;
use std::collections::VecDeque;

/// FIFO of players waiting for a human opponent.
/// A player appears at most once; the head is paired first.
#[derive(Debug, Default)]
pub struct Queue(VecDeque<Username>);

impl Queue {
    /// Appends to the tail. Returns false, leaving the queue untouched,
    /// if the player is already waiting.
    pub fn enqueue(&mut self, name: Username) -> bool {
        if self.contains(&name) {
            false
        } else {
            self.0.push_back(name);
            true
        }
    }
    /// Pops the head, or None with no side effect.
    pub fn dequeue(&mut self) -> Option<Username> {
        self.0.pop_front()
    }
    /// Drops a waiting player wherever they sit in line.
    pub fn remove(&mut self, name: &str) -> bool {
        self.0
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.0.remove(i))
            .is_some()
    }
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
