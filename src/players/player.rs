use crate::gameplay::Move;

/// Trait for synthetic opponents seated by the arena.
///
/// Deciding is synchronous and must not block: the arena draws the move
/// inside the same handling step that records the human's move.
pub trait Player: Send {
    /// Choose a move for the current round.
    fn decide(&mut self) -> Move;
}
