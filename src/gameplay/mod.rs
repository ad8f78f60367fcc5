//! Rules of a single rock-paper-scissors round.
//!
//! - [`Move`] — The three throws and their wire symbols
//! - [`resolve`] — Deterministic round resolution into an [`Outcome`]
mod moves;
mod outcome;

pub use moves::*;
pub use outcome::*;
