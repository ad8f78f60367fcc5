//! Synthetic opponents.
//!
//! - [`Player`] — Trait the arena uses to draw a bot move
//! - [`Computer`] — Uniformly random CPU opponent
mod computer;
mod player;

pub use computer::*;
pub use player::*;
