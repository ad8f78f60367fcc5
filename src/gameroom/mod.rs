//! Matchmaking and live sessions.
//!
//! All mutable game state lives in one [`Arena`], owned by one [`Dealer`]
//! task, so pairing and resolution are each a single critical section.
//!
//! ## Architecture
//!
//! - [`Queue`] — FIFO of players waiting for a human opponent
//! - [`Session`] — One live round between two [`Seat`]s
//! - [`Ledger`] — Process-lifetime scores and the top scorer
//! - [`Arena`] — Session manager tying the three together
//! - [`Dealer`] — Async task serializing [`Command`]s against the arena
//!
//! ## Events
//!
//! - [`Event`] — What happened, wrapped in an [`Envelope`] with a [`Recipient`]
//! - [`ArenaError`] — Validation failures reported to the sender
mod arena;
mod command;
mod dealer;
mod error;
mod event;
mod ledger;
mod queue;
mod session;

pub use arena::*;
pub use command::*;
pub use dealer::*;
pub use error::*;
pub use event::*;
pub use ledger::*;
pub use queue::*;
pub use session::*;
