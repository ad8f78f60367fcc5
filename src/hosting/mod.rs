//! WebSocket hosting for the arena.
//!
//! - [`Protocol`] — JSON codec between wire messages and arena commands/events
//! - [`Casino`] — Connection registry and event fan-out in front of the dealer
//! - [`Server`] — actix-web app serving the entry page and the `/ws` endpoint
mod casino;
mod client;
#[cfg(feature = "server")]
mod config;
mod message;
mod protocol;
#[cfg(feature = "server")]
mod server;

pub use casino::*;
pub use client::*;
#[cfg(feature = "server")]
pub use config::*;
pub use message::*;
pub use protocol::*;
#[cfg(feature = "server")]
pub use server::*;
