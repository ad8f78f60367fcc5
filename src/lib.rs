//! Real-time rock-paper-scissors matchmaking.
//!
//! Anonymous clients join over a WebSocket, get paired with another human
//! (or a random-move Computer), submit one move each, and the round result
//! feeds a process-lifetime leaderboard.
//!
//! ## Modules
//!
//! - [`gameplay`] — Moves, outcomes, and the round resolver
//! - [`players`] — Synthetic opponents
//! - [`gameroom`] — Matchmaking queue, live sessions, score ledger, dealer actor
//! - [`hosting`] — WebSocket wire protocol and actix-web server

pub mod gameplay;
pub mod gameroom;
pub mod hosting;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Cumulative leaderboard points.
pub type Score = u32;
/// Client-supplied player name. Equality is the only identity.
pub type Username = String;
/// Key naming a live session, derived from its participants.
pub type RoomName = String;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for bots and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::from(uuid::Uuid::now_v7())
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// SCORING
// ============================================================================
/// Points awarded to each participant of a drawn round.
pub const DRAW_POINTS: Score = 1;
/// Points awarded to the winner of a decisive round. The loser gets nothing.
pub const WIN_POINTS: Score = 2;

// ============================================================================
// COMPUTER OPPONENT
// ============================================================================
/// Name reported to humans facing the bot. Reserved: humans cannot join as it.
pub const COMPUTER_NAME: &str = "Computer";
/// Suffix used in bot room names, e.g. `carol_vs_computer`.
pub const COMPUTER_ROOM: &str = "computer";
/// Score placeholder reported for the bot, which never enters the ledger.
pub const COMPUTER_SCORE: &str = "-";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
