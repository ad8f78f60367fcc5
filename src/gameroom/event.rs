use super::*;
use crate::RoomName;
use crate::Score;
use crate::Username;
use crate::gameplay::Move;
use crate::gameplay::Outcome;

/// A resolved round as reported to both participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub room: RoomName,
    pub seats: [Seat; 2],
    pub moves: [Move; 2],
    pub outcome: Outcome,
    /// Ledger totals after the award. None for the Computer.
    pub scores: [Option<Score>; 2],
}

/// Events emitted by the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Requester was queued; nobody to pair with yet.
    Waiting,
    /// A session was opened for the recipient.
    StartGame { room: RoomName, opponent: Username },
    /// Both moves are in and the session is gone.
    Result(Round),
    /// Current leaderboard head, recomputed after joins and resolutions.
    TopScorer { name: Username, score: Score },
    /// The originating command failed validation.
    Rejected(ArenaError),
}

/// Addressing relative to the command being handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Whoever sent the command.
    Origin,
    /// Every connection speaking for this name.
    Player(Username),
    /// All connected clients.
    Everyone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub to: Recipient,
    pub event: Event,
}

impl Envelope {
    pub fn origin(event: Event) -> Self {
        Self {
            to: Recipient::Origin,
            event,
        }
    }
    pub fn player(name: &str, event: Event) -> Self {
        Self {
            to: Recipient::Player(name.to_string()),
            event,
        }
    }
    pub fn everyone(event: Event) -> Self {
        Self {
            to: Recipient::Everyone,
            event,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Waiting => write!(f, "waiting"),
            Event::StartGame { room, opponent } => write!(f, "start {} vs {}", room, opponent),
            Event::Result(round) => write!(
                f,
                "{}: {} {} / {} {} -> {}",
                round.room,
                round.seats[0],
                round.moves[0],
                round.seats[1],
                round.moves[1],
                round.outcome
            ),
            Event::TopScorer { name, score } => write!(f, "top scorer {} ({})", name, score),
            Event::Rejected(e) => write!(f, "rejected: {}", e),
        }
    }
}
