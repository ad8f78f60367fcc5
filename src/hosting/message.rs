use crate::Score;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Messages sent from server to client over WebSocket.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Queued until another human joins.
    Waiting { msg: String },
    /// A session was opened; moves go to `room`.
    StartGame { room: String, opponent: String },
    /// Round resolved. `winner` is "draw", "p1" or "p2" in `players` order.
    Result {
        room: String,
        players: [String; 2],
        moves: [String; 2],
        winner: String,
        scores: BTreeMap<String, Tally>,
    },
    /// Leaderboard head.
    TopScorer { name: String, score: Score },
    /// The last request was rejected.
    Error { msg: String },
}

/// A score as reported on the wire. The Computer gets a placeholder.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Tally {
    Points(Score),
    Unranked(&'static str),
}

/// Messages sent from client to server over WebSocket.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Join {
        username: String,
        #[serde(default)]
        mode: Option<WireMode>,
        #[serde(default)]
        bot: bool,
    },
    PlayMove {
        username: String,
        room: String,
        #[serde(rename = "move")]
        choice: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireMode {
    Friend,
    Computer,
}

impl ServerMessage {
    pub fn waiting() -> Self {
        Self::Waiting {
            msg: String::from("Waiting for another player to join..."),
        }
    }
    pub fn start_game(room: &str, opponent: &str) -> Self {
        Self::StartGame {
            room: room.to_string(),
            opponent: opponent.to_string(),
        }
    }
    pub fn top_scorer(name: &str, score: Score) -> Self {
        Self::TopScorer {
            name: name.to_string(),
            score,
        }
    }
    pub fn error(msg: impl ToString) -> Self {
        Self::Error {
            msg: msg.to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}
