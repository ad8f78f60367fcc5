use super::*;
use crate::COMPUTER_SCORE;
use crate::gameroom::*;

/// Errors that can occur while decoding client frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    Malformed(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed message: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Handles Event to ServerMessage conversion and command parsing.
/// Centralizes the protocol layer between internal events and wire format.
pub struct Protocol;

impl Protocol {
    /// Converts an internal Event to a wire ServerMessage.
    pub fn encode(event: &Event) -> ServerMessage {
        match event {
            Event::Waiting => ServerMessage::waiting(),
            Event::StartGame { room, opponent } => ServerMessage::start_game(room, opponent),
            Event::Result(round) => ServerMessage::Result {
                room: round.room.clone(),
                players: round.seats.clone().map(|s| s.name().to_string()),
                moves: round.moves.map(|m| m.to_string()),
                winner: round.outcome.to_string(),
                scores: round
                    .seats
                    .iter()
                    .zip(round.scores)
                    .map(|(seat, score)| {
                        (
                            seat.name().to_string(),
                            score.map_or(Tally::Unranked(COMPUTER_SCORE), Tally::Points),
                        )
                    })
                    .collect(),
            },
            Event::TopScorer { name, score } => ServerMessage::top_scorer(name, *score),
            Event::Rejected(e) => ServerMessage::error(e),
        }
    }
    /// Parses a client text frame into an arena Command.
    pub fn decode(s: &str) -> Result<Command, ProtocolError> {
        match serde_json::from_str::<ClientMessage>(s)
            .map_err(|e| ProtocolError::Malformed(e.to_string()))?
        {
            ClientMessage::Join {
                username,
                mode,
                bot,
            } => Ok(Command::Join(Join {
                username,
                mode: match (mode, bot) {
                    (Some(WireMode::Computer), _) | (_, true) => Mode::Computer,
                    _ => Mode::Friend,
                },
            })),
            ClientMessage::PlayMove {
                username,
                room,
                choice,
            } => Ok(Command::Play(Play {
                username,
                room,
                choice,
            })),
        }
    }
}
