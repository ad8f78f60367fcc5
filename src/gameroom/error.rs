use crate::RoomName;
use crate::Username;
use crate::gameplay::InvalidMoveError;

/// Validation failures reported back to whoever sent the command.
/// Moves for unknown rooms are not errors; they are dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    InvalidMove(InvalidMoveError),
    ReservedName(Username),
    AlreadyQueued(Username),
    AlreadyPlaying { name: Username, room: RoomName },
    NotSeated { name: Username, room: RoomName },
}

impl From<InvalidMoveError> for ArenaError {
    fn from(e: InvalidMoveError) -> Self {
        Self::InvalidMove(e)
    }
}

impl std::fmt::Display for ArenaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMove(e) => write!(f, "{}", e),
            Self::ReservedName(name) => write!(f, "name {} is reserved", name),
            Self::AlreadyQueued(name) => write!(f, "{} is already waiting for an opponent", name),
            Self::AlreadyPlaying { name, room } => write!(f, "{} is already playing in {}", name, room),
            Self::NotSeated { name, room } => write!(f, "{} is not seated in {}", name, room),
        }
    }
}

impl std::error::Error for ArenaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidMove(e) => Some(e),
            _ => None,
        }
    }
}
