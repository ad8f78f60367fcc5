use crate::RoomName;
use crate::Username;

/// Who the joiner wants to face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Wait for (or pair with) another human.
    #[default]
    Friend,
    /// Play the Computer immediately.
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub username: Username,
    pub mode: Mode,
}

impl Join {
    pub fn friend(username: &str) -> Self {
        Self {
            username: username.to_string(),
            mode: Mode::Friend,
        }
    }
    pub fn computer(username: &str) -> Self {
        Self {
            username: username.to_string(),
            mode: Mode::Computer,
        }
    }
}

/// A move submission. The symbol is kept raw; the arena validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    pub username: Username,
    pub room: RoomName,
    pub choice: String,
}

impl Play {
    pub fn new(username: &str, room: &str, choice: &str) -> Self {
        Self {
            username: username.to_string(),
            room: room.to_string(),
            choice: choice.to_string(),
        }
    }
}

/// Inbound requests handled by the arena, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Join(Join),
    Play(Play),
    /// Last connection for this name went away.
    Leave(Username),
}

impl From<Join> for Command {
    fn from(join: Join) -> Self {
        Self::Join(join)
    }
}
impl From<Play> for Command {
    fn from(play: Play) -> Self {
        Self::Play(play)
    }
}
