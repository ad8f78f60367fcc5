use crate::COMPUTER_NAME;
use crate::COMPUTER_ROOM;
use crate::RoomName;
use crate::Username;
use crate::gameplay::Move;

/// A participant slot. The bot is its own variant so it can never be
/// mistaken for, or scored as, a human of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Seat {
    Human(Username),
    Computer,
}

impl Seat {
    /// Name shown to the opponent.
    pub fn name(&self) -> &str {
        match self {
            Self::Human(name) => name,
            Self::Computer => COMPUTER_NAME,
        }
    }
    /// Fragment used when deriving room names.
    pub fn label(&self) -> &str {
        match self {
            Self::Human(name) => name,
            Self::Computer => COMPUTER_ROOM,
        }
    }
    pub fn human(&self) -> Option<&str> {
        match self {
            Self::Human(name) => Some(name),
            Self::Computer => None,
        }
    }
    pub fn is_computer(&self) -> bool {
        matches!(self, Self::Computer)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One live round between two seats.
/// Lives from pairing until the second move arrives, then is discarded.
#[derive(Debug, Clone)]
pub struct Session {
    room: RoomName,
    seats: [Seat; 2],
    moves: [Option<Move>; 2],
}

impl Session {
    pub fn new(room: RoomName, first: Seat, second: Seat) -> Self {
        Self {
            room,
            seats: [first, second],
            moves: [None, None],
        }
    }
    pub fn room(&self) -> &RoomName {
        &self.room
    }
    pub fn seats(&self) -> &[Seat; 2] {
        &self.seats
    }
    /// Seat index of a human participant.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.seats.iter().position(|s| s.human() == Some(name))
    }
    /// Seat index of the bot, if this is a bot-flavored session.
    pub fn computer(&self) -> Option<usize> {
        self.seats.iter().position(Seat::is_computer)
    }
    pub fn opponent(&self, pos: usize) -> &Seat {
        &self.seats[1 - pos]
    }
    pub fn has_moved(&self, pos: usize) -> bool {
        self.moves[pos].is_some()
    }
    /// Records a move, returning whatever it replaced. Last write wins
    /// until the session resolves.
    pub fn record(&mut self, pos: usize, choice: Move) -> Option<Move> {
        self.moves[pos].replace(choice)
    }
    pub fn is_complete(&self) -> bool {
        self.moves.iter().all(Option::is_some)
    }
    /// Both moves in seat order once complete.
    pub fn moves(&self) -> Option<[Move; 2]> {
        match self.moves {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }
    pub fn count(&self) -> usize {
        self.moves.iter().flatten().count()
    }
}
