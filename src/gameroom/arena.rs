use super::*;
use crate::COMPUTER_NAME;
use crate::RoomName;
use crate::gameplay::*;
use crate::players::Computer;
use crate::players::Player;
use std::collections::HashMap;

/// Matchmaking and session manager.
///
/// Owns the waiting queue, every live session, the score ledger, and the
/// bot. Every command runs to completion against `&mut self`, so whoever
/// owns the arena (the [`Dealer`]) is the single critical section for
/// pairing and resolution.
///
/// - join: bot session, pair with the queue head, or enqueue
/// - play: record, maybe draw the bot move, resolve on the second move
/// - leave: drop a waiting player who disconnected
pub struct Arena {
    queue: Queue,
    sessions: HashMap<RoomName, Session>,
    ledger: Ledger,
    bot: Box<dyn Player>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Computer::default())
    }
}

impl Arena {
    pub fn new<P>(bot: P) -> Self
    where
        P: Player + 'static,
    {
        Self {
            queue: Queue::default(),
            sessions: HashMap::new(),
            ledger: Ledger::default(),
            bot: Box::new(bot),
        }
    }

    pub fn handle(&mut self, command: Command) -> Result<Vec<Envelope>, ArenaError> {
        match command {
            Command::Join(join) => self.join(join),
            Command::Play(play) => self.play(play),
            Command::Leave(name) => {
                self.leave(&name);
                Ok(Vec::new())
            }
        }
    }

    pub fn join(&mut self, join: Join) -> Result<Vec<Envelope>, ArenaError> {
        let Join { username, mode } = join;
        self.admit(&username)?;
        self.ledger.enroll(&username);
        let mut envelopes = match mode {
            Mode::Computer => self.open(Seat::Human(username), Seat::Computer),
            Mode::Friend => match self.queue.dequeue() {
                Some(queued) => self.open(Seat::Human(queued), Seat::Human(username)),
                None => {
                    log::info!("[arena] {} waiting for an opponent", username);
                    self.queue.enqueue(username);
                    vec![Envelope::origin(Event::Waiting)]
                }
            },
        };
        envelopes.extend(self.standings());
        Ok(envelopes)
    }

    pub fn play(&mut self, play: Play) -> Result<Vec<Envelope>, ArenaError> {
        let choice = Move::try_from(play.choice.as_str())?;
        let Some(session) = self.sessions.get_mut(&play.room) else {
            log::debug!("[arena] ignoring move for unknown room {}", play.room);
            return Ok(Vec::new());
        };
        let pos = session
            .position(&play.username)
            .ok_or_else(|| ArenaError::NotSeated {
                name: play.username.clone(),
                room: play.room.clone(),
            })?;
        if let Some(previous) = session.record(pos, choice) {
            log::debug!(
                "[arena] {} replaced {} with {} in {}",
                play.username,
                previous,
                choice,
                play.room
            );
        }
        if let Some(cpu) = session.computer().filter(|&i| !session.has_moved(i)) {
            let drawn = self.bot.decide();
            log::debug!("[arena] computer throws {} in {}", drawn.name(), play.room);
            session.record(cpu, drawn);
        }
        if !session.is_complete() {
            return Ok(Vec::new());
        }
        match self.sessions.remove(&play.room) {
            Some(session) => Ok(self.settle(session)),
            None => Ok(Vec::new()),
        }
    }

    /// Removes a waiting player. Live sessions are never cancelled.
    pub fn leave(&mut self, name: &str) -> bool {
        self.queue
            .remove(name)
            .then(|| log::info!("[arena] {} left the queue", name))
            .is_some()
    }
}

impl Arena {
    fn admit(&self, name: &str) -> Result<(), ArenaError> {
        if name == COMPUTER_NAME {
            return Err(ArenaError::ReservedName(name.to_string()));
        }
        if self.queue.contains(name) {
            return Err(ArenaError::AlreadyQueued(name.to_string()));
        }
        if let Some(room) = self.playing(name) {
            return Err(ArenaError::AlreadyPlaying {
                name: name.to_string(),
                room: room.clone(),
            });
        }
        Ok(())
    }

    fn open(&mut self, first: Seat, second: Seat) -> Vec<Envelope> {
        let room = self.name(&first, &second);
        log::info!("[arena] opened {} ({} vs {})", room, first, second);
        let session = Session::new(room.clone(), first, second);
        let envelopes = session
            .seats()
            .iter()
            .enumerate()
            .filter_map(|(i, seat)| seat.human().map(|name| (i, name)))
            .map(|(i, name)| {
                Envelope::player(
                    name,
                    Event::StartGame {
                        room: room.clone(),
                        opponent: session.opponent(i).name().to_string(),
                    },
                )
            })
            .collect();
        self.sessions.insert(room, session);
        envelopes
    }

    fn settle(&mut self, session: Session) -> Vec<Envelope> {
        let Some(moves) = session.moves() else {
            return Vec::new();
        };
        let outcome = resolve(moves[0], moves[1]);
        let (p1, p2) = outcome.points();
        let seats = session.seats().clone();
        let scores = [(&seats[0], p1), (&seats[1], p2)]
            .map(|(seat, points)| seat.human().map(|name| self.ledger.award(name, points)));
        let round = Round {
            room: session.room().clone(),
            seats,
            moves,
            outcome,
            scores,
        };
        log::info!("[arena] {}", Event::Result(round.clone()));
        let mut envelopes = round
            .seats
            .iter()
            .filter_map(Seat::human)
            .map(|name| Envelope::player(name, Event::Result(round.clone())))
            .collect::<Vec<_>>();
        envelopes.extend(self.standings());
        envelopes
    }

    fn standings(&self) -> Option<Envelope> {
        self.ledger.leader().map(|(name, score)| {
            Envelope::everyone(Event::TopScorer {
                name: name.clone(),
                score,
            })
        })
    }

    /// `{a}_vs_{b}`, suffixed only if that key is somehow already live.
    fn name(&self, first: &Seat, second: &Seat) -> RoomName {
        let base = format!("{}_vs_{}", first.label(), second.label());
        std::iter::once(base.clone())
            .chain((2..).map(|n| format!("{}#{}", base, n)))
            .find(|room| !self.sessions.contains_key(room))
            .unwrap_or_else(|| base.clone())
    }

    fn playing(&self, name: &str) -> Option<&RoomName> {
        self.sessions
            .values()
            .find(|s| s.position(name).is_some())
            .map(Session::room)
    }
}

impl Arena {
    pub fn queue(&self) -> &Queue {
        &self.queue
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn session(&self, room: &str) -> Option<&Session> {
        self.sessions.get(room)
    }
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.values()
    }
}
