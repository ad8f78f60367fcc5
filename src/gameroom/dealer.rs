use super::*;
use crate::Username;
use tokio::sync::mpsc::*;

/// A command tagged with whoever sent it.
#[derive(Debug, Clone)]
pub struct Ticket<O> {
    pub origin: O,
    pub command: Command,
}

/// An envelope tagged with the origin of the command that produced it,
/// so [`Recipient::Origin`] can be resolved downstream.
///
/// The first delivery of an accepted join carries the admitted name, so
/// the origin can be bound to it before anything addressed to that name
/// is routed. Rejected joins never carry one.
#[derive(Debug, Clone)]
pub struct Delivery<O> {
    pub origin: O,
    pub admitted: Option<Username>,
    pub envelope: Envelope,
}

/// Task that owns the [`Arena`] and serializes every command against it.
///
/// - Transport sends Tickets on the inbox
/// - Dealer runs each one to completion before reading the next
/// - Envelopes (or a Rejected event) come back out as Deliveries
pub struct Dealer<O> {
    arena: Arena,
    inbox: UnboundedReceiver<Ticket<O>>,
    outbox: UnboundedSender<Delivery<O>>,
}

impl<O> Dealer<O>
where
    O: Copy + Send + std::fmt::Debug + 'static,
{
    pub fn spawn(arena: Arena, outbox: UnboundedSender<Delivery<O>>) -> UnboundedSender<Ticket<O>> {
        let (tx, rx) = unbounded_channel();
        let dealer = Self {
            arena,
            outbox,
            inbox: rx,
        };
        tokio::spawn(dealer.run());
        tx
    }
    async fn run(mut self) {
        log::debug!("[dealer] accepting commands");
        while let Some(ticket) = self.inbox.recv().await {
            self.handle(ticket);
        }
        log::debug!("[dealer] inbox closed");
    }
    fn handle(&mut self, ticket: Ticket<O>) {
        let Ticket { origin, command } = ticket;
        log::debug!("[dealer] {:?} from {:?}", command, origin);
        let joiner = match command {
            Command::Join(ref join) => Some(join.username.clone()),
            _ => None,
        };
        let (admitted, envelopes) = match self.arena.handle(command) {
            Ok(envelopes) => (joiner, envelopes),
            Err(e) => {
                log::warn!("[dealer] rejected command from {:?}: {}", origin, e);
                (None, vec![Envelope::origin(Event::Rejected(e))])
            }
        };
        envelopes
            .into_iter()
            .zip(std::iter::once(admitted).chain(std::iter::repeat(None)))
            .map(|(envelope, admitted)| Delivery {
                origin,
                admitted,
                envelope,
            })
            .map(|delivery| self.outbox.send(delivery))
            .filter_map(Result::err)
            .for_each(|e| log::warn!("[dealer] undeliverable {}", e.0.envelope.event));
    }
}
