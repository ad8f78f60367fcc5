use super::*;
use crate::ID;
use crate::Username;
use crate::gameroom::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Weak;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

type Tx = UnboundedSender<Ticket<ID<Client>>>;
type Rx = UnboundedReceiver<Delivery<ID<Client>>>;

/// Connection registry in front of the Dealer.
///
/// Holds no game state. It tags inbound frames with the connection they
/// came from, forwards them to the dealer, and fans the resulting
/// deliveries back out to the right sockets.
pub struct Casino {
    clients: RwLock<HashMap<ID<Client>, Client>>,
    dealer: Tx,
}

impl Casino {
    /// Spawns the dealer and the fan-out task around a fresh arena.
    /// Must be called from within a tokio runtime.
    pub fn open(arena: Arena) -> Arc<Self> {
        let (tx, rx) = unbounded_channel();
        let casino = Arc::new(Self {
            clients: RwLock::new(HashMap::new()),
            dealer: Dealer::spawn(arena, tx),
        });
        tokio::spawn(Self::dispatch(Arc::downgrade(&casino), rx));
        log::info!("[casino] open");
        casino
    }

    /// Registers a new connection and returns its outbound frame stream.
    pub async fn connect(&self) -> (ID<Client>, UnboundedReceiver<String>) {
        let id = ID::default();
        let (tx, rx) = unbounded_channel();
        self.clients.write().await.insert(id, Client::new(tx));
        log::info!("[casino] client {} connected", id);
        (id, rx)
    }

    /// Forgets a connection. If nobody else speaks for its name, the
    /// player is taken out of the waiting queue.
    pub async fn disconnect(&self, id: ID<Client>) {
        let mut clients = self.clients.write().await;
        let gone = clients
            .remove(&id)
            .and_then(|c| c.name().map(String::from))
            .filter(|name| !clients.values().any(|c| c.is(name)));
        drop(clients);
        log::info!("[casino] client {} disconnected", id);
        if let Some(name) = gone {
            self.forward(id, Command::Leave(name));
        }
    }

    /// Handles one inbound text frame from a connection.
    pub async fn receive(&self, id: ID<Client>, text: &str) {
        match Protocol::decode(text) {
            Ok(command) => self.forward(id, command),
            Err(e) => {
                log::warn!("[casino] client {} sent {}", id, e);
                self.unicast(id, &ServerMessage::error(&e).to_json()).await;
            }
        }
    }

    pub async fn population(&self) -> usize {
        self.clients.read().await.len()
    }
}

impl Casino {
    /// Binds an admitted name to its connection. Whatever name nobody
    /// speaks for afterwards is released from the queue: the one this
    /// connection switched away from, or the admitted one if the
    /// connection already closed.
    async fn bind(&self, id: ID<Client>, name: Username) {
        let mut clients = self.clients.write().await;
        let released = match clients.get_mut(&id) {
            Some(client) => client.bind(name),
            None => Some(name),
        };
        let orphan = released.filter(|name| !clients.values().any(|c| c.is(name)));
        drop(clients);
        if let Some(name) = orphan {
            log::info!("[casino] nobody speaks for {} anymore", name);
            self.forward(id, Command::Leave(name));
        }
    }

    fn forward(&self, origin: ID<Client>, command: Command) {
        self.dealer
            .send(Ticket { origin, command })
            .inspect_err(|_| log::error!("[casino] dealer is gone"))
            .ok();
    }

    async fn dispatch(casino: Weak<Self>, mut rx: Rx) {
        while let Some(delivery) = rx.recv().await {
            match casino.upgrade() {
                Some(casino) => casino.deliver(delivery).await,
                None => break,
            }
        }
        log::debug!("[casino] dispatch stopped");
    }

    async fn deliver(&self, delivery: Delivery<ID<Client>>) {
        let Delivery {
            origin,
            admitted,
            envelope,
        } = delivery;
        if let Some(name) = admitted {
            self.bind(origin, name).await;
        }
        let json = Protocol::encode(&envelope.event).to_json();
        let clients = self.clients.read().await;
        let sent = match envelope.to {
            Recipient::Origin => clients
                .get(&origin)
                .map(|c| c.send(&json))
                .into_iter()
                .filter(|ok| *ok)
                .count(),
            Recipient::Player(ref name) => clients
                .values()
                .filter(|c| c.is(name))
                .map(|c| c.send(&json))
                .filter(|ok| *ok)
                .count(),
            Recipient::Everyone => clients
                .values()
                .map(|c| c.send(&json))
                .filter(|ok| *ok)
                .count(),
        };
        if sent == 0 {
            log::debug!("[casino] nobody to receive {}", envelope.event);
        }
    }

    async fn unicast(&self, id: ID<Client>, json: &str) {
        if let Some(client) = self.clients.read().await.get(&id) {
            client.send(json);
        }
    }
}

#[cfg(feature = "server")]
impl Casino {
    /// Spawns the WebSocket bridge between a socket and the casino.
    pub async fn bridge(
        self: Arc<Self>,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        use futures::StreamExt;
        let (id, mut rx) = self.connect().await;
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    msg = rx.recv() => match msg {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = stream.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => self.receive(id, &text).await,
                        Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            self.disconnect(id).await;
            let _ = session.close(None).await;
        });
    }
}
