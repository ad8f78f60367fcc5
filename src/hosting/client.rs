use crate::Username;
use tokio::sync::mpsc::UnboundedSender;

/// One live WebSocket connection as seen by the Casino.
///
/// The tx channel carries JSON frames out to the socket. The name is
/// bound once the arena accepts a join from this connection, and is what
/// player-addressed events are routed by.
#[derive(Debug)]
pub struct Client {
    tx: UnboundedSender<String>,
    name: Option<Username>,
}

impl Client {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx, name: None }
    }
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    /// Binds a new name, returning the one it replaces.
    pub fn bind(&mut self, name: Username) -> Option<Username> {
        self.name.replace(name)
    }
    pub fn is(&self, name: &str) -> bool {
        self.name() == Some(name)
    }
    /// Queues a frame. False once the socket side has hung up.
    pub fn send(&self, json: &str) -> bool {
        self.tx
            .send(json.to_string())
            .inspect_err(|e| log::warn!("failed to queue frame: {}", e))
            .is_ok()
    }
}
