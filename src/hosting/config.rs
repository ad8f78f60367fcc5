use crate::gameroom::Arena;
use crate::players::Computer;

/// Runtime configuration. Every flag can also come from the environment.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "hosting", about = "Rock-paper-scissors matchmaking server")]
pub struct Config {
    /// Socket address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
    pub bind: String,
    /// HTTP worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    /// Seed for the Computer opponent, for reproducible bot games.
    #[arg(long, env = "BOT_SEED")]
    pub seed: Option<u64>,
}

impl Config {
    pub fn arena(&self) -> Arena {
        match self.seed {
            Some(seed) => Arena::new(Computer::seeded(seed)),
            None => Arena::default(),
        }
    }
}
