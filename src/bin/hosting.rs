//! Hosting Server Binary
//!
//! Runs the HTTP server for live rock-paper-scissors matchmaking.
//! Clients connect over WebSocket at `/ws`.

use clap::Parser;
use roshambo::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    hosting::Server::run(hosting::Config::parse()).await?;
    Ok(())
}
