//! Review Server binary
//!
//! Reads `.env`, loads configuration (`PORT` picks the port, default 8000)
//! and serves the review API until shut down.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
