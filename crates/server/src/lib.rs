//! Review Server - HTTP API for sentiment-ranked customer reviews
//!
//! This crate exposes the [`reviews`] pipeline over HTTP. Every path serves
//! the same collection:
//!
//! - `GET /<any>?location=&start_date=&end_date=`: reviews matching the
//!   filters, each with a `sentiment` object, sorted by descending compound
//!   score
//! - `POST /<any>` with `ReviewBody=...&Location=...`: validates and appends a
//!   review, answering `201` with the stored record
//! - any other method: `405`
//!
//! Errors are JSON objects with a single `error` string.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorResponse, ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
