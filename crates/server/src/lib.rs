//! RTB Server - HTTP API for the ad auction
//!
//! This crate is the transport layer around the `auction` core. It parses
//! bid requests, runs the auction and maps the outcome onto HTTP:
//!
//! - **Bidding**: `POST /bidding/ad` returns the redacted winning advertisement
//! - **Health**: liveness and readiness probes
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
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `POST /bidding/ad` - Run the auction for `{"country", "category"}`
//!
//! `POST /bidding/ad` answers `200` with the winner, `404 NO_MATCH` when no
//! advertisement targets the profile and `400 BAD_REQUEST` when the body is
//! missing or malformed.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
pub use telemetry::TracingAuctionMetrics;
