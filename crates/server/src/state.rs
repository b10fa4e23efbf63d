use crate::config::ServerConfig;
use crate::error::ServerResult;
use auction::AuctionEngine;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Auction engine over the advertisement pool, seeded once at startup
    pub engine: AuctionEngine,

    started_at: Instant,
}

impl ServerState {
    /// Create new server state, seeding the pool from the configured file or
    /// the built-in list.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let engine = rtb::engine_from_config(config.pool_path())?;
        Ok(Self::with_engine(config, engine))
    }

    /// Create server state around an already-built engine
    pub fn with_engine(config: ServerConfig, engine: AuctionEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine,
            started_at: Instant::now(),
        }
    }

    /// Whole seconds since the state was built, i.e. since startup.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
