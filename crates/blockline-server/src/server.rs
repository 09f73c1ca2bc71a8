use std::sync::Arc;

use blockline_ledger::Ledger;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::{readiness, AppState};

/// Blockline ledger server.
pub struct BlocklineServer {
    config: ServerConfig,
    ledger: Arc<Ledger>,
}

impl BlocklineServer {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_ledger(config, Arc::new(Ledger::default()))
    }

    /// Serve an existing, not yet initialized, ledger.
    pub fn with_ledger(config: ServerConfig, ledger: Arc<Ledger>) -> Self {
        Self { config, ledger }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Start serving requests.
    ///
    /// Genesis seeding runs on its own task while the listener binds;
    /// handlers hold at the readiness gate until it completes. A seeding
    /// failure aborts start-up.
    pub async fn serve(self) -> ServerResult<()> {
        let (signal, gate) = readiness();
        let seeding = {
            let ledger = Arc::clone(&self.ledger);
            tokio::spawn(async move {
                let genesis = ledger.initialize()?;
                tracing::info!(fingerprint = %genesis.fingerprint, "genesis entry created");
                signal.mark_ready();
                Ok::<_, ServerError>(())
            })
        };

        let app = build_router(AppState::new(self.ledger, gate), &self.config)?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;

        seeding
            .await
            .map_err(|e| ServerError::Internal(format!("genesis task failed: {e}")))??;

        tracing::info!("Blockline server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
