use std::sync::Arc;

use blockline_ledger::Ledger;
use tokio::sync::watch;

use crate::error::{ServerError, ServerResult};

/// Create a linked readiness signal and gate.
pub fn readiness() -> (ReadinessSignal, ReadinessGate) {
    let (tx, rx) = watch::channel(false);
    (ReadinessSignal { tx }, ReadinessGate { rx })
}

/// Completes the gate. Dropping it without calling
/// [`mark_ready`](Self::mark_ready) closes the gate for good.
pub struct ReadinessSignal {
    tx: watch::Sender<bool>,
}

impl ReadinessSignal {
    pub fn mark_ready(self) {
        self.tx.send_replace(true);
    }
}

/// Handlers wait on this before touching the ledger.
#[derive(Clone, Debug)]
pub struct ReadinessGate {
    rx: watch::Receiver<bool>,
}

impl ReadinessGate {
    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once genesis seeding has finished.
    pub async fn wait(&self) -> ServerResult<()> {
        let mut rx = self.rx.clone();
        rx.wait_for(|ready| *ready)
            .await
            .map(|_| ())
            .map_err(|_| ServerError::NotReady)
    }
}

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Ledger>,
    pub ready: ReadinessGate,
}

impl AppState {
    pub fn new(ledger: Arc<Ledger>, ready: ReadinessGate) -> Self {
        Self { ledger, ready }
    }

    /// The ledger, once the readiness gate has opened.
    pub async fn ledger(&self) -> ServerResult<&Ledger> {
        self.ready.wait().await?;
        Ok(&self.ledger)
    }

    /// Seed genesis synchronously and open the gate. Used by tests and
    /// embedders that do not need a background start.
    pub fn seeded(ledger: Arc<Ledger>) -> ServerResult<Self> {
        let (signal, gate) = readiness();
        ledger.initialize()?;
        signal.mark_ready();
        Ok(Self::new(ledger, gate))
    }
}
