//! HTTP server for Blockline.
//!
//! Exposes the ledger as a small JSON API: list, fetch, and append entries,
//! plus status and health checks. The server owns one [`Ledger`] instance,
//! seeds its genesis entry at start-up, and holds every handler at a
//! readiness gate until seeding has finished.
//!
//! [`Ledger`]: blockline_ledger::Ledger

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::BlocklineServer;
pub use state::{readiness, AppState, ReadinessGate, ReadinessSignal};
