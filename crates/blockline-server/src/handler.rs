use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use blockline_ledger::{LedgerError, LedgerReader, LedgerStatus, LedgerWriter};
use blockline_types::{Entry, TransactionPayload};
use serde::Serialize;
use serde_json::json;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// JSON body rendered with two-space indentation.
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to encode response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// `GET /blocks` — every accepted entry in sequence order.
pub async fn list_entries(
    State(state): State<AppState>,
) -> ServerResult<PrettyJson<Vec<Entry>>> {
    let entries = state.ledger().await?.snapshot()?;
    Ok(PrettyJson(entries))
}

/// `GET /blocks/latest`
pub async fn latest_entry(State(state): State<AppState>) -> ServerResult<PrettyJson<Entry>> {
    Ok(PrettyJson(state.ledger().await?.tail()?))
}

/// `GET /blocks/:id`
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<PrettyJson<Entry>> {
    let sequence: u64 = id
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid entry id: {id}")))?;
    Ok(PrettyJson(state.ledger().await?.entry_at(sequence)?))
}

/// `POST /blocks` — derive, validate, and append a new entry.
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> ServerResult<(StatusCode, PrettyJson<Entry>)> {
    let Json(payload) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let entry = match state.ledger().await?.append(&payload) {
        Ok(entry) => entry,
        Err(LedgerError::Validation(failure)) => {
            tracing::warn!(%failure, owner = %payload.owner_id, "append rejected");
            return Err(LedgerError::Validation(failure).into());
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(
        seq = entry.sequence_number,
        owner = %entry.owner_id,
        transaction = entry.transaction_id,
        fingerprint = %entry.fingerprint.short_hex(),
        "entry appended"
    );
    Ok((StatusCode::CREATED, PrettyJson(entry)))
}

/// `GET /v1/status` — height and tip of the ledger.
pub async fn status_handler(
    State(state): State<AppState>,
) -> ServerResult<PrettyJson<LedgerStatus>> {
    Ok(PrettyJson(state.ledger().await?.status()?))
}

/// Health check handler. Reports 503 until genesis is seeded.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, PrettyJson<serde_json::Value>) {
    if state.ready.is_ready() {
        (StatusCode::OK, PrettyJson(json!({ "status": "ok" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            PrettyJson(json!({ "status": "starting" })),
        )
    }
}

/// Info handler.
pub async fn info_handler() -> PrettyJson<serde_json::Value> {
    PrettyJson(json!({
        "name": "blockline-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
