use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{
    error::{AppError, Result},
    models::response::RespondRequest,
    slots,
    store::Store,
};

/// Participant submission. Slot identifiers are normalized to the
/// canonical "YYYY-MM-DD hh:mm AM/PM" encoding at this boundary (the
/// legacy ISO form is accepted and re-encoded), so stored state is always
/// single-format. The store upserts: a resubmission replaces the invite's
/// prior response wholesale.
pub async fn submit(
    State(store): State<Arc<dyn Store>>,
    Json(req): Json<RespondRequest>,
) -> Result<Json<serde_json::Value>> {
    let mut normalized = Vec::with_capacity(req.availability.len());
    for raw in &req.availability {
        let slot = slots::normalize_slot_id(raw)
            .ok_or_else(|| AppError::BadRequest(format!("malformed slot identifier: {raw}")))?;
        normalized.push(slot);
    }

    store.respond(req.event_id, req.invite_id, normalized).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
