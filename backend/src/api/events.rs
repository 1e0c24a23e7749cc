use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    aggregate::{self, AvailabilitySummary},
    error::{AppError, Result},
    models::event::{CreateEventRequest, Event, EventSummary},
    store::Store,
    AppState,
};

pub async fn create(
    State(store): State<Arc<dyn Store>>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Json<Event>> {
    use validator::Validate;
    req.validate()?;

    for block in &req.time_blocks {
        if block.start_time >= block.end_time {
            return Err(AppError::BadRequest(format!(
                "time block on {} must have start_time before end_time",
                block.date
            )));
        }
    }

    let event = store
        .create_event(req.title, req.organizer, req.time_blocks)
        .await?;

    Ok(Json(event))
}

pub async fn get_one(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>> {
    let event = store
        .get_event(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;

    Ok(Json(event))
}

pub async fn list(State(store): State<Arc<dyn Store>>) -> Result<Json<Vec<EventSummary>>> {
    let summaries = store.list_events().await?;
    Ok(Json(summaries))
}

pub async fn delete(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    store.delete_event(id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// Organizer view: the aggregation recomputed fresh from stored state.
pub async fn availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AvailabilitySummary>> {
    let event = state
        .store
        .get_event(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;

    let summary = aggregate::summarize(
        &event.time_blocks,
        &event.responses,
        state.slot_interval_minutes,
    );

    Ok(Json(summary))
}
