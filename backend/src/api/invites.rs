use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::invite::{CreateInviteRequest, Invite, InviteWithEvent},
    store::Store,
};

pub async fn create(
    State(store): State<Arc<dyn Store>>,
    Json(req): Json<CreateInviteRequest>,
) -> Result<Json<Invite>> {
    use validator::Validate;
    req.validate()?;

    let invite = store.create_invite(req.event_id, req.name).await?;
    Ok(Json(invite))
}

pub async fn get_one(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<Uuid>,
) -> Result<Json<InviteWithEvent>> {
    let invite = store
        .get_invite(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Invite {} not found", id)))?;

    Ok(Json(invite))
}
