use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::event::Event;

/// A per-participant access token tying a display name to one event.
/// Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invite {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
}

/// Invite joined with its event, for the participant page load.
#[derive(Debug, Clone, Serialize)]
pub struct InviteWithEvent {
    #[serde(flatten)]
    pub invite: Invite,
    pub event: Event,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInviteRequest {
    pub event_id: Uuid,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}
