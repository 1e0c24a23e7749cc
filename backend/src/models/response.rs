use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A participant's full set of selected slot identifiers. At most one per
/// invite; a resubmission replaces the prior one wholesale. The display
/// name is denormalized from the invite at submission time so aggregation
/// needs only the responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantResponse {
    pub invite_id: Uuid,
    pub name: String,
    pub availability: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub event_id: Uuid,
    pub invite_id: Uuid,
    pub availability: Vec<String>,
}
