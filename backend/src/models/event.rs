use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, Time};
use uuid::Uuid;
use validator::Validate;

use crate::models::{invite::Invite, response::ParticipantResponse};

/// An organizer-declared interval of offered availability on a specific
/// date. Clock times are organizer-local; no timezone is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBlock {
    pub date: Date,
    #[serde(with = "crate::slots::clock_time")]
    pub start_time: Time,
    #[serde(with = "crate::slots::clock_time")]
    pub end_time: Time,
}

/// A scheduling event with its invites and responses resolved inline.
/// Invites and responses live inside the event document, so deleting an
/// event cascades to both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub organizer: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub time_blocks: Vec<TimeBlock>,
    #[serde(default)]
    pub invitees: Vec<Invite>,
    #[serde(default)]
    pub responses: Vec<ParticipantResponse>,
}

/// Listing row for the admin view.
#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
    pub organizer: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub invite_count: usize,
    pub response_count: usize,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "organizer must be 1-100 characters"))]
    pub organizer: String,
    #[validate(length(min = 1, message = "at least one time block is required"))]
    pub time_blocks: Vec<TimeBlock>,
}
