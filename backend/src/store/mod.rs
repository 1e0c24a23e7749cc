pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::{
    event::{Event, EventSummary, TimeBlock},
    invite::{Invite, InviteWithEvent},
    response::ParticipantResponse,
};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt data file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The persistence contract. Implementations are interchangeable; the
/// handlers receive one as `Arc<dyn Store>` injected through `AppState`.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_event(
        &self,
        title: String,
        organizer: String,
        time_blocks: Vec<TimeBlock>,
    ) -> StoreResult<Event>;

    /// Full event with invitees and responses resolved.
    async fn get_event(&self, id: Uuid) -> StoreResult<Option<Event>>;

    /// Summaries for the admin listing, newest first.
    async fn list_events(&self) -> StoreResult<Vec<EventSummary>>;

    /// Cascades to the event's invites and responses.
    async fn delete_event(&self, id: Uuid) -> StoreResult<()>;

    async fn create_invite(&self, event_id: Uuid, name: String) -> StoreResult<Invite>;

    async fn get_invite(&self, id: Uuid) -> StoreResult<Option<InviteWithEvent>>;

    /// Upsert: replaces any prior response for the same invite wholesale.
    async fn respond(
        &self,
        event_id: Uuid,
        invite_id: Uuid,
        availability: Vec<String>,
    ) -> StoreResult<()>;
}

// Construction and mutation helpers shared by the implementations, so the
// file and memory stores cannot drift apart on semantics.

fn new_event(title: String, organizer: String, time_blocks: Vec<TimeBlock>) -> Event {
    Event {
        id: Uuid::new_v4(),
        title,
        organizer,
        created_at: OffsetDateTime::now_utc(),
        time_blocks,
        invitees: Vec::new(),
        responses: Vec::new(),
    }
}

fn new_invite(event_id: Uuid, name: String) -> Invite {
    Invite {
        id: Uuid::new_v4(),
        event_id,
        name,
    }
}

fn upsert_response(
    event: &mut Event,
    invite_id: Uuid,
    availability: Vec<String>,
) -> StoreResult<()> {
    let name = event
        .invitees
        .iter()
        .find(|i| i.id == invite_id)
        .map(|i| i.name.clone())
        .ok_or_else(|| StoreError::NotFound(format!("Invite {invite_id}")))?;

    event.responses.retain(|r| r.invite_id != invite_id);
    event.responses.push(ParticipantResponse {
        invite_id,
        name,
        availability,
        updated_at: OffsetDateTime::now_utc(),
    });
    Ok(())
}

fn summarize_event(event: &Event) -> EventSummary {
    EventSummary {
        id: event.id,
        title: event.title.clone(),
        organizer: event.organizer.clone(),
        created_at: event.created_at,
        invite_count: event.invitees.len(),
        response_count: event.responses.len(),
    }
}
