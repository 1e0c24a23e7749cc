use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    event::{Event, EventSummary, TimeBlock},
    invite::{Invite, InviteWithEvent},
};

use super::{Store, StoreError, StoreResult};

/// In-memory store with the same contract as the file store. Used by the
/// test suite and selectable via STORE_BACKEND=memory; state does not
/// survive a restart.
#[derive(Default)]
pub struct MemoryStore {
    events: RwLock<HashMap<Uuid, Event>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_event(
        &self,
        title: String,
        organizer: String,
        time_blocks: Vec<TimeBlock>,
    ) -> StoreResult<Event> {
        let event = super::new_event(title, organizer, time_blocks);
        self.events.write().await.insert(event.id, event.clone());
        Ok(event)
    }

    async fn get_event(&self, id: Uuid) -> StoreResult<Option<Event>> {
        Ok(self.events.read().await.get(&id).cloned())
    }

    async fn list_events(&self) -> StoreResult<Vec<EventSummary>> {
        let events = self.events.read().await;
        let mut summaries: Vec<EventSummary> =
            events.values().map(super::summarize_event).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    async fn delete_event(&self, id: Uuid) -> StoreResult<()> {
        if self.events.write().await.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("Event {id}")));
        }
        Ok(())
    }

    async fn create_invite(&self, event_id: Uuid, name: String) -> StoreResult<Invite> {
        let mut events = self.events.write().await;
        let event = events
            .get_mut(&event_id)
            .ok_or_else(|| StoreError::NotFound(format!("Event {event_id}")))?;
        let invite = super::new_invite(event_id, name);
        event.invitees.push(invite.clone());
        Ok(invite)
    }

    async fn get_invite(&self, id: Uuid) -> StoreResult<Option<InviteWithEvent>> {
        let events = self.events.read().await;
        for event in events.values() {
            if let Some(invite) = event.invitees.iter().find(|i| i.id == id) {
                return Ok(Some(InviteWithEvent {
                    invite: invite.clone(),
                    event: event.clone(),
                }));
            }
        }
        Ok(None)
    }

    async fn respond(
        &self,
        event_id: Uuid,
        invite_id: Uuid,
        availability: Vec<String>,
    ) -> StoreResult<()> {
        let mut events = self.events.write().await;
        let event = events
            .get_mut(&event_id)
            .ok_or_else(|| StoreError::NotFound(format!("Event {event_id}")))?;
        super::upsert_response(event, invite_id, availability)
    }
}
