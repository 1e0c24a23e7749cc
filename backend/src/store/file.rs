use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{
    event::{Event, EventSummary, TimeBlock},
    invite::{Invite, InviteWithEvent},
};

use super::{Store, StoreError, StoreResult};

/// Flat-file store: the whole database is one JSON document, re-read on
/// every call and rewritten on every mutation. The mutex serializes
/// read-modify-write cycles, so racing submissions from the same invite
/// resolve last-write-wins.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Database {
    #[serde(default)]
    events: HashMap<Uuid, Event>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read(&self) -> StoreResult<Database> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Database::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes via temp file + rename so a crash mid-write never leaves a
    /// truncated database behind.
    async fn write(&self, db: &Database) -> StoreResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).await?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(db)?;
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for FileStore {
    async fn create_event(
        &self,
        title: String,
        organizer: String,
        time_blocks: Vec<TimeBlock>,
    ) -> StoreResult<Event> {
        let _guard = self.write_lock.lock().await;
        let mut db = self.read().await?;
        let event = super::new_event(title, organizer, time_blocks);
        db.events.insert(event.id, event.clone());
        self.write(&db).await?;
        Ok(event)
    }

    async fn get_event(&self, id: Uuid) -> StoreResult<Option<Event>> {
        let db = self.read().await?;
        Ok(db.events.get(&id).cloned())
    }

    async fn list_events(&self) -> StoreResult<Vec<EventSummary>> {
        let db = self.read().await?;
        let mut summaries: Vec<EventSummary> =
            db.events.values().map(super::summarize_event).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    async fn delete_event(&self, id: Uuid) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut db = self.read().await?;
        if db.events.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("Event {id}")));
        }
        self.write(&db).await
    }

    async fn create_invite(&self, event_id: Uuid, name: String) -> StoreResult<Invite> {
        let _guard = self.write_lock.lock().await;
        let mut db = self.read().await?;
        let event = db
            .events
            .get_mut(&event_id)
            .ok_or_else(|| StoreError::NotFound(format!("Event {event_id}")))?;
        let invite = super::new_invite(event_id, name);
        event.invitees.push(invite.clone());
        self.write(&db).await?;
        Ok(invite)
    }

    async fn get_invite(&self, id: Uuid) -> StoreResult<Option<InviteWithEvent>> {
        let db = self.read().await?;
        for event in db.events.values() {
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
        let _guard = self.write_lock.lock().await;
        let mut db = self.read().await?;
        let event = db
            .events
            .get_mut(&event_id)
            .ok_or_else(|| StoreError::NotFound(format!("Event {event_id}")))?;
        super::upsert_response(event, invite_id, availability)?;
        self.write(&db).await
    }
}
