//! Generation progress records, keyed by project id.
//!
//! The store is an abstraction so that a shared backend can replace the
//! in-memory map; records are not persisted across restarts. The in-memory
//! store never evicts: a record lives until [`StatusStore::remove`] is called
//! for it, so the map grows with every generation for the life of the
//! process.
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::generation::ContentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationState {
    #[default]
    Idle,
    Generating,
    Completed,
    Error,
}

/// Latest known state of one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    pub status: GenerationState,
    /// 0..=100
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_agent: Option<ContentKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl StatusRecord {
    /// A record stamped with the current time. Progress is capped at 100.
    pub fn new(status: GenerationState, progress: u8) -> Self {
        Self {
            status,
            progress: progress.min(100),
            current_agent: None,
            message: None,
            updated_at: Utc::now(),
        }
    }

    pub fn with_agent(mut self, agent: ContentKind) -> Self {
        self.current_agent = Some(agent);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Body of a client-side status update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    #[serde(default)]
    pub project_id: Option<String>,
    pub status: GenerationState,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub current_agent: Option<ContentKind>,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusUpdate {
    pub fn into_record(self) -> StatusRecord {
        StatusRecord {
            current_agent: self.current_agent,
            message: self.message,
            ..StatusRecord::new(self.status, self.progress)
        }
    }
}

/// Key-value storage for status records.
///
/// Writes to one key are atomic; the last write wins.
pub trait StatusStore: Send + Sync {
    fn get(&self, project_id: &str) -> Option<StatusRecord>;

    fn put(&self, project_id: &str, record: StatusRecord);

    fn remove(&self, project_id: &str) -> Option<StatusRecord>;
}

/// Process-local store; records are kept until removed.
#[derive(Debug, Default)]
pub struct InMemoryStatusStore {
    records: RwLock<HashMap<String, StatusRecord>>,
}

impl InMemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl StatusStore for InMemoryStatusStore {
    fn get(&self, project_id: &str) -> Option<StatusRecord> {
        self.records.read().get(project_id).cloned()
    }

    fn put(&self, project_id: &str, record: StatusRecord) {
        log::debug!(
            "Status {}: {:?} {}%",
            project_id,
            record.status,
            record.progress
        );
        self.records.write().insert(project_id.to_string(), record);
    }

    fn remove(&self, project_id: &str) -> Option<StatusRecord> {
        self.records.write().remove(project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_put_get_remove() {
        let store = InMemoryStatusStore::new();
        assert!(store.get("p1").is_none());

        store.put("p1", StatusRecord::new(GenerationState::Generating, 33));
        store.put("p1", StatusRecord::new(GenerationState::Completed, 100));
        assert_eq!(store.get("p1").unwrap().status, GenerationState::Completed);
        assert_eq!(store.len(), 1);

        assert!(store.remove("p1").is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_progress_is_capped() {
        assert_eq!(StatusRecord::new(GenerationState::Generating, 250).progress, 100);
    }

    #[test]
    fn test_record_json() {
        let record = StatusRecord::new(GenerationState::Generating, 66)
            .with_agent(ContentKind::PitchDeck)
            .with_message("Pitch Deck finished");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "generating");
        assert_eq!(json["currentAgent"], "pitch-deck");
        assert_eq!(json["progress"], 66);
        assert!(json["updatedAt"].is_string());

        let bare = serde_json::to_value(StatusRecord::new(GenerationState::Idle, 0)).unwrap();
        assert!(bare.get("currentAgent").is_none());
        assert!(bare.get("message").is_none());
    }

    #[test]
    fn test_update_into_record() {
        let update: StatusUpdate = serde_json::from_str(
            r#"{"projectId": "p1", "status": "generating", "progress": 40, "currentAgent": "marketing"}"#,
        )
        .unwrap();
        assert_eq!(update.project_id.as_deref(), Some("p1"));
        let record = update.into_record();
        assert_eq!(record.progress, 40);
        assert_eq!(record.current_agent, Some(ContentKind::Marketing));
    }

    #[test]
    fn test_concurrent_writers() {
        let store = Arc::new(InMemoryStatusStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.put(&format!("p{}", i), StatusRecord::new(GenerationState::Generating, i));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 8);
    }
}
