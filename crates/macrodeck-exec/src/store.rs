//! In-memory collaborators: macro stores, an owner directory, notifiers.

use crate::collab::{MacroStore, Notifier, Owner, OwnerDirectory, OwnerUpdates};
use dashmap::DashMap;
use macrodeck_core::{MacroRecord, OwnerId, UserMessage};
use std::sync::Mutex;
use tracing::{info, warn};

/// Panel store keyed by macro id.
pub struct MemoryStore {
    name: String,
    records: DashMap<String, MacroRecord>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: DashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, macro_id: &str) -> Option<MacroRecord> {
        self.records.get(macro_id).map(|r| r.value().clone())
    }

    pub fn remove(&self, macro_id: &str) -> Option<MacroRecord> {
        self.records.remove(macro_id).map(|(_, record)| record)
    }
}

impl MacroStore for MemoryStore {
    fn save(&self, record: &MacroRecord) {
        info!("Saved '{}' to {} store", record.label(), self.name);
        self.records
            .insert(record.macro_id().to_string(), record.clone());
    }

    /// Records ordered by index.
    fn records(&self) -> Vec<MacroRecord> {
        let mut records: Vec<MacroRecord> =
            self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by_key(|r| r.index());
        records
    }
}

/// Owners and their macro lists.
#[derive(Default)]
pub struct MemoryOwners {
    owners: DashMap<OwnerId, Owner>,
}

impl MemoryOwners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, owner: Owner) {
        self.owners.insert(owner.id.clone(), owner);
    }

    pub fn remove(&self, id: &OwnerId) -> Option<Owner> {
        self.owners.remove(id).map(|(_, owner)| owner)
    }

    pub fn list(&self) -> Vec<OwnerId> {
        self.owners.iter().map(|o| o.key().clone()).collect()
    }
}

impl OwnerDirectory for MemoryOwners {
    fn find(&self, id: &OwnerId) -> Option<Owner> {
        self.owners.get(id).map(|o| o.value().clone())
    }
}

impl OwnerUpdates for MemoryOwners {
    /// Replaces the owner's macro with the same id, or appends it.
    fn save_macro(&self, owner: &OwnerId, record: &MacroRecord) {
        let Some(mut entry) = self.owners.get_mut(owner) else {
            warn!("Dropped update for unknown owner {}", owner);
            return;
        };
        let macros = &mut entry.macros;
        match macros.iter_mut().find(|m| m.macro_id() == record.macro_id()) {
            Some(existing) => *existing = record.clone(),
            None => macros.push(record.clone()),
        }
    }
}

/// Sends user-facing errors to the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show_error(&self, message: UserMessage) {
        warn!("{} {:?}", message.key, message.args);
    }
}

/// Keeps every message it is shown.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<UserMessage>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<UserMessage> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn show_error(&self, message: UserMessage) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message);
        }
    }
}
