//! Persistence dispatch: sends a record to the store its scope names.

use crate::collab::message_keys::OWNER_NOT_FOUND;
use crate::collab::{MacroStore, Notifier, OwnerDirectory, OwnerUpdates};
use macrodeck_core::{Error, MacroRecord, OwnerScope, Result, UserMessage};
use tracing::{debug, warn};

pub struct PersistenceDispatcher<'a> {
    owners: &'a dyn OwnerDirectory,
    updates: &'a dyn OwnerUpdates,
    global: &'a dyn MacroStore,
    campaign: &'a dyn MacroStore,
    gm: &'a dyn MacroStore,
    notifier: &'a dyn Notifier,
}

impl<'a> PersistenceDispatcher<'a> {
    pub fn new(
        owners: &'a dyn OwnerDirectory,
        updates: &'a dyn OwnerUpdates,
        global: &'a dyn MacroStore,
        campaign: &'a dyn MacroStore,
        gm: &'a dyn MacroStore,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            owners,
            updates,
            global,
            campaign,
            gm,
            notifier,
        }
    }

    /// Save `record` according to its scope.
    ///
    /// Token records whose owner cannot be found are reported to the user
    /// and not saved anywhere.
    pub fn save(&self, record: &MacroRecord) -> Result<()> {
        match record.scope() {
            OwnerScope::Token(owner_id) => {
                if self.owners.find(owner_id).is_none() {
                    warn!("Cannot save '{}': owner {} not found", record.label(), owner_id);
                    self.notifier.show_error(
                        UserMessage::new(OWNER_NOT_FOUND)
                            .arg(record.label())
                            .arg(owner_id),
                    );
                    return Err(Error::OwnerNotFound(owner_id.to_string()));
                }
                self.updates.save_macro(owner_id, record);
            }
            OwnerScope::GlobalPanel => self.global.save(record),
            OwnerScope::CampaignPanel => self.campaign.save(record),
            OwnerScope::GmPanel => self.gm.save(record),
            OwnerScope::CommonSelection => {
                debug!("Shared template '{}' is not persisted", record.label());
            }
        }
        Ok(())
    }

    /// Whether `target` already holds a macro with the same logical identity.
    pub fn is_duplicate(&self, record: &MacroRecord, target: &OwnerScope) -> bool {
        let existing = match target {
            OwnerScope::CampaignPanel => self.campaign.records(),
            OwnerScope::GmPanel => self.gm.records(),
            OwnerScope::GlobalPanel => self.global.records(),
            OwnerScope::Token(owner_id) => match self.owners.find(owner_id) {
                Some(owner) => owner.macros,
                None => return false,
            },
            OwnerScope::CommonSelection => return false,
        };
        let hash = record.logical_hash();
        existing.iter().any(|m| m.logical_hash() == hash)
    }
}
