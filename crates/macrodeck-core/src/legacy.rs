//! Flat wire schema for macro records and load-time reconciliation.
//!
//! Older records predate several fields. Everything optional in
//! [`MacroWire`] is filled in exactly once by [`MacroWire::reconcile`]; the
//! resulting [`MacroRecord`] carries no nullable flags.

use crate::error::Result;
use crate::record::{new_macro_id, CompareToggles, MacroRecord};
use crate::types::{MacroDefaults, OwnerId, OwnerScope};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MacroWire {
    pub macro_id: Option<String>,
    pub save_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub index: i32,
    pub color_key: Option<String>,
    pub hot_key: Option<String>,
    pub command: Option<String>,
    pub label: Option<String>,
    pub group: Option<String>,
    pub sortby: Option<String>,
    pub auto_execute: bool,
    pub include_label: bool,
    pub apply_to_tokens: bool,
    pub font_color_key: Option<String>,
    pub font_size: Option<String>,
    pub min_width: Option<String>,
    pub max_width: Option<String>,
    pub allow_player_edits: Option<bool>,
    pub tool_tip: Option<String>,
    pub display_hot_key: Option<bool>,
    pub common_macro: Option<bool>,
    pub compare_group: Option<bool>,
    pub compare_sort_prefix: Option<bool>,
    pub compare_command: Option<bool>,
    pub compare_include_label: Option<bool>,
    pub compare_auto_execute: Option<bool>,
    pub compare_apply_to_selected_tokens: Option<bool>,
}

impl MacroWire {
    /// Build a runtime record, defaulting every missing optional field.
    pub fn reconcile(self, defaults: &MacroDefaults) -> MacroRecord {
        let macro_id = self.macro_id.filter(|id| !id.is_empty()).unwrap_or_else(|| {
            let id = new_macro_id();
            debug!("Assigned macro id {} to record at index {}", id, self.index);
            id
        });
        let owner = self.owner_id.filter(|id| !id.is_empty()).map(OwnerId::from);

        let mut record = MacroRecord::new(self.index, defaults);
        record.macro_id = macro_id;
        record.scope = OwnerScope::from_location(&self.save_location, owner);
        record.color_key = None;
        record.font_color_key = None;
        if let Some(key) = self.color_key.as_deref() {
            record.set_color_key(key);
        }
        if let Some(key) = self.font_color_key.as_deref() {
            record.set_font_color_key(key);
        }
        record.hot_key = self.hot_key.unwrap_or_else(|| defaults.hotkey.clone());
        record.command = self.command.unwrap_or_default();
        record.label = self.label.unwrap_or_default();
        record.group = self.group.unwrap_or_default();
        record.sortby = self.sortby.unwrap_or_default();
        record.auto_execute = self.auto_execute;
        record.include_label = self.include_label;
        record.apply_to_selected = self.apply_to_tokens;
        record.set_font_size(self.font_size.as_deref().unwrap_or_default());
        record.min_width = self.min_width.unwrap_or_default();
        record.max_width = self.max_width.unwrap_or_default();
        record.allow_owner_edits = self.allow_player_edits.unwrap_or(defaults.allow_owner_edits);
        record.tooltip = self.tool_tip.unwrap_or_default();
        record.display_hotkey = self.display_hot_key.unwrap_or(true);
        record.common_macro = self.common_macro.unwrap_or(false);
        record.compare = CompareToggles {
            group: self.compare_group.unwrap_or(true),
            sort_prefix: self.compare_sort_prefix.unwrap_or(true),
            command: self.compare_command.unwrap_or(true),
            include_label: self.compare_include_label.unwrap_or(true),
            auto_execute: self.compare_auto_execute.unwrap_or(true),
            apply_to_selected: self.compare_apply_to_selected_tokens.unwrap_or(true),
        };
        record
    }
}

impl From<&MacroRecord> for MacroWire {
    fn from(record: &MacroRecord) -> Self {
        let compare = record.compare;
        Self {
            macro_id: Some(record.macro_id.clone()),
            save_location: record.scope.location().to_string(),
            owner_id: record.owner().map(|owner| owner.to_string()),
            index: record.index,
            color_key: record.color_key.clone(),
            hot_key: Some(record.hot_key.clone()),
            command: Some(record.command.clone()),
            label: Some(record.label.clone()),
            group: Some(record.group.clone()),
            sortby: Some(record.sortby.clone()),
            auto_execute: record.auto_execute,
            include_label: record.include_label,
            apply_to_tokens: record.apply_to_selected,
            font_color_key: record.font_color_key.clone(),
            font_size: Some(record.font_size.clone()),
            min_width: Some(record.min_width.clone()),
            max_width: Some(record.max_width.clone()),
            allow_player_edits: Some(record.allow_owner_edits),
            tool_tip: Some(record.tooltip.clone()),
            display_hot_key: Some(record.display_hotkey),
            common_macro: Some(record.common_macro),
            compare_group: Some(compare.group),
            compare_sort_prefix: Some(compare.sort_prefix),
            compare_command: Some(compare.command),
            compare_include_label: Some(compare.include_label),
            compare_auto_execute: Some(compare.auto_execute),
            compare_apply_to_selected_tokens: Some(compare.apply_to_selected),
        }
    }
}

impl MacroRecord {
    pub fn to_wire(&self) -> MacroWire {
        MacroWire::from(self)
    }
}

/// Parse a JSON array of wire records and reconcile each one.
pub fn load_records(json: &str, defaults: &MacroDefaults) -> Result<Vec<MacroRecord>> {
    let wires: Vec<MacroWire> = serde_json::from_str(json)?;
    Ok(wires
        .into_iter()
        .map(|wire| wire.reconcile(defaults))
        .collect())
}
