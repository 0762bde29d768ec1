//! The macro record: one stored command button.
//!
//! Fields are private and change only through setters, which enforce the
//! validation rules (palette keys, non-empty font size, never-unset text).
//! `Clone` is the exact copy and keeps the macro id; every other copy
//! constructor mints a new one.

use crate::palette;
use crate::types::{MacroDefaults, OwnerId, OwnerScope, DEFAULT_FONT_SIZE, NEW_LABEL};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which fields take part in the logical identity hash. Label always does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareToggles {
    pub group: bool,
    pub sort_prefix: bool,
    pub command: bool,
    pub include_label: bool,
    pub auto_execute: bool,
    pub apply_to_selected: bool,
}

impl Default for CompareToggles {
    fn default() -> Self {
        Self {
            group: true,
            sort_prefix: true,
            command: true,
            include_label: true,
            auto_execute: true,
            apply_to_selected: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MacroRecord {
    pub(crate) macro_id: String,
    pub(crate) scope: OwnerScope,
    pub(crate) index: i32,
    pub(crate) color_key: Option<String>,
    pub(crate) hot_key: String,
    pub(crate) command: String,
    pub(crate) label: String,
    pub(crate) group: String,
    pub(crate) sortby: String,
    pub(crate) auto_execute: bool,
    pub(crate) include_label: bool,
    pub(crate) apply_to_selected: bool,
    pub(crate) font_color_key: Option<String>,
    pub(crate) font_size: String,
    pub(crate) min_width: String,
    pub(crate) max_width: String,
    pub(crate) allow_owner_edits: bool,
    pub(crate) tooltip: String,
    pub(crate) display_hotkey: bool,
    pub(crate) common_macro: bool,
    pub(crate) compare: CompareToggles,
}

pub(crate) fn new_macro_id() -> String {
    Uuid::new_v4().to_string()
}

impl MacroRecord {
    /// Blank record with defaults, not bound to any owner.
    pub fn new(index: i32, defaults: &MacroDefaults) -> Self {
        let mut record = Self {
            macro_id: new_macro_id(),
            scope: OwnerScope::CommonSelection,
            index,
            color_key: None,
            hot_key: defaults.hotkey.clone(),
            command: String::new(),
            label: NEW_LABEL.to_string(),
            group: String::new(),
            sortby: String::new(),
            auto_execute: true,
            include_label: false,
            apply_to_selected: false,
            font_color_key: None,
            font_size: DEFAULT_FONT_SIZE.to_string(),
            min_width: String::new(),
            max_width: String::new(),
            allow_owner_edits: defaults.allow_owner_edits,
            tooltip: String::new(),
            display_hotkey: true,
            common_macro: false,
            compare: CompareToggles::default(),
        };
        record.set_color_key("default");
        record.set_font_color_key("default");
        record
    }

    /// New button in a group on a panel (or owner) scope.
    pub fn on_panel(scope: OwnerScope, index: i32, group: &str, defaults: &MacroDefaults) -> Self {
        let mut record = Self::new(index, defaults);
        record.scope = scope;
        record.set_group(group);
        record
    }

    /// New button in a group on an owner.
    pub fn for_owner(owner: OwnerId, index: i32, group: &str, defaults: &MacroDefaults) -> Self {
        Self::on_panel(OwnerScope::Token(owner), index, group, defaults)
    }

    /// Copy of `self` placed on `scope` with a new id and the default hotkey.
    pub fn templated_copy(&self, scope: OwnerScope, index: i32, defaults: &MacroDefaults) -> Self {
        let mut copy = Self::new(index, defaults);
        copy.scope = scope;
        copy.color_key = self.color_key.clone();
        copy.command = self.command.clone();
        copy.label = self.label.clone();
        copy.group = self.group.clone();
        copy.sortby = self.sortby.clone();
        copy.auto_execute = self.auto_execute;
        copy.include_label = self.include_label;
        copy.apply_to_selected = self.apply_to_selected;
        copy.font_color_key = self.font_color_key.clone();
        copy.font_size = self.font_size.clone();
        copy.min_width = self.min_width.clone();
        copy.max_width = self.max_width.clone();
        copy.allow_owner_edits = self.allow_owner_edits;
        copy.display_hotkey = self.display_hotkey;
        copy.compare = self.compare;
        copy.tooltip = self.tooltip.clone();
        copy
    }

    /// Copy of `self` stored on another owner.
    pub fn owner_copy(&self, owner: OwnerId, index: i32, defaults: &MacroDefaults) -> Self {
        self.templated_copy(OwnerScope::Token(owner), index, defaults)
    }

    /// Shared template built from one owner's macro, for bulk actions.
    pub fn shared_template(&self, index: i32, defaults: &MacroDefaults) -> Self {
        let mut template = self.templated_copy(OwnerScope::CommonSelection, index, defaults);
        template.common_macro = true;
        template
    }

    /// Restore defaults, keeping id, index and scope. Label becomes the index.
    pub fn reset(&mut self, defaults: &MacroDefaults) {
        self.color_key = Some("default".to_string());
        self.hot_key = defaults.hotkey.clone();
        self.command.clear();
        self.label = self.index.to_string();
        self.group.clear();
        self.sortby.clear();
        self.auto_execute = true;
        self.include_label = false;
        self.apply_to_selected = false;
        self.font_color_key = Some("black".to_string());
        self.font_size = DEFAULT_FONT_SIZE.to_string();
        self.min_width.clear();
        self.max_width.clear();
        self.allow_owner_edits = defaults.allow_owner_edits;
        self.tooltip.clear();
    }

    pub fn macro_id(&self) -> &str {
        &self.macro_id
    }

    pub fn scope(&self) -> &OwnerScope {
        &self.scope
    }

    pub fn set_scope(&mut self, scope: OwnerScope) {
        self.scope = scope;
    }

    /// The owner for token-scoped records.
    pub fn owner(&self) -> Option<&OwnerId> {
        self.scope.owner()
    }

    pub fn set_owner(&mut self, owner: OwnerId) {
        self.scope = OwnerScope::Token(owner);
    }

    pub fn index(&self) -> i32 {
        self.index
    }

    pub fn set_index(&mut self, index: i32) {
        self.index = index;
    }

    pub fn color_key(&self) -> &str {
        match self.color_key.as_deref() {
            None | Some("") => "default",
            Some(key) => key,
        }
    }

    /// Ignored unless `key` is `default` or in the palette.
    pub fn set_color_key(&mut self, key: &str) {
        if key == "default" || palette::is_known(key) {
            self.color_key = Some(key.to_string());
        }
    }

    pub fn hot_key(&self) -> &str {
        &self.hot_key
    }

    pub fn set_hot_key(&mut self, hot_key: impl Into<String>) {
        self.hot_key = hot_key.into();
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = command.into();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn set_group(&mut self, group: impl Into<String>) {
        self.group = group.into();
    }

    pub fn sortby(&self) -> &str {
        &self.sortby
    }

    pub fn set_sortby(&mut self, sortby: impl Into<String>) {
        self.sortby = sortby.into();
    }

    pub fn auto_execute(&self) -> bool {
        self.auto_execute
    }

    pub fn set_auto_execute(&mut self, value: bool) {
        self.auto_execute = value;
    }

    pub fn include_label(&self) -> bool {
        self.include_label
    }

    pub fn set_include_label(&mut self, value: bool) {
        self.include_label = value;
    }

    pub fn apply_to_selected(&self) -> bool {
        self.apply_to_selected
    }

    pub fn set_apply_to_selected(&mut self, value: bool) {
        self.apply_to_selected = value;
    }

    /// Font color key; unset or unknown keys read as `black`.
    pub fn font_color_key(&self) -> &str {
        match self.font_color_key.as_deref() {
            Some(key) if !key.is_empty() && palette::is_known(key) => key,
            _ => "black",
        }
    }

    /// `""` and `default` store `default`; other unknown keys are ignored.
    pub fn set_font_color_key(&mut self, key: &str) {
        match key {
            "" | "default" => self.font_color_key = Some("default".to_string()),
            key if palette::is_known(key) => self.font_color_key = Some(key.to_string()),
            _ => {}
        }
    }

    /// Font color as an HTML color name or `#rrggbb`.
    pub fn font_color_html(&self) -> String {
        let key = self.font_color_key();
        if palette::is_html_color(key) {
            return key.to_string();
        }
        palette::lookup(key)
            .map(|rgb| rgb.to_hex())
            .unwrap_or_else(|| "black".to_string())
    }

    pub fn font_size(&self) -> &str {
        &self.font_size
    }

    pub fn set_font_size(&mut self, size: &str) {
        self.font_size = if size.is_empty() {
            DEFAULT_FONT_SIZE.to_string()
        } else {
            size.to_string()
        };
    }

    pub fn min_width(&self) -> &str {
        &self.min_width
    }

    pub fn set_min_width(&mut self, width: impl Into<String>) {
        self.min_width = width.into();
    }

    pub fn max_width(&self) -> &str {
        &self.max_width
    }

    pub fn set_max_width(&mut self, width: impl Into<String>) {
        self.max_width = width.into();
    }

    pub fn allow_owner_edits(&self) -> bool {
        self.allow_owner_edits
    }

    pub fn set_allow_owner_edits(&mut self, value: bool) {
        self.allow_owner_edits = value;
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = tooltip.into();
    }

    pub fn display_hotkey(&self) -> bool {
        self.display_hotkey
    }

    pub fn set_display_hotkey(&mut self, value: bool) {
        self.display_hotkey = value;
    }

    pub fn common_macro(&self) -> bool {
        self.common_macro
    }

    pub fn set_common_macro(&mut self, value: bool) {
        self.common_macro = value;
    }

    pub fn compare(&self) -> CompareToggles {
        self.compare
    }

    pub fn set_compare(&mut self, toggles: CompareToggles) {
        self.compare = toggles;
    }

    pub fn compare_mut(&mut self) -> &mut CompareToggles {
        &mut self.compare
    }
}
