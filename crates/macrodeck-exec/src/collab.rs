//! Collaborator traits: the narrow seams to the rest of the application.
//!
//! All methods take `&self`; implementations own their interior
//! mutability and serialize their own side effects.

use macrodeck_core::{ExecutionContext, MacroRecord, OwnerId, Result, UserMessage};

/// Parses and runs macro command text.
pub trait CommandInterpreter {
    /// Run `command` as `owner` (if any) under `context`.
    fn submit(&self, owner: Option<&OwnerId>, command: &str, context: &ExecutionContext) -> Result<()>;

    /// Evaluate an inline expression and return the rendered text.
    fn evaluate(&self, owner: Option<&OwnerId>, text: &str, context: &ExecutionContext) -> Result<String>;
}

/// The chat/command input buffer.
pub trait CommandInput {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn request_focus(&self);
}

/// User-facing error channel. Messages are localization keys plus args.
pub trait Notifier {
    fn show_error(&self, message: UserMessage);
}

/// Snapshot of a live owner (token).
#[derive(Clone, Debug)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    pub macros: Vec<MacroRecord>,
}

impl Owner {
    pub fn new(id: impl Into<OwnerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            macros: Vec::new(),
        }
    }

    pub fn with_macro(mut self, record: MacroRecord) -> Self {
        self.macros.push(record);
        self
    }

    /// One past the highest macro index on this owner.
    pub fn next_index(&self) -> i32 {
        self.macros
            .iter()
            .map(|m| m.index())
            .max()
            .map_or(0, |max| max + 1)
    }
}

/// Resolves owner ids to live owners.
pub trait OwnerDirectory {
    fn find(&self, id: &OwnerId) -> Option<Owner>;
}

/// Update channel for macros stored on owners.
pub trait OwnerUpdates {
    fn save_macro(&self, owner: &OwnerId, record: &MacroRecord);
}

/// A panel-level macro store (preferences, campaign, GM-only campaign).
pub trait MacroStore {
    fn save(&self, record: &MacroRecord);
    fn records(&self) -> Vec<MacroRecord>;
}

/// Localization keys reported through [`Notifier`].
pub mod message_keys {
    pub const OWNER_NOT_FOUND: &str = "msg.error.macro.buttonNullToken";
    pub const CANT_APPLY_TO_SELECTED: &str = "msg.error.cantApplyMacroToSelected";
    pub const EXEC_FAILED: &str = "msg.error.macro.execFailed";
}
