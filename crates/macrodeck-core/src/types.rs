//! Core types for Macrodeck

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Hotkey assigned to new buttons.
pub const DEFAULT_HOTKEY: &str = "None";

/// Font size used when a record has none.
pub const DEFAULT_FONT_SIZE: &str = "1.00em";

/// Label given to blank buttons.
pub const NEW_LABEL: &str = "(new)";

/// Location tag for commands that run with no macro location.
pub const CHAT_INPUT: &str = "chat";

/// Owner identifier - cheaply cloneable
#[derive(Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct OwnerId(Arc<str>);

impl OwnerId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(Arc::from(s.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OwnerId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Where a macro record lives and who owns it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OwnerScope {
    /// Stored on a single owner (token).
    Token(OwnerId),
    /// Stored in the local preference store.
    GlobalPanel,
    /// Stored in the campaign, visible to players.
    CampaignPanel,
    /// Stored in the campaign, GM only.
    GmPanel,
    /// A shared template standing in for several owners' macros.
    CommonSelection,
}

impl OwnerScope {
    /// Resolve a persisted save-location name.
    ///
    /// `ImpersonatePanel` and `SelectionPanel` are legacy names for `Token`.
    /// A token location with no owner, or an unknown name, is an unbound
    /// shared template.
    pub fn from_location(location: &str, owner: Option<OwnerId>) -> Self {
        match location {
            "Token" | "ImpersonatePanel" | "SelectionPanel" => match owner {
                Some(owner) => Self::Token(owner),
                None => Self::CommonSelection,
            },
            "GlobalPanel" => Self::GlobalPanel,
            "CampaignPanel" => Self::CampaignPanel,
            "GmPanel" => Self::GmPanel,
            _ => Self::CommonSelection,
        }
    }

    /// Save-location name written to the wire schema.
    pub fn location(&self) -> &'static str {
        match self {
            Self::Token(_) => "Token",
            Self::GlobalPanel => "GlobalPanel",
            Self::CampaignPanel => "CampaignPanel",
            Self::GmPanel => "GmPanel",
            Self::CommonSelection => "",
        }
    }

    pub fn owner(&self) -> Option<&OwnerId> {
        match self {
            Self::Token(owner) => Some(owner),
            _ => None,
        }
    }
}

/// Role of the user acting on a macro or connecting to a session.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Gm,
    Player,
}

impl Role {
    pub fn is_gm(&self) -> bool {
        matches!(self, Role::Gm)
    }
}

/// Context handed to the command interpreter for one invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExecutionContext {
    pub label: String,
    pub location: String,
    pub trusted: bool,
    pub index: i32,
}

impl ExecutionContext {
    pub fn new(label: impl Into<String>, location: impl Into<String>, trusted: bool, index: i32) -> Self {
        Self {
            label: label.into(),
            location: location.into(),
            trusted,
            index,
        }
    }

    /// Untrusted context for plain chat output.
    pub fn chat(label: impl Into<String>, index: i32) -> Self {
        Self::new(label, CHAT_INPUT, false, index)
    }
}

/// A localizable message for the user-facing error channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserMessage {
    pub key: String,
    pub args: Vec<String>,
}

impl UserMessage {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl ToString) -> Self {
        self.args.push(value.to_string());
        self
    }
}

/// Global preference values that seed new records.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MacroDefaults {
    /// Whether owners may edit newly created macros.
    pub allow_owner_edits: bool,
    pub hotkey: String,
}

impl Default for MacroDefaults {
    fn default() -> Self {
        Self {
            allow_owner_edits: true,
            hotkey: DEFAULT_HOTKEY.to_string(),
        }
    }
}
