//! Execution router: turns a button press into interpreter submissions.
//!
//! One call fans a record out over zero or more owners, splits its command
//! text into segments, decides trust and location for each, and hands the
//! result to the [`CommandInterpreter`]. Interpreter failures are reported
//! to the user and counted, never propagated.

use crate::collab::message_keys::{CANT_APPLY_TO_SELECTED, EXEC_FAILED};
use crate::collab::{CommandInput, CommandInterpreter, Notifier, Owner, OwnerDirectory};
use macrodeck_core::{
    Error, ExecutionContext, MacroRecord, OwnerId, OwnerScope, Result, Role, UserMessage,
    CHAT_INPUT,
};
use tracing::{debug, info, warn};

/// Impersonation command prepended when running as an owner.
pub const IMPERSONATE_PREFIX: &str = "/im ";

/// Owners whose name starts with this are macro libraries.
const LIBRARY_PREFIX: &str = "lib:";

/// Location prefix for macros run from an ordinary owner.
const OWNER_LOCATION_PREFIX: &str = "Token:";

/// What one router call did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Commands accepted by the interpreter.
    pub submitted: usize,
    /// Segments written to the input buffer instead of run.
    pub inserted: usize,
    /// Commands the interpreter rejected.
    pub failed: usize,
    /// Owners with no matching macro for a shared template.
    pub skipped_owners: Vec<OwnerId>,
}

impl ExecutionSummary {
    pub fn absorb(&mut self, other: ExecutionSummary) {
        self.submitted += other.submitted;
        self.inserted += other.inserted;
        self.failed += other.failed;
        self.skipped_owners.extend(other.skipped_owners);
    }

    /// Nothing was submitted, inserted or attempted.
    pub fn is_empty(&self) -> bool {
        self.submitted == 0 && self.inserted == 0 && self.failed == 0
    }
}

/// Split command text at line breaks that start a new `/` command.
///
/// `"/a\nb\n/c"` gives `["/a\nb", "/c"]`.
pub fn split_commands(command: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, _) in command.match_indices('\n') {
        if command[i + 1..].starts_with('/') {
            segments.push(&command[start..i]);
            start = i + 1;
        }
    }
    segments.push(&command[start..]);
    segments
}

pub struct ExecutionRouter<'a> {
    interpreter: &'a dyn CommandInterpreter,
    input: &'a dyn CommandInput,
    owners: &'a dyn OwnerDirectory,
    notifier: &'a dyn Notifier,
    role: Role,
}

impl<'a> ExecutionRouter<'a> {
    /// `role` is the role of the user pressing the button.
    pub fn new(
        interpreter: &'a dyn CommandInterpreter,
        input: &'a dyn CommandInput,
        owners: &'a dyn OwnerDirectory,
        notifier: &'a dyn Notifier,
        role: Role,
    ) -> Self {
        Self {
            interpreter,
            input,
            owners,
            notifier,
            role,
        }
    }

    /// Run a record as its own owner, or ownerless for panel records.
    pub fn execute_own(&self, record: &MacroRecord) -> ExecutionSummary {
        self.run(record, record.owner())
    }

    /// Run a record once, impersonating `owner` when given.
    pub fn execute(&self, record: &MacroRecord, owner: Option<&OwnerId>) -> ExecutionSummary {
        self.run(record, owner)
    }

    /// Run a record against every owner in `owners`.
    ///
    /// Shared templates either broadcast their own command (when the
    /// command is part of their identity) or run each owner's matching
    /// macro. A template that applies to all selected owners but whose
    /// command varies per owner is rejected before anything runs.
    pub fn execute_for(&self, record: &MacroRecord, owners: &[OwnerId]) -> Result<ExecutionSummary> {
        if owners.is_empty() {
            return Ok(self.run(record, None));
        }
        if record.common_macro() {
            return self.execute_template(record, owners);
        }

        let mut summary = ExecutionSummary::default();
        for owner in owners {
            summary.absorb(self.run(record, Some(owner)));
        }
        Ok(summary)
    }

    fn execute_template(&self, template: &MacroRecord, owners: &[OwnerId]) -> Result<ExecutionSummary> {
        let compare = template.compare();
        if template.apply_to_selected() && !compare.command {
            warn!(
                "Refusing to apply '{}' to {} owners: command differs per owner",
                template.label(),
                owners.len()
            );
            self.notifier.show_error(UserMessage::new(CANT_APPLY_TO_SELECTED));
            return Err(Error::PolicyViolation(format!(
                "'{}' has per-owner commands and cannot be applied to all selected owners",
                template.label()
            )));
        }

        let mut summary = ExecutionSummary::default();
        if compare.command {
            for owner in owners {
                summary.absorb(self.run(template, Some(owner)));
            }
            return Ok(summary);
        }

        let target = template.logical_hash();
        for owner_id in owners {
            let matches: Vec<MacroRecord> = self
                .owners
                .find(owner_id)
                .map(|owner| {
                    owner
                        .macros
                        .into_iter()
                        .filter(|m| m.logical_hash() == target)
                        .collect()
                })
                .unwrap_or_default();

            if matches.is_empty() {
                debug!("No macro matching '{}' on owner {}", template.label(), owner_id);
                summary.skipped_owners.push(owner_id.clone());
                continue;
            }
            for matched in &matches {
                summary.absorb(self.run(matched, Some(owner_id)));
            }
        }
        Ok(summary)
    }

    fn run(&self, record: &MacroRecord, owner: Option<&OwnerId>) -> ExecutionSummary {
        let mut summary = ExecutionSummary::default();
        let prefix = owner
            .map(|id| format!("{IMPERSONATE_PREFIX}{id}:"))
            .unwrap_or_default();
        let previous = self.input.text();
        let live_owner = owner.and_then(|id| self.owners.find(id));

        if record.include_label() {
            let context = ExecutionContext::chat(record.label(), record.index());
            let text = format!("{prefix}{}", record.label());
            self.submit(record, owner, &text, &context, &mut summary);
        }

        for segment in split_commands(record.command()) {
            if record.auto_execute() {
                let context = self.resolve_context(record, live_owner.as_ref());
                let text = format!("{prefix}{segment}");
                self.submit(record, owner, &text, &context, &mut summary);
            } else {
                self.input.set_text(&format!("{prefix}{previous} {segment}"));
                summary.inserted += 1;
            }
        }
        self.input.request_focus();
        summary
    }

    fn submit(
        &self,
        record: &MacroRecord,
        owner: Option<&OwnerId>,
        text: &str,
        context: &ExecutionContext,
        summary: &mut ExecutionSummary,
    ) {
        match self.interpreter.submit(owner, text, context) {
            Ok(()) => summary.submitted += 1,
            Err(e) => {
                warn!("Macro '{}' failed: {}", record.label(), e);
                self.notifier
                    .show_error(UserMessage::new(EXEC_FAILED).arg(record.label()).arg(e));
                summary.failed += 1;
            }
        }
    }

    /// Trust and location for running `record`, given the live owner.
    pub fn resolve_context(&self, record: &MacroRecord, owner: Option<&Owner>) -> ExecutionContext {
        let scope = record.scope();
        let mut trusted = matches!(scope, OwnerScope::CampaignPanel) || !record.allow_owner_edits();
        let location = match scope {
            OwnerScope::GlobalPanel => {
                trusted = self.role.is_gm();
                "global".to_string()
            }
            OwnerScope::CampaignPanel => "campaign".to_string(),
            OwnerScope::GmPanel => {
                trusted = self.role.is_gm();
                "gm".to_string()
            }
            OwnerScope::Token(_) | OwnerScope::CommonSelection => match owner {
                Some(owner) if owner.name.to_lowercase().starts_with(LIBRARY_PREFIX) => {
                    owner.name.clone()
                }
                Some(owner) => format!("{OWNER_LOCATION_PREFIX}{}", owner.name),
                None => CHAT_INPUT.to_string(),
            },
        };
        ExecutionContext::new(record.label(), location, trusted, record.index())
    }

    /// Tooltip text, evaluated when it starts with `{` or `[`.
    ///
    /// Evaluation errors fall back to the raw tooltip.
    pub fn evaluate_tooltip(&self, record: &MacroRecord) -> String {
        let tooltip = record.tooltip();
        let trimmed = tooltip.trim();
        if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            return tooltip.to_string();
        }

        let owner = record.owner().and_then(|id| self.owners.find(id));
        let location = owner.map(|o| o.name).unwrap_or_default();
        let context = ExecutionContext::new("ToolTip", location, false, record.index());
        match self.interpreter.evaluate(record.owner(), tooltip, &context) {
            Ok(rendered) => rendered,
            Err(e) => {
                info!("Tooltip for '{}' left unevaluated: {}", record.label(), e);
                tooltip.to_string()
            }
        }
    }
}
