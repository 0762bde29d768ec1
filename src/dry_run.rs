//! Dry-run execution: routes saved macros through an interpreter that only
//! records what it would have run.

use macrodeck_core::{ExecutionContext, MacroRecord, OwnerId, Result, Role};
use macrodeck_exec::{
    CommandInput, CommandInterpreter, ExecutionRouter, ExecutionSummary, LogNotifier, MemoryOwners,
};
use std::cell::RefCell;

#[derive(Default)]
pub struct EchoInterpreter {
    lines: RefCell<Vec<String>>,
}

impl EchoInterpreter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl CommandInterpreter for EchoInterpreter {
    fn submit(&self, owner: Option<&OwnerId>, command: &str, context: &ExecutionContext) -> Result<()> {
        let trust = if context.trusted { "trusted" } else { "untrusted" };
        let owner = owner.map(|o| o.as_str()).unwrap_or("-");
        self.lines.borrow_mut().push(format!(
            "[{}] {} @{} ({}): {}",
            trust, context.label, context.location, owner, command
        ));
        Ok(())
    }

    fn evaluate(&self, _owner: Option<&OwnerId>, text: &str, _context: &ExecutionContext) -> Result<String> {
        Ok(text.to_string())
    }
}

/// Input buffer that keeps whatever is written to it.
#[derive(Default)]
pub struct BufferInput {
    text: RefCell<String>,
}

impl CommandInput for BufferInput {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }

    fn request_focus(&self) {}
}

/// What a dry run would have sent to the interpreter and left in the input.
pub struct DryRunReport {
    pub submissions: Vec<String>,
    pub input: String,
    pub summary: ExecutionSummary,
}

/// Run every record as its own owner, in the given order.
pub fn dry_run(records: &[MacroRecord], role: Role) -> DryRunReport {
    let interpreter = EchoInterpreter::default();
    let input = BufferInput::default();
    let owners = MemoryOwners::new();
    let notifier = LogNotifier;
    let router = ExecutionRouter::new(&interpreter, &input, &owners, &notifier, role);

    let mut summary = ExecutionSummary::default();
    for record in records {
        summary.absorb(router.execute_own(record));
    }
    DryRunReport {
        submissions: interpreter.lines(),
        input: input.text(),
        summary,
    }
}
