//! Macrodeck Exec - macro execution routing and persistence dispatch
//!
//! Everything outside the macro engine (command interpreter, input widget,
//! owner lookup, stores, user error channel) is reached through the traits
//! in `collab`. In-memory implementations live in `store`.

pub mod collab;
pub mod persist;
pub mod router;
pub mod store;

pub use collab::{CommandInput, CommandInterpreter, MacroStore, Notifier, Owner, OwnerDirectory, OwnerUpdates};
pub use persist::PersistenceDispatcher;
pub use router::{split_commands, ExecutionRouter, ExecutionSummary};
pub use store::{LogNotifier, MemoryOwners, MemoryStore, RecordingNotifier};
