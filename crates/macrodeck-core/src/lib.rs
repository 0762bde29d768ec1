//! Macrodeck Core - macro records, identity, and error handling

pub mod error;
pub mod identity;
pub mod legacy;
pub mod palette;
pub mod props;
pub mod record;
pub mod types;

pub use error::{Error, Result};
pub use identity::{natural_sort_key, sort_records};
pub use legacy::MacroWire;
pub use record::{CompareToggles, MacroRecord};
pub use types::*;
