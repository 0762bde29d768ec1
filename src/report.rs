//! Offline reports over a saved macro list.

use macrodeck_core::{sort_records, MacroRecord};
use std::collections::HashMap;

/// One `group / label` line per record, in button order.
pub fn sorted_lines(records: &mut [MacroRecord]) -> Vec<String> {
    sort_records(records);
    records
        .iter()
        .map(|r| format!("{} / {}", r.group(), r.label()))
        .collect()
}

/// A record whose logical identity matches an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub index: i32,
    pub label: String,
    pub original_index: i32,
    pub original_label: String,
}

impl std::fmt::Display for Duplicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} '{}' duplicates #{} '{}'",
            self.index, self.label, self.original_index, self.original_label
        )
    }
}

/// Records whose logical hash collides with an earlier record in input order.
pub fn find_duplicates(records: &[MacroRecord]) -> Vec<Duplicate> {
    let mut first_seen: HashMap<u64, &MacroRecord> = HashMap::new();
    let mut duplicates = Vec::new();
    for record in records {
        let hash = record.logical_hash();
        match first_seen.get(&hash) {
            Some(original) => duplicates.push(Duplicate {
                index: record.index(),
                label: record.label().to_string(),
                original_index: original.index(),
                original_label: original.label().to_string(),
            }),
            None => {
                first_seen.insert(hash, record);
            }
        }
    }
    duplicates
}
