//! Structural equality, logical identity, and natural ordering of records.
//!
//! Structural equality compares every stored field except the compare
//! toggles and the owner scope. The logical identity hash decides whether
//! two records on different owners are "the same macro"; it is a hash, so
//! unrelated records that collide are treated as the same macro.

use crate::record::MacroRecord;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Width digit runs are padded to in sort keys.
const SORT_DIGIT_WIDTH: usize = 4;

impl PartialEq for MacroRecord {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.auto_execute == other.auto_execute
            && self.include_label == other.include_label
            && self.apply_to_selected == other.apply_to_selected
            && self.command == other.command
            && self.hot_key == other.hot_key
            && self.label == other.label
            && self.group == other.group
            && self.sortby == other.sortby
            && self.color_key == other.color_key
            && self.font_color_key == other.font_color_key
            && self.font_size == other.font_size
            && self.min_width == other.min_width
            && self.max_width == other.max_width
    }
}

impl Eq for MacroRecord {}

impl Hash for MacroRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.auto_execute.hash(state);
        self.include_label.hash(state);
        self.apply_to_selected.hash(state);
        self.min_width.hash(state);
        self.max_width.hash(state);
        self.font_size.hash(state);
        self.font_color_key.hash(state);
        self.color_key.hash(state);
        self.hot_key.hash(state);
        self.label.hash(state);
        self.group.hash(state);
        self.sortby.hash(state);
        self.command.hash(state);
    }
}

impl MacroRecord {
    /// Structural hash, consistent with `==`.
    pub fn structural_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Hash of the fields this record's compare toggles select, plus label.
    ///
    /// Index, hotkey and cosmetic fields never take part.
    pub fn logical_hash(&self) -> u64 {
        let toggles = self.compare;
        let mut hasher = DefaultHasher::new();
        (toggles.auto_execute && self.auto_execute).hash(&mut hasher);
        (toggles.include_label && self.include_label).hash(&mut hasher);
        (toggles.apply_to_selected && self.apply_to_selected).hash(&mut hasher);
        self.label.hash(&mut hasher);
        toggles.group.then_some(&self.group).hash(&mut hasher);
        toggles.sort_prefix.then_some(&self.sortby).hash(&mut hasher);
        toggles.command.then_some(&self.command).hash(&mut hasher);
        hasher.finish()
    }

    pub fn same_logical_macro(&self, other: &MacroRecord) -> bool {
        self.logical_hash() == other.logical_hash()
    }

    /// `group sortby label` with digit runs zero padded.
    pub fn sort_key(&self) -> String {
        natural_sort_key(&format!("{} {} {}", self.group, self.sortby, self.label))
    }

    /// Case-insensitive comparison of sort keys.
    pub fn sort_cmp(&self, other: &MacroRecord) -> Ordering {
        compare_ignore_case(&self.sort_key(), &other.sort_key())
    }
}

fn digit_runs() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"))
}

/// Left-pad every run of digits with zeros to at least four places.
///
/// `2d6` becomes `0002d0006`, so it sorts ahead of `10d6` (`0010d0006`).
/// Runs longer than four digits are kept whole.
pub fn natural_sort_key(text: &str) -> String {
    digit_runs()
        .replace_all(text, |caps: &regex::Captures| {
            format!("{:0>width$}", &caps[0], width = SORT_DIGIT_WIDTH)
        })
        .into_owned()
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    let lower = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    lower(a).cmp(&lower(b))
}

/// Sort records by group, sort prefix and label in natural order.
pub fn sort_records(records: &mut [MacroRecord]) {
    records.sort_by(|a, b| a.sort_cmp(b));
}
