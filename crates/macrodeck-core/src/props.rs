//! Build an owner's macro record from a string-keyed property map.
//!
//! Only keys present in the map are applied; everything else keeps the
//! blank-record default. Values arrive as strings and are parsed here.

use crate::error::{Error, Result};
use crate::record::MacroRecord;
use crate::types::{MacroDefaults, OwnerId, OwnerScope};
use std::collections::HashMap;

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

impl MacroRecord {
    /// `next_index` is used when the map carries no `index`.
    pub fn from_props(
        owner: &OwnerId,
        next_index: i32,
        props: &HashMap<String, String>,
        defaults: &MacroDefaults,
    ) -> Result<Self> {
        let index = match props.get("index") {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|e| Error::invalid_field("index", format!("{raw:?}: {e}")))?,
            None => next_index,
        };

        let mut record = MacroRecord::new(index, defaults);
        record.set_owner(owner.clone());

        for (key, value) in props {
            match key.as_str() {
                "index" => {}
                "saveLocation" => {
                    record.set_scope(OwnerScope::from_location(value, Some(owner.clone())))
                }
                "colorKey" => record.set_color_key(value),
                "hotKey" => record.set_hot_key(value.as_str()),
                "command" => record.set_command(value.as_str()),
                "label" => record.set_label(value.as_str()),
                "group" => record.set_group(value.as_str()),
                "sortby" => record.set_sortby(value.as_str()),
                "autoExecute" => record.set_auto_execute(parse_bool(value)),
                "includeLabel" => record.set_include_label(parse_bool(value)),
                "applyToTokens" => record.set_apply_to_selected(parse_bool(value)),
                "fontColorKey" => record.set_font_color_key(value),
                "fontSize" => record.set_font_size(value),
                "minWidth" => record.set_min_width(value.as_str()),
                "maxWidth" => record.set_max_width(value.as_str()),
                "allowPlayerEdits" => record.set_allow_owner_edits(parse_bool(value)),
                "displayHotKey" => record.set_display_hotkey(parse_bool(value)),
                "toolTip" => record.set_tooltip(value.as_str()),
                "commonMacro" => record.set_common_macro(parse_bool(value)),
                "compareGroup" => record.compare_mut().group = parse_bool(value),
                "compareSortPrefix" => record.compare_mut().sort_prefix = parse_bool(value),
                "compareCommand" => record.compare_mut().command = parse_bool(value),
                "compareIncludeLabel" => record.compare_mut().include_label = parse_bool(value),
                "compareAutoExecute" => record.compare_mut().auto_execute = parse_bool(value),
                "compareApplyToSelectedTokens" => {
                    record.compare_mut().apply_to_selected = parse_bool(value)
                }
                other => tracing::debug!("Ignoring unknown macro property {}", other),
            }
        }

        Ok(record)
    }
}
