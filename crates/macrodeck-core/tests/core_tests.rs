//! Tests for macrodeck-core: records, identity, ordering, wire schema, errors

use macrodeck_core::legacy::load_records;
use macrodeck_core::*;
use serde_json::json;
use std::collections::HashSet;

fn defaults() -> MacroDefaults {
    MacroDefaults::default()
}

fn sample(label: &str) -> MacroRecord {
    let mut record = MacroRecord::new(1, &defaults());
    record.set_label(label);
    record.set_group("Combat");
    record.set_sortby("a");
    record.set_command("/roll 1d20");
    record
}

// ===========================================================================
// OwnerScope
// ===========================================================================

#[test]
fn owner_scope_legacy_aliases_fold_into_token() {
    let owner = OwnerId::new("tok-1");
    for location in ["Token", "ImpersonatePanel", "SelectionPanel"] {
        assert_eq!(
            OwnerScope::from_location(location, Some(owner.clone())),
            OwnerScope::Token(owner.clone())
        );
    }
    assert_eq!(OwnerScope::from_location("GmPanel", None), OwnerScope::GmPanel);
    assert_eq!(OwnerScope::from_location("Token", None), OwnerScope::CommonSelection);
}

#[test]
fn owner_scope_location_names() {
    assert_eq!(OwnerScope::Token(OwnerId::new("x")).location(), "Token");
    assert_eq!(OwnerScope::GlobalPanel.location(), "GlobalPanel");
    assert_eq!(OwnerScope::CampaignPanel.location(), "CampaignPanel");
    assert_eq!(OwnerScope::CommonSelection.location(), "");
}

// ===========================================================================
// Structural equality
// ===========================================================================

#[test]
fn structural_equality_is_reflexive_symmetric_transitive() {
    let a = sample("Attack");
    let b = a.clone();
    let mut c = a.templated_copy(OwnerScope::GmPanel, 1, &defaults());
    c.set_hot_key(a.hot_key());

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(b, c);
    assert_eq!(a, c);
}

#[test]
fn structural_equality_ignores_scope_and_toggles() {
    let a = sample("Attack");
    let mut b = a.clone();
    b.set_scope(OwnerScope::CampaignPanel);
    b.compare_mut().command = false;
    b.set_common_macro(true);
    assert_eq!(a, b);
    assert_eq!(a.structural_hash(), b.structural_hash());
}

#[test]
fn structural_equality_detects_field_changes() {
    let a = sample("Attack");
    let mut b = a.clone();
    b.set_min_width("40px");
    assert_ne!(a, b);

    let mut c = a.clone();
    c.set_index(2);
    assert_ne!(a, c);
}

#[test]
fn equal_records_hash_equal_in_sets() {
    let a = sample("Attack");
    let b = a.clone();
    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

// ===========================================================================
// Logical identity hash
// ===========================================================================

#[test]
fn logical_hash_ignores_fields_with_toggle_off() {
    let mut a = sample("Attack");
    a.set_compare(CompareToggles {
        group: false,
        sort_prefix: false,
        command: false,
        include_label: false,
        auto_execute: false,
        apply_to_selected: false,
    });
    let before = a.logical_hash();

    a.set_group("Other");
    a.set_sortby("zzz");
    a.set_command("/say something else");
    a.set_include_label(true);
    a.set_auto_execute(false);
    a.set_apply_to_selected(true);
    assert_eq!(a.logical_hash(), before);
}

#[test]
fn logical_hash_changes_with_toggled_fields() {
    let a = sample("Attack");
    let base = a.logical_hash();

    let mut group = a.clone();
    group.set_group("Other");
    assert_ne!(group.logical_hash(), base);

    let mut command = a.clone();
    command.set_command("/roll 2d20");
    assert_ne!(command.logical_hash(), base);

    let mut label = a.clone();
    label.compare_mut().command = false;
    let partial = label.logical_hash();
    label.set_label("Defend");
    assert_ne!(label.logical_hash(), partial);
}

#[test]
fn logical_hash_ignores_index_hotkey_and_cosmetics() {
    let a = sample("Attack");
    let mut b = a.owner_copy(OwnerId::new("tok-2"), 17, &defaults());
    b.set_hot_key("F5");
    b.set_color_key("red");
    b.set_font_size("2em");
    assert!(a.same_logical_macro(&b));
    assert_ne!(a, b);
}

// ===========================================================================
// Natural ordering
// ===========================================================================

#[test]
fn natural_sort_puts_2d6_before_10d6() {
    let mut small = MacroRecord::new(0, &defaults());
    small.set_label("2d6");
    let mut large = MacroRecord::new(1, &defaults());
    large.set_label("10d6");

    assert!("2d6".cmp("10d6").is_gt());
    assert!(small.sort_cmp(&large).is_lt());

    let mut records = vec![large, small];
    sort_records(&mut records);
    assert_eq!(records[0].label(), "2d6");
    assert_eq!(records[1].label(), "10d6");
}

#[test]
fn sort_uses_group_then_sortby_then_label() {
    let mut a = MacroRecord::new(0, &defaults());
    a.set_group("B");
    a.set_label("a");
    let mut b = MacroRecord::new(1, &defaults());
    b.set_group("a");
    b.set_sortby("2");
    b.set_label("z");
    let mut c = MacroRecord::new(2, &defaults());
    c.set_group("a");
    c.set_sortby("10");
    c.set_label("a");

    let mut records = vec![a, c, b];
    sort_records(&mut records);
    let labels: Vec<_> = records.iter().map(|r| r.label()).collect();
    assert_eq!(labels, vec!["z", "a", "a"]);
    assert_eq!(records[2].group(), "B");
}

#[test]
fn sort_key_shape() {
    let mut record = MacroRecord::new(0, &defaults());
    record.set_group("Dice");
    record.set_sortby("1");
    record.set_label("3d8");
    assert_eq!(record.sort_key(), "Dice 0001 0003d0008");
}

// ===========================================================================
// Wire schema and legacy reconciliation
// ===========================================================================

#[test]
fn legacy_record_with_no_optional_fields() {
    let records = load_records(
        r#"[{"saveLocation": "CampaignPanel", "index": 3, "label": "Old"}]"#,
        &defaults(),
    )
    .unwrap();
    let record = &records[0];
    assert_eq!(record.compare(), CompareToggles::default());
    assert!(!record.common_macro());
    assert!(record.display_hotkey());
    assert_eq!(record.scope(), &OwnerScope::CampaignPanel);
    assert_eq!(record.group(), "");
    assert_eq!(record.tooltip(), "");
    assert_eq!(record.hot_key(), "None");
}

#[test]
fn legacy_records_get_distinct_ids() {
    let records = load_records(r#"[{"index": 0}, {"index": 1}]"#, &defaults()).unwrap();
    assert_ne!(records[0].macro_id(), records[1].macro_id());
}

#[test]
fn legacy_unknown_color_falls_back() {
    let records = load_records(
        r#"[{"colorKey": "mauve", "fontColorKey": "puce"}]"#,
        &defaults(),
    )
    .unwrap();
    assert_eq!(records[0].color_key(), "default");
    assert_eq!(records[0].font_color_key(), "black");
}

#[test]
fn wire_uses_camel_case_keys() {
    let mut record = sample("Attack");
    record.set_owner(OwnerId::new("tok-1"));
    let value = serde_json::to_value(record.to_wire()).unwrap();
    assert_eq!(value["saveLocation"], json!("Token"));
    assert_eq!(value["ownerId"], json!("tok-1"));
    assert_eq!(value["applyToTokens"], json!(false));
    assert_eq!(value["compareApplyToSelectedTokens"], json!(true));
    assert_eq!(value["macroId"], json!(record.macro_id()));
}

#[test]
fn wire_preserves_identity_and_structure() {
    let mut record = sample("Attack");
    record.set_owner(OwnerId::new("tok-1"));
    record.set_allow_owner_edits(false);
    let back = record.to_wire().reconcile(&defaults());
    assert_eq!(back, record);
    assert_eq!(back.macro_id(), record.macro_id());
    assert_eq!(back.scope(), record.scope());
    assert!(!back.allow_owner_edits());
}

#[test]
fn load_records_rejects_malformed_json() {
    let err = load_records("{not json", &defaults()).unwrap_err();
    assert!(matches!(err, Error::JsonError(_)));
}

// ===========================================================================
// Small value types
// ===========================================================================

#[test]
fn user_message_collects_args() {
    let msg = UserMessage::new("msg.error.macro.buttonNullToken")
        .arg("Attack")
        .arg(OwnerId::new("tok-1"));
    assert_eq!(msg.key, "msg.error.macro.buttonNullToken");
    assert_eq!(msg.args, vec!["Attack", "tok-1"]);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Gm).unwrap(), r#""gm""#);
    assert!(Role::Gm.is_gm());
    assert!(!Role::Player.is_gm());
}

#[test]
fn error_display() {
    let e = Error::invalid_field("index", "not a number");
    assert_eq!(e.to_string(), "invalid field index: not a number");
    let e = Error::auth_failed("bad password");
    assert_eq!(e.to_string(), "authentication failed: bad password");
}
