// tests/filtering_tests.rs
//
// Behavioral contracts of the shared filtering core, exercised through the
// real panel record shapes.

use chrono::{TimeZone, Utc};
use consent_backend::features::consent::model::ConsentRecord;
use consent_backend::features::data_request::model::{
    DataRequestRecord, DataRequestStatus, DataRequestType,
};
use consent_backend::features::notification::model::NotificationRecord;
use consent_backend::filtering::{
    derive_visible, distinct_category_options, mutate_by_id, FilterState, PanelRecord, ALL,
};

fn consent(id: &str, user_name: &str, purpose_id: &str, purpose_name: &str, granted: bool) -> ConsentRecord {
    let at = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
    ConsentRecord {
        id: id.to_string(),
        user_name: user_name.to_string(),
        user_email: format!("{}@example.com", id),
        purpose_id: purpose_id.to_string(),
        purpose_name: purpose_name.to_string(),
        is_granted: granted,
        created_at: at,
        updated_at: at,
    }
}

fn consents() -> Vec<ConsentRecord> {
    vec![
        consent("c1", "John Doe", "p-marketing", "Marketing", false),
        consent("c2", "Jane Smith", "p-essential", "Essential Services", true),
    ]
}

fn notification(id: &str, title: &str, unread: bool) -> NotificationRecord {
    let at = Utc.with_ymd_and_hms(2026, 7, 1, 8, 0, 0).unwrap();
    NotificationRecord {
        id: id.to_string(),
        title: title.to_string(),
        body: format!("{} body", title),
        unread,
        created_at: at,
        updated_at: at,
    }
}

fn data_request(id: &str, name: &str, kind: DataRequestType) -> DataRequestRecord {
    let at = Utc.with_ymd_and_hms(2026, 7, 10, 9, 0, 0).unwrap();
    DataRequestRecord {
        id: id.to_string(),
        requester_name: name.to_string(),
        requester_email: format!("{}@example.com", id),
        request_type: kind,
        status: DataRequestStatus::Pending,
        resolution_note: None,
        created_at: at,
        updated_at: at,
    }
}

#[test]
fn test_visible_set_is_ordered_subsequence() {
    let records = consents();
    let mut filter = FilterState::new();
    filter.set_search_query("example.com");

    let visible = derive_visible(&records, &filter);
    let mut source = records.iter();
    for item in &visible {
        // 各要素が元の並びの中に順序通り現れる
        assert!(source.any(|r| r == item));
    }
}

#[test]
fn test_no_filters_is_identity() {
    let records = consents();
    assert_eq!(derive_visible(&records, &FilterState::new()), records);
}

#[test]
fn test_reapplying_filter_is_idempotent() {
    let records = consents();
    let mut filter = FilterState::new();
    filter.set_category_filter("status", "granted");

    let once = derive_visible(&records, &filter);
    assert_eq!(derive_visible(&once, &filter), once);
}

#[test]
fn test_search_case_insensitive_equivalence() {
    let records = consents();
    let mut upper = FilterState::new();
    upper.set_search_query("JOHN");
    let mut lower = FilterState::new();
    lower.set_search_query("john");

    assert_eq!(
        derive_visible(&records, &upper),
        derive_visible(&records, &lower)
    );
}

#[test]
fn test_category_all_equals_no_category() {
    let records = consents();
    let mut with_all = FilterState::new();
    with_all.set_category_filter("purpose", ALL);

    assert_eq!(
        derive_visible(&records, &with_all),
        derive_visible(&records, &FilterState::new())
    );
}

#[test]
fn test_consents_panel_scenario() {
    let records = consents();

    let mut by_search = FilterState::new();
    by_search.set_search_query("jane");
    let visible = derive_visible(&records, &by_search);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "c2");

    let mut by_granted = FilterState::new();
    by_granted.set_category_filter("status", "granted");
    let visible = derive_visible(&records, &by_granted);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "c2");

    let mut by_revoked = FilterState::new();
    by_revoked.set_category_filter("status", "revoked");
    let visible = derive_visible(&records, &by_revoked);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "c1");
}

#[test]
fn test_mutation_changes_exactly_one_record() {
    let records = consents();
    let updated = mutate_by_id(&records, "c1", |r| r.is_granted = true);

    assert!(updated[0].is_granted);
    assert_eq!(updated[1], records[1]);
    // 入力コレクションは不変
    assert!(!records[0].is_granted);
}

#[test]
fn test_mutation_on_absent_id_is_noop() {
    let records = consents();
    let updated = mutate_by_id(&records, "c999", |r| r.is_granted = true);
    assert_eq!(updated, records);
}

#[test]
fn test_notifications_panel_scenario() {
    let records = vec![
        notification("1", "First", true),
        notification("2", "Second", false),
    ];

    let updated = mutate_by_id(&records, "1", |n| n.unread = false);
    assert!(!updated[0].unread);
    assert!(!updated[1].unread);

    let mut only_unread = FilterState::new();
    only_unread.set_boolean_toggle(true);
    assert!(derive_visible(&updated, &only_unread).is_empty());
}

#[test]
fn test_data_requests_panel_option_scenario() {
    let records = vec![
        data_request("d1", "John Doe", DataRequestType::Access),
        data_request("d2", "Jane Smith", DataRequestType::Deletion),
        data_request("d3", "Chen Wei", DataRequestType::Access),
    ];

    let options = distinct_category_options(&records, "request_type");
    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec![ALL, "access", "deletion"]);
    assert_eq!(options[1].label, "Data Access");
}

#[test]
fn test_filter_survives_record_replacement() {
    let mut filter = FilterState::new();
    filter.set_search_query("jane");
    filter.set_category_filter("status", "granted");

    // レコード集合の差し替えはフィルタ状態に影響しない
    let first = consents();
    let second = vec![consent("c3", "Jane Doe", "p-marketing", "Marketing", true)];

    assert_eq!(derive_visible(&first, &filter).len(), 1);
    assert_eq!(derive_visible(&second, &filter).len(), 1);
    assert_eq!(filter.search_query(), "jane");
    assert_eq!(filter.category_filter("status"), Some("granted"));
}

#[test]
fn test_unknown_filter_key_never_excludes() {
    let records = consents();
    let mut filter = FilterState::new();
    filter.set_category_filter("department", "engineering");

    assert_eq!(derive_visible(&records, &filter), records);
    assert!(records
        .iter()
        .all(|r| r.category_value("department").is_none()));
}
