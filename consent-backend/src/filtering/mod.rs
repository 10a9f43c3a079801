// src/filtering/mod.rs
//
// Shared record filtering and view-state derivation used by every admin
// panel (consents, users, data requests, notifications, purposes,
// grievances). Each panel brings its own record shape; the predicates and
// the derivation live here once.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};

pub mod controller;

pub use controller::{LoggingMutationSink, MutationSink, PanelController, RecordSource};

/// カテゴリフィルタの「全件」センチネル値
pub const ALL: &str = "all";

/// Typed accessors a panel record exposes to the filter evaluation.
///
/// `category_value` returns `None` for keys the shape does not carry; such
/// keys are treated as always-matching, so the derivation stays total no
/// matter what key a caller selects.
pub trait PanelRecord {
    /// Stable identifier, unique within a loaded record set.
    fn id(&self) -> &str;

    /// Text fields searched by the free-text query.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Value of one categorical field, `None` when the shape has no such key.
    fn category_value(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Display label for the categorical value, used when deriving dropdown
    /// options. Defaults to the raw value.
    fn category_label(&self, key: &str) -> Option<Cow<'_, str>> {
        self.category_value(key)
    }

    /// Flag consulted by the boolean toggle (e.g. unread). Defaults to
    /// `true` so the toggle never excludes shapes without such a flag.
    fn toggle_flag(&self) -> bool {
        true
    }
}

/// One selectable entry of a category filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// The user-chosen predicates applied to a record set: free-text search,
/// categorical selections and a boolean toggle. A record is visible iff it
/// satisfies the logical AND of every engaged predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    categories: BTreeMap<String, String>,
    toggle: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the search predicate. An empty string matches all records.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Replaces one categorical filter's active value. Selecting [`ALL`]
    /// clears the restriction for that key.
    pub fn set_category_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value == ALL {
            self.categories.remove(&key);
        } else {
            self.categories.insert(key, value);
        }
    }

    /// Replaces the boolean toggle (e.g. "only unread").
    pub fn set_boolean_toggle(&mut self, flag: bool) {
        self.toggle = flag;
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    pub fn boolean_toggle(&self) -> bool {
        self.toggle
    }

    pub fn category_filter(&self, key: &str) -> Option<&str> {
        self.categories.get(key).map(String::as_str)
    }

    /// True when no predicate is engaged, i.e. derivation is the identity.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.categories.is_empty() && !self.toggle
    }

    /// Whether one record satisfies every engaged predicate.
    pub fn matches<R: PanelRecord>(&self, record: &R) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        for (key, selected) in &self.categories {
            // Keys the shape does not carry are always-matching.
            if let Some(value) = record.category_value(key) {
                if value.as_ref() != selected.as_str() {
                    return false;
                }
            }
        }

        if self.toggle && !record.toggle_flag() {
            return false;
        }

        true
    }
}

/// Derives the visible subset of `records` under `filter`.
///
/// Pure: the input is never mutated and the result preserves the original
/// relative order (stable filter, no re-sort).
pub fn derive_visible<R: PanelRecord + Clone>(records: &[R], filter: &FilterState) -> Vec<R> {
    records
        .iter()
        .filter(|record| filter.matches(*record))
        .cloned()
        .collect()
}

/// Returns a new collection where exactly the record matching `id` has had
/// `patch` applied; all other records are value-equal copies. An absent id
/// yields an unchanged copy of the input, never an error.
pub fn mutate_by_id<R, F>(records: &[R], id: &str, patch: F) -> Vec<R>
where
    R: PanelRecord + Clone,
    F: FnOnce(&mut R),
{
    let mut updated = records.to_vec();
    if let Some(record) = updated.iter_mut().find(|record| record.id() == id) {
        patch(record);
    }
    updated
}

/// Derives the selectable options of one category filter from the current
/// record set: a synthesized "All" option first, then the distinct values in
/// first-encounter order, labeled by the first record carrying each value.
pub fn distinct_category_options<R: PanelRecord>(records: &[R], key: &str) -> Vec<CategoryOption> {
    let mut options = vec![CategoryOption {
        value: ALL.to_string(),
        label: "All".to_string(),
    }];

    let mut seen = HashSet::new();
    for record in records {
        if let Some(value) = record.category_value(key) {
            if seen.insert(value.to_string()) {
                let label = record
                    .category_label(key)
                    .unwrap_or_else(|| value.clone())
                    .into_owned();
                options.push(CategoryOption {
                    value: value.into_owned(),
                    label,
                });
            }
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct SampleRow {
        id: String,
        name: String,
        email: String,
        kind: String,
        unread: bool,
    }

    impl SampleRow {
        fn new(id: &str, name: &str, email: &str, kind: &str, unread: bool) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                kind: kind.to_string(),
                unread,
            }
        }
    }

    impl PanelRecord for SampleRow {
        fn id(&self) -> &str {
            &self.id
        }

        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::from(&self.name), Cow::from(&self.email)]
        }

        fn category_value(&self, key: &str) -> Option<Cow<'_, str>> {
            match key {
                "kind" => Some(Cow::from(&self.kind)),
                _ => None,
            }
        }

        fn toggle_flag(&self) -> bool {
            self.unread
        }
    }

    fn sample_rows() -> Vec<SampleRow> {
        vec![
            SampleRow::new("r1", "John Doe", "john@example.com", "alpha", true),
            SampleRow::new("r2", "Jane Smith", "jane@example.com", "beta", false),
            SampleRow::new("r3", "Aki Tanaka", "aki@example.com", "alpha", true),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let rows = sample_rows();
        let filter = FilterState::new();
        assert!(filter.is_unfiltered());
        assert_eq!(derive_visible(&rows, &filter), rows);
    }

    #[test]
    fn test_derivation_preserves_order() {
        let rows = sample_rows();
        let mut filter = FilterState::new();
        filter.set_category_filter("kind", "alpha");

        let visible = derive_visible(&rows, &filter);
        let ids: Vec<&str> = visible.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let rows = sample_rows();
        let mut filter = FilterState::new();
        filter.set_search_query("example.com");
        filter.set_category_filter("kind", "alpha");

        let once = derive_visible(&rows, &filter);
        let twice = derive_visible(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = sample_rows();
        let mut upper = FilterState::new();
        upper.set_search_query("JOHN");
        let mut lower = FilterState::new();
        lower.set_search_query("john");

        assert_eq!(derive_visible(&rows, &upper), derive_visible(&rows, &lower));
        assert_eq!(derive_visible(&rows, &upper).len(), 1);
    }

    #[test]
    fn test_search_matches_any_field_unanchored() {
        let rows = sample_rows();
        let mut filter = FilterState::new();
        // 部分一致、フィールドはメールアドレス
        filter.set_search_query("ane@exam");

        let visible = derive_visible(&rows, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), "r2");
    }

    #[test]
    fn test_all_sentinel_is_noop() {
        let rows = sample_rows();
        let mut with_all = FilterState::new();
        with_all.set_category_filter("kind", ALL);

        assert_eq!(derive_visible(&rows, &with_all), rows);
        assert!(with_all.is_unfiltered());
    }

    #[test]
    fn test_all_sentinel_clears_previous_selection() {
        let mut filter = FilterState::new();
        filter.set_category_filter("kind", "beta");
        assert_eq!(filter.category_filter("kind"), Some("beta"));

        filter.set_category_filter("kind", ALL);
        assert_eq!(filter.category_filter("kind"), None);
    }

    #[test]
    fn test_unknown_category_key_matches_everything() {
        let rows = sample_rows();
        let mut filter = FilterState::new();
        filter.set_category_filter("no_such_field", "whatever");

        assert_eq!(derive_visible(&rows, &filter), rows);
    }

    #[test]
    fn test_predicates_combine_with_logical_and() {
        let rows = sample_rows();
        let mut filter = FilterState::new();
        filter.set_search_query("example.com");
        filter.set_category_filter("kind", "alpha");
        filter.set_boolean_toggle(true);

        let ids: Vec<String> = derive_visible(&rows, &filter)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(ids, vec!["r1", "r3"]);

        // 検索語を絞ると積集合も絞られる
        filter.set_search_query("tanaka");
        let ids: Vec<String> = derive_visible(&rows, &filter)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(ids, vec!["r3"]);
    }

    #[test]
    fn test_boolean_toggle() {
        let rows = sample_rows();
        let mut filter = FilterState::new();
        filter.set_boolean_toggle(true);

        let visible = derive_visible(&rows, &filter);
        assert!(visible.iter().all(|r| r.unread));
        assert_eq!(visible.len(), 2);

        filter.set_boolean_toggle(false);
        assert_eq!(derive_visible(&rows, &filter), rows);
    }

    #[test]
    fn test_mutate_by_id_changes_exactly_one_record() {
        let rows = sample_rows();
        let updated = mutate_by_id(&rows, "r2", |r| r.unread = true);

        for (before, after) in rows.iter().zip(updated.iter()) {
            if before.id() == "r2" {
                assert!(after.unread);
            } else {
                assert_eq!(before, after);
            }
        }
        // 入力は不変
        assert!(!rows[1].unread);
    }

    #[test]
    fn test_mutate_by_id_absent_id_is_noop() {
        let rows = sample_rows();
        let updated = mutate_by_id(&rows, "missing", |r| r.unread = false);
        assert_eq!(rows, updated);
    }

    #[test]
    fn test_mutation_does_not_reset_filter_semantics() {
        // マーク既読後に unread-only ビューから消えること
        let rows = vec![
            SampleRow::new("1", "a", "a@x", "alpha", true),
            SampleRow::new("2", "b", "b@x", "alpha", false),
        ];
        let updated = mutate_by_id(&rows, "1", |r| r.unread = false);

        let mut filter = FilterState::new();
        filter.set_boolean_toggle(true);
        assert!(derive_visible(&updated, &filter).is_empty());
    }

    #[test]
    fn test_distinct_category_options_dedup_and_order() {
        let rows = sample_rows();
        let options = distinct_category_options(&rows, "kind");

        assert_eq!(
            options,
            vec![
                CategoryOption {
                    value: ALL.to_string(),
                    label: "All".to_string()
                },
                CategoryOption {
                    value: "alpha".to_string(),
                    label: "alpha".to_string()
                },
                CategoryOption {
                    value: "beta".to_string(),
                    label: "beta".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_distinct_category_options_unknown_key_only_all() {
        let rows = sample_rows();
        let options = distinct_category_options(&rows, "no_such_field");
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, ALL);
    }
}
