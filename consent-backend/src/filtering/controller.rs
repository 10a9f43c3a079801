// src/filtering/controller.rs

use async_trait::async_trait;

use crate::error::AppResult;
use crate::filtering::{
    derive_visible, distinct_category_options, mutate_by_id, CategoryOption, FilterState,
    PanelRecord,
};

/// Asynchronous data-fetch boundary supplying a panel's initial record set.
/// A real implementation performs an HTTP GET; mock implementations return a
/// hardcoded literal.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    async fn fetch(&self) -> AppResult<Vec<R>>;
}

/// Accepts a single-record update keyed by id. The caller assumes the sink
/// durably applies the patch and mirrors it locally without waiting for
/// confirmation beyond the returned result.
#[async_trait]
pub trait MutationSink: Send + Sync {
    async fn apply(&self, id: &str, patch: &serde_json::Value) -> AppResult<()>;
}

/// Mutation sink that only records the update in the log. Stands in for a
/// real backend while every store is mock data.
#[derive(Debug, Default, Clone)]
pub struct LoggingMutationSink;

#[async_trait]
impl MutationSink for LoggingMutationSink {
    async fn apply(&self, id: &str, patch: &serde_json::Value) -> AppResult<()> {
        tracing::debug!(record_id = %id, patch = %patch, "Mutation forwarded to sink");
        Ok(())
    }
}

/// View-state controller of one panel: the loaded record set plus the
/// current filter state. Each panel owns its own instance; record set and
/// filter state never reset each other.
#[derive(Debug, Clone, Default)]
pub struct PanelController<R> {
    records: Vec<R>,
    filter: FilterState,
}

impl<R: PanelRecord + Clone> PanelController<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            filter: FilterState::new(),
        }
    }

    /// Replaces the record set wholesale. The filter state is untouched.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
    }

    /// Reloads the record set from the fetch boundary.
    pub async fn refresh(&mut self, source: &dyn RecordSource<R>) -> AppResult<()> {
        let records = source.fetch().await?;
        self.replace_records(records);
        Ok(())
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.filter.set_search_query(text);
    }

    pub fn set_category_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filter.set_category_filter(key, value);
    }

    pub fn set_boolean_toggle(&mut self, flag: bool) {
        self.filter.set_boolean_toggle(flag);
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|record| record.id() == id)
    }

    /// The visible subset under the current filter state, in stored order.
    pub fn visible(&self) -> Vec<R> {
        derive_visible(&self.records, &self.filter)
    }

    /// Applies a targeted patch to exactly the record matching `id`; all
    /// other records stay untouched. An absent id is a no-op.
    pub fn apply_patch<F>(&mut self, id: &str, patch: F)
    where
        F: FnOnce(&mut R),
    {
        self.records = mutate_by_id(&self.records, id, patch);
    }

    /// Dropdown options of one category filter, derived from the loaded set.
    pub fn category_options(&self, key: &str) -> Vec<CategoryOption> {
        distinct_category_options(&self.records, key)
    }
}
