//! Registered-list state: the roster snapshot, filters, and local here-marks.

#[cfg(test)]
#[path = "registered_test.rs"]
mod registered_test;

use std::collections::HashSet;

use records::RegisteredRecord;

use super::filters::{Filters, row_matches_filters};

/// State behind the registered-attendee table.
///
/// The fetched snapshot is never mutated; successful here-marks are kept in
/// `marked_here` alongside it, so a re-render without a re-fetch still shows
/// the mark, and a fresh fetch recomputes flags from the server.
#[derive(Clone, Debug, Default)]
pub struct RegisteredState {
    pub records: Vec<RegisteredRecord>,
    pub filters: Filters,
    pub marked_here: HashSet<String>,
    pub loaded: bool,
}

impl RegisteredState {
    /// Replace the snapshot with a fresh fetch.
    pub fn apply_fetch(&mut self, records: Vec<RegisteredRecord>) {
        self.records = records;
        self.loaded = true;
    }

    /// Rows passing the current filters, in snapshot order.
    #[must_use]
    pub fn visible(&self) -> Vec<RegisteredRecord> {
        self.records
            .iter()
            .filter(|record| row_matches_filters(record, &self.filters))
            .cloned()
            .collect()
    }

    /// Record a successful here-mark without touching the snapshot.
    pub fn mark_here(&mut self, registration_id: &str) {
        self.marked_here.insert(registration_id.to_owned());
    }

    /// Whether a record should render as checked in: either the server said
    /// so at fetch time, or the mark succeeded this session.
    #[must_use]
    pub fn is_here(&self, record: &RegisteredRecord) -> bool {
        record.is_here() || self.marked_here.contains(&record.registration_id)
    }

    /// Reset all filter fields.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }
}
