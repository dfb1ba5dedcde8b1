//! Client-side roster filtering.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use records::RegisteredRecord;

/// Four independent substring filters, AND-combined. Fields hold raw input;
/// matching normalizes by trim + lowercase, so an all-whitespace filter
/// behaves as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub customer_code: String,
    pub customer_name: String,
    pub attendee_name: String,
    pub registration_id: String,
}

impl Filters {
    /// Whether no filter field would constrain the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.customer_code, &self.customer_name, &self.attendee_name, &self.registration_id]
            .iter()
            .all(|field| field.trim().is_empty())
    }

    /// Reset all four fields.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn field_matches(value: &str, filter: &str) -> bool {
    let filter = filter.trim().to_lowercase();
    filter.is_empty() || value.to_lowercase().contains(&filter)
}

/// True when every non-empty filter field is a case-insensitive substring of
/// the corresponding record field. An empty filter field always matches.
#[must_use]
pub fn row_matches_filters(record: &RegisteredRecord, filters: &Filters) -> bool {
    field_matches(&record.customer_code, &filters.customer_code)
        && field_matches(&record.customer_name, &filters.customer_name)
        && field_matches(&record.attendee_name, &filters.attendee_name)
        && field_matches(&record.registration_id, &filters.registration_id)
}
