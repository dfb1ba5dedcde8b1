//! Walk-in form state: the speculative local table of this session's
//! submissions.

#[cfg(test)]
#[path = "walkin_test.rs"]
mod walkin_test;

/// One locally rendered walk-in row. Built from the submitted form plus the
/// ids the server returned; never re-fetched, so the table only covers this
/// page visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkinRow {
    pub walkin_id: String,
    pub queue_id: Option<String>,
    pub walkin_type: String,
    pub customer_name: String,
    pub attendee_name: String,
}

/// State behind the walk-in form and its table.
#[derive(Clone, Debug, Default)]
pub struct WalkinState {
    pub rows: Vec<WalkinRow>,
    pub submitting: bool,
}

impl WalkinState {
    /// Newest submission first, matching the paper sign-in sheet the desk
    /// replaced.
    pub fn prepend(&mut self, row: WalkinRow) {
        self.rows.insert(0, row);
    }
}
