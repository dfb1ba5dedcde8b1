//! Booth-board state: the pending print queue as last fetched.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use records::QueueItem;

use super::requests::RequestSeq;

/// State behind the booth table. `items` is always a full replacement from
/// the most recent admitted fetch; rows are never mutated or removed
/// locally, so the server stays the only source of queue membership.
#[derive(Clone, Debug, Default)]
pub struct QueueBoardState {
    pub items: Vec<QueueItem>,
    pub requests: RequestSeq,
    pub loaded: bool,
}

impl QueueBoardState {
    /// Issue a ticket for a fetch about to be sent.
    pub fn begin_fetch(&mut self) -> u64 {
        self.requests.begin()
    }

    /// Apply a fetch response. Returns false (leaving state untouched) when
    /// a newer response has already been applied.
    pub fn apply_fetch(&mut self, ticket: u64, items: Vec<QueueItem>) -> bool {
        if !self.requests.admit(ticket) {
            return false;
        }
        self.items = items;
        self.loaded = true;
        true
    }
}
