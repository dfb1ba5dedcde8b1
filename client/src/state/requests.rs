//! Monotonic request tickets for stale-response rejection.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

/// Orders a controller's in-flight fetches so that only the newest response
/// is applied. Overlapping polls are allowed to race on the wire; whichever
/// resolves with the newest ticket wins, and anything older is discarded
/// instead of overwriting fresher data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    next: u64,
    last_applied: u64,
}

impl RequestSeq {
    /// Issue a ticket for a request about to be sent.
    pub fn begin(&mut self) -> u64 {
        self.next += 1;
        self.next
    }

    /// Whether a response holding `ticket` may be applied. Admitting a
    /// ticket retires every older one.
    pub fn admit(&mut self, ticket: u64) -> bool {
        if ticket > self.last_applied {
            self.last_applied = ticket;
            true
        } else {
            false
        }
    }
}
