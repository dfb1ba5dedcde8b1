//! Interval polling with an explicit stop handle.
//!
//! The booth board refreshes on a fixed period. Each page owns a
//! [`PollHandle`]; stopping it (or leaving the page, via `on_cleanup`)
//! ends the loop, and a fresh call to [`start_polling`] restarts it.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Handle to a running poll loop. Cloneable; any clone can stop it.
#[derive(Clone, Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl PollHandle {
    fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Stop the loop after its current sleep ends.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Start ticking `tick` every `period` until the returned handle is
/// stopped. The first tick fires after one full period; callers do their
/// initial fetch themselves. No-op outside the browser.
pub fn start_polling<F, Fut>(period: Duration, tick: F) -> PollHandle
where
    F: Fn() -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let handle = PollHandle::new();
    #[cfg(feature = "hydrate")]
    {
        let loop_handle = handle.clone();
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(period).await;
                if !loop_handle.is_alive() {
                    break;
                }
                tick().await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period, &tick);
    }
    handle
}
