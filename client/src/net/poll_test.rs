use super::*;

// ===== PollHandle =====

#[test]
fn a_fresh_handle_is_alive() {
    let handle = PollHandle::new();
    assert!(handle.is_alive());
}

#[test]
fn stop_kills_every_clone() {
    let handle = PollHandle::new();
    let clone = handle.clone();
    clone.stop();
    assert!(!handle.is_alive());
    assert!(!clone.is_alive());
}

#[test]
fn start_polling_returns_a_live_handle_off_wasm() {
    // Off the browser the loop never spawns, but the handle still works.
    let handle = start_polling(Duration::from_secs(3), || async {});
    assert!(handle.is_alive());
    handle.stop();
    assert!(!handle.is_alive());
}
