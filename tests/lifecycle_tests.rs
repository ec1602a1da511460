// Host-side tests for frame loop ownership and pagehide handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;
use std::cell::RefCell;
use std::rc::Rc;

type Callback = Box<dyn Fn() -> usize>;

/// A loop whose callback captures both `state` and a clone of the loop itself.
fn self_referencing_loop(state: &Rc<RefCell<Vec<u8>>>) -> FrameLoop<Callback> {
    let frame_loop: FrameLoop<Callback> = FrameLoop::new();
    let inner = frame_loop.clone();
    let state = state.clone();
    frame_loop.install(Box::new(move || {
        if !inner.is_running() {
            return 0;
        }
        state.borrow_mut().push(1);
        state.borrow().len()
    }));
    frame_loop
}

#[test]
fn stop_releases_callback_and_captured_state() {
    let state = Rc::new(RefCell::new(Vec::new()));
    let frame_loop = self_referencing_loop(&state);
    assert_eq!(frame_loop.with_callback(|cb| cb()), Some(1));
    assert_eq!(Rc::strong_count(&state), 2);

    frame_loop.stop(|_| {});
    assert!(!frame_loop.is_running());
    assert_eq!(Rc::strong_count(&state), 1);
    assert!(frame_loop.with_callback(|cb| cb()).is_none());
}

#[test]
fn stop_cancels_the_pending_request_once() {
    let state = Rc::new(RefCell::new(Vec::new()));
    let frame_loop = self_referencing_loop(&state);
    frame_loop.set_pending(Some(7));

    let mut cancelled = Vec::new();
    frame_loop.stop(|id| cancelled.push(id));
    frame_loop.stop(|id| cancelled.push(id));
    assert_eq!(cancelled, vec![7]);
}

#[test]
fn callback_sees_the_shared_running_flag() {
    let state = Rc::new(RefCell::new(Vec::new()));
    let frame_loop = self_referencing_loop(&state);
    let observer = frame_loop.clone();
    assert!(observer.is_running());
    frame_loop.stop(|_| {});
    assert!(!observer.is_running());
    assert!(state.borrow().is_empty());
}

#[test]
fn pagehide_into_back_forward_cache_keeps_the_slider() {
    assert!(should_teardown_on_pagehide(false));
    assert!(!should_teardown_on_pagehide(true));
}
