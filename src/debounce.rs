//! Trailing-edge debouncing for bursty recompute triggers.
//!
//! Typical use is coalescing a stream of zoom events into one data
//! reduction pass once the gesture settles.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Token identifying one debounced action.
///
/// Each call to [`debounce`] through the same handle supersedes the
/// previous pending call. Cloning the handle shares the same pending
/// slot.
#[derive(Debug, Clone, Default)]
pub struct DebounceHandle {
    generation: Arc<AtomicU64>,
}

impl DebounceHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending call without scheduling a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn bump(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

/// Run `f` after `delay`, unless the handle is rescheduled or cancelled
/// first. Only the last call of a burst fires.
pub fn debounce(handle: &DebounceHandle, delay: Duration, f: impl FnOnce() + Send + 'static) {
    let scheduled = handle.bump();
    let handle = handle.clone();
    thread::spawn(move || {
        thread::sleep(delay);
        if handle.current() == scheduled {
            f();
        }
    });
}
