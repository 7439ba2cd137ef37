//! Debounce: collapse a burst of calls into one.
//!
//! With `immediate == false` the wrapped function runs once, `wait_ms` after
//! the last call of a burst (trailing edge). With `immediate == true` it runs
//! on the first call of a burst and not again until the burst has been quiet
//! for `wait_ms` (leading edge).

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Timer-free debounce policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceGate {
    immediate: bool,
    pending: bool,
}

impl DebounceGate {
    #[must_use]
    pub fn new(immediate: bool) -> Self {
        Self { immediate, pending: false }
    }

    /// Record a call and (re)arm the quiet timer. Returns whether the wrapped
    /// function should run now.
    pub fn on_call(&mut self) -> bool {
        let call_now = self.immediate && !self.pending;
        self.pending = true;
        call_now
    }

    /// The quiet timer elapsed. Returns whether the wrapped function should
    /// run now.
    pub fn on_elapsed(&mut self) -> bool {
        let was_pending = std::mem::replace(&mut self.pending, false);
        was_pending && !self.immediate
    }
}

/// Wrap `f` in a browser-timer debounce.
///
/// Each call replaces the previous `Timeout`; dropping it cancels the
/// underlying `setTimeout`.
pub fn debounce<F>(wait_ms: u32, immediate: bool, f: F) -> impl FnMut() + 'static
where
    F: Fn() + 'static,
{
    let f = Rc::new(f);
    let gate = Rc::new(RefCell::new(DebounceGate::new(immediate)));
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move || {
        let call_now = gate.borrow_mut().on_call();

        let f_later = Rc::clone(&f);
        let gate_later = Rc::clone(&gate);
        let timeout = Timeout::new(wait_ms, move || {
            let trailing = gate_later.borrow_mut().on_elapsed();
            if trailing {
                f_later();
            }
        });
        *timer.borrow_mut() = Some(timeout);

        if call_now {
            f();
        }
    }
}
