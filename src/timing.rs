//! Trailing debounce used for resize handling.
//!
//! The original site also carried a leading throttle helper, but it had no
//! call site and was not ported (see DESIGN.md).

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Wraps `f` so rapid repeated calls coalesce into one invocation `wait_ms`
/// after the last trigger. Replacing the pending `Timeout` drops it, which
/// cancels the earlier scheduled run.
pub fn debounce(wait_ms: u32, f: impl Fn() + 'static) -> impl Fn() {
    let f = Rc::new(f);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move || {
        let f = Rc::clone(&f);
        let timeout = Timeout::new(wait_ms, move || f());
        pending.borrow_mut().replace(timeout);
    }
}
