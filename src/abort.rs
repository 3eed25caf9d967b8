use core::cell::Cell;

use critical_section::Mutex;
use log::error;

pub type AbortHandler = fn(&str) -> !;

static ABORT_HANDLER: Mutex<Cell<Option<AbortHandler>>> = Mutex::new(Cell::new(None));

#[track_caller]
fn default_abort(message: &str) -> ! {
    panic!("{}", message);
}

/// Replace the routine that terminates the task on fatal misuse.
///
/// The default panics, which halts the task on targets built with `panic = "abort"`.
/// A board crate can install a reset routine here instead.
pub fn set_abort_handler(handler: AbortHandler) {
    critical_section::with(|cs| ABORT_HANDLER.borrow(cs).set(Some(handler)));
}

/// Terminate the current task with a diagnostic message. Never returns.
///
/// Only used for programming errors such as unwrapping an empty
/// [`Optional`](crate::Optional). Not recoverable.
#[cold]
#[track_caller]
pub fn system_abort(message: &str) -> ! {
    error!("System abort: {}", message);

    let handler = critical_section::with(|cs| ABORT_HANDLER.borrow(cs).get());
    match handler {
        Some(handler) => handler(message),
        None => default_abort(message),
    }
}
