//! Result boundary: converts raised failures into `Result` values at the edge
//!
//! A failure is "raised" with [`fail`] (or any panic carrying a `String` or
//! `&str` message). [`rescue`] turns such a panic into
//! `Err(DominoError::Rescued)`. Panics with any other payload are not ours
//! to handle and are resumed unchanged.
//!
//! Failures raised with [`fail`] skip the panic hook, so rescuing them prints
//! nothing. Plain `panic!` messages are still reported by the hook.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::Once;

use tracing::debug;

use crate::infrastructure::parsing_error::{DominoError, DominoResult};

/// Payload carried by [`fail`]
struct RaisedFailure(String);

static QUIET_HOOK: Once = Once::new();

/// Wrap the current panic hook so it ignores [`RaisedFailure`] payloads
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
            if !is_raised(info.payload()) {
                previous(info);
            }
        }));
    });
}

fn is_raised(payload: &(dyn Any + Send)) -> bool {
    payload.is::<RaisedFailure>()
}

/// Raise a failure carrying `message`
pub fn fail(message: impl Into<String>) -> ! {
    // set_hook panics when called during an unwind
    if !std::thread::panicking() {
        install_quiet_hook();
    }
    panic::panic_any(RaisedFailure(message.into()))
}

/// Run `f`, returning its value as `Ok` or its raised message as `Err`
pub fn rescue<T>(f: impl FnOnce() -> T) -> DominoResult<T> {
    // Documents and selections are immutable, so an unwind leaves nothing half-updated
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match panic_message(&*payload) {
            Some(message) => {
                debug!("Rescued failure: {}", message);
                Err(DominoError::rescued(message))
            }
            None => panic::resume_unwind(payload),
        },
    }
}

/// Run a fallible `f`, flattening its own error and any raised failure
/// into one result
pub fn attempt<T, E>(f: impl FnOnce() -> Result<T, E>) -> DominoResult<T>
where
    E: Into<DominoError>,
{
    rescue(f)?.map_err(Into::into)
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<RaisedFailure>()
        .map(|raised| raised.0.clone())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .or_else(|| payload.downcast_ref::<&'static str>().map(|s| (*s).to_string()))
}
