//! Interrupt delivery.
//!
//! Ctrl+C has to cut through whatever the loop is blocked on, including the
//! five second pause. [`ShutdownSignal`] is a flag paired with a condvar so
//! that a pending sleep wakes up the moment the handler fires.

use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// Outcome of an interruptible sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sleep {
    /// The full duration elapsed.
    Completed,
    /// Shutdown was requested before or during the sleep.
    Interrupted,
}

/// A blocking pause that can be cut short by an interrupt.
pub trait Sleeper {
    /// Blocks for `duration` unless interrupted first.
    fn sleep(&mut self, duration: Duration) -> Sleep;

    /// Returns `true` once an interrupt has been requested.
    fn interrupted(&self) -> bool;
}

/// Cloneable cancellation token set by the Ctrl+C handler.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests shutdown and wakes every waiter. Calling it again is a no-op.
    pub fn trigger(&self) {
        let (lock, cvar) = &*self.inner;
        match lock.lock() {
            Ok(mut triggered) => *triggered = true,
            Err(poisoned) => *poisoned.into_inner() = true,
        }
        cvar.notify_all();
    }

    /// Returns `true` once [`trigger`](Self::trigger) has been called.
    pub fn is_triggered(&self) -> bool {
        let (lock, _) = &*self.inner;
        // A poisoned lock means a handler panicked mid-update; stop anyway.
        lock.lock().map(|triggered| *triggered).unwrap_or(true)
    }

    /// Waits up to `timeout` for a shutdown request.
    ///
    /// Returns `true` if shutdown was requested, `false` on timeout.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let deadline = Instant::now() + timeout;

        let mut triggered = match lock.lock() {
            Ok(guard) => guard,
            Err(_) => return true,
        };

        // Loop to absorb spurious wakeups.
        while !*triggered {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            triggered = match cvar.wait_timeout(triggered, deadline - now) {
                Ok((guard, _)) => guard,
                Err(_) => return true,
            };
        }

        true
    }
}

impl Sleeper for ShutdownSignal {
    fn sleep(&mut self, duration: Duration) -> Sleep {
        if self.wait_timeout(duration) {
            Sleep::Interrupted
        } else {
            Sleep::Completed
        }
    }

    fn interrupted(&self) -> bool {
        self.is_triggered()
    }
}

/// Routes Ctrl+C to `signal`.
///
/// Can only be installed once per process.
pub fn install_ctrlc_handler(signal: &ShutdownSignal) -> Result<(), ctrlc::Error> {
    let signal = signal.clone();
    ctrlc::set_handler(move || {
        tracing::debug!("Interrupt received");
        signal.trigger();
    })?;
    tracing::debug!("Ctrl+C handler installed");
    Ok(())
}
