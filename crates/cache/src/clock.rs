//! Time source abstraction so cache expiry is testable.

#[cfg(feature = "mock")]
use std::time::Duration;
use std::time::Instant;

/// A monotonic time source.
///
/// The cache takes the clock as a dependency instead of calling
/// [`Instant::now`] directly, so tests can move time forward without
/// sleeping through a real TTL window.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// The real clock; delegates to [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A hand-cranked clock for tests.
///
/// Starts at construction time and only moves when [`advance`](Self::advance)
/// is called. Not behind `#[cfg(test)]` so that other crates can use it from
/// their own tests via the `mock` feature.
#[cfg(feature = "mock")]
#[derive(Debug)]
pub struct ManualClock {
    now: std::sync::Mutex<Instant>,
}

#[cfg(feature = "mock")]
impl ManualClock {
    /// Creates a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            now: std::sync::Mutex::new(Instant::now()),
        }
    }

    /// Moves the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *now += duration;
    }
}

#[cfg(feature = "mock")]
impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "mock")]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
