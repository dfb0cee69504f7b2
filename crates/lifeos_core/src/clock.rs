//! Time source abstraction for the state container.
//!
//! # Responsibility
//! - Provide the "now" timestamp and "today" date used by mutation paths.
//! - Keep time injectable so tests can construct deterministic stores.
//!
//! # Invariants
//! - `today()` is always the calendar-day prefix of `now_iso()`.
//! - No store code reads the system clock directly.

use crate::date::day_of;
use chrono::{SecondsFormat, Utc};
use log::warn;
use std::sync::{Arc, Mutex};

/// Injectable time source.
///
/// The store threads all timestamps through this trait instead of calling
/// system time ad hoc, so every test can pin the clock.
pub trait Clock {
    /// Current instant as an RFC 3339 UTC timestamp, e.g. `2024-01-01T08:30:00Z`.
    fn now_iso(&self) -> String;

    /// Current calendar day as an ISO date, e.g. `2024-01-01`.
    fn today(&self) -> String;
}

/// Production clock backed by the system UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn today(&self) -> String {
        Utc::now().format("%Y-%m-%d").to_string()
    }
}

/// Settable clock for tests and deterministic replays.
///
/// Cloning shares the underlying instant, so a test can keep one handle to
/// advance time while the store holds another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<String>>,
}

impl FixedClock {
    /// Creates a clock pinned at the given RFC 3339 timestamp.
    pub fn new(now_iso: impl Into<String>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now_iso.into())),
        }
    }

    /// Moves the clock to a new instant.
    pub fn set(&self, now_iso: impl Into<String>) {
        *self.lock_now() = now_iso.into();
    }

    fn lock_now(&self) -> std::sync::MutexGuard<'_, String> {
        match self.now.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("event=clock_lock module=clock status=recovered reason=poisoned");
                poisoned.into_inner()
            }
        }
    }
}

impl Clock for FixedClock {
    fn now_iso(&self) -> String {
        self.lock_now().clone()
    }

    fn today(&self) -> String {
        day_of(&self.lock_now()).to_string()
    }
}
