//! Real wall-clock implementation of the `Clock` port.

use chrono::{DateTime, Utc};

use crate::core::usecases::ports::Clock;

/// Reads the time from the OS. The only `Clock` implementation that should
/// ever run in production; tests use a fixed or controllable fake instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
