use chrono::{DateTime, Utc};

use crate::State;

/// Wall clock as seen by the UI.
///
/// Business code reads "now" from here instead of calling `Utc::now()`, so
/// tests can pin the clock.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    now: DateTime<Utc>,
}

impl Default for Time {
    fn default() -> Self {
        Self { now: Utc::now() }
    }
}

impl Time {
    pub fn fixed(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Advances the clock to the current wall time.
    pub fn tick(&mut self) {
        self.now = Utc::now();
    }
}

impl State for Time {}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.now
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.now
    }
}
