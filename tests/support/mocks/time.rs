// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use play_site::application::ports::time::Clock;
use std::collections::VecDeque;
use std::sync::Mutex;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Returns `start`, then moves by `step` on every call. A negative step
/// simulates a clock running backwards.
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }

    pub fn fixed() -> Self {
        Self::new(fixed_now(), Duration::zero())
    }

    pub fn forward() -> Self {
        Self::new(fixed_now(), Duration::seconds(1))
    }

    pub fn backward() -> Self {
        Self::new(fixed_now(), Duration::seconds(-60))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("clock mutex poisoned");
        let now = *next;
        *next = now + self.step;
        now
    }
}

/// Hands out the given instants in order, then repeats the last one.
pub struct SequenceClock {
    remaining: Mutex<VecDeque<DateTime<Utc>>>,
    last: Mutex<DateTime<Utc>>,
}

impl SequenceClock {
    pub fn new(instants: impl IntoIterator<Item = DateTime<Utc>>) -> Self {
        Self {
            remaining: Mutex::new(instants.into_iter().collect()),
            last: Mutex::new(fixed_now()),
        }
    }
}

impl Clock for SequenceClock {
    fn now(&self) -> DateTime<Utc> {
        let mut last = self.last.lock().expect("clock mutex poisoned");
        if let Some(next) = self.remaining.lock().expect("clock mutex poisoned").pop_front() {
            *last = next;
        }
        *last
    }
}
