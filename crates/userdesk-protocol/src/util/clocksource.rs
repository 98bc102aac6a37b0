use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering::SeqCst;
use std::time::Duration;

use ClockSource::{Mock, System};
use jiff::Timestamp;

/// A source of time.
#[derive(Debug, Clone)]
pub enum ClockSource {
    /// Clock source based on the system clock.
    System,

    /// Holds a fixed reading in milliseconds since the Unix epoch. Clones share the
    /// same reading. For tests and for pinning "now" from the command line.
    ///
    /// Readings outside the millisecond range of [`Timestamp`] are clamped to its bounds.
    Mock(Arc<AtomicI64>),
}

impl ClockSource {
    pub fn new_mock(now: Timestamp) -> ClockSource {
        Mock(Arc::new(AtomicI64::new(mock_millis(now))))
    }
}

/// Milliseconds of `ts`, clamped to what [`Timestamp::from_millisecond`] accepts. The last
/// second of the range only converts back at whole-second precision.
fn mock_millis(ts: Timestamp) -> i64 {
    let min = Timestamp::MIN.as_millisecond();
    let max = Timestamp::MAX.as_second() * 1_000;

    ts.as_millisecond().clamp(min, max)
}

impl ClockSource {
    /// Returns the number of milliseconds since the Unix epoch. Negative before 1970.
    pub fn epoch_millis(&self) -> i64 {
        match self {
            System => Timestamp::now().as_millisecond(),
            Mock(now) => now.load(SeqCst),
        }
    }

    /// The current instant, at millisecond precision for mock clocks.
    pub fn now(&self) -> Timestamp {
        match self {
            System => Timestamp::now(),
            Mock(now) => {
                let millis = now.load(SeqCst);
                Timestamp::from_millisecond(millis).unwrap_or(if millis > 0 {
                    Timestamp::MAX
                } else {
                    Timestamp::MIN
                })
            }
        }
    }

    /// Sets the current time of this Mock clock.
    pub fn set_time(&mut self, now: Timestamp) {
        match self {
            System => unreachable!(),
            Mock(n) => n.store(mock_millis(now), SeqCst),
        }
    }

    /// Increases the current time of this Mock clock by the given duration, saturating at
    /// the latest representable instant.
    pub fn advance(&mut self, delta: Duration) {
        match self {
            System => unreachable!(),
            Mock(_) => {
                let next = self.now().saturating_add(delta).unwrap_or(Timestamp::MAX);
                self.set_time(next);
            }
        }
    }

    /// Decreases the current time of this Mock clock by the given duration, saturating at
    /// the earliest representable instant.
    pub fn decrease(&mut self, delta: Duration) {
        match self {
            System => unreachable!(),
            Mock(_) => {
                let next = self.now().saturating_sub(delta).unwrap_or(Timestamp::MIN);
                self.set_time(next);
            }
        }
    }
}
