//! Presentation of wire timestamps: display strings, relative descriptions and expiry.
//!
//! Every function accepts a possibly-absent [`WireTimestamp`] and is total over it. An absent
//! value never produces an error; it maps to a fixed sentinel instead:
//!
//! | operation            | absent result |
//! |----------------------|---------------|
//! | [`to_instant`]       | `None`        |
//! | [`format_full`]      | `"-"`         |
//! | [`format_date`]      | `"-"`         |
//! | [`format_relative`]  | `"-"`         |
//! | [`is_expired`]       | `true`        |
//! | [`remaining_millis`] | `0`           |
//!
//! A wire value outside the range a [`Timestamp`] can hold is treated as absent.
//!
//! The free functions never read the system clock. Operations that depend on the current
//! time take it as `now`. [`TimeFormatter`] supplies `now` from a [`ClockSource`] and the
//! display zone from its configuration.

use jiff::Timestamp;
use jiff::tz::TimeZone;
use tracing::warn;
use userdesk_protocol::WireTimestamp;
use userdesk_protocol::util::ClockSource;

/// Display value for an absent timestamp.
pub const ABSENT: &str = "-";

/// Relative description for anything less than a minute old.
pub const JUST_NOW: &str = "刚刚";

const FULL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;
const DAYS_BEFORE_DATE: i64 = 30;

/// Converts a wire timestamp into a native instant.
pub fn to_instant(ts: Option<&WireTimestamp>) -> Option<Timestamp> {
    let wire = ts?;

    match wire.to_timestamp() {
        Ok(instant) => Some(instant),
        Err(e) => {
            warn!("treating unreadable timestamp as absent: {e}");
            None
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS` in 24-hour time for the given zone, without a zone suffix.
pub fn format_full(ts: Option<&WireTimestamp>, tz: &TimeZone) -> String {
    render(ts, tz, FULL_FORMAT)
}

/// `YYYY-MM-DD` for the given zone.
pub fn format_date(ts: Option<&WireTimestamp>, tz: &TimeZone) -> String {
    render(ts, tz, DATE_FORMAT)
}

fn render(ts: Option<&WireTimestamp>, tz: &TimeZone, format: &str) -> String {
    match to_instant(ts) {
        Some(instant) => tz.to_datetime(instant).strftime(format).to_string(),
        None => ABSENT.to_string(),
    }
}

/// Describes how long before `now` the timestamp lies.
///
/// Elapsed time is truncated to whole seconds and then unit by unit, so each threshold
/// rounds down: 59 minutes 59 seconds is `"59分钟前"`, never `"1小时前"`. Days are 24 hours
/// with no calendar adjustment. Anything 30 days or older is shown as its date in `tz`.
/// Instants after `now` are reported as [`JUST_NOW`].
pub fn format_relative(ts: Option<&WireTimestamp>, now: Timestamp, tz: &TimeZone) -> String {
    let Some(instant) = to_instant(ts) else {
        return ABSENT.to_string();
    };

    let seconds = now.duration_since(instant).as_secs();
    let minutes = seconds / SECONDS_PER_MINUTE;
    let hours = minutes / MINUTES_PER_HOUR;
    let days = hours / HOURS_PER_DAY;

    if seconds < SECONDS_PER_MINUTE {
        JUST_NOW.to_string()
    } else if minutes < MINUTES_PER_HOUR {
        format!("{minutes}分钟前")
    } else if hours < HOURS_PER_DAY {
        format!("{hours}小时前")
    } else if days < DAYS_BEFORE_DATE {
        format!("{days}天前")
    } else {
        format_date(ts, tz)
    }
}

/// True when the timestamp is strictly before `now`. An absent expiry is always expired.
pub fn is_expired(ts: Option<&WireTimestamp>, now: Timestamp) -> bool {
    match to_instant(ts) {
        Some(instant) => instant < now,
        None => true,
    }
}

/// Milliseconds from `now` until the timestamp, or 0 if it has passed or is absent.
pub fn remaining_millis(ts: Option<&WireTimestamp>, now: Timestamp) -> u64 {
    match to_instant(ts) {
        Some(instant) => u64::try_from(instant.duration_since(now).as_millis()).unwrap_or(0),
        None => 0,
    }
}

/// Formats timestamps for display using an injected clock and display zone.
#[derive(Debug, Clone)]
pub struct TimeFormatter {
    clock: ClockSource,
    tz: TimeZone,
}

impl TimeFormatter {
    pub fn new(clock: ClockSource, tz: TimeZone) -> Self {
        Self { clock, tz }
    }

    /// Wall clock time in the system's configured zone.
    pub fn system() -> Self {
        Self::new(ClockSource::System, TimeZone::system())
    }

    pub fn clock(&self) -> &ClockSource {
        &self.clock
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn format_full(&self, ts: Option<&WireTimestamp>) -> String {
        format_full(ts, &self.tz)
    }

    pub fn format_date(&self, ts: Option<&WireTimestamp>) -> String {
        format_date(ts, &self.tz)
    }

    pub fn format_relative(&self, ts: Option<&WireTimestamp>) -> String {
        format_relative(ts, self.now(), &self.tz)
    }

    pub fn is_expired(&self, ts: Option<&WireTimestamp>) -> bool {
        is_expired(ts, self.now())
    }

    pub fn remaining_millis(&self, ts: Option<&WireTimestamp>) -> u64 {
        remaining_millis(ts, self.now())
    }
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self::system()
    }
}
