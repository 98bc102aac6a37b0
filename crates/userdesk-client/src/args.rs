#![doc(hidden)]

use clap::{Parser, Subcommand, ValueEnum};
use jiff::Timestamp;
use jiff::tz::TimeZone;
use userdesk_common::TimeFormatter;
use userdesk_protocol::util::ClockSource;

/// Arguments for the userdesk CLI
#[derive(Parser, Debug)]
#[command(version, about = "Display userdesk timestamps and user profiles")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[clap(
        long,
        global = true,
        value_name = "RFC3339",
        help = "Use this instant as the current time (e.g. 2024-01-15T10:30:00Z)"
    )]
    pub now: Option<String>,

    #[clap(
        long,
        global = true,
        help = "Display time in UTC [default: local time]",
        default_value_t = false
    )]
    pub zulu: bool,

    #[clap(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Don't print any messages except for errors",
        default_value_t = false
    )]
    pub quiet: bool,

    #[clap(
        short = 'v',
        long,
        global = true,
        conflicts_with = "quiet",
        action = clap::ArgAction::Count,
        help = "Output diagnostic details; specify multiple times for more detail"
    )]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format a single wire timestamp
    Format {
        #[clap(
            long,
            allow_negative_numbers = true,
            help = "Seconds since the Unix epoch"
        )]
        seconds: i64,

        #[clap(long, help = "Nanosecond adjustment", default_value_t = 0)]
        nanos: i32,

        #[clap(long, value_enum, default_value_t = Style::Full)]
        style: Style,
    },

    /// Display a user profile read from a JSON file
    Profile {
        #[clap(value_name = "FILE", help = "JSON user document")]
        file: String,
    },
}

/// How a timestamp is rendered by the `format` command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// YYYY-MM-DD HH:MM:SS
    Full,
    /// YYYY-MM-DD
    Date,
    /// Elapsed time, e.g. 3小时前
    Relative,
    /// Whether the instant has passed
    Expiry,
    /// Milliseconds until the instant
    Remaining,
}

impl Args {
    /// A formatter pinned to `--now` when given, otherwise reading the system clock.
    pub fn formatter(&self) -> Result<TimeFormatter, jiff::Error> {
        let clock = match &self.now {
            Some(now) => ClockSource::new_mock(now.parse::<Timestamp>()?),
            None => ClockSource::System,
        };

        let tz = if self.zulu {
            TimeZone::UTC
        } else {
            TimeZone::system()
        };

        Ok(TimeFormatter::new(clock, tz))
    }
}
