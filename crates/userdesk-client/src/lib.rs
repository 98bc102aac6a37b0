//! Client library for displaying userdesk data on a terminal.

#![forbid(unsafe_code)]

pub mod args;
pub mod output;
pub mod profile;

pub use output::{ClientError, load_user, render_timestamp};
pub use profile::{ProfileRow, ProfileView};
