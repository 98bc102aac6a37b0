//! This crate provides the presentation helpers shared by userdesk front ends:
//! timestamp formatting, expiry checks and role labels.

#![forbid(unsafe_code)]

pub mod role;
pub mod time;

pub use time::TimeFormatter;
