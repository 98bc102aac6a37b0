// The protocol crate uses only safe Rust.
#![forbid(unsafe_code)]

pub mod error;
pub mod role;
pub mod timestamp;
pub mod user;
pub mod util;

// Re-export commonly used types
pub use role::Role;
pub use timestamp::WireTimestamp;
pub use user::User;
