//! Loading user documents and rendering single timestamps.

use std::fs;
use std::path::Path;

use tracing::debug;
use userdesk_common::TimeFormatter;
use userdesk_protocol::{User, WireTimestamp};

use crate::args::Style;

/// Shown by the `expiry` style for an instant that has passed, or is absent.
pub const EXPIRED: &str = "已过期";

/// Shown by the `expiry` style for an instant still ahead.
pub const NOT_EXPIRED: &str = "未过期";

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid user document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads a JSON user document from `path`.
pub fn load_user<P: AsRef<Path>>(path: P) -> Result<User, ClientError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let user: User = serde_json::from_str(&contents)?;

    debug!("loaded user '{}' (id {}) from {}", user.username, user.id, path.display());
    Ok(user)
}

pub fn render_timestamp(formatter: &TimeFormatter, ts: &WireTimestamp, style: Style) -> String {
    let ts = Some(ts);

    match style {
        Style::Full => formatter.format_full(ts),
        Style::Date => formatter.format_date(ts),
        Style::Relative => formatter.format_relative(ts),
        Style::Expiry if formatter.is_expired(ts) => EXPIRED.to_string(),
        Style::Expiry => NOT_EXPIRED.to_string(),
        Style::Remaining => formatter.remaining_millis(ts).to_string(),
    }
}
