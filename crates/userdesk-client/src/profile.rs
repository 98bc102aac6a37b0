//! Plain-text view of a user's profile.

use std::fmt;

use userdesk_common::TimeFormatter;
use userdesk_common::role::role_label;
use userdesk_protocol::User;

use crate::output::EXPIRED;

const MILLIS_PER_MINUTE: u64 = 60 * 1_000;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// A labelled line in a [`ProfileView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    label: &'static str,
    value: String,
}

impl ProfileRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A user rendered for display: the nickname as a heading, then one row per field.
///
/// The password expiry rows only appear when the user has an expiry timestamp. They show the
/// expiry instant and either [`EXPIRED`] or the time remaining.
#[derive(Debug, Clone)]
pub struct ProfileView {
    heading: String,
    rows: Vec<ProfileRow>,
}

impl ProfileView {
    pub fn new(user: &User, formatter: &TimeFormatter) -> Self {
        let mut rows = vec![
            ProfileRow::new("用户名", user.username.as_str()),
            ProfileRow::new("邮箱", user.email.as_str()),
            ProfileRow::new("电话", user.phone.as_str()),
            ProfileRow::new("角色", role_label(user.role)),
            ProfileRow::new("创建时间", formatter.format_full(user.created_at.as_ref())),
            ProfileRow::new("更新时间", formatter.format_full(user.updated_at.as_ref())),
        ];

        if let Some(expires) = user.password_expires_at.as_ref() {
            rows.push(ProfileRow::new(
                "密码过期时间",
                formatter.format_full(Some(expires)),
            ));

            let status = if formatter.is_expired(Some(expires)) {
                EXPIRED.to_string()
            } else {
                format!("剩余{}", format_remaining(formatter.remaining_millis(Some(expires))))
            };
            rows.push(ProfileRow::new("密码状态", status));
        }

        ProfileView {
            heading: user.nickname.clone(),
            rows,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn rows(&self) -> &[ProfileRow] {
        &self.rows
    }

    /// The value of the row with the given label, if present.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(ProfileRow::value)
    }
}

impl fmt::Display for ProfileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for row in &self.rows {
            writeln!(f, "{}: {}", row.label, row.value)?;
        }
        Ok(())
    }
}

/// Whole days, hours and minutes, e.g. `2天3小时15分钟`. Partial minutes are dropped.
pub fn format_remaining(millis: u64) -> String {
    let days = millis / MILLIS_PER_DAY;
    let hours = (millis % MILLIS_PER_DAY) / MILLIS_PER_HOUR;
    let minutes = (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;

    format!("{days}天{hours}小时{minutes}分钟")
}
