#[cfg(test)]
mod tests {
    // End to end: a user document as the service would return it, loaded from disk and
    // rendered with a pinned clock.

    use std::fs;
    use std::path::PathBuf;

    use jiff::Timestamp;
    use jiff::tz::TimeZone;
    use userdesk_client::{ProfileView, load_user};
    use userdesk_common::TimeFormatter;
    use userdesk_protocol::Role;
    use userdesk_protocol::util::ClockSource;

    const USER_JSON: &str = r#"{
        "id": 42,
        "username": "zhangsan",
        "nickname": "张三",
        "email": "zhangsan@example.com",
        "phone": "13900000000",
        "role": 1,
        "createdAt": {"seconds": 1701426600},
        "updatedAt": {"seconds": 1705305000, "nanos": 250000000},
        "passwordExpiresAt": {"seconds": 1705318200}
    }"#;

    fn write_document(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    fn formatter_at(now: &str) -> (ClockSource, TimeFormatter) {
        let now: Timestamp = now.parse().unwrap();
        let clock = ClockSource::new_mock(now);
        (clock.clone(), TimeFormatter::new(clock, TimeZone::UTC))
    }

    #[test]
    fn render_document_from_disk() {
        let path = write_document("userdesk-profile", USER_JSON);
        let user = load_user(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(user.role, Role::User);

        let (_, formatter) = formatter_at("2024-01-15T10:30:00Z");
        let view = ProfileView::new(&user, &formatter);

        assert_eq!(view.heading(), "张三");
        assert_eq!(view.value("角色"), Some("用户"));
        assert_eq!(view.value("创建时间"), Some("2023-12-01 10:30:00"));
        assert_eq!(view.value("更新时间"), Some("2024-01-15 07:50:00"));
        assert_eq!(view.value("密码过期时间"), Some("2024-01-15 11:30:00"));
        assert_eq!(view.value("密码状态"), Some("剩余0天1小时0分钟"));
    }

    #[test]
    fn expiry_follows_the_clock() {
        let path = write_document("userdesk-profile-clock", USER_JSON);
        let user = load_user(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let (mut clock, formatter) = formatter_at("2024-01-15T10:30:00Z");
        assert_eq!(
            ProfileView::new(&user, &formatter).value("密码状态"),
            Some("剩余0天1小时0分钟")
        );

        clock.set_time("2024-01-15T11:30:00.001Z".parse().unwrap());
        assert_eq!(
            ProfileView::new(&user, &formatter).value("密码状态"),
            Some("已过期")
        );
    }

    #[test]
    fn minimal_document() {
        let path = write_document("userdesk-profile-minimal", r#"{"username": "guest"}"#);
        let user = load_user(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let (_, formatter) = formatter_at("2024-01-15T10:30:00Z");
        let view = ProfileView::new(&user, &formatter);

        assert_eq!(view.value("角色"), Some("未知"));
        assert_eq!(view.value("创建时间"), Some("-"));
        assert_eq!(view.value("密码状态"), None);
    }
}
