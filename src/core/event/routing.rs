use crate::core::event::channel::Channel;
use crate::core::event::priority::Priority;

/// Classifies an event type string into its topical channels and default
/// priority, per the closed routing table. `events.all` is always implied
/// by the caller and not repeated here.
///
/// Unknown type prefixes fall back to `(Security, Critical)` — fail loud
/// rather than silently dropping an unclassified security-relevant event
/// on the floor.
pub fn classify(event_type: &str) -> (Vec<Channel>, Priority) {
    if event_type == "login.failed" {
        return (vec![Channel::Auth], Priority::High);
    }
    if starts_with_any(event_type, &["login.", "logout", "token.refreshed"]) {
        return (vec![Channel::Auth], Priority::Normal);
    }
    if starts_with_any(event_type, &["user."]) {
        return (vec![Channel::User], Priority::Normal);
    }
    if starts_with_any(event_type, &["mfa."]) {
        return (vec![Channel::Auth, Channel::Security], Priority::High);
    }
    if starts_with_any(event_type, &["role.", "permission."]) {
        return (vec![Channel::Authz, Channel::Security], Priority::High);
    }
    if event_type == "refresh.reuse_detected" {
        return (vec![Channel::Security], Priority::Critical);
    }
    if starts_with_any(event_type, &["trading_account.", "membership."]) {
        return (vec![Channel::TradingAccount], Priority::Normal);
    }
    (vec![Channel::Security], Priority::Critical)
}

fn starts_with_any(value: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| value.starts_with(prefix))
}
