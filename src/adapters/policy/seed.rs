//! Starter policy set: `admin` may do anything; everyone else may act on a
//! trading account only when the request context attributes it to them.

use crate::core::policy::{Condition, Effect, Matcher, Policy};

pub fn default_policies() -> Vec<Policy> {
    vec![
        Policy::new(0, Effect::Allow, Matcher::set(vec!["admin"]), Matcher::wildcard(), Matcher::wildcard()),
        Policy::new(
            10,
            Effect::Allow,
            Matcher::wildcard(),
            Matcher::set(vec!["trading_account.*"]),
            Matcher::set(vec!["trading_account.*"]),
        )
        .with_condition(Condition::OwnershipOf {
            context_key: "owner_user_id".to_string(),
        }),
        Policy::new(
            10,
            Effect::Allow,
            Matcher::wildcard(),
            Matcher::set(vec!["user.read_self"]),
            Matcher::wildcard(),
        )
        .with_condition(Condition::OwnershipOf {
            context_key: "user_id".to_string(),
        }),
    ]
}
