use crate::core::policy::condition::Condition;
use crate::core::policy::effect::Effect;
use crate::core::policy::matcher::Matcher;

/// A single authorization rule.
///
/// `priority` is ascending (lower evaluates first); at equal priority Deny
/// outranks Allow. There is always an implicit default-deny below every
/// seeded policy, so an empty policy set denies everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub priority: u32,
    pub effect: Effect,
    pub subject: Matcher,
    pub action: Matcher,
    pub resource: Matcher,
    pub condition: Option<Condition>,
}

impl Policy {
    pub fn new(priority: u32, effect: Effect, subject: Matcher, action: Matcher, resource: Matcher) -> Self {
        Self {
            priority,
            effect,
            subject,
            action,
            resource,
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }
}
