use crate::core::policy::decision::Decision;
use crate::core::policy::effect::{Effect, Verdict};
use crate::core::policy::policy::Policy;

/// Evaluates a `Decision` against an ordered policy set.
///
/// Pure function: no cache lookup, no clock, no I/O. Policies are assumed
/// sorted by `priority` ascending by the caller (the adapter that owns the
/// policy store); at equal priority, Deny outranks Allow. A `Decision` with
/// no matching policy at all is denied by default.
pub fn evaluate(decision: &Decision, policies: &[Policy]) -> Verdict {
    let mut matched: Vec<&Policy> = policies
        .iter()
        .filter(|policy| {
            policy.subject.matches(&decision.subject.user_id)
                || decision
                    .subject
                    .roles
                    .iter()
                    .any(|role| policy.subject.matches(role))
        })
        .filter(|policy| policy.action.matches(&decision.action))
        .filter(|policy| policy.resource.matches(&decision.resource))
        .filter(|policy| match &policy.condition {
            Some(condition) => condition.evaluate(&decision.subject.user_id, &decision.context),
            None => true,
        })
        .collect();

    matched.sort_by_key(|policy| policy.priority);

    let mut lowest_priority: Option<u32> = None;
    let mut saw_deny = false;
    let mut saw_allow = false;

    for policy in matched {
        match lowest_priority {
            Some(p) if policy.priority > p => break,
            _ => lowest_priority = Some(policy.priority),
        }
        match policy.effect {
            Effect::Deny => saw_deny = true,
            Effect::Allow => saw_allow = true,
        }
    }

    if saw_deny {
        Verdict::Deny
    } else if saw_allow {
        Verdict::Allow
    } else {
        Verdict::Deny
    }
}
