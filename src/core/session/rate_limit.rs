/// A sliding-window rate-limit rule the SessionStore enforces.
///
/// `scope` groups limits by action (e.g. `"login"`); `id` is the entity
/// being limited within that scope (an email, an IP, a user id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitWindow {
    pub scope: String,
    pub id: String,
    pub limit: u32,
    pub window_secs: u64,
}

impl RateLimitWindow {
    pub fn new(scope: impl Into<String>, id: impl Into<String>, limit: u32, window_secs: u64) -> Self {
        Self {
            scope: scope.into(),
            id: id.into(),
            limit,
            window_secs,
        }
    }

    /// Decide the outcome given the count observed so far in the window,
    /// *including* the attempt currently being checked.
    pub fn decide(&self, count_in_window: u32) -> RateLimitDecision {
        if count_in_window > self.limit {
            RateLimitDecision::Deny {
                retry_after_secs: self.window_secs,
            }
        } else {
            RateLimitDecision::Allow
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allow,
    Deny { retry_after_secs: u64 },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}
