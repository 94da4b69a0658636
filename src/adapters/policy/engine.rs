//! Decision-cache-backed `PolicyEngine`.
//!
//! The cache key is `Decision::cache_key()`; entries expire after a fixed
//! TTL (60 s by default, per the policy evaluation budget) and are dropped
//! outright on role/permission mutation rather than lazily refreshed.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::core::error::CoreError;
use crate::core::policy::{evaluate, Decision, Policy, Verdict};
use crate::core::usecases::ports::PolicyEngine;

struct CachedVerdict {
    verdict: Verdict,
    expires_at: Instant,
}

pub struct CachedPolicyEngine {
    policies: Arc<Vec<Policy>>,
    cache: DashMap<String, CachedVerdict>,
    ttl: Duration,
}

impl CachedPolicyEngine {
    pub fn new(policies: Vec<Policy>) -> Self {
        Self::with_ttl(policies, Duration::from_secs(60))
    }

    pub fn with_ttl(mut policies: Vec<Policy>, ttl: Duration) -> Self {
        policies.sort_by_key(|p| p.priority);
        Self {
            policies: Arc::new(policies),
            cache: DashMap::new(),
            ttl,
        }
    }
}

#[async_trait]
impl PolicyEngine for CachedPolicyEngine {
    async fn check(&self, decision: &Decision) -> Result<Verdict, CoreError> {
        let key = decision.cache_key();
        if let Some(entry) = self.cache.get(&key) {
            if entry.expires_at > Instant::now() {
                return Ok(entry.verdict);
            }
        }

        let verdict = evaluate(decision, &self.policies);
        self.cache.insert(
            key,
            CachedVerdict {
                verdict,
                expires_at: Instant::now() + self.ttl,
            },
        );
        Ok(verdict)
    }

    async fn invalidate_subject(&self, user_id: &str) -> Result<(), CoreError> {
        let prefix = format!("{}|", user_id);
        self.cache.retain(|key, _| !key.starts_with(&prefix));
        Ok(())
    }

    async fn invalidate_all(&self) -> Result<(), CoreError> {
        self.cache.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::{Effect, Matcher, Subject};

    fn engine() -> CachedPolicyEngine {
        CachedPolicyEngine::new(vec![Policy::new(
            0,
            Effect::Allow,
            Matcher::set(vec!["admin"]),
            Matcher::wildcard(),
            Matcher::wildcard(),
        )])
    }

    #[tokio::test]
    async fn admin_role_is_allowed_everywhere() {
        let engine = engine();
        let decision = Decision::new(
            Subject::new("user-1", vec!["admin".to_string()]),
            "trading_account.read",
            "trading_account.42",
        );
        let verdict = engine.check(&decision).await.expect("check");
        assert!(verdict.is_allow());
    }

    #[tokio::test]
    async fn unmatched_subject_denies_by_default() {
        let engine = engine();
        let decision = Decision::new(Subject::new("user-2", vec![]), "trading_account.read", "trading_account.42");
        let verdict = engine.check(&decision).await.expect("check");
        assert!(!verdict.is_allow());
    }

    #[tokio::test]
    async fn invalidate_subject_clears_only_that_subject() {
        let engine = engine();
        let admin_decision = Decision::new(
            Subject::new("user-1", vec!["admin".to_string()]),
            "trading_account.read",
            "trading_account.42",
        );
        engine.check(&admin_decision).await.expect("check");
        engine.invalidate_subject("user-1").await.expect("invalidate");
        assert!(engine.cache.is_empty());
    }
}
