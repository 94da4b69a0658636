use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::policy::{evaluate, Decision, Policy, Verdict};
use crate::core::usecases::ports::PolicyEngine;

struct CachingPolicyEngine {
    policies: Vec<Policy>,
    cache: Mutex<HashSet<String>>,
}

#[async_trait]
impl PolicyEngine for CachingPolicyEngine {
    async fn check(&self, decision: &Decision) -> Result<Verdict, CoreError> {
        let key = decision.cache_key();
        self.cache.lock().unwrap().insert(key);
        Ok(evaluate(decision, &self.policies))
    }

    async fn invalidate_subject(&self, user_id: &str) -> Result<(), CoreError> {
        self.cache.lock().unwrap().retain(|key| !key.starts_with(user_id));
        Ok(())
    }

    async fn invalidate_all(&self) -> Result<(), CoreError> {
        self.cache.lock().unwrap().clear();
        Ok(())
    }
}

#[tokio::test]
async fn check_caches_the_decision_key() {
    let engine = CachingPolicyEngine {
        policies: vec![],
        cache: Mutex::new(HashSet::new()),
    };
    let decision = Decision::new(crate::core::policy::Subject::new("user-1", vec![]), "trading_account.read", "ta:1");
    engine.check(&decision).await.unwrap();
    assert!(engine.cache.lock().unwrap().contains(&decision.cache_key()));
}

#[tokio::test]
async fn invalidate_subject_drops_only_that_subjects_entries() {
    let engine = CachingPolicyEngine {
        policies: vec![],
        cache: Mutex::new(HashSet::new()),
    };
    let a = Decision::new(crate::core::policy::Subject::new("user-1", vec![]), "a", "r");
    let b = Decision::new(crate::core::policy::Subject::new("user-2", vec![]), "a", "r");
    engine.check(&a).await.unwrap();
    engine.check(&b).await.unwrap();
    engine.invalidate_subject("user-1").await.unwrap();
    let cache = engine.cache.lock().unwrap();
    assert!(!cache.contains(&a.cache_key()));
    assert!(cache.contains(&b.cache_key()));
}
