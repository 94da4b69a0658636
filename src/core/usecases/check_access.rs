//! Use case: CheckAccess
//!
//! Thin passthrough to the PDP. Exists as a use case (rather than handing
//! callers the `PolicyEngine` port directly) only so the authorization
//! surface is reachable the same way every other public workflow is.

use std::sync::Arc;

use crate::core::error::CoreError;
use crate::core::policy::{Decision, Verdict};
use crate::core::usecases::ports::PolicyEngine;

pub struct CheckAccess {
    policy_engine: Arc<dyn PolicyEngine>,
}

impl CheckAccess {
    pub fn new(policy_engine: Arc<dyn PolicyEngine>) -> Self {
        Self { policy_engine }
    }

    pub async fn execute(&self, decision: Decision) -> Result<Verdict, CoreError> {
        self.policy_engine.check(&decision).await
    }
}
