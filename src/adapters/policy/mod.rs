//! Authorization decision point, implementing the `PolicyEngine` port over
//! the pure `core::policy::evaluate` algorithm.

pub mod engine;
pub mod seed;

pub use engine::CachedPolicyEngine;
pub use seed::default_policies;
