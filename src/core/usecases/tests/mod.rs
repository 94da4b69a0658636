//! Test suite for core usecases module.
//!
//! This module contains tests for all use cases, policies, and ports.

pub mod verify_mfa_tests;
pub mod mfa_enrollment_tests;
pub mod policies_tests;
pub mod ports_tests;
