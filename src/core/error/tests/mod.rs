//! Tests for the core error module
//!
//! This module organizes tests for each error type into separate files
//! for better maintainability and scalability.

mod authentication_error_tests;
mod credential_error_tests;
mod token_error_tests;
mod invariant_error_tests;
