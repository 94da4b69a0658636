//! Identity and access control plane for a multi-service trading platform.
//!
//! This crate is the single source of truth for who a principal is, which
//! sessions and tokens are currently valid, what a principal may do, and
//! which broker credentials they own. Peer services delegate authentication
//! and authorization to it and consume its domain events.
//!
//! The crate follows a hexagonal layout: [`core`] holds domain types, use
//! cases, and the ports they depend on; [`adapters`] holds the concrete
//! infrastructure (crypto, persistence, event transport) that implements
//! those ports.

pub mod core;
pub mod adapters;
pub mod config;
