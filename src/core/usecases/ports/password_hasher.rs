//! Port for password hashing and verification.
//!
//! Abstracts password hashing and verification for authentication use cases.
//!
//! Adapters must implement this trait to provide concrete hashing algorithms.

use crate::core::credentials::StoredCredential;

/// Contract for password hashing and verification.
///
/// Hashing itself stays synchronous: argon2/bcrypt are CPU-bound, not I/O,
/// so there is nothing for an async runtime to yield on.
pub trait PasswordHasher {
	/// Hash a raw password and return a stored credential.
	fn hash(&self, raw: &str) -> StoredCredential;

	/// Verify a raw password against a stored credential. Must run in
	/// constant time with respect to where the comparison fails.
	fn verify(&self, raw: &str, stored: &StoredCredential) -> bool;

	/// Reject passwords that fail the minimum strength bar (length, not a
	/// known-breached value, not equal to the account identifier). Called
	/// on registration and password reset, never on login.
	fn meets_strength_bar(&self, raw: &str) -> bool;
}
