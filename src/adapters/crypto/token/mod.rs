//! JWT token issuance and validation, implementing the `TokenIssuer` port.

pub mod jwt_token_issuer;

pub use jwt_token_issuer::JwtTokenIssuer;
