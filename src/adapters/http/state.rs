// HTTP server shared state

use std::sync::Arc;

use crate::core::usecases::ports::KeyRing;

/// State shared across the composition root's handlers.
///
/// Holds only what the JWKS and health routes need — there is no
/// repository, session, or token-issuer wiring here, since this binary
/// does not expose a general request surface.
#[derive(Clone)]
pub struct AppState {
    pub key_ring: Arc<dyn KeyRing + Send + Sync>,
}

impl AppState {
    pub fn new(key_ring: Arc<dyn KeyRing + Send + Sync>) -> Self {
        Self { key_ring }
    }
}
