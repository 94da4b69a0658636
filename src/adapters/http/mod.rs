// HTTP adapter — thin composition root

/*
This module used to carry a full REST API surface for the authentication
service. That surface is out of scope here: transport, OpenAPI, and
CORS/middleware plumbing are non-goals. What remains is just enough to
exercise the two outbound HTTP contracts the system actually needs —
JWKS publication and a liveness probe — for operators who run this crate
as its own process rather than embedding the use cases directly.

# Architecture Layers

- `state`: shared application state (just the key ring)
- `router`: route configuration
*/

pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
