//! Domain event fan-out, implementing the `EventBus` port.

pub mod tokio_bus;

pub use tokio_bus::TokioEventBus;
