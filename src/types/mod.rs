pub mod constants;
pub mod error;
pub mod message;
pub mod payloads;

pub use constants::{DEFAULT_MAX_RECONNECT_ATTEMPTS, DEFAULT_RECONNECT_INTERVAL_MS};
pub use error::{RealtimeError, Result};
pub use message::EventEnvelope;
