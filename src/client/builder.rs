use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use url::Url;

use super::{ClientState, ConnectionManager, RealtimeClient};
use crate::infrastructure::ReconnectPolicy;
use crate::messaging::SubscriptionRegistry;
use crate::transport::{Connector, WebSocketConnector};
use crate::types::constants::{DEFAULT_MAX_RECONNECT_ATTEMPTS, DEFAULT_RECONNECT_INTERVAL_MS};
use crate::types::Result;

/// Configuration for a client instance. Immutable once the client is built.
#[derive(Debug, Clone)]
pub struct RealtimeClientOptions {
    /// Base reconnect delay; retry N waits N times this
    pub reconnect_interval: Duration,
    /// Automatic retries allowed per outage before giving up
    pub max_reconnect_attempts: u32,
}

impl Default for RealtimeClientOptions {
    fn default() -> Self {
        Self {
            reconnect_interval: Duration::from_millis(DEFAULT_RECONNECT_INTERVAL_MS),
            max_reconnect_attempts: DEFAULT_MAX_RECONNECT_ATTEMPTS,
        }
    }
}

/// Builder for RealtimeClient that handles initialization
pub struct RealtimeClientBuilder {
    endpoint: Url,
    options: RealtimeClientOptions,
    connector: Arc<dyn Connector>,
}

impl RealtimeClientBuilder {
    /// Create a new builder. Fails if the endpoint URL cannot be parsed.
    pub fn new(endpoint: impl AsRef<str>, options: RealtimeClientOptions) -> Result<Self> {
        Ok(Self {
            endpoint: Url::parse(endpoint.as_ref())?,
            options,
            connector: Arc::new(WebSocketConnector),
        })
    }

    /// Swap the transport connector (test harnesses inject a scripted one).
    pub fn with_connector(mut self, connector: Arc<dyn Connector>) -> Self {
        self.connector = connector;
        self
    }

    pub fn build(self) -> RealtimeClient {
        RealtimeClient {
            endpoint: self.endpoint,
            policy: ReconnectPolicy::new(
                self.options.reconnect_interval,
                self.options.max_reconnect_attempts,
            ),
            connector: self.connector,
            connection: Arc::new(ConnectionManager::new()),
            registry: Arc::new(SubscriptionRegistry::new()),
            state: Arc::new(RwLock::new(ClientState::new())),
        }
    }
}
