use tokio::sync::{watch, RwLock};

use crate::transport::FrameSink;
use crate::types::{RealtimeError, Result};

/// Lifecycle of the single physical connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

/// Owns the write half of the active connection and the connection state.
/// Exactly one sink is live at a time; nothing is transmitted unless the
/// state is `Connected`.
///
/// State lives in a `watch` channel so concurrent callers can await the
/// settlement of an in-flight connection attempt.
pub struct ConnectionManager {
    sink: RwLock<Option<Box<dyn FrameSink>>>,
    state: watch::Sender<ConnectionState>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            sink: RwLock::new(None),
            state: watch::Sender::new(ConnectionState::Disconnected),
        }
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    pub fn set_state(&self, new_state: ConnectionState) {
        self.state.send_replace(new_state);
    }

    /// Atomically transition `Disconnected` → `Connecting`. Returns `false`
    /// if the state was anything else, so only one caller can own an attempt.
    pub fn try_begin_connect(&self) -> bool {
        let mut begun = false;
        self.state.send_if_modified(|state| {
            if *state == ConnectionState::Disconnected {
                *state = ConnectionState::Connecting;
                begun = true;
                true
            } else {
                false
            }
        });
        begun
    }

    /// Watch handle for state changes (used to await attempt settlement).
    pub fn subscribe_state(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    /// Install the write sink of a freshly opened connection.
    pub async fn set_sink(&self, new_sink: Box<dyn FrameSink>) {
        let mut sink = self.sink.write().await;
        *sink = Some(new_sink);
    }

    /// Transmit one serialized frame through the active connection.
    pub async fn send_text(&self, text: String) -> Result<()> {
        let mut guard = self.sink.write().await;
        let sink = guard.as_mut().ok_or(RealtimeError::NotConnected)?;
        sink.send(text).await
    }

    /// Close the active connection, if any, and drop the sink.
    pub async fn close(&self) -> Result<()> {
        let mut guard = self.sink.write().await;
        if let Some(mut sink) = guard.take() {
            sink.close().await?;
        }
        Ok(())
    }

    /// Drop the sink without a close handshake (the peer is already gone).
    pub async fn clear_sink(&self) {
        let mut sink = self.sink.write().await;
        *sink = None;
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}
