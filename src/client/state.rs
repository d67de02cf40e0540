use tokio::task::JoinHandle;

use crate::infrastructure::TaskManager;

/// Consolidated mutable state for RealtimeClient.
/// A single struct behind one lock keeps the reconnect bookkeeping atomic
/// from the caller's point of view.
pub struct ClientState {
    /// Retries attempted since the last successful open
    pub reconnect_attempts: u32,

    /// The single outstanding reconnect timer, if any
    pub reconnect_timer: Option<JoinHandle<()>>,

    /// Set by `disconnect()`; suppresses reconnect scheduling from the read task
    pub was_manual_disconnect: bool,

    /// Background read-task lifecycle
    pub task_manager: TaskManager,
}

impl ClientState {
    pub fn new() -> Self {
        Self {
            reconnect_attempts: 0,
            reconnect_timer: None,
            was_manual_disconnect: false,
            task_manager: TaskManager::new(),
        }
    }

    /// Cancel the pending reconnect timer, if one is outstanding.
    pub fn cancel_reconnect_timer(&mut self) {
        if let Some(timer) = self.reconnect_timer.take() {
            timer.abort();
        }
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new()
    }
}
