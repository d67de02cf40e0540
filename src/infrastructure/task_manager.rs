use tokio::task::JoinHandle;

/// Tracks the client's background tasks so `disconnect()` can tear them all
/// down in one step.
pub struct TaskManager {
    handles: Vec<JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Spawn a task and track it. Handles of tasks that already finished are
    /// pruned here so a long-lived client does not accumulate them across
    /// reconnects.
    pub fn spawn<F>(&mut self, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.handles.retain(|handle| !handle.is_finished());
        self.handles.push(tokio::spawn(future));
    }

    /// Abort all tracked tasks without waiting
    pub fn abort_all(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
        self.handles.clear();
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_finished_tasks_are_pruned_on_spawn() {
        let mut manager = TaskManager::new();
        manager.spawn(async {});
        assert_eq!(manager.len(), 1);

        // Let the first task run to completion before spawning again.
        tokio::time::sleep(Duration::from_millis(10)).await;
        manager.spawn(std::future::pending());
        assert_eq!(manager.len(), 1);

        manager.abort_all();
        assert!(manager.is_empty());
    }
}
