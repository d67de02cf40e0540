use std::time::Duration;

use crate::types::constants::{DEFAULT_MAX_RECONNECT_ATTEMPTS, DEFAULT_RECONNECT_INTERVAL_MS};

/// Linear backoff schedule for automatic reconnection: retry N waits
/// `base_delay × N`, and no retry is scheduled once `max_attempts` is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub base_delay: Duration,
    pub max_attempts: u32,
}

impl ReconnectPolicy {
    pub fn new(base_delay: Duration, max_attempts: u32) -> Self {
        Self {
            base_delay,
            max_attempts,
        }
    }

    /// Delay before retry number `attempt` (1-based), or `None` once the
    /// attempt budget is exhausted.
    pub fn delay_for(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_attempts {
            return None;
        }
        Some(self.base_delay * attempt)
    }
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_RECONNECT_INTERVAL_MS),
            DEFAULT_MAX_RECONNECT_ATTEMPTS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_scales_linearly() {
        let policy = ReconnectPolicy::new(Duration::from_millis(1000), 5);
        for attempt in 1..=5 {
            assert_eq!(
                policy.delay_for(attempt),
                Some(Duration::from_millis(1000 * attempt as u64))
            );
        }
    }

    #[test]
    fn test_budget_exhaustion() {
        let policy = ReconnectPolicy::new(Duration::from_millis(1000), 5);
        assert_eq!(policy.delay_for(6), None);
        assert_eq!(policy.delay_for(0), None);
    }

    #[test]
    fn test_default_matches_admin_panel_settings() {
        let policy = ReconnectPolicy::default();
        assert_eq!(policy.base_delay, Duration::from_millis(5000));
        assert_eq!(policy.max_attempts, 5);
    }
}
