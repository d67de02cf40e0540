/// Wire tags for the closed set of domain events (magic strings layer)
pub mod event_tags {
    pub const MATCH_UPDATE: &str = "match_update";
    pub const TEAM_UPDATE: &str = "team_update";
    pub const PLAYER_UPDATE: &str = "player_update";
    pub const APPLICATION_UPDATE: &str = "application_update";
    pub const TRANSFER_UPDATE: &str = "transfer_update";
    pub const SCORE_UPDATE: &str = "score_update";
}

/// Default base reconnect delay (milliseconds); retry N waits N times this
pub const DEFAULT_RECONNECT_INTERVAL_MS: u64 = 5_000;

/// Default ceiling on automatic reconnect attempts per outage
pub const DEFAULT_MAX_RECONNECT_ATTEMPTS: u32 = 5;
