use serde::{Deserialize, Serialize};

use crate::types::constants::event_tags;

/// The closed set of domain event tags the league server pushes.
///
/// Adding a category means adding a variant and its wire tag here; nothing
/// structural changes elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    MatchUpdate,
    TeamUpdate,
    PlayerUpdate,
    ApplicationUpdate,
    TransferUpdate,
    ScoreUpdate,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        Self::MatchUpdate,
        Self::TeamUpdate,
        Self::PlayerUpdate,
        Self::ApplicationUpdate,
        Self::TransferUpdate,
        Self::ScoreUpdate,
    ];

    /// Parse a wire tag; `None` for anything outside the closed set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            event_tags::MATCH_UPDATE => Some(Self::MatchUpdate),
            event_tags::TEAM_UPDATE => Some(Self::TeamUpdate),
            event_tags::PLAYER_UPDATE => Some(Self::PlayerUpdate),
            event_tags::APPLICATION_UPDATE => Some(Self::ApplicationUpdate),
            event_tags::TRANSFER_UPDATE => Some(Self::TransferUpdate),
            event_tags::SCORE_UPDATE => Some(Self::ScoreUpdate),
            _ => None,
        }
    }

    /// Wire tag for this event kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MatchUpdate => event_tags::MATCH_UPDATE,
            Self::TeamUpdate => event_tags::TEAM_UPDATE,
            Self::PlayerUpdate => event_tags::PLAYER_UPDATE,
            Self::ApplicationUpdate => event_tags::APPLICATION_UPDATE,
            Self::TransferUpdate => event_tags::TRANSFER_UPDATE,
            Self::ScoreUpdate => event_tags::SCORE_UPDATE,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
