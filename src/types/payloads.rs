//! Domain payload schemas, one per event tag.
//!
//! The transport keeps `data` opaque; these types own the "what does a
//! match_update look like" decision. Field names follow the admin panel's
//! wire casing (camelCase). Decoding happens at the consumer boundary: the
//! typed `on_*_update` helpers and [`DomainEvent::from_envelope`].

use serde::{Deserialize, Serialize};

use crate::messaging::EventKind;
use crate::types::{EventEnvelope, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    pub name: String,
    #[serde(default)]
    pub coach: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdate {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

/// League application lifecycle change (submitted / approved / rejected).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationUpdate {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferUpdate {
    pub player_name: String,
    pub from_team: String,
    pub to_team: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    #[serde(default)]
    pub finished: bool,
}

/// Tagged union over the closed event set, decoded against the schema the
/// envelope's tag selects.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    Match(MatchUpdate),
    Team(TeamUpdate),
    Player(PlayerUpdate),
    Application(ApplicationUpdate),
    Transfer(TransferUpdate),
    Score(ScoreUpdate),
}

impl DomainEvent {
    /// Decode an envelope's payload. Fails if the payload does not match the
    /// schema for its tag; the envelope itself is untouched.
    pub fn from_envelope(envelope: &EventEnvelope) -> Result<Self> {
        let data = envelope.data.clone();
        Ok(match envelope.kind {
            EventKind::MatchUpdate => Self::Match(serde_json::from_value(data)?),
            EventKind::TeamUpdate => Self::Team(serde_json::from_value(data)?),
            EventKind::PlayerUpdate => Self::Player(serde_json::from_value(data)?),
            EventKind::ApplicationUpdate => Self::Application(serde_json::from_value(data)?),
            EventKind::TransferUpdate => Self::Transfer(serde_json::from_value(data)?),
            EventKind::ScoreUpdate => Self::Score(serde_json::from_value(data)?),
        })
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Match(_) => EventKind::MatchUpdate,
            Self::Team(_) => EventKind::TeamUpdate,
            Self::Player(_) => EventKind::PlayerUpdate,
            Self::Application(_) => EventKind::ApplicationUpdate,
            Self::Transfer(_) => EventKind::TransferUpdate,
            Self::Score(_) => EventKind::ScoreUpdate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_event_decodes_by_tag() {
        let envelope = EventEnvelope::new(
            EventKind::TransferUpdate,
            serde_json::json!({
                "playerName": "J. Karimov",
                "fromTeam": "Yashin FC",
                "toTeam": "Paxtakor",
                "status": "approved"
            }),
        );

        let event = DomainEvent::from_envelope(&envelope).unwrap();
        assert_eq!(event.kind(), EventKind::TransferUpdate);
        match event {
            DomainEvent::Transfer(transfer) => {
                assert_eq!(transfer.player_name, "J. Karimov");
                assert_eq!(transfer.from_team, "Yashin FC");
                assert_eq!(transfer.status.as_deref(), Some("approved"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_domain_event_rejects_mismatched_payload() {
        let envelope = EventEnvelope::new(
            EventKind::ScoreUpdate,
            serde_json::json!({"homeTeam": "Lokomotiv"}),
        );
        assert!(DomainEvent::from_envelope(&envelope).is_err());
    }
}
