//! # league-realtime
//!
//! Real-time event distribution client for the HFL admin system. Maintains a
//! single long-lived WebSocket connection to the league event server, fans
//! pushed events (match, team, player, application, transfer, score) out to
//! typed subscribers, and reconnects automatically with linear backoff when
//! an established connection drops.
//!
//! The client is a trigger, not a source of truth: consumers typically react
//! to an event by re-fetching state from their own backend.
//!
//! ## Example
//!
//! ```no_run
//! use league_realtime::{RealtimeClient, RealtimeClientOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RealtimeClient::new(
//!         "ws://localhost:3001/ws",
//!         RealtimeClientOptions::default(),
//!     )?;
//!
//!     client.connect().await?;
//!
//!     let _scores = client.on_score_update(|score| {
//!         println!(
//!             "{} {} - {} {}",
//!             score.home_team, score.home_score, score.away_score, score.away_team
//!         );
//!     });
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod infrastructure;
pub mod messaging;
pub mod transport;
pub mod types;

pub use client::{RealtimeClient, RealtimeClientBuilder, RealtimeClientOptions};
pub use infrastructure::ReconnectPolicy;
pub use messaging::{EventKind, Subscription, SubscriptionRegistry};
pub use types::payloads::{
    ApplicationUpdate, DomainEvent, MatchUpdate, PlayerUpdate, ScoreUpdate, TeamUpdate,
    TransferUpdate,
};
pub use types::{EventEnvelope, RealtimeError};
