//! Dashboard-style usage: the client is only a trigger to re-fetch state,
//! never the source of truth for it.

use league_realtime::{DomainEvent, RealtimeClient, RealtimeClientOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = RealtimeClient::new(
        std::env::var("LEAGUE_WS_URL").unwrap_or_else(|_| "ws://localhost:3001/ws".to_string()),
        RealtimeClientOptions::default(),
    )?;

    client.connect().await?;
    println!("Dashboard connected, waiting for refresh triggers...");

    // One wildcard subscription drives every panel refresh; the decoded
    // payload only tells us which panel is stale.
    let _all = client.subscribe_to_all(|envelope| match DomainEvent::from_envelope(&envelope) {
        Ok(event) => {
            println!("{} at {} -> re-fetching {} panel", event.kind(), envelope.timestamp, event.kind());
        }
        Err(e) => {
            eprintln!("ignoring event with unexpected payload: {e}");
        }
    });

    tokio::signal::ctrl_c().await?;
    client.disconnect().await;

    Ok(())
}
