use league_realtime::{RealtimeClient, RealtimeClientOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Create client
    let client = RealtimeClient::new(
        std::env::var("LEAGUE_WS_URL").unwrap_or_else(|_| "ws://localhost:3001/ws".to_string()),
        RealtimeClientOptions::default(),
    )?;

    // Connect
    println!("Connecting to league event server...");
    client.connect().await?;
    println!("Connected!");

    let _scores = client.on_score_update(|score| {
        println!(
            "score: {} {} - {} {}",
            score.home_team, score.home_score, score.away_score, score.away_team
        );
    });

    let _transfers = client.on_transfer_update(|transfer| {
        println!(
            "transfer: {} {} -> {}",
            transfer.player_name, transfer.from_team, transfer.to_team
        );
    });

    // Keep connection alive
    tokio::signal::ctrl_c().await?;

    // Disconnect
    println!("Disconnecting...");
    client.disconnect().await;
    println!("Disconnected!");

    Ok(())
}
