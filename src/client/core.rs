use std::sync::Arc;

use futures::future::BoxFuture;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use url::Url;

use super::{ClientState, ConnectionManager, ConnectionState, RealtimeClientBuilder,
    RealtimeClientOptions};
use crate::infrastructure::ReconnectPolicy;
use crate::messaging::{EventKind, Subscription, SubscriptionRegistry};
use crate::transport::{Connector, FrameStream};
use crate::types::payloads::{
    ApplicationUpdate, MatchUpdate, PlayerUpdate, ScoreUpdate, TeamUpdate, TransferUpdate,
};
use crate::types::{EventEnvelope, Result};

/// The main entry point for receiving league events in real time.
///
/// `RealtimeClient` maintains one WebSocket connection to the event server,
/// reconnects automatically with linear backoff when an established connection
/// drops, and fans inbound events out to subscribers. Clones share the same
/// connection; independent clients are built independently.
///
/// # Example
///
/// ```no_run
/// use league_realtime::{RealtimeClient, RealtimeClientOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RealtimeClient::new(
///     "ws://localhost:3001/ws",
///     RealtimeClientOptions::default(),
/// )?;
///
/// client.connect().await?;
///
/// let _sub = client.on_score_update(|score| {
///     println!("{} {} - {} {}", score.home_team, score.home_score,
///         score.away_score, score.away_team);
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RealtimeClient {
    pub(crate) endpoint: Url,
    pub(crate) policy: ReconnectPolicy,
    pub(crate) connector: Arc<dyn Connector>,
    pub(crate) connection: Arc<ConnectionManager>,
    pub(crate) registry: Arc<SubscriptionRegistry>,
    pub(crate) state: Arc<RwLock<ClientState>>,
}

impl RealtimeClient {
    /// Creates a new client without establishing a connection; call
    /// [`connect()`](Self::connect) for that.
    ///
    /// # Errors
    ///
    /// Returns [`RealtimeError::UrlParse`](crate::types::RealtimeError::UrlParse)
    /// if the endpoint URL cannot be parsed.
    pub fn new(endpoint: impl AsRef<str>, options: RealtimeClientOptions) -> Result<Self> {
        RealtimeClientBuilder::new(endpoint, options).map(|builder| builder.build())
    }

    /// Establishes the WebSocket connection.
    ///
    /// If an attempt is already in flight, this resolves once that attempt
    /// settles (its open failure, if any, is reported to the caller that
    /// started it). If already connected, this returns immediately. An open
    /// failure is surfaced to the caller and does not by itself schedule a
    /// reconnect; only an unplanned close of an established connection does.
    ///
    /// On success the reconnect counter resets to zero and a background task
    /// starts reading inbound frames.
    pub async fn connect(&self) -> Result<()> {
        self.connect_inner(false).await
    }

    async fn connect_inner(&self, from_retry: bool) -> Result<()> {
        // A voluntary disconnect that raced this retry wins; only an explicit
        // connect() may leave that state.
        if from_retry && self.state.read().await.was_manual_disconnect {
            return Ok(());
        }

        loop {
            match self.connection.state() {
                ConnectionState::Connected => return Ok(()),
                ConnectionState::Connecting => {
                    self.await_settled().await;
                    return Ok(());
                }
                ConnectionState::Disconnected => {
                    // Single winner: whoever takes the transition owns the
                    // attempt, everyone else loops back and awaits it.
                    if self.connection.try_begin_connect() {
                        break;
                    }
                }
            }
        }

        tracing::info!(endpoint = %self.endpoint, "connecting");

        let (sink, frames) = match self.connector.open(&self.endpoint).await {
            Ok(pair) => pair,
            Err(e) => {
                self.connection.set_state(ConnectionState::Disconnected);
                tracing::error!("failed to open connection: {e}");
                return Err(e);
            }
        };

        {
            let mut state = self.state.write().await;
            if from_retry && state.was_manual_disconnect {
                // disconnect() landed while our open was in flight; discard
                // the fresh connection instead of resurrecting one the
                // caller closed.
                drop(state);
                tracing::info!("discarding connection opened after voluntary disconnect");
                let mut sink = sink;
                if let Err(e) = sink.close().await {
                    tracing::debug!("error closing discarded connection: {e}");
                }
                self.connection.set_state(ConnectionState::Disconnected);
                return Ok(());
            }

            self.connection.set_sink(sink).await;

            if from_retry {
                // This handle is the running retry itself; dropping it must
                // not abort us.
                state.reconnect_timer = None;
            } else {
                state.cancel_reconnect_timer();
            }
            state.reconnect_attempts = 0;
            state.was_manual_disconnect = false;

            self.connection.set_state(ConnectionState::Connected);

            let client = self.clone();
            state.task_manager.spawn(client.read_loop(frames));
        }

        tracing::info!("connected");
        Ok(())
    }

    /// Wait until an in-flight attempt leaves `Connecting`.
    async fn await_settled(&self) {
        let mut rx = self.connection.subscribe_state();
        loop {
            if *rx.borrow_and_update() != ConnectionState::Connecting {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Reads inbound frames until the connection goes away, then hands off to
    /// unplanned-close handling.
    fn read_loop(self, mut frames: FrameStream) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            tracing::debug!("read task started");
            while let Some(frame) = frames.next().await {
                match frame {
                    Ok(text) => match serde_json::from_str::<EventEnvelope>(&text) {
                        Ok(envelope) => {
                            tracing::debug!(kind = envelope.kind.as_str(), "received event");
                            self.registry.dispatch(envelope);
                        }
                        Err(e) => {
                            tracing::error!("discarding malformed frame: {e}");
                        }
                    },
                    Err(e) => {
                        tracing::error!("transport error: {e}");
                        break;
                    }
                }
            }
            tracing::debug!("read task finished");
            self.handle_unplanned_close().await;
        })
    }

    /// Called when the read stream ends while we did not ask it to.
    async fn handle_unplanned_close(&self) {
        if self.state.read().await.was_manual_disconnect {
            return;
        }
        tracing::warn!("connection closed unexpectedly");
        self.connection.clear_sink().await;
        self.connection.set_state(ConnectionState::Disconnected);
        self.schedule_reconnect().await;
    }

    /// Schedules the single reconnect timer, or gives up once the attempt
    /// budget is spent. A retry whose open fails re-enters this scheduling;
    /// a caller-initiated `connect()` failure never does.
    ///
    /// The timer handle stays in `reconnect_timer` until the retry's connect
    /// settles, so `disconnect()` can cancel a retry whose open is still in
    /// flight.
    fn schedule_reconnect(&self) -> BoxFuture<'static, ()> {
        let client = self.clone();
        Box::pin(async move {
            let mut state = client.state.write().await;
            if state.was_manual_disconnect {
                return;
            }

            let attempt = state.reconnect_attempts + 1;
            let Some(delay) = client.policy.delay_for(attempt) else {
                tracing::warn!(
                    attempts = state.reconnect_attempts,
                    "max reconnection attempts reached, giving up"
                );
                return;
            };
            state.reconnect_attempts = attempt;
            tracing::info!(
                attempt,
                delay_ms = delay.as_millis() as u64,
                "scheduling reconnect"
            );

            state.cancel_reconnect_timer();
            let retry = client.clone();
            state.reconnect_timer = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if let Err(e) = retry.connect_inner(true).await {
                    tracing::error!(attempt, "reconnection attempt failed: {e}");
                    // Release our own handle before rescheduling so the next
                    // schedule does not abort us.
                    retry.state.write().await.reconnect_timer = None;
                    retry.schedule_reconnect().await;
                }
            }));
        })
    }

    /// Closes the connection and cancels any pending reconnect, including a
    /// retry whose open attempt is still in flight.
    ///
    /// Terminal until [`connect()`](Self::connect) is called again; no
    /// automatic retry follows a voluntary disconnect. Close failures are
    /// logged, never surfaced.
    pub async fn disconnect(&self) {
        {
            let mut state = self.state.write().await;
            state.was_manual_disconnect = true;
            state.cancel_reconnect_timer();
            state.task_manager.abort_all();
        }

        if let Err(e) = self.connection.close().await {
            tracing::warn!("error while closing connection: {e}");
        }
        self.connection.set_state(ConnectionState::Disconnected);
        tracing::info!("disconnected");
    }

    /// Serialize and transmit `message` if connected. While not connected the
    /// message is dropped with a warning; nothing is buffered and no error
    /// reaches the caller.
    pub async fn send<T: Serialize>(&self, message: &T) {
        if !self.connection.is_connected() {
            tracing::warn!("not connected, message not sent");
            return;
        }

        let text = match serde_json::to_string(message) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("failed to serialize outbound message: {e}");
                return;
            }
        };

        if let Err(e) = self.connection.send_text(text).await {
            tracing::warn!("failed to send message: {e}");
        }
    }

    /// Register a callback for one event kind; it receives the envelope's
    /// `data` payload, undecoded. Last-writer-wins per kind.
    pub fn subscribe(
        &self,
        kind: EventKind,
        callback: impl Fn(serde_json::Value) + Send + Sync + 'static,
    ) -> Subscription {
        self.registry.subscribe(kind, callback)
    }

    /// Register a callback for every event kind; it receives full envelopes.
    pub fn subscribe_to_all(
        &self,
        callback: impl Fn(EventEnvelope) + Send + Sync + 'static,
    ) -> Subscription {
        self.registry.subscribe_to_all(callback)
    }

    /// Whether the connection is currently open.
    pub async fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Retries attempted since the last successful open.
    pub async fn reconnect_attempts(&self) -> u32 {
        self.state.read().await.reconnect_attempts
    }

    /// Subscribe with payload decoding at the boundary: payloads that do not
    /// match the kind's schema are logged and skipped.
    fn on_typed<T, F>(&self, kind: EventKind, callback: F) -> Subscription
    where
        T: DeserializeOwned,
        F: Fn(T) + Send + Sync + 'static,
    {
        self.registry.subscribe(kind, move |data| {
            match serde_json::from_value::<T>(data) {
                Ok(payload) => callback(payload),
                Err(e) => tracing::warn!(
                    kind = kind.as_str(),
                    "discarding payload that does not match schema: {e}"
                ),
            }
        })
    }

    pub fn on_match_update(
        &self,
        callback: impl Fn(MatchUpdate) + Send + Sync + 'static,
    ) -> Subscription {
        self.on_typed(EventKind::MatchUpdate, callback)
    }

    pub fn on_team_update(
        &self,
        callback: impl Fn(TeamUpdate) + Send + Sync + 'static,
    ) -> Subscription {
        self.on_typed(EventKind::TeamUpdate, callback)
    }

    pub fn on_player_update(
        &self,
        callback: impl Fn(PlayerUpdate) + Send + Sync + 'static,
    ) -> Subscription {
        self.on_typed(EventKind::PlayerUpdate, callback)
    }

    pub fn on_application_update(
        &self,
        callback: impl Fn(ApplicationUpdate) + Send + Sync + 'static,
    ) -> Subscription {
        self.on_typed(EventKind::ApplicationUpdate, callback)
    }

    pub fn on_transfer_update(
        &self,
        callback: impl Fn(TransferUpdate) + Send + Sync + 'static,
    ) -> Subscription {
        self.on_typed(EventKind::TransferUpdate, callback)
    }

    pub fn on_score_update(
        &self,
        callback: impl Fn(ScoreUpdate) + Send + Sync + 'static,
    ) -> Subscription {
        self.on_typed(EventKind::ScoreUpdate, callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{Connector, FrameSink, FrameStream};
    use crate::types::RealtimeError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::{mpsc, oneshot};
    use tokio::time::Instant;

    enum OpenOutcome {
        Accept,
        Reject,
        /// Open parks until the gate fires, then accepts.
        Gated(oneshot::Receiver<()>),
    }

    /// Scripted transport: each open either fails or yields a connection the
    /// test can feed frames into and sever at will.
    struct MockConnector {
        script: Mutex<VecDeque<OpenOutcome>>,
        opened_at: Mutex<Vec<Instant>>,
        links: Mutex<Vec<mpsc::UnboundedSender<Result<String>>>>,
        sent: Arc<Mutex<Vec<String>>>,
    }

    struct MockSink {
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl FrameSink for MockSink {
        async fn send(&mut self, text: String) -> Result<()> {
            self.sent.lock().unwrap().push(text);
            Ok(())
        }

        async fn close(&mut self) -> Result<()> {
            Ok(())
        }
    }

    impl MockConnector {
        fn new(script: Vec<OpenOutcome>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                opened_at: Mutex::new(Vec::new()),
                links: Mutex::new(Vec::new()),
                sent: Arc::new(Mutex::new(Vec::new())),
            })
        }

        fn open_count(&self) -> usize {
            self.opened_at.lock().unwrap().len()
        }

        fn successful_open_times(&self) -> Vec<Instant> {
            self.opened_at.lock().unwrap().clone()
        }

        fn feed(&self, text: &str) {
            for link in self.links.lock().unwrap().iter() {
                let _ = link.send(Ok(text.to_string()));
            }
        }

        /// Sever every live connection (peer-initiated close).
        fn drop_links(&self) {
            self.links.lock().unwrap().clear();
        }

        fn sent_frames(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Connector for MockConnector {
        async fn open(&self, _url: &Url) -> Result<(Box<dyn FrameSink>, FrameStream)> {
            self.opened_at.lock().unwrap().push(Instant::now());
            let outcome = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(OpenOutcome::Accept);
            let outcome = match outcome {
                OpenOutcome::Gated(gate) => {
                    let _ = gate.await;
                    OpenOutcome::Accept
                }
                other => other,
            };
            match outcome {
                OpenOutcome::Reject => Err(RealtimeError::Connection("refused".to_string())),
                _ => {
                    let (tx, rx) = mpsc::unbounded_channel();
                    self.links.lock().unwrap().push(tx);
                    let frames = futures::stream::unfold(rx, |mut rx| async move {
                        rx.recv().await.map(|frame| (frame, rx))
                    })
                    .boxed();
                    Ok((
                        Box::new(MockSink {
                            sent: Arc::clone(&self.sent),
                        }) as Box<dyn FrameSink>,
                        frames,
                    ))
                }
            }
        }
    }

    fn options(base_ms: u64, max_attempts: u32) -> RealtimeClientOptions {
        RealtimeClientOptions {
            reconnect_interval: Duration::from_millis(base_ms),
            max_reconnect_attempts: max_attempts,
        }
    }

    fn client_with(
        connector: Arc<MockConnector>,
        options: RealtimeClientOptions,
    ) -> RealtimeClient {
        RealtimeClientBuilder::new("ws://localhost:3001/ws", options)
            .unwrap()
            .with_connector(connector)
            .build()
    }

    async fn settle() {
        // Yield long enough for spawned tasks to observe channel closure.
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[test]
    fn test_client_handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RealtimeClient>();
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_while_disconnected_never_reaches_transport() {
        let connector = MockConnector::new(vec![OpenOutcome::Accept]);
        let client = client_with(Arc::clone(&connector), options(1000, 5));

        client.send(&serde_json::json!({"ping": true})).await;
        assert!(connector.sent_frames().is_empty());

        client.connect().await.unwrap();
        client.send(&serde_json::json!({"ping": true})).await;
        assert_eq!(connector.sent_frames().len(), 1);

        client.disconnect().await;
        client.send(&serde_json::json!({"ping": true})).await;
        assert_eq!(connector.sent_frames().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_is_noop_while_connected() {
        let connector = MockConnector::new(vec![OpenOutcome::Accept]);
        let client = client_with(Arc::clone(&connector), options(1000, 5));

        client.connect().await.unwrap();
        client.connect().await.unwrap();

        assert_eq!(connector.open_count(), 1);
        assert!(client.is_connected().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_connect_awaits_settlement_and_opens_once() {
        let (gate_tx, gate_rx) = oneshot::channel();
        let connector = MockConnector::new(vec![OpenOutcome::Gated(gate_rx)]);
        let client = client_with(Arc::clone(&connector), options(1000, 5));

        let first = tokio::spawn({
            let client = client.clone();
            async move { client.connect().await }
        });
        settle().await;

        // Second caller arrives while the first open is still in flight; it
        // must park until that attempt settles, not report success early.
        let second = tokio::spawn({
            let client = client.clone();
            async move { client.connect().await }
        });
        settle().await;
        assert!(!second.is_finished());

        gate_tx.send(()).unwrap();
        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        assert!(client.is_connected().await);
        assert_eq!(connector.open_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_connect_failure_surfaces_without_retry() {
        let connector = MockConnector::new(vec![OpenOutcome::Reject]);
        let client = client_with(Arc::clone(&connector), options(1000, 5));

        assert!(client.connect().await.is_err());
        assert!(!client.is_connected().await);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(connector.open_count(), 1);
        assert_eq!(client.reconnect_attempts().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_linear_backoff_until_ceiling() {
        // base 1000 ms, max 5: an established connection drops, every retry
        // fails to open. Retries fire 1000, 2000, ..., 5000 ms after each
        // respective failure, then the client gives up at 5 attempts.
        let connector = MockConnector::new(vec![
            OpenOutcome::Accept,
            OpenOutcome::Reject,
            OpenOutcome::Reject,
            OpenOutcome::Reject,
            OpenOutcome::Reject,
            OpenOutcome::Reject,
        ]);
        let client = client_with(Arc::clone(&connector), options(1000, 5));

        client.connect().await.unwrap();
        connector.drop_links();

        tokio::time::sleep(Duration::from_secs(120)).await;

        let opens = connector.successful_open_times();
        assert_eq!(opens.len(), 6);
        let deltas: Vec<u64> = opens
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).as_millis() as u64)
            .collect();
        // Each retry is scheduled the moment the previous open settles, so
        // the spacing between opens is exactly the scheduled delay.
        assert_eq!(deltas, vec![1000, 2000, 3000, 4000, 5000]);

        assert!(!client.is_connected().await);
        assert_eq!(client.reconnect_attempts().await, 5);

        // Ceiling reached: nothing further fires.
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(connector.open_count(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_counter_resets_on_successful_reopen() {
        let connector = MockConnector::new(vec![
            OpenOutcome::Accept,
            OpenOutcome::Reject,
            OpenOutcome::Accept,
        ]);
        let client = client_with(Arc::clone(&connector), options(1000, 5));

        client.connect().await.unwrap();
        connector.drop_links();

        tokio::time::sleep(Duration::from_secs(60)).await;

        assert!(client.is_connected().await);
        assert_eq!(connector.open_count(), 3);
        assert_eq!(client.reconnect_attempts().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_cancels_pending_retry() {
        let connector = MockConnector::new(vec![OpenOutcome::Accept]);
        let client = client_with(Arc::clone(&connector), options(1000, 5));

        client.connect().await.unwrap();
        connector.drop_links();
        settle().await;
        assert_eq!(client.reconnect_attempts().await, 1);

        client.disconnect().await;

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(connector.open_count(), 1);
        assert!(!client.is_connected().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_during_inflight_retry_stays_disconnected() {
        // The retry timer has fired and its open is parked inside the
        // connector when disconnect() lands; releasing the open afterwards
        // must not resurrect the connection.
        let (gate_tx, gate_rx) = oneshot::channel();
        let connector =
            MockConnector::new(vec![OpenOutcome::Accept, OpenOutcome::Gated(gate_rx)]);
        let client = client_with(Arc::clone(&connector), options(1000, 5));

        client.connect().await.unwrap();
        connector.drop_links();
        settle().await;
        assert_eq!(client.reconnect_attempts().await, 1);

        // Let the 1000 ms retry fire and block on the gate.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(connector.open_count(), 2);

        client.disconnect().await;
        assert!(!client.is_connected().await);

        let _ = gate_tx.send(());
        tokio::time::sleep(Duration::from_secs(60)).await;

        assert!(!client.is_connected().await);
        assert_eq!(connector.open_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_inbound_dispatch_and_malformed_frames() {
        let connector = MockConnector::new(vec![OpenOutcome::Accept]);
        let client = client_with(Arc::clone(&connector), options(1000, 5));
        client.connect().await.unwrap();

        let typed_hits = Arc::new(AtomicUsize::new(0));
        let wildcard_hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&typed_hits);
        let _typed = client.subscribe(EventKind::MatchUpdate, move |data| {
            assert_eq!(data["homeTeam"], "Bunyodkor");
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&wildcard_hits);
        let _wildcard = client.subscribe_to_all(move |envelope| {
            assert_eq!(envelope.kind, EventKind::MatchUpdate);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        connector.feed("this is not json");
        connector.feed(
            r#"{"type":"match_update","data":{"homeTeam":"Bunyodkor","awayTeam":"Nasaf"},"timestamp":"2024-03-01T18:30:00Z"}"#,
        );
        settle().await;

        assert_eq!(typed_hits.load(Ordering::SeqCst), 1);
        assert_eq!(wildcard_hits.load(Ordering::SeqCst), 1);
        // A malformed frame does not affect connection state.
        assert!(client.is_connected().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typed_facade_decodes_payloads() {
        let connector = MockConnector::new(vec![OpenOutcome::Accept]);
        let client = client_with(Arc::clone(&connector), options(1000, 5));
        client.connect().await.unwrap();

        let scores: Arc<Mutex<Vec<(u32, u32)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&scores);
        let _sub = client.on_score_update(move |score| {
            sink.lock().unwrap().push((score.home_score, score.away_score));
        });

        connector.feed(
            r#"{"type":"score_update","data":{"homeTeam":"Lokomotiv","awayTeam":"Navbahor","homeScore":2,"awayScore":1},"timestamp":"2024-03-01T19:45:00Z"}"#,
        );
        // Payload that fails the score schema is logged and skipped.
        connector.feed(
            r#"{"type":"score_update","data":{"unexpected":"shape"},"timestamp":"2024-03-01T19:46:00Z"}"#,
        );
        settle().await;

        assert_eq!(*scores.lock().unwrap(), vec![(2, 1)]);
        assert!(client.is_connected().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriptions_survive_reconnect() {
        let connector = MockConnector::new(vec![OpenOutcome::Accept, OpenOutcome::Accept]);
        let client = client_with(Arc::clone(&connector), options(1000, 5));
        client.connect().await.unwrap();

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let _sub = client.subscribe(EventKind::TeamUpdate, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        connector.drop_links();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(client.is_connected().await);

        connector.feed(
            r#"{"type":"team_update","data":{"name":"Neftchi"},"timestamp":"2024-03-02T10:00:00Z"}"#,
        );
        settle().await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
