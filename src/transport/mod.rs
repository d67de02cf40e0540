//! Transport seam between the client and the physical connection.
//!
//! The client drives whatever a [`Connector`] hands back: a sink for outbound
//! text frames and a stream of inbound ones. The production WebSocket
//! connector and the test harness plug in the same way.

pub mod websocket;

use async_trait::async_trait;
use futures::stream::BoxStream;
use url::Url;

use crate::types::Result;

pub use websocket::WebSocketConnector;

/// Inbound frames as the client sees them: decoded text, or a transport
/// error. The stream ending is how a close (planned or not) surfaces.
pub type FrameStream = BoxStream<'static, Result<String>>;

/// Write half of an open connection. Sinks are held behind the client's
/// shared connection manager, so implementations must be `Sync` as well as
/// `Send`.
#[async_trait]
pub trait FrameSink: Send + Sync {
    async fn send(&mut self, text: String) -> Result<()>;
    async fn close(&mut self) -> Result<()>;
}

/// Opens one physical connection to an endpoint.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn open(&self, url: &Url) -> Result<(Box<dyn FrameSink>, FrameStream)>;
}
