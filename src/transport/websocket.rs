use async_trait::async_trait;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream,
};
use url::Url;

use super::{Connector, FrameSink, FrameStream};
use crate::types::Result;

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// Production connector over tokio-tungstenite.
pub struct WebSocketConnector;

struct WsFrameSink {
    inner: WsSink,
}

#[async_trait]
impl FrameSink for WsFrameSink {
    async fn send(&mut self, text: String) -> Result<()> {
        self.inner.send(Message::Text(text.into())).await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.inner.close().await?;
        Ok(())
    }
}

#[async_trait]
impl Connector for WebSocketConnector {
    async fn open(&self, url: &Url) -> Result<(Box<dyn FrameSink>, FrameStream)> {
        tracing::debug!(url = %url, "opening WebSocket connection");
        let (ws_stream, _response) = connect_async(url.as_str()).await?;
        let (write_half, read_half) = ws_stream.split();

        // Text frames pass through; control frames are handled here so the
        // client only ever sees decoded text or a terminated stream.
        let frames = read_half
            .filter_map(|item| async move {
                match item {
                    Ok(Message::Text(text)) => Some(Ok(text.to_string())),
                    Ok(Message::Close(frame)) => {
                        match frame {
                            Some(frame) => tracing::warn!(
                                code = ?frame.code,
                                reason = %frame.reason,
                                "server closed connection"
                            ),
                            None => {
                                tracing::warn!("server closed connection without close frame")
                            }
                        }
                        None
                    }
                    Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => None,
                    Ok(Message::Binary(data)) => {
                        tracing::warn!(len = data.len(), "ignoring unexpected binary message");
                        None
                    }
                    Ok(Message::Frame(_)) => None,
                    Err(e) => Some(Err(e.into())),
                }
            })
            .boxed();

        Ok((Box::new(WsFrameSink { inner: write_half }), frames))
    }
}
