//! Gateway adapter that writes sends to a byte stream.
//!
//! Used by the `partsbot` binary to drive the dispatcher from a terminal.

use async_trait::async_trait;
use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::dispatch::domain::{ChannelId, Embed};
use crate::dispatch::ports::{ChatGateway, GatewayError, GatewayResult};

/// Writes each text send as `[#channel] text` and each embed as
/// `[#channel] <json>` on its own line.
pub struct ConsoleGateway<W> {
    writer: Arc<Mutex<W>>,
}

impl<W> ConsoleGateway<W>
where
    W: Write + Send,
{
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    fn write_line(&self, channel: &ChannelId, body: &str) -> GatewayResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|err| GatewayError::Rejected(err.to_string()))?;
        writeln!(writer, "[#{channel}] {body}").map_err(GatewayError::transport)?;
        writer.flush().map_err(GatewayError::transport)
    }
}

impl<W> Clone for ConsoleGateway<W> {
    fn clone(&self) -> Self {
        Self {
            writer: Arc::clone(&self.writer),
        }
    }
}

#[async_trait]
impl<W> ChatGateway for ConsoleGateway<W>
where
    W: Write + Send,
{
    async fn send_message(&self, channel: &ChannelId, content: &str) -> GatewayResult<()> {
        self.write_line(channel, content)
    }

    async fn send_embed(&self, channel: &ChannelId, embed: &Embed) -> GatewayResult<()> {
        let rendered = serde_json::to_string(embed).map_err(GatewayError::transport)?;
        self.write_line(channel, &rendered)
    }
}
