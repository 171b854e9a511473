//! Outbound transport seam.
//!
//! Sends are fire-and-forget: the casting core never waits for an answer and
//! per-caster ordering is the transport's responsibility.

use thiserror::Error;

use crate::message::Outbound;

/// Errors surfaced by transport implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("codec error: {0}")]
    Codec(String),

    #[error("transport is closed")]
    Closed,
}

/// Sink for packets produced by cast sessions.
pub trait Transport {
    fn send(&mut self, packet: Outbound) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, packet: Outbound) -> Result<(), TransportError> {
        (**self).send(packet)
    }
}

/// In-memory transport that encodes every packet and keeps the sent log.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Vec<Outbound>,
    bytes_sent: usize,
    closed: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Packets sent so far, oldest first.
    pub fn sent(&self) -> &[Outbound] {
        &self.sent
    }

    /// Drains the sent log.
    pub fn take(&mut self) -> Vec<Outbound> {
        std::mem::take(&mut self.sent)
    }

    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Rejects every later send with [`TransportError::Closed`].
    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl Transport for RecordingTransport {
    fn send(&mut self, packet: Outbound) -> Result<(), TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        let frame = packet.encode()?;
        tracing::trace!(
            channel = packet.channel(),
            bytes = frame.len(),
            "Recorded outbound packet"
        );
        self.bytes_sent += frame.len();
        self.sent.push(packet);
        Ok(())
    }
}
