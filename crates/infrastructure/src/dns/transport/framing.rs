//! Two-byte big-endian length prefix framing for DNS over TCP.

use bytes::{Buf, Bytes, BytesMut};
use jsx_dns_domain::DomainError;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

const READ_CHUNK: usize = 4096;

/// Reassembles length-prefixed messages from arbitrarily split reads.
///
/// Bytes past the end of a frame stay buffered for the next one.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    buf: BytesMut,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Pops the next complete message, without its length prefix.
    pub fn next_frame(&mut self) -> Option<Bytes> {
        if self.buf.len() < 2 {
            return None;
        }
        let length = u16::from_be_bytes([self.buf[0], self.buf[1]]) as usize;
        if self.buf.len() < 2 + length {
            return None;
        }
        self.buf.advance(2);
        Some(self.buf.split_to(length).freeze())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

pub async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWrite + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::InvalidDnsMessage(format!(
            "Message too large for TCP framing: {} bytes",
            message_bytes.len()
        ))
    })?;

    let mut framed = Vec::with_capacity(2 + message_bytes.len());
    framed.extend_from_slice(&length.to_be_bytes());
    framed.extend_from_slice(message_bytes);

    stream
        .write_all(&framed)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

/// Reads until `frames` holds a complete message. The peer closing the
/// stream first is an error.
pub async fn read_with_length_prefix<S>(
    stream: &mut S,
    frames: &mut FrameBuffer,
) -> Result<Bytes, DomainError>
where
    S: AsyncRead + Unpin,
{
    loop {
        if let Some(frame) = frames.next_frame() {
            return Ok(frame);
        }

        frames.buf.reserve(READ_CHUNK);
        let read = stream
            .read_buf(&mut frames.buf)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to read DNS message: {}", e)))?;

        if read == 0 {
            return Err(DomainError::IoError(format!(
                "Connection closed with {} of a message buffered",
                frames.len()
            )));
        }
    }
}
