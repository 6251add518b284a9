pub mod framing;
pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use jsx_dns_domain::config::TransportMode;
use jsx_dns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use framing::FrameBuffer;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends one message and waits for one reply. `timeout` bounds the whole
    /// exchange, connection setup included.
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }
}

pub fn create_transport(mode: TransportMode, addr: SocketAddr) -> Transport {
    match mode {
        TransportMode::Udp => Transport::Udp(udp::UdpTransport::new(addr)),
        TransportMode::Tcp => Transport::Tcp(tcp::TcpTransport::new(addr)),
    }
}
