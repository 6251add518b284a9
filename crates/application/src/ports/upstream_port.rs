use async_trait::async_trait;
use jsx_dns_domain::{config::TransportMode, RecordType, ResourceRecord};
use std::net::SocketAddr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamAnswer {
    pub answers: Vec<ResourceRecord>,
    /// `None` when the response carried no authority section.
    pub authorities: Option<Vec<ResourceRecord>>,
}

#[async_trait]
pub trait UpstreamPort: Send + Sync {
    /// Tries `servers` in order and returns the first usable response. When
    /// every server fails the answer is empty.
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
        servers: &[SocketAddr],
    ) -> UpstreamAnswer;

    fn transport(&self) -> TransportMode;
}
