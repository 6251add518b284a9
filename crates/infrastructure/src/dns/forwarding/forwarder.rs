use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::create_transport;
use async_trait::async_trait;
use jsx_dns_application::ports::{UpstreamAnswer, UpstreamPort};
use jsx_dns_domain::config::TransportMode;
use jsx_dns_domain::{DnsQuery, DomainError, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Sends each query to the given servers in order over one fixed transport,
/// stopping at the first decodable response.
pub struct UpstreamForwarder {
    mode: TransportMode,
    timeout: Duration,
}

impl UpstreamForwarder {
    pub fn new(mode: TransportMode, timeout: Duration) -> Self {
        Self { mode, timeout }
    }

    async fn query_server(
        &self,
        server: SocketAddr,
        id: u16,
        request_bytes: &[u8],
    ) -> Result<UpstreamAnswer, DomainError> {
        let transport = create_transport(self.mode, server);
        let response = transport.send(request_bytes, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes, id)?;

        debug!(
            server = %server,
            protocol = response.protocol_used,
            rcode = ?parsed.rcode,
            answers = parsed.answer.answers.len(),
            "Upstream responded"
        );

        Ok(parsed.answer)
    }
}

#[async_trait]
impl UpstreamPort for UpstreamForwarder {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
        servers: &[SocketAddr],
    ) -> UpstreamAnswer {
        let query = DnsQuery::new(name, record_type);

        let (id, request_bytes) = match MessageBuilder::build_query_with_id(name, record_type) {
            Ok(built) => built,
            Err(e) => {
                warn!(query = %query, error = %e, "Cannot build upstream query");
                return UpstreamAnswer::default();
            }
        };

        for (index, server) in servers.iter().enumerate() {
            match self.query_server(*server, id, &request_bytes).await {
                Ok(answer) => return answer,
                Err(e) => {
                    warn!(
                        server = %server,
                        protocol = %self.mode,
                        query = %query,
                        error = %e,
                        position = index,
                        "Failing over"
                    );
                }
            }
        }

        warn!(query = %query, servers = servers.len(), "All upstream servers failed");
        UpstreamAnswer::default()
    }

    fn transport(&self) -> TransportMode {
        self.mode
    }
}
