use super::codec::{decode_query, encode_error, encode_response, DecodeOutcome};
use super::transport::framing::{read_with_length_prefix, send_with_length_prefix, FrameBuffer};
use hickory_proto::op::ResponseCode;
use jsx_dns_application::use_cases::HandleDnsQueryUseCase;
use jsx_dns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, warn};

/// Turns raw client messages into raw responses. Shared by the UDP and TCP
/// listeners.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns `None` when the message is too short to answer or the
    /// response cannot be encoded.
    pub async fn handle_raw(&self, request: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let encoded = match decode_query(request) {
            DecodeOutcome::Query(incoming) => match incoming.primary() {
                Some(question) => {
                    debug!(
                        domain = %question.name,
                        record_type = %question.record_type,
                        client = %client,
                        "DNS query received"
                    );
                    let resolution = self.use_case.execute(&question.to_query()).await;
                    encode_response(
                        incoming.id,
                        &incoming.raw_questions,
                        &resolution.answers,
                        &resolution.authorities,
                    )
                }
                None => encode_response(incoming.id, &incoming.raw_questions, &[], &[]),
            },
            DecodeOutcome::Malformed { id, reason } => {
                warn!(client = %client, error = %reason, "Undecodable DNS message");
                encode_error(id, &[], ResponseCode::NXDomain)
            }
            DecodeOutcome::Dropped => {
                debug!(client = %client, len = request.len(), "Dropping runt DNS message");
                return None;
            }
        };

        match encoded {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(client = %client, error = %e, "Failed to encode response");
                None
            }
        }
    }

    /// Serves exactly one length-prefixed message on `stream`, then closes
    /// it.
    pub async fn serve_tcp_connection<S>(
        &self,
        mut stream: S,
        client: SocketAddr,
    ) -> Result<(), DomainError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut frames = FrameBuffer::new();
        let request = read_with_length_prefix(&mut stream, &mut frames).await?;

        if let Some(response) = self.handle_raw(&request, client).await {
            send_with_length_prefix(&mut stream, &response).await?;
        }

        stream
            .shutdown()
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to close connection: {}", e)))
    }
}
