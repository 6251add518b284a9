use crate::dns::codec::RecordMapper;
use hickory_proto::op::{Message, ResponseCode};
use jsx_dns_application::ports::UpstreamAnswer;
use jsx_dns_domain::DomainError;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub rcode: ResponseCode,
    pub answer: UpstreamAnswer,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes an upstream response and checks it answers query `expected_id`.
    ///
    /// Record kinds outside the domain model are kept as raw RDATA. An empty
    /// authority section is reported as `None`.
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.id() != expected_id {
            return Err(DomainError::ResponseIdMismatch {
                expected: expected_id,
                received: message.id(),
            });
        }

        let answers = RecordMapper::from_hickory_all(message.answers());
        let authorities = RecordMapper::from_hickory_all(message.name_servers());

        debug!(
            rcode = ?message.response_code(),
            answers = answers.len(),
            authority = authorities.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            rcode: message.response_code(),
            answer: UpstreamAnswer {
                answers,
                authorities: (!authorities.is_empty()).then_some(authorities),
            },
        })
    }
}
