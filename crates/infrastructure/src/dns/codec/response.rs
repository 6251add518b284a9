use super::record_map::RecordMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use jsx_dns_domain::{DomainError, ResourceRecord};
use tracing::warn;

/// Builds the client response. Recursion-available and NOERROR are set only
/// when there is at least one answer; otherwise the response is NXDOMAIN.
pub fn encode_response(
    id: u16,
    questions: &[Query],
    answers: &[ResourceRecord],
    authorities: &[ResourceRecord],
) -> Result<Vec<u8>, DomainError> {
    let answers = to_wire(answers);
    let authorities = to_wire(authorities);
    let answered = !answers.is_empty();

    let mut message = Message::new(id, MessageType::Response, OpCode::Query);
    message.set_recursion_available(answered);
    message.set_response_code(if answered {
        ResponseCode::NoError
    } else {
        ResponseCode::NXDomain
    });
    message.add_queries(questions.iter().cloned());
    message.add_answers(answers);
    message.add_name_servers(authorities);

    serialize_message(&message)
}

/// Builds an empty response carrying only a response code.
pub fn encode_error(
    id: u16,
    questions: &[Query],
    code: ResponseCode,
) -> Result<Vec<u8>, DomainError> {
    let mut message = Message::new(id, MessageType::Response, OpCode::Query);
    message.set_response_code(code);
    message.add_queries(questions.iter().cloned());

    serialize_message(&message)
}

pub(crate) fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message.emit(&mut encoder).map_err(|e| {
        DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
    })?;

    Ok(buf)
}

fn to_wire(records: &[ResourceRecord]) -> Vec<Record> {
    records
        .iter()
        .filter_map(|record| match RecordMapper::to_hickory(record) {
            Ok(wire) => Some(wire),
            Err(e) => {
                warn!(name = %record.name, error = %e, "Skipping unencodable record");
                None
            }
        })
        .collect()
}
