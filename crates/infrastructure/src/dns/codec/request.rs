use super::record_map::name_text;
use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, Query};
use jsx_dns_domain::{DnsQuery, RecordType};

const HEADER_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Lowercased, without the trailing root dot.
    pub name: String,
    pub record_type: RecordType,
}

impl Question {
    pub fn to_query(&self) -> DnsQuery {
        DnsQuery::new(self.name.as_str(), self.record_type)
    }
}

/// A client message that decoded cleanly.
#[derive(Debug, Clone)]
pub struct IncomingQuery {
    pub id: u16,
    pub questions: Vec<Question>,
    /// Question section exactly as received, echoed back in the response.
    pub raw_questions: Vec<Query>,
}

impl IncomingQuery {
    /// Only the first question is answered.
    pub fn primary(&self) -> Option<&Question> {
        self.questions.first()
    }
}

#[derive(Debug, Clone)]
pub enum DecodeOutcome {
    Query(IncomingQuery),
    /// Undecodable, but the header is intact so the id can be echoed.
    Malformed { id: u16, reason: String },
    /// Too short to carry a header; nothing to answer.
    Dropped,
}

pub fn decode_query(bytes: &[u8]) -> DecodeOutcome {
    if bytes.len() < HEADER_LEN {
        return DecodeOutcome::Dropped;
    }

    let message = match Message::from_vec(bytes) {
        Ok(message) => message,
        Err(e) => {
            return DecodeOutcome::Malformed {
                id: u16::from_be_bytes([bytes[0], bytes[1]]),
                reason: e.to_string(),
            }
        }
    };

    let raw_questions = message.queries().to_vec();

    let questions = raw_questions
        .iter()
        .map(|query| Question {
            name: name_text(query.name()).to_ascii_lowercase(),
            record_type: RecordTypeMapper::from_hickory(query.query_type()),
        })
        .collect();

    DecodeOutcome::Query(IncomingQuery {
        id: message.id(),
        questions,
        raw_questions,
    })
}
