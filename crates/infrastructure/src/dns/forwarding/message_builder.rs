//! DNS query message construction using `hickory-proto`.

use crate::dns::codec::record_map::to_name;
use crate::dns::codec::response::serialize_message;
use crate::dns::codec::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::DNSClass;
use jsx_dns_domain::{DomainError, RecordType};

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds a recursive query with a random id and a single question.
    ///
    /// Returns the id alongside the wire bytes so the response can be
    /// matched against it.
    pub fn build_query_with_id(
        domain: &str,
        record_type: RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let mut query = Query::new();
        query.set_name(to_name(domain)?);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = serialize_message(&message)?;
        Ok((id, bytes))
    }
}
