use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use jsx_dns_application::ports::UpstreamAnswer;
use jsx_dns_domain::{RecordData, ResourceRecord, SoaData};
use std::str::FromStr;

pub fn a(name: &str, ip: [u8; 4], ttl: u32) -> ResourceRecord {
    ResourceRecord::new(name, RecordData::A(ip.into()), ttl)
}

pub fn cname(name: &str, target: &str, ttl: u32) -> ResourceRecord {
    ResourceRecord::new(name, RecordData::CNAME(target.to_string()), ttl)
}

pub fn soa(zone: &str) -> ResourceRecord {
    ResourceRecord::new(
        zone,
        RecordData::SOA(SoaData {
            mname: "z.dns.jp".to_string(),
            rname: "root.dns.jp".to_string(),
            serial: 1,
            refresh: 3600,
            retry: 900,
            expire: 1_814_400,
            minimum: 900,
        }),
        1200,
    )
}

pub fn answer(records: Vec<ResourceRecord>) -> UpstreamAnswer {
    UpstreamAnswer {
        answers: records,
        authorities: None,
    }
}

/// Client query bytes as a stub resolver would send them.
pub fn client_query(id: u16, name: &str, record_type: HickoryRecordType) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(Name::from_str(name).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

/// Response code from the low nibble of the fourth header byte.
pub fn rcode_of(response: &[u8]) -> u8 {
    response[3] & 0x0f
}

pub fn recursion_available(response: &[u8]) -> bool {
    response[3] & 0x80 == 0x80
}
