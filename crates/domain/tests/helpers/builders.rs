#![allow(dead_code)]
use jsx_dns_domain::{
    RecordData, RecordType, ResourceRecord, SoaData, Zone, ZoneRecord,
};
use std::net::Ipv4Addr;

pub fn default_authority() -> ResourceRecord {
    ResourceRecord::new(
        "jp",
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

pub fn a(ip: [u8; 4], ttl: u32) -> ZoneRecord {
    ZoneRecord::new(RecordData::A(Ipv4Addr::from(ip)), ttl)
}

pub fn cname(target: &str, ttl: u32) -> ZoneRecord {
    ZoneRecord::new(RecordData::CNAME(target.to_string()), ttl)
}

pub fn record(record_type: RecordType, text: &str, ttl: u32) -> ZoneRecord {
    ZoneRecord::new(RecordData::parse(record_type, text).unwrap(), ttl)
}

pub struct ZoneBuilder {
    zone: Zone,
}

impl ZoneBuilder {
    pub fn new(apex: &str) -> Self {
        Self {
            zone: Zone::new(apex, default_authority(), "0.0.0-test"),
        }
    }

    pub fn with(mut self, label: &str, record: ZoneRecord) -> Self {
        self.zone.insert(label, record).unwrap();
        self
    }

    pub fn build(self) -> Zone {
        self.zone
    }
}

/// The jsx.jp zone used across the zone tests.
pub fn jsx_zone() -> Zone {
    ZoneBuilder::new("jsx.jp")
        .with("@", a([216, 24, 57, 4], 300))
        .with("www", cname("jsx.jp", 300))
        .with("mail", record(RecordType::MX, "10 mx.jsx.jp", 300))
        .with("*.user", a([10, 0, 0, 1], 60))
        .with("*", a([10, 0, 0, 2], 60))
        .build()
}
