#![allow(dead_code)]

use super::mock_ports::{ManualClock, MockAccessControl, MockResponseCache};
use jsx_dns_application::ports::UpstreamAnswer;
use jsx_dns_application::services::{AccessLog, Nameserver, NameserverLimits};
use jsx_dns_domain::{
    RecordData, RecordType, ResourceRecord, SoaData, Zone, ZoneRecord, ZoneSet,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

pub fn forwarders() -> Vec<SocketAddr> {
    vec![
        "8.8.8.8:53".parse().unwrap(),
        "8.8.4.4:53".parse().unwrap(),
    ]
}

pub fn glue() -> Vec<SocketAddr> {
    vec!["133.242.1.1:53".parse().unwrap()]
}

pub fn default_authority() -> ResourceRecord {
    ResourceRecord::new(
        "jp",
        RecordData::SOA(SoaData {
            mname: "z.dns.jp".to_string(),
            rname: "root.dns.jp".to_string(),
            serial: 170_000_000,
            refresh: 3600,
            retry: 900,
            expire: 1_814_400,
            minimum: 900,
        }),
        1200,
    )
}

pub fn a_record(name: &str, ip: [u8; 4], ttl: u32) -> ResourceRecord {
    ResourceRecord::new(name, RecordData::A(Ipv4Addr::from(ip)), ttl)
}

pub fn upstream(answers: Vec<ResourceRecord>) -> UpstreamAnswer {
    UpstreamAnswer {
        answers,
        authorities: None,
    }
}

fn insert(zone: &mut Zone, label: &str, record_type: RecordType, text: &str, ttl: u32) {
    let data = RecordData::parse(record_type, text).unwrap();
    zone.insert(label, ZoneRecord::new(data, ttl)).unwrap();
}

/// jsx.jp with an apex address, an external alias, an in-zone alias, mail
/// and a two-name alias loop.
pub fn jsx_zone() -> Zone {
    let mut zone = Zone::new("jsx.jp", default_authority(), "0.7.11");
    insert(&mut zone, "@", RecordType::A, "216.24.57.4", 300);
    insert(&mut zone, "@", RecordType::MX, "10 inbound-smtp.us-east-1.amazonaws.com", 300);
    insert(&mut zone, "cdn", RecordType::CNAME, "jobscale.github.io.", 300);
    insert(&mut zone, "www", RecordType::CNAME, "jsx.jp", 300);
    insert(&mut zone, "loop-a", RecordType::CNAME, "loop-b.jsx.jp", 60);
    insert(&mut zone, "loop-b", RecordType::CNAME, "loop-a.jsx.jp", 60);
    insert(&mut zone, "hop1", RecordType::CNAME, "hop2.jsx.jp", 60);
    insert(&mut zone, "hop2", RecordType::CNAME, "hop3.jsx.jp", 60);
    insert(&mut zone, "hop3", RecordType::A, "10.0.0.3", 60);
    insert(&mut zone, "*.dev", RecordType::A, "10.0.0.9", 60);
    zone
}

pub struct NameserverBuilder {
    zones: ZoneSet,
    acl: MockAccessControl,
    cache: Arc<MockResponseCache>,
    limits: NameserverLimits,
}

impl NameserverBuilder {
    pub fn new() -> Self {
        Self {
            zones: ZoneSet::new(vec![jsx_zone()]),
            acl: MockAccessControl::new(),
            cache: Arc::new(MockResponseCache::new()),
            limits: NameserverLimits::default(),
        }
    }

    pub fn with_zones(mut self, zones: ZoneSet) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_acl(mut self, acl: MockAccessControl) -> Self {
        self.acl = acl;
        self
    }

    pub fn with_cache(mut self, cache: Arc<MockResponseCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_limits(mut self, max_chase_depth: usize, timeout: Duration) -> Self {
        self.limits = NameserverLimits {
            max_chase_depth,
            resolution_timeout: timeout,
        };
        self
    }

    pub fn build(self) -> Nameserver {
        let access_log = Arc::new(AccessLog::new(
            Duration::from_secs(3600),
            Duration::from_secs(60),
            Arc::new(ManualClock::at(1_700_000_000)),
        ));
        Nameserver::new(
            Arc::new(self.zones),
            Arc::new(self.acl),
            self.cache,
            access_log,
            forwarders(),
            glue(),
        )
        .with_limits(self.limits)
    }
}

impl Default for NameserverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
