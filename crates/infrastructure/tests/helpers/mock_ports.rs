use async_trait::async_trait;
use jsx_dns_application::ports::{Clock, DnsResolver, Resolution, UpstreamAnswer, UpstreamPort};
use jsx_dns_domain::config::TransportMode;
use jsx_dns_domain::{DnsQuery, RecordType};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};

pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn at(secs: u64) -> Self {
        Self {
            now: AtomicU64::new(secs),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamCall {
    pub name: String,
    pub record_type: RecordType,
    pub servers: Vec<SocketAddr>,
}

/// Scripted upstream keyed by queried name. Unknown names get an empty
/// answer.
#[derive(Default)]
pub struct MockUpstream {
    answers: RwLock<HashMap<String, UpstreamAnswer>>,
    calls: Mutex<Vec<UpstreamCall>>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, name: &str, answer: UpstreamAnswer) {
        self.answers
            .write()
            .unwrap()
            .insert(name.to_string(), answer);
    }

    pub fn calls(&self) -> Vec<UpstreamCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl UpstreamPort for MockUpstream {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
        servers: &[SocketAddr],
    ) -> UpstreamAnswer {
        self.calls.lock().unwrap().push(UpstreamCall {
            name: name.to_string(),
            record_type,
            servers: servers.to_vec(),
        });
        self.answers
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    fn transport(&self) -> TransportMode {
        TransportMode::Udp
    }
}

/// Resolver returning a fixed resolution per domain.
#[derive(Default)]
pub struct StubResolver {
    responses: RwLock<HashMap<String, Resolution>>,
    queries: Mutex<Vec<DnsQuery>>,
}

impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, resolution: Resolution) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), resolution);
    }

    pub fn queries(&self) -> Vec<DnsQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for StubResolver {
    async fn resolve(&self, query: &DnsQuery) -> Resolution {
        self.queries.lock().unwrap().push(query.clone());
        self.responses
            .read()
            .unwrap()
            .get(query.domain.as_ref())
            .cloned()
            .unwrap_or_default()
    }
}
