#![allow(dead_code)]

use async_trait::async_trait;
use jsx_dns_application::ports::{
    AccessControlPort, CachedAnswer, Clock, DnsResolver, Resolution, ResponseCachePort,
    UpstreamAnswer,
};
use jsx_dns_domain::{DnsQuery, RecordType};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};
use std::time::Duration;

/// Denies any name containing one of the tokens.
#[derive(Default)]
pub struct MockAccessControl {
    tokens: Vec<String>,
}

impl MockAccessControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn denying(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl AccessControlPort for MockAccessControl {
    fn is_denied(&self, name: &str) -> bool {
        self.tokens.iter().any(|t| name.contains(t.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheCall {
    pub name: String,
    pub record_type: RecordType,
    pub servers: Vec<SocketAddr>,
}

/// Cache stand-in that records every call and answers from a fixed table.
#[derive(Default)]
pub struct MockResponseCache {
    responses: RwLock<HashMap<(String, RecordType), UpstreamAnswer>>,
    calls: Mutex<Vec<CacheCall>>,
    delay: Option<Duration>,
}

impl MockResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn set_response(&self, name: &str, record_type: RecordType, answer: UpstreamAnswer) {
        self.responses
            .write()
            .unwrap()
            .insert((name.to_string(), record_type), answer);
    }

    pub fn calls(&self) -> Vec<CacheCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResponseCachePort for MockResponseCache {
    async fn get_or_fill(
        &self,
        name: &str,
        record_type: RecordType,
        servers: &[SocketAddr],
    ) -> CachedAnswer {
        self.calls.lock().unwrap().push(CacheCall {
            name: name.to_string(),
            record_type,
            servers: servers.to_vec(),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let answer = self
            .responses
            .read()
            .unwrap()
            .get(&(name.to_string(), record_type))
            .cloned()
            .unwrap_or_default();

        CachedAnswer {
            answers: answer.answers,
            authorities: answer.authorities,
            cache_hit: false,
        }
    }

    fn entry_count(&self) -> usize {
        self.responses.read().unwrap().len()
    }
}

#[derive(Debug, Default)]
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

#[derive(Default)]
pub struct MockDnsResolver {
    responses: RwLock<HashMap<String, Resolution>>,
    queries: Mutex<Vec<DnsQuery>>,
}

impl MockDnsResolver {
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
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Resolution {
        self.queries.lock().unwrap().push(query.clone());
        self.responses
            .read()
            .unwrap()
            .get(&*query.domain)
            .cloned()
            .unwrap_or_default()
    }
}
