use crate::ports::{DnsResolver, Resolution};
use jsx_dns_domain::DnsQuery;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, query: &DnsQuery) -> Resolution {
        let start = Instant::now();

        let resolution = self.resolver.resolve(query).await;

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            answers = resolution.answers.len(),
            authorities = resolution.authorities.len(),
            status = resolution.response_status(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query handled"
        );

        resolution
    }
}
