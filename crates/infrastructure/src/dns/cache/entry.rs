use jsx_dns_domain::ResourceRecord;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub answers: Vec<ResourceRecord>,
    pub authorities: Option<Vec<ResourceRecord>>,
    /// Unix seconds. The entry is live while `now <= expires_at`.
    pub expires_at: u64,
}

impl CacheEntry {
    #[inline]
    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at < now
    }
}
