use jsx_dns_domain::config::CacheConfig;
use jsx_dns_domain::{RecordType, ResourceRecord};

/// Lifetime rules applied to upstream answers as they enter the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub a_record_ttl_floor: u32,
    pub negative_ttl: u32,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            a_record_ttl_floor: 1200,
            negative_ttl: 120,
        }
    }
}

impl CachePolicy {
    pub fn from_config(config: &CacheConfig) -> Self {
        Self {
            a_record_ttl_floor: config.a_record_ttl_floor,
            negative_ttl: config.negative_ttl,
        }
    }

    /// Raises A record TTLs to the floor and returns how long the answer
    /// set may be cached, in seconds.
    ///
    /// Without any A record the answer set is held for the negative window
    /// only, whatever the other TTLs say.
    pub fn apply(&self, answers: &mut [ResourceRecord]) -> u64 {
        let mut has_a = false;
        for record in answers.iter_mut() {
            if record.is_type(RecordType::A) {
                has_a = true;
                record.ttl = record.ttl.max(self.a_record_ttl_floor);
            }
        }

        if !has_a {
            return u64::from(self.negative_ttl);
        }

        answers
            .iter()
            .map(|record| record.ttl)
            .fold(self.a_record_ttl_floor, u32::max)
            .into()
    }
}
