use async_trait::async_trait;
use jsx_dns_domain::{DnsQuery, ResourceRecord};

/// Final answer set for one client question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
}

impl Resolution {
    /// An empty answer set is reported to the client as a name error.
    pub fn is_negative(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn response_status(&self) -> &'static str {
        if self.is_negative() {
            "NXDOMAIN"
        } else {
            "NOERROR"
        }
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Never fails: loops, upstream outages and deadlines degrade to
    /// whatever answers were gathered.
    async fn resolve(&self, query: &DnsQuery) -> Resolution;
}
