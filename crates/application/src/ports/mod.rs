mod access_control_port;
mod cache_maintenance_port;
mod clock;
mod dns_resolver;
mod response_cache_port;
mod upstream_port;

pub use access_control_port::AccessControlPort;
pub use cache_maintenance_port::{CacheMaintenancePort, SweepOutcome};
pub use clock::{Clock, SystemClock};
pub use dns_resolver::{DnsResolver, Resolution};
pub use response_cache_port::{CachedAnswer, ResponseCachePort};
pub use upstream_port::{UpstreamAnswer, UpstreamPort};

// Re-export for convenience
pub use jsx_dns_domain::DnsQuery;
