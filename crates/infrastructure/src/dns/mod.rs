pub mod cache;
pub mod cache_maintenance;
pub mod codec;
pub mod forwarding;
pub mod server;
pub mod transport;

pub use cache::{CacheEntry, CacheKey, CachePolicy, ResponseCache};
pub use cache_maintenance::ResponseCacheMaintenance;
pub use forwarding::UpstreamForwarder;
pub use server::DnsServerHandler;
