mod acl;
mod authority;
mod cache;
mod errors;
mod logging;
mod resolution;
mod root;
mod server;
mod upstream;
mod zones;

pub use acl::AclConfig;
pub use authority::AuthorityConfig;
pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolution::ResolutionConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::{parse_upstream_addr, TransportMode, UpstreamConfig};
pub use zones::ZonesConfig;
