//! jsx-dns domain layer
pub mod config;
pub mod deny;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod zone;

pub use config::Config;
pub use deny::{DenyRedirect, SINKHOLE_TARGET, SINKHOLE_TTL};
pub use dns_query::DnsQuery;
pub use dns_record::{
    MxData, RecordData, RecordType, ResourceRecord, SoaData, SrvData, ZoneRecord,
};
pub use errors::DomainError;
pub use zone::{MatchStrength, Zone, ZoneConflict, ZoneMatch, ZoneSet};
