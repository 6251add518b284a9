use jsx_dns_domain::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("Failed to read zone directory {path}: {reason}")]
    ReadDir { path: String, reason: String },

    #[error("Failed to read zone file {path}: {reason}")]
    ReadFile { path: String, reason: String },

    #[error("Invalid zone file {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid record '{name}' in {path}: {source}")]
    Record {
        path: String,
        name: String,
        #[source]
        source: DomainError,
    },
}

impl From<ZoneError> for DomainError {
    fn from(e: ZoneError) -> Self {
        DomainError::ZoneLoad(e.to_string())
    }
}
