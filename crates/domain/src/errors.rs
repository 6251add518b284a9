use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record data: {0}")]
    InvalidRecordData(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error with {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("Response id {received} does not match query id {expected}")]
    ResponseIdMismatch { expected: u16, received: u16 },

    #[error("Zone load error: {0}")]
    ZoneLoad(String),

    #[error("ACL load error: {0}")]
    AclLoad(String),

    #[error("Glue resolution failed: {0}")]
    GlueResolution(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
