use serde::{Deserialize, Serialize};

use crate::dns_record::{RecordData, ResourceRecord, SoaData};

/// SOA returned in the authority section of static answers for zones that
/// do not define their own.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorityConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default = "default_mname")]
    pub mname: String,

    #[serde(default = "default_rname")]
    pub rname: String,

    /// Fixed serial. When absent the serial is derived from the startup time.
    #[serde(default)]
    pub serial: Option<u32>,

    #[serde(default = "default_refresh")]
    pub refresh: u32,

    #[serde(default = "default_retry")]
    pub retry: u32,

    #[serde(default = "default_expire")]
    pub expire: u32,

    #[serde(default = "default_minimum")]
    pub minimum: u32,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            ttl: default_ttl(),
            mname: default_mname(),
            rname: default_rname(),
            serial: None,
            refresh: default_refresh(),
            retry: default_retry(),
            expire: default_expire(),
            minimum: default_minimum(),
        }
    }
}

impl AuthorityConfig {
    pub fn to_record(&self, startup_unix_secs: u64) -> ResourceRecord {
        let serial = self
            .serial
            .unwrap_or((startup_unix_secs / 10).min(u32::MAX as u64) as u32);

        ResourceRecord::new(
            self.name.as_str(),
            RecordData::SOA(SoaData {
                mname: self.mname.clone(),
                rname: self.rname.clone(),
                serial,
                refresh: self.refresh,
                retry: self.retry,
                expire: self.expire,
                minimum: self.minimum,
            }),
            self.ttl,
        )
    }
}

fn default_name() -> String {
    "jp".to_string()
}

fn default_ttl() -> u32 {
    1200
}

fn default_mname() -> String {
    "z.dns.jp".to_string()
}

fn default_rname() -> String {
    "root.dns.jp".to_string()
}

fn default_refresh() -> u32 {
    3600
}

fn default_retry() -> u32 {
    900
}

fn default_expire() -> u32 {
    1_814_400
}

fn default_minimum() -> u32 {
    900
}
