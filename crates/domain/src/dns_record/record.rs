use super::{RecordData, RecordType};
use std::sync::Arc;

/// A record as stored under a zone label. The owner name is attached at
/// lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    pub data: RecordData,

    pub ttl: u32,
}

impl ZoneRecord {
    pub fn new(data: RecordData, ttl: u32) -> Self {
        Self { data, ttl }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    pub fn named(&self, name: &Arc<str>) -> ResourceRecord {
        ResourceRecord {
            name: Arc::clone(name),
            data: self.data.clone(),
            ttl: self.ttl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Arc<str>,

    pub data: RecordData,

    pub ttl: u32,
}

impl ResourceRecord {
    pub fn new(name: impl Into<Arc<str>>, data: RecordData, ttl: u32) -> Self {
        Self {
            name: name.into(),
            data,
            ttl,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.record_type() == record_type
    }
}
