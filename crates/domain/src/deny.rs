use crate::dns_record::{RecordData, RecordType, ResourceRecord};

pub const SINKHOLE_TARGET: &str = "GITHUB.IO";
pub const SINKHOLE_TTL: u32 = 2_592_000;

/// Where a denied name is sent: resolution restarts at the sinkhole as an A
/// query, with an alias from the denied name already in the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyRedirect {
    pub name: &'static str,
    pub record_type: RecordType,
    pub seed: ResourceRecord,
}

impl DenyRedirect {
    pub fn for_name(denied: &str) -> Self {
        Self {
            name: SINKHOLE_TARGET,
            record_type: RecordType::A,
            seed: ResourceRecord::new(
                denied,
                RecordData::CNAME(SINKHOLE_TARGET.to_string()),
                SINKHOLE_TTL,
            ),
        }
    }
}
