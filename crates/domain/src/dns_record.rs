mod record;
mod record_data;
mod record_type;

pub use record::{ResourceRecord, ZoneRecord};
pub use record_data::{MxData, RecordData, SoaData, SrvData};
pub use record_type::RecordType;
