//! Wire codec boundary. Everything below this module speaks hickory types;
//! everything above it speaks the domain record model.

pub mod record_map;
pub mod record_type_map;
pub mod request;
pub mod response;

pub use record_map::RecordMapper;
pub use record_type_map::RecordTypeMapper;
pub use request::{decode_query, DecodeOutcome, IncomingQuery, Question};
pub use response::{encode_error, encode_response};
