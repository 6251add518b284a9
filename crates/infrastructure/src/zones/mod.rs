pub mod errors;
pub mod loader;

pub use errors::ZoneError;
pub use loader::{ZoneFileEntry, ZoneLoader};
