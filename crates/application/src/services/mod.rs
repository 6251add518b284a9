mod access_log;
mod nameserver;
mod resolution_context;

pub use access_log::AccessLog;
pub use nameserver::{Nameserver, NameserverLimits};
pub use resolution_context::ResolutionContext;
