mod dns;

pub use dns::{DnsServices, SharedResources};
