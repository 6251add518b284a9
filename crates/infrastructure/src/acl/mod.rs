pub mod deny_list;
pub mod loader;

pub use deny_list::{DenyList, DenyRule};
pub use loader::AclLoader;
