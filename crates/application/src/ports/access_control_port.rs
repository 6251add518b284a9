/// Deny-list consulted before any other resolution step.
pub trait AccessControlPort: Send + Sync {
    fn is_denied(&self, name: &str) -> bool;
}
