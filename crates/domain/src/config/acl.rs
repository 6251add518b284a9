use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AclConfig {
    #[serde(default = "default_deny_domain_file")]
    pub deny_domain_file: String,

    #[serde(default = "default_deny_regex_file")]
    pub deny_regex_file: String,
}

impl Default for AclConfig {
    fn default() -> Self {
        Self {
            deny_domain_file: default_deny_domain_file(),
            deny_regex_file: default_deny_regex_file(),
        }
    }
}

fn default_deny_domain_file() -> String {
    "acl/deny-domain".to_string()
}

fn default_deny_regex_file() -> String {
    "acl/deny-regex".to_string()
}
