use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZonesConfig {
    /// Directory holding one `<apex>.json` file per zone.
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Apexes whose unmatched subdomains go to the glue nameservers.
    /// When absent every loaded zone is delegated.
    #[serde(default)]
    pub delegated: Option<Vec<String>>,
}

impl Default for ZonesConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            delegated: None,
        }
    }
}

fn default_directory() -> String {
    "db".to_string()
}
