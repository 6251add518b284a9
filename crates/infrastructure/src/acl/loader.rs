use super::deny_list::{DenyList, DenyRule};
use jsx_dns_domain::config::AclConfig;
use jsx_dns_domain::DomainError;
use std::path::Path;
use tracing::info;

/// Reads the deny-domain and deny-regex files. Blank lines are ignored.
pub struct AclLoader;

impl AclLoader {
    pub fn load(config: &AclConfig) -> Result<DenyList, DomainError> {
        Self::load_files(
            Path::new(&config.deny_domain_file),
            Path::new(&config.deny_regex_file),
        )
    }

    /// Domain tokens come first, then regexes, each in file order.
    pub fn load_files(domain_file: &Path, regex_file: &Path) -> Result<DenyList, DomainError> {
        let mut rules = Vec::new();

        let domains = read_lines(domain_file)?;
        let domain_count = domains.len();
        for token in domains {
            rules.push(DenyRule::domain(&token)?);
        }

        let regexes = read_lines(regex_file)?;
        let regex_count = regexes.len();
        for expression in regexes {
            rules.push(DenyRule::regex(&expression)?);
        }

        info!(
            domains = domain_count,
            regexes = regex_count,
            "Deny list loaded"
        );

        Ok(DenyList::new(rules))
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, DomainError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DomainError::AclLoad(format!("Failed to read {}: {}", path.display(), e))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
