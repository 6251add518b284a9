use fancy_regex::Regex;
use jsx_dns_application::ports::AccessControlPort;
use jsx_dns_domain::DomainError;

/// One deny-list entry. Both kinds match anywhere in the name.
#[derive(Debug, Clone)]
pub enum DenyRule {
    /// A deny-domain token, matched as a loose pattern.
    Domain { source: String, pattern: Regex },
    Regex(Regex),
}

impl DenyRule {
    /// Tokens are tried as patterns first, so `ads.` also matches `adsX`.
    /// A token that is not a valid pattern is matched literally instead.
    pub fn domain(token: &str) -> Result<Self, DomainError> {
        let pattern = Regex::new(token)
            .or_else(|_| Regex::new(&fancy_regex::escape(token)))
            .map_err(|e| DomainError::AclLoad(format!("Invalid deny token '{}': {}", token, e)))?;

        Ok(Self::Domain {
            source: token.to_string(),
            pattern,
        })
    }

    pub fn regex(expression: &str) -> Result<Self, DomainError> {
        Regex::new(expression)
            .map(Self::Regex)
            .map_err(|e| {
                DomainError::AclLoad(format!("Invalid deny regex '{}': {}", expression, e))
            })
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            Self::Domain { pattern, .. } | Self::Regex(pattern) => {
                pattern.is_match(name).unwrap_or(false)
            }
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Self::Domain { source, .. } => source,
            Self::Regex(pattern) => pattern.as_str(),
        }
    }
}

/// Ordered deny rules; the first match wins.
#[derive(Debug, Clone, Default)]
pub struct DenyList {
    rules: Vec<DenyRule>,
}

impl DenyList {
    pub fn new(rules: Vec<DenyRule>) -> Self {
        Self { rules }
    }

    pub fn first_match(&self, name: &str) -> Option<&DenyRule> {
        self.rules.iter().find(|rule| rule.is_match(name))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl AccessControlPort for DenyList {
    fn is_denied(&self, name: &str) -> bool {
        self.first_match(name).is_some()
    }
}
