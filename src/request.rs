use worker::Url;

use crate::dns::RecordType;
use crate::error::DnsError;

// Constants
const PARAM_DOMAIN: &str = "domain";
const PARAM_TYPE: &str = "type";
const PARAM_CONTENT: &str = "content";

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Validated update request parsed from the query string
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    /// Fully qualified record name, lower case
    pub domain: String,
    pub record_type: RecordType,
    /// Desired record content, already checked against the type's validator
    pub content: String,
}

impl UpdateRequest {
    /// Parse and validate the `domain`, `type` and `content` query parameters.
    ///
    /// Fields are checked in that order and the first failure aborts the parse.
    pub fn from_url(url: &Url) -> Result<Self, DnsError> {
        let domain = Self::query_param(url, PARAM_DOMAIN)
            .ok_or_else(|| DnsError::invalid_input("domain parameter required"))?
            .to_ascii_lowercase();
        if !Self::is_valid_domain(&domain) {
            return Err(DnsError::invalid_input(format!("invalid domain: {domain}")));
        }

        let record_type = Self::query_param(url, PARAM_TYPE)
            .ok_or_else(|| DnsError::invalid_input("type parameter required"))?
            .parse::<RecordType>()
            .map_err(DnsError::InvalidInput)?;

        let content = Self::query_param(url, PARAM_CONTENT)
            .ok_or_else(|| DnsError::invalid_input("content parameter required"))?;
        if !record_type.is_valid_content(&content) {
            return Err(DnsError::invalid_input(format!(
                "invalid {record_type} content: {content}"
            )));
        }

        Ok(Self {
            domain,
            record_type,
            content,
        })
    }

    /// First occurrence of `name`, trimmed; blank values count as absent
    fn query_param(url: &Url, name: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Validates that the domain is a plausible multi-label hostname
    pub fn is_valid_domain(domain: &str) -> bool {
        if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
            return false;
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || !labels.iter().all(|label| Self::is_valid_label(label)) {
            return false;
        }

        // A purely numeric TLD means an address literal, not a hostname
        labels
            .last()
            .is_some_and(|tld| !tld.chars().all(|c| c.is_ascii_digit()))
    }

    fn is_valid_label(label: &str) -> bool {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}
