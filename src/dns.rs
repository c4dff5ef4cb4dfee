use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use worker::*;

use crate::config::Config;
use crate::ip::IpUtils;

// Constants for better maintainability
const CONTENT_TYPE_JSON: &str = "application/json";
const DNS_RECORDS_PATH: &str = "dns_records";

/// Content validation predicate bound to a record type
pub type Validator = fn(&str) -> bool;

/// DNS record types supported by this implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    /// IPv4 address record
    A,
    /// IPv6 address record
    AAAA,
    /// Canonical name (alias) record
    CNAME,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
        }
    }

    /// Returns the content validator for this record type
    pub fn validator(self) -> Validator {
        match self {
            RecordType::A => IpUtils::is_ipv4,
            RecordType::AAAA => IpUtils::is_ipv6,
            RecordType::CNAME => is_non_empty,
        }
    }

    pub fn is_valid_content(self, content: &str) -> bool {
        (self.validator())(content)
    }
}

fn is_non_empty(content: &str) -> bool {
    !content.is_empty()
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            other => Err(format!("unsupported record type: {other}")),
        }
    }
}

/// Cloudflare API error structure
#[derive(Deserialize, Debug, Clone)]
pub struct ApiError {
    pub code: u32,
    pub message: String,
}

/// Joins provider error entries into a single log-friendly line
pub fn describe_errors(errors: Option<&[ApiError]>) -> String {
    match errors {
        Some(errors) if !errors.is_empty() => errors
            .iter()
            .map(|e| format!("[{}] {}", e.code, e.message))
            .collect::<Vec<_>>()
            .join("; "),
        _ => "provider reported failure".to_string(),
    }
}

/// Cloudflare DNS record structure
#[derive(Deserialize, Debug, Clone)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    pub content: String,
    /// Raw provider type, kept as text so foreign types can be reported
    #[serde(rename = "type")]
    pub record_type: String,
}

/// Cloudflare API response for listing DNS records
#[derive(Deserialize, Debug)]
pub struct ListDnsResponse {
    pub success: bool,
    pub result: Option<Vec<DnsRecord>>,
    pub errors: Option<Vec<ApiError>>,
}

/// Cloudflare API response for updating DNS records
#[derive(Deserialize, Debug)]
pub struct UpdateDnsResponse {
    pub success: bool,
    pub errors: Option<Vec<ApiError>>,
}

/// Body of the record overwrite request
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UpdateDnsRecord {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub content: String,
    pub proxied: bool,
}

impl UpdateDnsRecord {
    /// Builds an unproxied overwrite of `name` with `content`
    pub fn new(record_type: RecordType, name: &str, content: &str) -> Self {
        Self {
            record_type,
            name: name.to_string(),
            content: content.to_string(),
            proxied: false,
        }
    }
}

/// Zone-scoped DNS record operations used by the reconciler
#[async_trait(?Send)]
pub trait ZoneApi {
    /// Lists records in the zone matching `name` and `record_type`
    async fn list_records(&self, name: &str, record_type: RecordType) -> Result<ListDnsResponse>;

    /// Overwrites record `record_id` with `record`
    async fn update_record(
        &self,
        record_id: &str,
        record: &UpdateDnsRecord,
    ) -> Result<UpdateDnsResponse>;
}

/// Cloudflare v4 API client bound to a single zone
pub struct CloudflareClient {
    api_base: String,
    zone_id: String,
    token: String,
}

impl CloudflareClient {
    /// Create a new client for the configured zone
    pub fn new(config: &Config) -> Self {
        Self {
            api_base: config.cf_api_base.clone(),
            zone_id: config.cf_zone_id.clone(),
            token: config.cf_token.clone(),
        }
    }

    /// Only PUT carries a JSON body; GET requests never send one
    fn allows_body(method: &Method) -> bool {
        matches!(method, Method::Put)
    }

    /// Build the record endpoint URL for a path suffix and optional query
    fn records_url(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<Url> {
        let raw = format!(
            "{}/zones/{}/{}{}",
            self.api_base, self.zone_id, DNS_RECORDS_PATH, path
        );
        let mut url = Url::parse(&raw).map_err(|e| Error::RustError(e.to_string()))?;

        if let Some(pairs) = query {
            url.query_pairs_mut().extend_pairs(pairs.iter());
        }

        Ok(url)
    }

    /// Make an authenticated API request to Cloudflare
    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize + ?Sized,
    {
        let url = self.records_url(path, query)?;

        let mut init = RequestInit::new();
        let send_body = Self::allows_body(&method);
        init.with_method(method);

        if let (true, Some(body_data)) = (send_body, body) {
            init.with_body(Some(serde_json::to_string(body_data)?.into()));
        }

        let mut req = Request::new_with_init(url.as_str(), &init)?;
        req.headers_mut()?
            .set("Authorization", &format!("Bearer {}", self.token))?;
        req.headers_mut()?.set("Content-Type", CONTENT_TYPE_JSON)?;

        let mut resp = Fetch::Request(req).send().await?;
        let response: T = resp.json().await?;
        Ok(response)
    }
}

#[async_trait(?Send)]
impl ZoneApi for CloudflareClient {
    async fn list_records(&self, name: &str, record_type: RecordType) -> Result<ListDnsResponse> {
        let query = [("name", name), ("type", record_type.as_str())];
        self.request::<ListDnsResponse, ()>(Method::Get, "", Some(query.as_slice()), None)
            .await
    }

    async fn update_record(
        &self,
        record_id: &str,
        record: &UpdateDnsRecord,
    ) -> Result<UpdateDnsResponse> {
        let path = format!("/{record_id}");
        self.request(Method::Put, &path, None, Some(record)).await
    }
}
