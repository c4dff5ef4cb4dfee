use worker::*;

// Environment variable names
pub const ENV_VERIFY_TOKEN: &str = "VERIFY_TOKEN";
pub const ENV_CF_TOKEN: &str = "CF_TOKEN";
pub const ENV_CF_ZONE_ID: &str = "CF_ZONE_ID";
pub const ENV_CF_API_BASE: &str = "CF_API_BASE";

pub const DEFAULT_CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Application configuration extracted from environment variables
pub struct Config {
    /// Shared secret expected in the `X-Verify-Token` header
    pub verify_token: Option<String>,
    /// Cloudflare API token for DNS operations
    pub cf_token: String,
    /// Cloudflare zone ID where DNS records are managed
    pub cf_zone_id: String,
    /// Base URL of the Cloudflare v4 API, without trailing slash
    pub cf_api_base: String,
}

impl Config {
    /// Extract configuration from environment variables
    pub fn from_env(env: &Env) -> Result<Self> {
        let api_base = env
            .var(ENV_CF_API_BASE)
            .ok()
            .map(|v| v.to_string())
            .filter(|v| !v.trim().is_empty());

        Ok(Self {
            verify_token: env.secret(ENV_VERIFY_TOKEN).ok().map(|s| s.to_string()),
            cf_token: env.secret(ENV_CF_TOKEN)?.to_string(),
            cf_zone_id: env.var(ENV_CF_ZONE_ID)?.to_string(),
            cf_api_base: Self::normalize_api_base(api_base.as_deref()),
        })
    }

    /// Falls back to the public endpoint and strips trailing slashes
    pub fn normalize_api_base(api_base: Option<&str>) -> String {
        api_base
            .map(str::trim)
            .unwrap_or(DEFAULT_CF_API_BASE)
            .trim_end_matches('/')
            .to_string()
    }
}
