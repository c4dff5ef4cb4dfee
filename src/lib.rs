use worker::*;

// Module declarations
mod auth;
mod config;
mod dns;
mod error;
mod ip;
mod request;
mod response;
mod service;

// Re-export public APIs
pub use auth::{AuthUtils, HEADER_VERIFY_TOKEN};
pub use config::Config;
pub use dns::{CloudflareClient, DnsRecord, RecordType, UpdateDnsRecord, ZoneApi};
pub use error::DnsError;
pub use ip::IpUtils;
pub use request::UpdateRequest;
pub use response::ResponseUtils;
pub use service::{DnsUpdateService, UpdateOutcome};

/// Main request handler
pub async fn handler(req: Request, env: Env) -> Result<Response> {
    // Extract configuration
    let config = Config::from_env(&env)?;

    let presented_token = req.headers().get(HEADER_VERIFY_TOKEN)?;
    let url = req.url()?;
    let client = CloudflareClient::new(&config);

    let result = DnsUpdateService::handle(
        &client,
        config.verify_token.as_deref(),
        presented_token.as_deref(),
        &url,
    )
    .await;

    match result {
        Ok(outcome) => {
            console_log!("DNS update {:?}", outcome);
            ResponseUtils::empty(ResponseUtils::status_for_outcome(&outcome))
        }
        Err(DnsError::Transport(e)) => {
            // Network faults are not mapped; the runtime answers them
            console_error!("DNS provider request failed: {}", e);
            Err(e)
        }
        Err(e) => {
            console_warn!("DNS update rejected: {}", e);
            ResponseUtils::empty(ResponseUtils::status_for_error(&e))
        }
    }
}

/// Cloudflare Workers entry point
#[event(fetch)]
pub async fn main(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    handler(req, env).await
}
