use worker::Url;

use crate::auth::AuthUtils;
use crate::dns::{UpdateDnsRecord, ZoneApi, describe_errors};
use crate::error::DnsError;
use crate::request::UpdateRequest;

/// Successful end states of a DNS update request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record already held the requested content; nothing was sent
    Unchanged,
    /// The record was overwritten with the requested content
    Updated,
}

/// DNS update service
pub struct DnsUpdateService;

impl DnsUpdateService {
    /// Runs one webhook invocation: auth, validation, lookup and reconcile.
    ///
    /// The token check happens before the query string is even looked at.
    pub async fn handle<A>(
        api: &A,
        verify_token: Option<&str>,
        presented_token: Option<&str>,
        url: &Url,
    ) -> Result<UpdateOutcome, DnsError>
    where
        A: ZoneApi + ?Sized,
    {
        if !AuthUtils::check_auth_with_token(presented_token, verify_token) {
            return Err(DnsError::Unauthorized);
        }

        let request = UpdateRequest::from_url(url)?;
        Self::reconcile(api, &request).await
    }

    /// Compares the zone's current record with the request and updates it if needed
    pub async fn reconcile<A>(api: &A, request: &UpdateRequest) -> Result<UpdateOutcome, DnsError>
    where
        A: ZoneApi + ?Sized,
    {
        let lookup = api
            .list_records(&request.domain, request.record_type)
            .await?;

        if !lookup.success {
            return Err(DnsError::QueryFailed(describe_errors(
                lookup.errors.as_deref(),
            )));
        }

        // The provider owns uniqueness; the first match is authoritative
        let Some(record) = lookup.result.unwrap_or_default().into_iter().next() else {
            return Err(DnsError::NotFound(request.domain.clone()));
        };

        if record.name != request.domain {
            return Err(DnsError::NotFound(request.domain.clone()));
        }

        if record.record_type != request.record_type.as_str() {
            return Err(DnsError::TypeMismatch {
                expected: request.record_type,
                actual: record.record_type,
            });
        }

        if record.content == request.content {
            return Ok(UpdateOutcome::Unchanged);
        }

        let body = UpdateDnsRecord::new(request.record_type, &request.domain, &request.content);
        let update = api.update_record(&record.id, &body).await?;

        if update.success {
            Ok(UpdateOutcome::Updated)
        } else {
            Err(DnsError::UpdateFailed(describe_errors(
                update.errors.as_deref(),
            )))
        }
    }
}
