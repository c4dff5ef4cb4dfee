use worker::*;

use crate::error::DnsError;
use crate::service::UpdateOutcome;

// HTTP status codes
pub const HTTP_NO_CONTENT: u16 = 204;
pub const HTTP_BAD_REQUEST: u16 = 400;
pub const HTTP_UNAUTHORIZED: u16 = 401;
pub const HTTP_NOT_FOUND: u16 = 404;
pub const HTTP_BAD_GATEWAY: u16 = 502;

/// Response formatting utilities
pub struct ResponseUtils;

impl ResponseUtils {
    /// Creates an empty-bodied response carrying only a status code
    pub fn empty(status: u16) -> Result<Response> {
        Ok(Response::empty()?.with_status(status))
    }

    /// Both successful outcomes answer 204; callers cannot tell them apart
    pub fn status_for_outcome(outcome: &UpdateOutcome) -> u16 {
        match outcome {
            UpdateOutcome::Unchanged | UpdateOutcome::Updated => HTTP_NO_CONTENT,
        }
    }

    /// Maps a terminal error to its fixed status code
    pub fn status_for_error(err: &DnsError) -> u16 {
        match err {
            DnsError::Unauthorized => HTTP_UNAUTHORIZED,
            DnsError::NotFound(_) => HTTP_NOT_FOUND,
            DnsError::InvalidInput(_)
            | DnsError::TypeMismatch { .. }
            | DnsError::QueryFailed(_)
            | DnsError::UpdateFailed(_) => HTTP_BAD_REQUEST,
            // Normally re-raised to the runtime before reaching the mapper
            DnsError::Transport(_) => HTTP_BAD_GATEWAY,
        }
    }

    pub fn status_for(result: &std::result::Result<UpdateOutcome, DnsError>) -> u16 {
        match result {
            Ok(outcome) => Self::status_for_outcome(outcome),
            Err(err) => Self::status_for_error(err),
        }
    }
}
