use thiserror::Error;

use crate::dns::RecordType;

/// Errors that terminate a DNS update request
#[derive(Error, Debug)]
pub enum DnsError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No record matched, or the matched record carries another name
    #[error("DNS record not found: {0}")]
    NotFound(String),

    #[error("DNS record type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: RecordType, actual: String },

    #[error("Failed to list DNS records: {0}")]
    QueryFailed(String),

    #[error("Failed to update DNS record: {0}")]
    UpdateFailed(String),

    /// Fetch or decoding fault raised by the Workers runtime
    #[error("Transport error: {0}")]
    Transport(#[from] worker::Error),
}

impl DnsError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<DnsError> for worker::Error {
    fn from(err: DnsError) -> Self {
        match err {
            DnsError::Transport(inner) => inner,
            other => worker::Error::RustError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let test_cases = vec![
            (DnsError::Unauthorized, "Unauthorized"),
            (
                DnsError::invalid_input("domain parameter required"),
                "Invalid input: domain parameter required",
            ),
            (
                DnsError::NotFound("example.com".into()),
                "DNS record not found: example.com",
            ),
            (
                DnsError::TypeMismatch {
                    expected: RecordType::A,
                    actual: "CNAME".into(),
                },
                "DNS record type mismatch: expected A, found CNAME",
            ),
            (
                DnsError::UpdateFailed("[9109] Invalid access token".into()),
                "Failed to update DNS record: [9109] Invalid access token",
            ),
        ];

        for (err, expected) in test_cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn transport_error_is_unwrapped() {
        let err = DnsError::from(worker::Error::RustError("connection reset".into()));
        match worker::Error::from(err) {
            worker::Error::RustError(msg) => assert_eq!(msg, "connection reset"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn domain_error_becomes_rust_error() {
        match worker::Error::from(DnsError::NotFound("example.com".into())) {
            worker::Error::RustError(msg) => assert_eq!(msg, "DNS record not found: example.com"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
