use subtle::ConstantTimeEq;

// Constants
pub const HEADER_VERIFY_TOKEN: &str = "X-Verify-Token";

/// Authentication utilities
pub struct AuthUtils;

impl AuthUtils {
    /// Validates the presented `X-Verify-Token` value against the configured secret.
    ///
    /// Comparison runs in constant time over the token bytes.
    pub fn check_auth_with_token(presented: Option<&str>, verify_token: Option<&str>) -> bool {
        match (verify_token, presented) {
            (Some(token), Some(presented)) if !token.is_empty() && !presented.is_empty() => {
                token.as_bytes().ct_eq(presented.as_bytes()).into()
            }
            _ => false, // Strict auth: no configured secret denies everything
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_auth_test_cases() {
        let test_cases = vec![
            (None, None, false, "no secret configured, no header - strict auth denies"),
            (
                Some("secret"),
                None,
                false,
                "no secret configured, with header - strict auth denies",
            ),
            (
                Some("secret"),
                Some(""),
                false,
                "empty secret configured - strict auth denies",
            ),
            (None, Some("secret"), false, "header missing - denies"),
            (Some(""), Some("secret"), false, "empty header - denies"),
            (Some("secret"), Some("secret"), true, "exact match - allows"),
            (Some("wrong"), Some("secret"), false, "wrong token - denies"),
            (Some("SECRET"), Some("secret"), false, "case mismatch - denies"),
            (Some("secret "), Some("secret"), false, "trailing space - denies"),
            (Some("secre"), Some("secret"), false, "prefix of secret - denies"),
            (Some("secret-extra"), Some("secret"), false, "secret with suffix - denies"),
            (Some("Bearer secret"), Some("secret"), false, "bearer scheme not stripped"),
            (
                Some("s3cr3t-token_123"),
                Some("s3cr3t-token_123"),
                true,
                "exact complex token match - allows",
            ),
        ];

        for (presented, verify_token, expected, description) in test_cases {
            let result = AuthUtils::check_auth_with_token(presented, verify_token);
            assert_eq!(result, expected, "Failed: {}", description);
        }
    }
}
