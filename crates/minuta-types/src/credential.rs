//! Typed API-credential outcome.
//!
//! One resolution strategy with one typed result, consumed uniformly by
//! draft generation and refinement. "Not set", "set but empty", and the
//! literal string "undefined" (a host-injection artifact) are all "not
//! configured" -- never a valid empty credential.

use secrecy::SecretString;

use std::fmt;

/// Outcome of credential resolution.
pub enum ApiCredential {
    /// A non-empty token was found.
    Present(SecretString),
    /// No credential source provided a value.
    Missing,
    /// A source provided a value that cannot be a real token
    /// (empty string or the literal "undefined").
    Invalid,
}

impl ApiCredential {
    /// Classify a raw value from a credential source.
    pub fn from_raw(raw: Option<String>) -> Self {
        match raw {
            None => ApiCredential::Missing,
            Some(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() || trimmed == "undefined" {
                    ApiCredential::Invalid
                } else {
                    ApiCredential::Present(SecretString::from(trimmed.to_string()))
                }
            }
        }
    }

    /// Whether a usable token is present.
    pub fn is_present(&self) -> bool {
        matches!(self, ApiCredential::Present(_))
    }
}

// The token must never appear in Debug output.
impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiCredential::Present(_) => write!(f, "ApiCredential::Present(****)"),
            ApiCredential::Missing => write!(f, "ApiCredential::Missing"),
            ApiCredential::Invalid => write!(f, "ApiCredential::Invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_from_raw_none_is_missing() {
        assert!(matches!(
            ApiCredential::from_raw(None),
            ApiCredential::Missing
        ));
    }

    #[test]
    fn test_from_raw_empty_is_invalid() {
        assert!(matches!(
            ApiCredential::from_raw(Some(String::new())),
            ApiCredential::Invalid
        ));
        assert!(matches!(
            ApiCredential::from_raw(Some("   ".to_string())),
            ApiCredential::Invalid
        ));
    }

    #[test]
    fn test_from_raw_literal_undefined_is_invalid() {
        assert!(matches!(
            ApiCredential::from_raw(Some("undefined".to_string())),
            ApiCredential::Invalid
        ));
    }

    #[test]
    fn test_from_raw_token_is_present() {
        let cred = ApiCredential::from_raw(Some("AIza-test-token".to_string()));
        match cred {
            ApiCredential::Present(token) => {
                assert_eq!(token.expose_secret(), "AIza-test-token");
            }
            other => panic!("expected Present, got {other:?}"),
        }
    }

    #[test]
    fn test_debug_never_exposes_token() {
        let cred = ApiCredential::from_raw(Some("super-secret".to_string()));
        let debug = format!("{cred:?}");
        assert!(!debug.contains("super-secret"));
    }
}
