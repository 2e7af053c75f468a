//! Target URL validation.
//!
//! Target URLs are stored exactly as submitted so that a redirect sends the
//! caller to the same string they registered. This module only decides whether
//! the string is an acceptable redirect destination.

use url::Url;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// Leading or trailing whitespace makes the URL invalid rather than being
/// silently trimmed. ASCII control characters anywhere in the string are
/// rejected too: the URL parser drops or encodes them, but the stored string
/// must be usable verbatim as a `Location` header.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for strings that do not parse
/// as absolute URLs, [`UrlValidationError::UnsupportedProtocol`] for schemes
/// such as `javascript:` or `ftp:`, and [`UrlValidationError::MissingHost`]
/// when no host is present.
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim() != input {
        return Err(UrlValidationError::InvalidFormat(
            "surrounding whitespace".to_string(),
        ));
    }

    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::InvalidFormat(
            "control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_https() {
        assert!(validate_target_url("https://example.com").is_ok());
    }

    #[test]
    fn test_accepts_http_with_port_path_and_query() {
        assert!(validate_target_url("http://localhost:3000/test?a=1&b=2#frag").is_ok());
    }

    #[test]
    fn test_accepts_ip_address() {
        assert!(validate_target_url("http://192.168.1.1:8080/api").is_ok());
    }

    #[test]
    fn test_accepts_encoded_characters() {
        assert!(validate_target_url("https://example.com/path%20with%20spaces").is_ok());
    }

    #[test]
    fn test_accepts_very_long_url() {
        let url = format!("https://example.com/{}", "a".repeat(2000));
        assert!(validate_target_url(&url).is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            validate_target_url("not a valid url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(matches!(
            validate_target_url(""),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            validate_target_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(validate_target_url(" https://example.com").is_err());
        assert!(validate_target_url("https://example.com\n").is_err());
    }

    #[test]
    fn test_rejects_interior_control_characters() {
        for url in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://example.com/a\rb",
            "https://example.com/a\u{7f}b",
            "https://exa\u{0}mple.com",
        ] {
            assert!(
                matches!(
                    validate_target_url(url),
                    Err(UrlValidationError::InvalidFormat(_))
                ),
                "{url:?}"
            );
        }
    }

    #[test]
    fn test_accepts_non_ascii_path() {
        assert!(validate_target_url("https://example.com/café").is_ok());
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for url in [
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "mailto:test@example.com",
            "ftp://example.com/file.txt",
            "file:///etc/passwd",
        ] {
            assert_eq!(
                validate_target_url(url),
                Err(UrlValidationError::UnsupportedProtocol),
                "{url}"
            );
        }
    }
}
