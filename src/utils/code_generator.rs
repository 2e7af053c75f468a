//! Short code generation and validation.
//!
//! Generated codes are 6 characters drawn uniformly from the 62-character
//! alphanumeric alphabet. Caller-supplied codes may be 6 to 8 characters of the
//! same alphabet. Codes are case-sensitive.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

pub const MIN_CODE_LENGTH: usize = 6;
pub const MAX_CODE_LENGTH: usize = 8;

static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("code pattern is a valid regex")
});

/// Generates a random 6-character alphanumeric code.
///
/// Uniqueness is not checked here; see
/// [`LinkService`](crate::application::services::LinkService) for the
/// collision retry.
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a caller-supplied short code against `^[A-Za-z0-9]{6,8}$`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the constraint when the code does
/// not match.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if CODE_PATTERN.is_match(code) {
        return Ok(());
    }

    Err(AppError::bad_request(
        "Code must be 6-8 alphanumeric characters",
        json!({
            "code": code,
            "pattern": CODE_PATTERN.as_str(),
            "min_length": MIN_CODE_LENGTH,
            "max_length": MAX_CODE_LENGTH,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), GENERATED_CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generated_codes_pass_validation() {
        for _ in 0..100 {
            assert!(validate_custom_code(&generate_code()).is_ok());
        }
    }

    #[test]
    fn test_generate_code_is_mostly_unique() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        // 62^6 possibilities; a handful of birthday collisions would be a bug.
        assert!(codes.len() >= 999);
    }

    #[test]
    fn test_generate_code_uses_whole_alphabet() {
        let seen: HashSet<char> = (0..2000)
            .flat_map(|_| generate_code().chars().collect::<Vec<_>>())
            .collect();
        assert!(seen.iter().any(|c| c.is_ascii_uppercase()));
        assert!(seen.iter().any(|c| c.is_ascii_lowercase()));
        assert!(seen.iter().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_validate_accepts_boundary_lengths() {
        assert!(validate_custom_code("abc123").is_ok());
        assert!(validate_custom_code("abcd1234").is_ok());
        assert!(validate_custom_code("mylink1").is_ok());
    }

    #[test]
    fn test_validate_accepts_mixed_case() {
        assert!(validate_custom_code("MyLink01").is_ok());
        assert!(validate_custom_code("ABCDEF").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_custom_code("abc12").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("6-8 alphanumeric"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_custom_code("abcd12345").is_err());
    }

    #[test]
    fn test_validate_rejects_non_alphanumeric() {
        for code in ["my-link", "my_link", "my link", "abc12!", "ab/c123", "äbc123"] {
            assert!(validate_custom_code(code).is_err(), "{code} should be rejected");
        }
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_rejects_trailing_newline() {
        assert!(validate_custom_code("abc123\n").is_err());
    }
}
