//! Input validation for destination URLs and short codes.
//!
//! These checks run before anything touches the store. The database schema
//! repeats them as `CHECK` constraints, so a request that somehow bypasses
//! this module is still rejected at insert time.

use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Maximum accepted length of a destination URL, in characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Six to eight ASCII letters or digits.
static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("short code pattern is a valid regex")
});

/// Returns true if `input` is an absolute `http` or `https` URL.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/page"));
/// assert!(!is_valid_url("ftp://example.com/file"));
/// assert!(!is_valid_url("not-a-url"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Returns true if `input` is a well-formed short code.
pub fn is_valid_code(input: &str) -> bool {
    CODE_REGEX.is_match(input)
}

/// Validates a link creation request.
///
/// Rules are checked in order and the first failure wins:
///
/// 1. URL present and non-empty
/// 2. URL at most [`MAX_URL_LENGTH`] characters
/// 3. URL is absolute with an `http`/`https` scheme
/// 4. Custom code, when supplied and non-empty, matches `^[A-Za-z0-9]{6,8}$`
///
/// # Errors
///
/// Returns [`AppError::Validation`] with the failing rule's message.
pub fn validate_link_input(
    original_url: Option<&str>,
    custom_code: Option<&str>,
) -> Result<(), AppError> {
    let url = match original_url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::validation("Original URL is required")),
    };

    if url.chars().count() > MAX_URL_LENGTH {
        return Err(AppError::validation(
            "URL is too long (max 2048 characters)",
        ));
    }

    if !is_valid_url(url) {
        return Err(AppError::validation(
            "Invalid URL format. Must be a valid HTTP or HTTPS URL",
        ));
    }

    if let Some(code) = custom_code.filter(|c| !c.is_empty())
        && !is_valid_code(code)
    {
        return Err(AppError::validation(
            "Custom code must be 6-8 alphanumeric characters",
        ));
    }

    Ok(())
}

/// Returns the serialized form of an already validated URL.
///
/// Parsing drops tabs and newlines, trims surrounding whitespace and
/// percent-encodes non-ASCII characters, so the result is always usable as a
/// `Location` header. A lowercase scheme and host, plus a `/` path on a bare
/// origin, are part of that form.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the input does not parse or the
/// serialized form grows past [`MAX_URL_LENGTH`].
pub fn normalize_url(input: &str) -> Result<String, AppError> {
    let url = Url::parse(input).map_err(|_| {
        AppError::validation("Invalid URL format. Must be a valid HTTP or HTTPS URL")
    })?;

    let normalized = String::from(url);
    if normalized.len() > MAX_URL_LENGTH {
        return Err(AppError::validation(
            "URL is too long (max 2048 characters)",
        ));
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_http_and_https_urls() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/page"));
        assert!(is_valid_url("https://example.com:8443/a/b?q=1#frag"));
        assert!(is_valid_url("http://192.168.1.1:8080/api"));
        assert!(is_valid_url("http://localhost:3000"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(!is_valid_url("ftp://example.com/file.txt"));
        assert!(!is_valid_url("javascript:alert('xss')"));
        assert!(!is_valid_url("mailto:test@example.com"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("data:text/plain,Hello"));
    }

    #[test]
    fn test_rejects_relative_and_garbage() {
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_valid_codes() {
        assert!(is_valid_code("abc123"));
        assert!(is_valid_code("Ab3xQ9"));
        assert!(is_valid_code("ABCDEFG"));
        assert!(is_valid_code("a1b2c3d4"));
    }

    #[test]
    fn test_invalid_codes() {
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("abc12"));
        assert!(!is_valid_code("abcdefghi"));
        assert!(!is_valid_code("abc-123"));
        assert!(!is_valid_code("abc_123"));
        assert!(!is_valid_code("abc 123"));
        assert!(!is_valid_code("abcdéf"));
        assert!(!is_valid_code("abc123\n"));
    }

    #[test]
    fn test_validate_accepts_url_without_code() {
        assert!(validate_link_input(Some("https://example.com"), None).is_ok());
    }

    #[test]
    fn test_validate_treats_empty_code_as_absent() {
        assert!(validate_link_input(Some("https://example.com"), Some("")).is_ok());
    }

    #[test]
    fn test_validate_accepts_valid_custom_code() {
        assert!(validate_link_input(Some("https://example.com"), Some("mycode12")).is_ok());
    }

    #[test]
    fn test_validate_missing_url() {
        assert_eq!(
            message(validate_link_input(None, None)),
            "Original URL is required"
        );
        assert_eq!(
            message(validate_link_input(Some(""), None)),
            "Original URL is required"
        );
    }

    #[test]
    fn test_validate_url_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(
            message(validate_link_input(Some(&url), None)),
            "URL is too long (max 2048 characters)"
        );
    }

    #[test]
    fn test_validate_url_at_length_limit() {
        let prefix = "https://example.com/";
        let url = format!("{prefix}{}", "a".repeat(MAX_URL_LENGTH - prefix.len()));
        assert_eq!(url.len(), MAX_URL_LENGTH);
        assert!(validate_link_input(Some(&url), None).is_ok());
    }

    #[test]
    fn test_validate_invalid_url() {
        let msg = message(validate_link_input(Some("not-a-url"), None));
        assert!(msg.starts_with("Invalid URL format"));
    }

    #[test]
    fn test_validate_invalid_custom_code() {
        assert_eq!(
            message(validate_link_input(Some("https://example.com"), Some("ab"))),
            "Custom code must be 6-8 alphanumeric characters"
        );
    }

    #[test]
    fn test_validate_reports_url_before_code() {
        let msg = message(validate_link_input(Some("not-a-url"), Some("!!")));
        assert!(msg.starts_with("Invalid URL format"));
    }

    #[test]
    fn test_normalize_strips_embedded_newlines_and_tabs() {
        assert_eq!(
            normalize_url("https://example.com/a\nb\tc").unwrap(),
            "https://example.com/abc"
        );
    }

    #[test]
    fn test_normalize_trims_surrounding_whitespace() {
        assert_eq!(
            normalize_url("  https://example.com/page ").unwrap(),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_normalize_percent_encodes_non_ascii() {
        assert_eq!(
            normalize_url("https://example.com/über?q=a b").unwrap(),
            "https://example.com/%C3%BCber?q=a%20b"
        );
    }

    #[test]
    fn test_normalize_keeps_canonical_urls_unchanged() {
        assert_eq!(
            normalize_url("https://example.com/page?x=1#top").unwrap(),
            "https://example.com/page?x=1#top"
        );
    }

    #[test]
    fn test_normalize_rejects_expansion_past_limit() {
        let url = format!("https://example.com/{}", "ü".repeat(1000));
        assert!(url.chars().count() <= MAX_URL_LENGTH);
        assert!(matches!(normalize_url(&url), Err(AppError::Validation(_))));
    }
}
