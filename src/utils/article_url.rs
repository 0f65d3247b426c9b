//! Article URL parsing and validation.
//!
//! Accepts only absolute HTTP(S) URLs with a host. The parsed form is what
//! gets forwarded, so the host is lowercased and default ports are dropped.

use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

/// Errors that can occur while parsing an article URL.
#[derive(Debug, thiserror::Error)]
pub enum ArticleUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Parses an absolute HTTP or HTTPS URL.
///
/// # Security
///
/// Rejects protocols like `javascript:`, `data:`, `file:` or `ftp:` so the
/// automation engine is never asked to fetch anything but web pages.
///
/// # Errors
///
/// Returns [`ArticleUrlError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`ArticleUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`ArticleUrlError::MissingHost`] when the host is empty.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     parse_article_url("HTTPS://EXAMPLE.COM:443/Post").unwrap().as_str(),
///     "https://example.com/Post"
/// );
/// assert!(parse_article_url("ftp://x").is_err());
/// ```
pub fn parse_article_url(input: &str) -> Result<Url, ArticleUrlError> {
    let url = Url::parse(input).map_err(|e| ArticleUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(ArticleUrlError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(ArticleUrlError::MissingHost),
    }
}

/// `validator` adapter for [`parse_article_url`].
pub fn validate_article_url(value: &str) -> Result<(), ValidationError> {
    parse_article_url(value).map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("url");
        err.message = Some(Cow::Owned(e.to_string()));
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_https() {
        let url = parse_article_url("https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_parse_preserves_path_and_query() {
        let url = parse_article_url("http://blog.example.com/2024/post?ref=home").unwrap();
        assert_eq!(url.as_str(), "http://blog.example.com/2024/post?ref=home");
    }

    #[test]
    fn test_parse_lowercases_host_and_drops_default_port() {
        let url = parse_article_url("HTTPS://EXAMPLE.COM:443/Post").unwrap();
        assert_eq!(url.as_str(), "https://example.com/Post");
    }

    #[test]
    fn test_reject_ftp() {
        assert!(matches!(
            parse_article_url("ftp://x"),
            Err(ArticleUrlError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_reject_javascript() {
        assert!(matches!(
            parse_article_url("javascript:alert(1)"),
            Err(ArticleUrlError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_reject_plain_text() {
        assert!(matches!(
            parse_article_url("not a url"),
            Err(ArticleUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_reject_relative_path() {
        assert!(matches!(
            parse_article_url("/articles/1"),
            Err(ArticleUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_reject_missing_host() {
        assert!(parse_article_url("http://").is_err());
    }

    #[test]
    fn test_validator_adapter_sets_message() {
        let err = validate_article_url("ftp://x").unwrap_err();
        assert_eq!(err.code, "url");
        assert_eq!(
            err.message.as_deref(),
            Some("Only HTTP and HTTPS protocols are allowed")
        );
    }
}
