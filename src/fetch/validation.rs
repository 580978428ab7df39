//! URL validation and normalization.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a URL supplied by the user.
///
/// Trims whitespace and adds an `https://` prefix if no scheme is given, then
/// validates that the URL is syntactically valid and uses the http/https scheme.
/// Rejects URLs longer than `MAX_URL_LENGTH`.
///
/// # Returns
///
/// `Some(normalized_url)` if the URL can be fetched, `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        );
        return None;
    }

    let has_scheme = url.contains("://");
    let normalized = if has_scheme {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting normalized URL exceeding maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some() => Some(normalized),
            "http" | "https" => {
                warn!("Rejecting URL without host: {url}");
                None
            }
            _ => {
                warn!("Rejecting unsupported scheme for URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Rejecting invalid URL: {url}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        let result = validate_and_normalize_url("example.com");
        assert_eq!(result, Some("https://example.com".to_string()));
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_http() {
        let result = validate_and_normalize_url("http://example.com");
        assert_eq!(result, Some("http://example.com".to_string()));
    }

    #[test]
    fn test_validate_and_normalize_url_trims() {
        let result = validate_and_normalize_url("  https://example.com/page  ");
        assert_eq!(result, Some("https://example.com/page".to_string()));
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_unsupported_scheme() {
        assert_eq!(validate_and_normalize_url("ftp://example.com"), None);
        assert_eq!(validate_and_normalize_url("file:///etc/passwd"), None);
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_invalid_url() {
        assert_eq!(validate_and_normalize_url("not a valid url!!!"), None);
        assert_eq!(validate_and_normalize_url(""), None);
        assert_eq!(validate_and_normalize_url("   "), None);
    }

    #[test]
    fn test_validate_and_normalize_url_with_path_and_port() {
        assert_eq!(
            validate_and_normalize_url("example.com:8080/path?query=value"),
            Some("https://example.com:8080/path?query=value".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(2048));
        assert_eq!(validate_and_normalize_url(&url), None);
    }
}
