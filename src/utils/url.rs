//! Link validation for opening files.
//!
//! File links come from the listing response; only links to the drive's
//! own web hosts are opened.

use std::fmt;

use crate::config::ALLOWED_LINK_DOMAINS;

/// Result of link validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// Link is safe to open
    Valid(String),
    Invalid(UrlValidationError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    Empty,
    /// Link doesn't use http:// or https://
    InvalidProtocol,
    NoHost,
    DomainNotAllowed(String),
}

impl fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "link is empty"),
            Self::InvalidProtocol => write!(f, "link must use http:// or https://"),
            Self::NoHost => write!(f, "link has no host"),
            Self::DomainNotAllowed(host) => write!(f, "host '{}' is not allowed", host),
        }
    }
}

/// Validate a file link before opening it.
///
/// The link must use http(s), carry a host, and that host must be one of
/// [`ALLOWED_LINK_DOMAINS`] or a subdomain of one.
pub fn validate_link_url(url: &str) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    let Some(rest) = strip_scheme(url) else {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    };

    let Some(host) = host_of(rest) else {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    };

    if !is_allowed(&host) {
        return UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(host));
    }

    UrlValidation::Valid(url.to_string())
}

/// Strip a case-insensitive `http://` or `https://` prefix.
fn strip_scheme(url: &str) -> Option<&str> {
    ["https://", "http://"].iter().find_map(|scheme| {
        let head = url.get(..scheme.len())?;
        head.eq_ignore_ascii_case(scheme)
            .then(|| &url[scheme.len()..])
    })
}

/// Lowercased host of a scheme-less URL, without userinfo or port.
fn host_of(rest: &str) -> Option<String> {
    // Browsers treat '\\' like '/' in http(s) URLs
    let authority = rest.split(['/', '\\', '?', '#']).next()?;
    // "user@evil.com" style authorities must not pass as their userinfo
    let host_port = authority.rsplit('@').next()?;
    let host = host_port.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_ascii_lowercase())
}

fn is_allowed(host: &str) -> bool {
    ALLOWED_LINK_DOMAINS
        .iter()
        .any(|allowed| host == *allowed || host.ends_with(&format!(".{}", allowed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_links_are_valid() {
        assert!(matches!(
            validate_link_url("https://drive.google.com/file/d/abc/view?usp=drivesdk"),
            UrlValidation::Valid(_)
        ));
        assert!(matches!(
            validate_link_url("https://docs.google.com/document/d/xyz/edit"),
            UrlValidation::Valid(_)
        ));
        assert!(matches!(
            validate_link_url("HTTPS://Drive.Google.com/open?id=1"),
            UrlValidation::Valid(_)
        ));
    }

    #[test]
    fn test_invalid_links() {
        assert_eq!(
            validate_link_url("   "),
            UrlValidation::Invalid(UrlValidationError::Empty)
        );
        assert_eq!(
            validate_link_url("javascript:alert(1)"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_link_url("https:///path"),
            UrlValidation::Invalid(UrlValidationError::NoHost)
        );
        assert_eq!(
            validate_link_url("https://evil.com/drive.google.com"),
            UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(
                "evil.com".to_string()
            ))
        );
    }

    #[test]
    fn test_lookalike_hosts_rejected() {
        assert!(matches!(
            validate_link_url("https://drive.google.com.evil.com/x"),
            UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(_))
        ));
        assert!(matches!(
            validate_link_url("https://notdrive.google.com/x"),
            UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(_))
        ));
        assert!(matches!(
            validate_link_url("https://drive.google.com@evil.com/x"),
            UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(_))
        ));
        assert_eq!(
            validate_link_url(r"https://evil.com\@drive.google.com/file"),
            UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(
                "evil.com".to_string()
            ))
        );
        assert!(matches!(
            validate_link_url(r"https://\evil.com/drive.google.com"),
            UrlValidation::Invalid(UrlValidationError::NoHost)
        ));
    }

    #[test]
    fn test_host_of() {
        assert_eq!(
            host_of("drive.google.com:443/file"),
            Some("drive.google.com".to_string())
        );
        assert_eq!(host_of("docs.google.com?x=1"), Some("docs.google.com".to_string()));
        assert_eq!(host_of(""), None);
    }
}
