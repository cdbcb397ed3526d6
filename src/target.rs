// src/target.rs
// =============================================================================
// Turns whatever the user typed into an absolute http(s) URL.
//
// Users paste all kinds of things: "example.com", "'https://example.com'",
// "  www.example.com/about  ". We clean that up, add https:// when the scheme
// is missing, and then let the `url` crate do the real parsing.
//
// This is a pure function: no DNS lookups, no network calls.
// =============================================================================

use url::Url;

use crate::error::AuditError;

// Characters that never appear in a URL someone meant to type
const FORBIDDEN_CHARS: &[char] = &['<', '>', '"', '{', '}', '|', '\\', '^', '`'];

/// Normalizes and validates a user supplied website address.
///
/// Returns the parsed URL, or `AuditError::InvalidUrl` with a message that
/// can be shown to the user as-is.
pub fn normalize_url(raw: &str) -> Result<Url, AuditError> {
    let trimmed = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'' || c == '`')
        .trim();

    if trimmed.is_empty() {
        return Err(invalid("URL is required"));
    }

    if trimmed.chars().any(|c| c.is_whitespace() || FORBIDDEN_CHARS.contains(&c)) {
        return Err(invalid("URL contains invalid characters"));
    }

    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else if lower.contains("://") {
        return Err(invalid("Only http and https URLs can be audited"));
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate).map_err(|e| invalid(&format!("Invalid URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid("Only http and https URLs can be audited"));
    }

    // A public website needs a dotted host name ("localhost" or "intranet" are rejected)
    match url.host_str() {
        Some(host) if host.contains('.') => Ok(url),
        Some(_) => Err(invalid("Please enter a full domain name, e.g. example.com")),
        None => Err(invalid("URL has no host")),
    }
}

fn invalid(reason: &str) -> AuditError {
    AuditError::InvalidUrl(reason.to_string())
}
