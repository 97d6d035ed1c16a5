//! Path normalization
//!
//! Accepts what the hosting shell hands over on a URL change:
//! - a bare path or fragment: `collections/articles`, `/users/3/`, `#media`
//! - a path with a query: `settings?tab=2`
//! - a full URL: `https://host/admin/#collections/articles`

use url::Url;

use crate::error::RouteError;
use crate::Result;

/// Reduce input to the routable path: no leading `#` or `/`, no trailing
/// `/`, no query string. The root is the empty string.
pub fn normalize(input: &str) -> Result<String> {
    let input = input.trim();

    let path = if looks_like_url(input) {
        let url = Url::parse(input).map_err(|_| RouteError::InvalidUrl(input.to_string()))?;
        match url.fragment() {
            Some(fragment) => fragment.to_string(),
            None => url.path().to_string(),
        }
    } else {
        input.to_string()
    };

    let path = path.strip_prefix('#').unwrap_or(&path);
    let path = match path.find('?') {
        Some(idx) => &path[..idx],
        None => path,
    };

    Ok(path.trim_start_matches('/').trim_end_matches('/').to_string())
}

/// Split a normalized path. Interior empty segments are kept so that
/// `a//b` never matches `a/:x/b` by accident.
pub fn segments(normalized: &str) -> Vec<String> {
    if normalized.is_empty() {
        return Vec::new();
    }
    normalized.split('/').map(str::to_string).collect()
}

fn looks_like_url(input: &str) -> bool {
    match input.find("://") {
        Some(idx) => {
            idx > 0
                && input[..idx]
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        }
        None => false,
    }
}
