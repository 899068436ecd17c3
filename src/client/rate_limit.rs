use super::{HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};
use reqwest::header::HeaderMap;
use std::str::FromStr;

/// Rate limit status reported alongside every API response
///
/// GitHub API docs: https://developer.github.com/v3/#rate-limiting
#[derive(Debug, Default)]
pub struct Rate {
    pub limit: usize,
    pub remaining: usize,
    /// UTC epoch seconds at which the current window resets
    pub reset: u64,
}

impl Rate {
    pub(super) fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: parse_header(headers, HEADER_RATE_LIMIT).unwrap_or_default(),
            remaining: parse_header(headers, HEADER_RATE_REMAINING).unwrap_or_default(),
            reset: parse_header(headers, HEADER_RATE_RESET).unwrap_or_default(),
        }
    }
}

fn parse_header<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse().ok())
}
