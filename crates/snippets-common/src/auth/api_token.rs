//! Opaque API token keys
//!
//! Keys are sent as `Authorization: Token <key>`.

use rand::distributions::Alphanumeric;
use rand::Rng;
use snippets_core::API_TOKEN_LENGTH;

/// Scheme prefix of the `Authorization` header
pub const TOKEN_SCHEME: &str = "Token";

/// Generate a random 40 character alphanumeric key
#[must_use]
pub fn generate_token_key() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(API_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Extract the key from an `Authorization: Token <key>` header value
#[must_use]
pub fn parse_token_header(value: &str) -> Option<&str> {
    let (scheme, key) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(TOKEN_SCHEME) {
        return None;
    }
    let key = key.trim();
    (!key.is_empty() && !key.contains(' ')).then_some(key)
}
