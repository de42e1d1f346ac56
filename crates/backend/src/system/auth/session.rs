use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;
use contracts::system::auth::CallerContext;

const TOKEN_COOKIE: &str = "token";

/// Bearer token from the Authorization header, if non-empty
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Value of the `token` cookie set by the login page, if non-empty
pub fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == TOKEN_COOKIE && !value.trim().is_empty())
        .map(|(_, value)| value.trim().to_string())
}

/// Only presence is checked; the token is verified upstream
pub fn has_credential(headers: &HeaderMap) -> bool {
    bearer_token(headers).is_some() || cookie_token(headers).is_some()
}

/// Caller as seen by the page guard: role from the gateway-provided header
pub fn caller_from_headers(headers: &HeaderMap, role_header: &str) -> CallerContext {
    let role = headers
        .get(role_header)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    CallerContext::new(role, has_credential(headers))
}
