use axum::http::{HeaderMap, header};

pub mod role;
pub mod roster;

/// Pull the bearer token out of the `Authorization` header. A value without
/// the `Bearer ` prefix is passed through whole and left to fail
/// verification; only a missing header is the missing-header case.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    Some(value.strip_prefix("Bearer ").unwrap_or(value).to_owned())
}
