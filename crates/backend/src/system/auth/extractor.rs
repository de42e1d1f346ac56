use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use contracts::system::auth::CallerContext;
use contracts::system::routes::RoleQuery;
use std::convert::Infallible;

use super::session;
use crate::shared::state::AppState;

/// Extractor for the caller of a registry endpoint.
///
/// Role comes from the `role` query parameter, falling back to the role header
/// set by the gateway. Credential presence comes from the request headers.
/// Usage in handlers: `async fn handler(Caller(caller): Caller) -> Response`
pub struct Caller(pub CallerContext);

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let from_header = session::caller_from_headers(&parts.headers, &state.config.auth.role_header);

        let query_role = Query::<RoleQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.role)
            .filter(|r| !r.is_empty());

        let role = query_role.or(from_header.role);
        Ok(Caller(CallerContext::new(role, from_header.has_credential)))
    }
}
