use crate::{model::CallableContext, state::AppState};
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Identity comes from the header the fronting platform sets once it has
/// verified the caller. Missing or blank means anonymous.
impl FromRequestParts<AppState> for CallableContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        app_state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let uid = parts
            .headers
            .get(app_state.uid_header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|uid| !uid.is_empty())
            .map(str::to_string);

        Ok(CallableContext { uid })
    }
}
