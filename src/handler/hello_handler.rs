use crate::{service::hello_service, state::AppState};
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Json},
};

pub const HELLO_WORLD_MOUNT: &str = "/helloWorld";

/// `helloWorld` answers every method; the request body is never read
pub async fn hello_world_handler(
    State(app_state): State<AppState>,
    method: Method,
    uri: Uri,
) -> impl IntoResponse {
    let path = function_path(uri.path(), HELLO_WORLD_MOUNT);
    let body = hello_service::hello_world(&app_state, method.as_str(), path);
    (StatusCode::OK, Json(body))
}

/// Path as the function sees it, relative to where it is mounted
pub fn function_path<'a>(full_path: &'a str, mount: &str) -> &'a str {
    match full_path.strip_prefix(mount) {
        Some("") | None => "/",
        Some(rest) => rest,
    }
}
