use axum::response::IntoResponse;

// Liveness probe for whatever sits in front of the functions
pub async fn health() -> impl IntoResponse {
    "pong"
}
