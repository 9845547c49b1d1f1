use crate::{
    handler::{
        health_handler::health,
        hello_handler::{HELLO_WORLD_MOUNT, hello_world_handler},
        ping_handler::ping_handler,
    },
    state::AppState,
};
use axum::{
    Router,
    routing::{any, get},
};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route(HELLO_WORLD_MOUNT, any(hello_world_handler))
        // `{*rest}` needs a non-empty tail, so the trailing slash is its own route
        .route("/helloWorld/", any(hello_world_handler))
        .route("/helloWorld/{*rest}", any(hello_world_handler))
        // Method is checked by the handler so callers get the callable error envelope
        .route("/ping", any(ping_handler))
        .with_state(app_state)
}
