use crate::{
    error::FunctionError,
    model::{CallableContext, CallablePayload, CallableResponse, CallableResult},
    service::ping_service,
    state::AppState,
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::Method,
    response::Json,
};
use serde_json::Value;
use tracing::warn;

/// Callable `ping`: `POST { "data": {...} }` answers `{ "result": {...} }`
pub async fn ping_handler(
    State(app_state): State<AppState>,
    method: Method,
    context: CallableContext,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CallableResponse<CallableResult>>, FunctionError> {
    if method != Method::POST {
        warn!("Rejected callable request with method {}", method);
        return Err(FunctionError::InvalidArgument("Bad Request".to_string()));
    }

    let Json(body) = body.map_err(|rejection| {
        warn!("Rejected callable body: {}", rejection.body_text());
        FunctionError::InvalidArgument("Bad Request".to_string())
    })?;

    let payload = extract_payload(&body)?;
    let result = ping_service::ping(&app_state, &payload, &context)?;

    Ok(Json(CallableResponse { result }))
}

fn extract_payload(body: &Value) -> Result<CallablePayload, FunctionError> {
    body.as_object()
        .and_then(|envelope| envelope.get("data"))
        .map(CallablePayload::from_data)
        .ok_or_else(|| {
            FunctionError::InvalidArgument("Request body is missing data.".to_string())
        })
}
