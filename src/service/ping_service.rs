use crate::{
    error::FunctionError,
    invocation_log::InvocationRecord,
    model::{CallableContext, CallablePayload, CallableResult},
    state::AppState,
    utils::to_display_name,
};

/// Greets the caller back. The admission policy runs first, so a rejected
/// call neither logs nor computes anything.
pub fn ping(
    app_state: &AppState,
    payload: &CallablePayload,
    context: &CallableContext,
) -> Result<CallableResult, FunctionError> {
    app_state.policy.admit(context)?;

    let name = to_display_name(payload.name.as_ref());
    app_state.log.write(&InvocationRecord::PingCalled {
        uid: context.uid.clone(),
        name: name.clone(),
    });

    Ok(CallableResult {
        message: format!("pong, {}", name),
        ts: app_state.clock.now_millis(),
    })
}
