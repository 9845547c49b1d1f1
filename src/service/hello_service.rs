use crate::{
    invocation_log::InvocationRecord,
    model::{HELLO_MESSAGE, HelloResponse},
    state::AppState,
};

/// Sanity-check payload; cannot fail
pub fn hello_world(app_state: &AppState, method: &str, path: &str) -> HelloResponse {
    app_state.log.write(&InvocationRecord::HelloWorldInvoked {
        method: method.to_string(),
        path: path.to_string(),
    });

    HelloResponse {
        ok: true,
        message: HELLO_MESSAGE,
        ts: app_state.clock.now_millis(),
    }
}
