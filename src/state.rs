use crate::{
    auth::{AdmissionPolicy, AllowAll, RequireAuth},
    clock::{Clock, SystemClock},
    config::Config,
    invocation_log::{InvocationLog, TracingLog},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock + Send + Sync>,
    pub log: Arc<dyn InvocationLog + Send + Sync>,
    pub policy: Arc<dyn AdmissionPolicy + Send + Sync>,
    pub uid_header: String,
}

impl AppState {
    /// Production wiring: wall clock, tracing sink, and the policy picked by config
    pub fn from_config(config: &Config) -> Self {
        let policy: Arc<dyn AdmissionPolicy + Send + Sync> = if config.require_auth {
            Arc::new(RequireAuth)
        } else {
            Arc::new(AllowAll)
        };

        Self {
            clock: Arc::new(SystemClock),
            log: Arc::new(TracingLog),
            policy,
            uid_header: config.uid_header.clone(),
        }
    }
}
