use tracing::info;

/// One structured record per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationRecord {
    HelloWorldInvoked { method: String, path: String },
    PingCalled { uid: Option<String>, name: String },
}

impl InvocationRecord {
    pub fn event(&self) -> &'static str {
        match self {
            InvocationRecord::HelloWorldInvoked { .. } => "helloWorld invoked",
            InvocationRecord::PingCalled { .. } => "ping called",
        }
    }
}

pub trait InvocationLog: Send + Sync {
    fn write(&self, record: &InvocationRecord);
}

pub struct TracingLog;

impl InvocationLog for TracingLog {
    fn write(&self, record: &InvocationRecord) {
        match record {
            InvocationRecord::HelloWorldInvoked { method, path } => {
                info!(
                    target: "functions",
                    method = %method,
                    path = %path,
                    "{}",
                    record.event()
                );
            }
            InvocationRecord::PingCalled { uid, name } => {
                // Anonymous callers show up as `uid=None`
                info!(
                    target: "functions",
                    uid = ?uid.as_deref(),
                    name = %name,
                    "{}",
                    record.event()
                );
            }
        }
    }
}
