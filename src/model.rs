use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const HELLO_MESSAGE: &str = "Hello from Firebase Functions!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HelloResponse {
    pub ok: bool,
    pub message: &'static str,
    pub ts: u64,
}

/// Input of the `ping` callable. `name` is left untyped since callers send
/// whatever JSON they like there.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CallablePayload {
    #[serde(default)]
    pub name: Option<Value>,
}

impl CallablePayload {
    /// Reads the payload out of the envelope's `data` value. Anything other
    /// than an object carries no name.
    pub fn from_data(data: &Value) -> Self {
        match data {
            Value::Object(fields) => Self {
                name: fields.get("name").cloned(),
            },
            _ => Self::default(),
        }
    }
}

/// Identity of the caller as injected by the platform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallableContext {
    pub uid: Option<String>,
}

impl CallableContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.uid.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallableResult {
    pub message: String,
    pub ts: u64,
}

/// Success envelope of a callable response
#[derive(Debug, Serialize)]
pub struct CallableResponse<T> {
    pub result: T,
}
