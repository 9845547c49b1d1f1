use crate::{error::FunctionError, model::CallableContext};
use tracing::debug;

/// Gate evaluated before a callable does any work
pub trait AdmissionPolicy: Send + Sync {
    fn admit(&self, context: &CallableContext) -> Result<(), FunctionError>;
}

/// Lets every caller through, signed in or not
pub struct AllowAll;

impl AdmissionPolicy for AllowAll {
    fn admit(&self, _context: &CallableContext) -> Result<(), FunctionError> {
        Ok(())
    }
}

pub struct RequireAuth;

impl AdmissionPolicy for RequireAuth {
    fn admit(&self, context: &CallableContext) -> Result<(), FunctionError> {
        if context.is_authenticated() {
            Ok(())
        } else {
            debug!("Rejecting anonymous caller");
            Err(FunctionError::Unauthenticated("Sign-in required".to_string()))
        }
    }
}
