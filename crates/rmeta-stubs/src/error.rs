use rmeta_proto::RemoteException;
use rmeta_types::Status;

/// Failure reported by an executor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    /// The service processed the call and raised an exception.
    #[error("remote exception: {0}")]
    Remote(#[from] RemoteException),

    /// The call did not complete (connect, send, timeout, codec).
    #[error("rpc failed: {0}")]
    Rpc(#[from] Status),
}

impl ExecuteError {
    /// Remote exception class, if the service raised one.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            ExecuteError::Remote(e) => Some(&e.class_name),
            ExecuteError::Rpc(_) => None,
        }
    }
}
