//! Namenode executor trait and mock implementation.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rmeta_proto::meta::{MetaMethod, MetaRequest, MetaResponse};
use rmeta_types::{RPCCode, Status};

use crate::error::ExecuteError;

/// Executes named procedures against the metadata service.
///
/// One call is one attempt; retries, leader discovery and timeouts are the
/// implementation's business.
#[async_trait]
pub trait INamenodeExecutor: Send + Sync {
    async fn execute(&self, method: &str, req: MetaRequest) -> Result<MetaResponse, ExecuteError>;
}

/// Execute `req` under its own procedure name and downcast the response.
pub async fn call<E, Req>(executor: &E, req: Req) -> Result<Req::Rsp, ExecuteError>
where
    E: INamenodeExecutor + ?Sized,
    Req: MetaMethod,
{
    let rsp = executor.execute(Req::METHOD, req.into()).await?;
    <Req::Rsp as TryFrom<MetaResponse>>::try_from(rsp).map_err(|other| {
        ExecuteError::Rpc(Status::with_message(
            RPCCode::VERIFY_RESPONSE_FAILED,
            format!("{}: unexpected {} response", Req::METHOD, other.method()),
        ))
    })
}

// ---------------------------------------------------------------------------
// Mock implementation
// ---------------------------------------------------------------------------

type Handler = Box<dyn Fn(&str, &MetaRequest) -> Result<MetaResponse, ExecuteError> + Send + Sync>;

/// A call observed by [`MockNamenodeExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: String,
    pub request: MetaRequest,
}

/// A configurable, recording mock for [`INamenodeExecutor`].
///
/// Every call is recorded. If no handler is installed the mock answers
/// with the empty acknowledgement matching the request.
pub struct MockNamenodeExecutor {
    pub handler: Mutex<Option<Handler>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockNamenodeExecutor {
    pub fn new() -> Self {
        Self {
            handler: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Wrap in an `Arc` for convenient sharing.
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn on_execute(
        &self,
        f: impl Fn(&str, &MetaRequest) -> Result<MetaResponse, ExecuteError> + Send + Sync + 'static,
    ) {
        *self.handler.lock() = Some(Box::new(f));
    }

    /// Make every subsequent call fail with `err`.
    pub fn fail_with(&self, err: impl Into<ExecuteError>) {
        let err = err.into();
        self.on_execute(move |_, _| Err(err.clone()));
    }

    /// Calls observed so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Default for MockNamenodeExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl INamenodeExecutor for MockNamenodeExecutor {
    async fn execute(&self, method: &str, req: MetaRequest) -> Result<MetaResponse, ExecuteError> {
        self.calls.lock().push(RecordedCall {
            method: method.to_string(),
            request: req.clone(),
        });
        let guard = self.handler.lock();
        match guard.as_ref() {
            Some(f) => f(method, &req),
            None => Ok(req.default_response()),
        }
    }
}

/// Blanket implementation: `Arc<T>` delegates to `T` for any `T: INamenodeExecutor`.
#[async_trait]
impl<T: INamenodeExecutor + ?Sized> INamenodeExecutor for Arc<T> {
    async fn execute(&self, method: &str, req: MetaRequest) -> Result<MetaResponse, ExecuteError> {
        (**self).execute(method, req).await
    }
}
