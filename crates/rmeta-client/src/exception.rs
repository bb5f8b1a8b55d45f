//! Translation of executor failures into local status values.

use std::collections::HashMap;

use rmeta_stubs::ExecuteError;
use rmeta_types::{status_code_t, MetaCode, RPCCode, Status, StatusCode};

use crate::config::{ExceptionOverride, MetaClientConfig};

/// Maps an executor failure to the local error value reported to callers.
///
/// Implementations must be pure: no I/O, no shared mutable state.
pub trait ExceptionInterpreter: Send + Sync {
    fn interpret(&self, err: ExecuteError) -> Status;
}

impl<F> ExceptionInterpreter for F
where
    F: Fn(ExecuteError) -> Status + Send + Sync,
{
    fn interpret(&self, err: ExecuteError) -> Status {
        self(err)
    }
}

const BUILTIN_EXCEPTIONS: &[(&str, status_code_t)] = &[
    ("java.io.FileNotFoundException", MetaCode::NOT_FOUND),
    ("org.apache.hadoop.security.AccessControlException", MetaCode::NO_PERMISSION),
    ("org.apache.hadoop.fs.FileAlreadyExistsException", MetaCode::EXISTS),
    ("org.apache.hadoop.fs.PathIsNotEmptyDirectoryException", MetaCode::NOT_EMPTY),
    ("org.apache.hadoop.fs.ParentNotDirectoryException", MetaCode::NOT_DIRECTORY),
    ("org.apache.hadoop.fs.PathIsNotDirectoryException", MetaCode::NOT_DIRECTORY),
    ("org.apache.hadoop.fs.InvalidPathException", StatusCode::INVALID_ARG),
    ("java.lang.IllegalArgumentException", StatusCode::INVALID_ARG),
    ("org.apache.hadoop.hdfs.protocol.DSQuotaExceededException", MetaCode::QUOTA_EXCEEDED),
    ("org.apache.hadoop.hdfs.protocol.NSQuotaExceededException", MetaCode::QUOTA_EXCEEDED),
    ("org.apache.hadoop.hdfs.server.namenode.SafeModeException", StatusCode::READ_ONLY_MODE),
    ("org.apache.hadoop.ipc.StandbyException", RPCCode::REQUEST_REFUSED),
];

/// Class-name based interpreter for exceptions raised by the metadata
/// service.
///
/// Configured overrides are consulted before the built-in table. Unknown
/// classes become `StatusCode::UNKNOWN`; local RPC failures pass through.
#[derive(Debug, Clone)]
pub struct DefaultExceptionInterpreter {
    table: HashMap<String, status_code_t>,
}

impl DefaultExceptionInterpreter {
    pub fn new() -> Self {
        Self::with_overrides(&[])
    }

    pub fn with_overrides(overrides: &[ExceptionOverride]) -> Self {
        let mut table: HashMap<String, status_code_t> = BUILTIN_EXCEPTIONS
            .iter()
            .map(|(class, code)| (class.to_string(), *code))
            .collect();
        for o in overrides {
            table.insert(o.class_name.clone(), o.code);
        }
        Self { table }
    }

    pub fn from_config(config: &MetaClientConfig) -> Self {
        Self::with_overrides(&config.exception_overrides)
    }

    /// Status code for a remote exception class, if it is known.
    pub fn lookup(&self, class_name: &str) -> Option<status_code_t> {
        self.table.get(class_name).copied()
    }
}

impl Default for DefaultExceptionInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExceptionInterpreter for DefaultExceptionInterpreter {
    fn interpret(&self, err: ExecuteError) -> Status {
        match err {
            ExecuteError::Rpc(status) => status,
            ExecuteError::Remote(exc) => match self.lookup(&exc.class_name) {
                Some(code) if exc.message.is_empty() => Status::with_message(code, exc.class_name),
                Some(code) => Status::with_message(code, exc.message),
                None => Status::with_message(StatusCode::UNKNOWN, exc.to_string()),
            },
        }
    }
}
