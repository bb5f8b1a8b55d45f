//! Client error types.

use std::fmt;
use std::io;

use rmeta_types::{status_code_t, MetaCode, RPCCode, Status, StatusCode};

/// The metadata mutation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaOp {
    Chmod,
    Chown,
    Chtimes,
}

impl MetaOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaOp::Chmod => "chmod",
            MetaOp::Chown => "chown",
            MetaOp::Chtimes => "chtimes",
        }
    }
}

impl fmt::Display for MetaOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed operation on a remote path.
///
/// Every error returned by [`MetaClient`](crate::MetaClient) is one of
/// these, wrapped exactly once around the interpreted cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{op} {path}: {cause}")]
pub struct PathError {
    pub op: MetaOp,
    pub path: String,
    #[source]
    pub cause: Status,
}

impl PathError {
    pub fn new(op: MetaOp, path: impl Into<String>, cause: Status) -> Self {
        Self {
            op,
            path: path.into(),
            cause,
        }
    }

    /// Status code of the cause.
    pub fn code(&self) -> status_code_t {
        self.cause.code()
    }

    /// POSIX errno equivalent of the cause.
    pub fn errno(&self) -> i32 {
        self.cause.errno()
    }

    /// Local I/O error kind for the cause.
    pub fn kind(&self) -> io::ErrorKind {
        match self.code() {
            MetaCode::NOT_FOUND => io::ErrorKind::NotFound,
            MetaCode::NO_PERMISSION => io::ErrorKind::PermissionDenied,
            MetaCode::EXISTS => io::ErrorKind::AlreadyExists,
            MetaCode::NOT_EMPTY => io::ErrorKind::DirectoryNotEmpty,
            MetaCode::NOT_DIRECTORY => io::ErrorKind::NotADirectory,
            MetaCode::IS_DIRECTORY => io::ErrorKind::IsADirectory,
            StatusCode::READ_ONLY_MODE => io::ErrorKind::ReadOnlyFilesystem,
            StatusCode::INVALID_ARG => io::ErrorKind::InvalidInput,
            RPCCode::TIMEOUT => io::ErrorKind::TimedOut,
            _ => io::ErrorKind::Other,
        }
    }
}

impl From<PathError> for io::Error {
    fn from(err: PathError) -> Self {
        io::Error::new(err.kind(), err)
    }
}

/// Convenience result type.
pub type MetaResult<T> = std::result::Result<T, PathError>;

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
