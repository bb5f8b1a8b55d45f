//! Client-side metadata mutations for a remote filesystem.
//!
//! `MetaClient` exposes `chmod`, `chown` and `chtimes`. Each operation builds
//! a request record, hands it to an injected [`INamenodeExecutor`], and maps
//! any failure through an [`ExceptionInterpreter`] into a [`PathError`]
//! naming the operation and path.
//!
//! [`INamenodeExecutor`]: rmeta_stubs::INamenodeExecutor

pub mod config;
pub mod error;
pub mod exception;
pub mod meta;

pub use config::{ClientConfig, ExceptionOverride, MetaClientConfig};
pub use error::{ConfigError, MetaOp, MetaResult, PathError};
pub use exception::{DefaultExceptionInterpreter, ExceptionInterpreter};
pub use meta::{MetaClient, MetaClientImpl};
