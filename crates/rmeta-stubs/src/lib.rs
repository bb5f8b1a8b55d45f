//! Client-side RPC executor interface for the metadata service.
//!
//! The executor performs one named procedure call and either populates the
//! matching response record or reports why it could not. Real transports
//! implement [`INamenodeExecutor`] outside this workspace; the mock here is
//! used for unit testing without a running server.

pub mod error;
pub mod namenode_stub;

pub use error::ExecuteError;
pub use namenode_stub::{call, INamenodeExecutor, MockNamenodeExecutor, RecordedCall};
