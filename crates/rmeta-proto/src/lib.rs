//! Request/response records exchanged with the remote metadata service.
//!
//! The records are plain serde structs; the wire codec belongs to the
//! executor implementation, not to this crate.

pub mod exception;
pub mod meta;

pub use exception::RemoteException;
