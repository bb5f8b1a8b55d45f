//! Metadata-mutation procedures: setPermission, setOwner, setTimes.

pub mod ops;
pub mod types;

pub use ops::*;
pub use types::*;
