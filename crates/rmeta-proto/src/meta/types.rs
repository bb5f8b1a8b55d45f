//! Shared field types used by the metadata-mutation records.

use serde::{Deserialize, Serialize};

/// Permission bits as stored by the metadata service (e.g. 0o755).
///
/// The value is the caller's bit pattern unchanged; no bits are masked or
/// remapped on the client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FsPermission {
    pub perm: u32,
}

impl FsPermission {
    pub fn new(perm: u32) -> Self {
        Self { perm }
    }
}

impl From<u32> for FsPermission {
    fn from(perm: u32) -> Self {
        Self { perm }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_passthrough() {
        // Setuid, sticky and the file-type bits are carried as given.
        let p = FsPermission::from(0o104_755);
        assert_eq!(p.perm, 0o104_755);
        assert_eq!(FsPermission::new(u32::MAX).perm, u32::MAX);
    }
}
