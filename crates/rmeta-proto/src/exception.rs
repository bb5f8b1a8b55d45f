use std::fmt;

use serde::{Deserialize, Serialize};

/// An exception raised by the remote metadata service.
///
/// `class_name` is the fully qualified exception class reported by the
/// service, e.g. `java.io.FileNotFoundException`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemoteException {
    pub class_name: String,
    pub message: String,
}

impl RemoteException {
    pub fn new(class_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RemoteException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.class_name)
        } else {
            write!(f, "{}: {}", self.class_name, self.message)
        }
    }
}

impl std::error::Error for RemoteException {}
