//! Error types for wallet store operations.

use std::fmt;

/// Errors that can occur while reading or mutating the wallet registry.
#[derive(Debug)]
pub enum StoreError {
    /// No wallet matches the given name or id.
    NotFound(String),
    /// A wallet with this name already exists.
    DuplicateName(String),
    /// The wallet has sub-wallets and cannot be deleted without force.
    HasChildren(String),
    /// The registry file is malformed or has an unsupported version.
    Registry(String),
    /// Filesystem error.
    Io(std::io::Error),
    /// Registry (de)serialization error.
    Json(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(target) => write!(f, "wallet '{target}' not found"),
            Self::DuplicateName(name) => write!(f, "wallet '{name}' already exists"),
            Self::HasChildren(name) => {
                write!(f, "wallet '{name}' has sub-wallets, deletion requires force")
            }
            Self::Registry(msg) => write!(f, "registry error: {msg}"),
            Self::Io(e) => write!(f, "filesystem error: {e}"),
            Self::Json(e) => write!(f, "registry serialization error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::NotFound(_)
            | Self::DuplicateName(_)
            | Self::HasChildren(_)
            | Self::Registry(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
