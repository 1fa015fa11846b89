//! Error kinds surfaced at the controller boundary.

use std::fmt;

use satchel_store::StoreError;

/// Everything that can stop an invocation.
///
/// [`CliError::Aborted`] is terminal but not a failure: the user declined a
/// confirmation gate, so the process exits cleanly. Every other kind is
/// reported and exits non-zero.
#[derive(Debug)]
pub enum CliError {
    /// The user declined a confirmation gate.
    Aborted,
    /// Invalid input, detected before any mutating call.
    Validation(String),
    /// Wallet store failure.
    Store(StoreError),
    /// Mnemonic engine failure.
    Mnemonic(satchel_core::Error),
    /// Key derivation failure.
    Keys(satchel_keys::Error),
    /// Prompt or terminal I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aborted => write!(f, "aborted"),
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::Store(e) => write!(f, "{e}"),
            Self::Mnemonic(e) => write!(f, "{e}"),
            Self::Keys(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "input error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Mnemonic(e) => Some(e),
            Self::Keys(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Aborted | Self::Validation(_) => None,
        }
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<satchel_core::Error> for CliError {
    fn from(err: satchel_core::Error) -> Self {
        Self::Mnemonic(err)
    }
}

impl From<satchel_keys::Error> for CliError {
    fn from(err: satchel_keys::Error) -> Self {
        Self::Keys(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
