//! Error types for mnemonic operations.

use std::fmt;

/// Errors that can occur while generating or processing recovery phrases.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Unsupported entropy strength in bits.
    InvalidStrength(usize),
    /// Invalid mnemonic phrase.
    Mnemonic(bip39::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStrength(bits) => {
                write!(
                    f,
                    "invalid entropy strength {bits}, must be 128, 160, 192, 224, or 256 bits"
                )
            }
            Self::Mnemonic(e) => write!(f, "mnemonic error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mnemonic(e) => Some(e),
            Self::InvalidStrength(_) => None,
        }
    }
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        Self::Mnemonic(err)
    }
}
