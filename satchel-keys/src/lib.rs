//! BIP-32 root key derivation for the Satchel wallet manager.
//!
//! Turns a 64-byte wallet seed into a network-tagged master extended private
//! key with a serializable base58 representation.
//!
//! # Usage
//!
//! ```
//! use satchel_keys::{Network, RootKey};
//!
//! let seed = [0u8; 64];
//! let root = RootKey::from_seed(&seed, Network::Bitcoin).unwrap();
//! assert!(root.to_xprv().starts_with("xprv"));
//! ```

#![forbid(unsafe_code)]

mod error;
mod network;
mod root;

pub use error::Error;
pub use network::{Network, ParseNetworkError};
pub use root::RootKey;

/// A convenient Result type alias for satchel-keys operations.
pub type Result<T> = core::result::Result<T, Error>;
