//! Mnemonic engine for the Satchel wallet manager.
//!
//! This crate generates BIP-39 recovery phrases at a chosen entropy strength
//! and derives the 64-byte binary seed from a phrase plus an optional extra
//! passphrase.
//!
//! # Example
//!
//! ```
//! use satchel_core::mnemonic;
//!
//! // Generate a 12-word phrase (128 bits of entropy)
//! let phrase = mnemonic::generate(128)?;
//!
//! // Derive the wallet seed from it
//! let seed = mnemonic::to_seed(&phrase, "");
//! assert_eq!(seed.len(), 64);
//! # Ok::<(), satchel_core::Error>(())
//! ```

#![forbid(unsafe_code)]

mod error;
pub mod mnemonic;

pub use error::Error;
