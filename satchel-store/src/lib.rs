//! Durable wallet registry for the Satchel wallet manager.
//!
//! Wallet records live in a single `wallets.json` registry inside a data
//! directory. The registry owns the serialized root key of every wallet;
//! callers hand key material in at creation and get it back only through
//! [`WalletHandle`].
//!
//! Writes are atomic (temp file + rename), so a crashed process never leaves
//! a half-written registry behind.

#![forbid(unsafe_code)]

mod error;
mod record;
mod store;

pub use error::StoreError;
pub use record::{WalletRecord, WalletRef};
pub use store::{WalletHandle, WalletStore};
