//! Master key derivation from a wallet seed.

use bitcoin::bip32::Xpriv;
use bitcoin::secp256k1::Secp256k1;
use zeroize::Zeroizing;

use crate::{Error, Network};

/// Network-tagged master extended private key derived from a wallet seed.
///
/// A `RootKey` is held transiently during wallet creation: it is derived from
/// the seed, serialized, and handed off to the wallet store, which becomes
/// the sole long-term owner of the key material.
pub struct RootKey {
    /// Master extended private key.
    xpriv: Xpriv,
    /// Network the key was derived for.
    network: Network,
}

impl RootKey {
    /// Derive the master key for a network from a wallet seed (BIP-32).
    ///
    /// # Errors
    ///
    /// Returns an error if the seed digest is not a valid secp256k1 secret
    /// key, which for honest seeds is vanishingly unlikely.
    pub fn from_seed(seed: &[u8], network: Network) -> Result<Self, Error> {
        let xpriv = Xpriv::new_master(network.to_bitcoin_network(), seed)?;

        Ok(Self { xpriv, network })
    }

    /// Serialize to the base58 extended key form (`xprv` / `tprv`).
    ///
    /// **Security Warning**: the serialized key reconstructs every key the
    /// wallet will ever derive. Hand it to the wallet store and nothing else.
    #[must_use]
    pub fn to_xprv(&self) -> Zeroizing<String> {
        Zeroizing::new(self.xpriv.to_string())
    }

    /// Fingerprint of the master key (hash160 prefix, hex encoded).
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let secp = Secp256k1::new();
        self.xpriv.fingerprint(&secp).to_string()
    }

    /// Get the network.
    #[must_use]
    pub const fn network(&self) -> Network {
        self.network
    }
}

impl core::fmt::Debug for RootKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RootKey")
            .field("network", &self.network)
            .field("xpriv", &"[REDACTED]")
            .finish()
    }
}
