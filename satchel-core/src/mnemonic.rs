//! BIP-39 phrase generation and seed derivation.
//!
//! Seed derivation follows the BIP-39 construction: PBKDF2-HMAC-SHA512 over
//! the phrase string with the salt `"mnemonic" + passphrase`. The phrase is
//! taken as-is, so free-form recovery phrases entered at the prompt derive a
//! seed the same way checksummed BIP-39 phrases do. The same (phrase,
//! passphrase) pair always yields the same seed.

use bip39::Mnemonic;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::Error;

/// Number of PBKDF2 rounds for seed derivation.
const PBKDF2_ROUNDS: u32 = 2048;

/// Generate a new random recovery phrase at the given entropy strength.
///
/// # Arguments
///
/// * `strength_bits` - Entropy strength: 128, 160, 192, 224, or 256 bits,
///   producing 12, 15, 18, 21, or 24 words respectively.
///
/// # Errors
///
/// Returns [`Error::InvalidStrength`] for any other strength value.
pub fn generate(strength_bits: usize) -> Result<Zeroizing<String>, Error> {
    let word_count = match strength_bits {
        128 => 12,
        160 => 15,
        192 => 18,
        224 => 21,
        256 => 24,
        _ => return Err(Error::InvalidStrength(strength_bits)),
    };

    let mnemonic = Mnemonic::generate(word_count)?;
    Ok(Zeroizing::new(mnemonic.to_string()))
}

/// Derive the 64-byte wallet seed from a phrase and an extra passphrase.
///
/// Pass an empty `passphrase` when no extra passphrase is used.
#[must_use]
pub fn to_seed(phrase: &str, passphrase: &str) -> Zeroizing<[u8; 64]> {
    let salt = Zeroizing::new(format!("mnemonic{passphrase}"));

    let mut seed = Zeroizing::new([0u8; 64]);
    pbkdf2_hmac::<Sha512>(
        phrase.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut *seed,
    );
    seed
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const TEST_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn generate_word_counts() {
        for (bits, words) in [(128, 12), (160, 15), (192, 18), (224, 21), (256, 24)] {
            let phrase = generate(bits).unwrap();
            assert_eq!(phrase.split_whitespace().count(), words);
        }
    }

    #[test]
    fn generate_rejects_invalid_strength() {
        for bits in [0, 64, 129, 512] {
            assert!(matches!(generate(bits), Err(Error::InvalidStrength(b)) if b == bits));
        }
    }

    #[test]
    fn seed_matches_bip39_vector() {
        let seed = to_seed(TEST_PHRASE, "TREZOR");
        let expected = hex!(
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
        assert_eq!(*seed, expected);
    }

    #[test]
    fn seed_is_deterministic() {
        let a = to_seed(TEST_PHRASE, "extra");
        let b = to_seed(TEST_PHRASE, "extra");
        assert_eq!(*a, *b);
    }

    #[test]
    fn passphrase_changes_seed() {
        let plain = to_seed(TEST_PHRASE, "");
        let extra = to_seed(TEST_PHRASE, "extra");
        assert_ne!(*plain, *extra);
    }

    #[test]
    fn free_form_phrase_derives_seed() {
        // Interactive recovery accepts phrases that are not valid BIP-39.
        let a = to_seed("correct horse battery staple", "");
        let b = to_seed("correct horse battery staple", "");
        assert_eq!(*a, *b);
        assert_ne!(*a, *to_seed(TEST_PHRASE, ""));
    }

    #[test]
    fn generated_phrases_differ() {
        let a = generate(128).unwrap();
        let b = generate(128).unwrap();
        assert_ne!(*a, *b);
    }
}
