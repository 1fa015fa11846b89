//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;
use satchel_keys::Network;

/// Default entropy strength for generated recovery phrases, in bits.
pub const DEFAULT_STRENGTH: usize = 128;

/// Satchel - a deterministic wallet manager for the command line.
#[derive(Parser, Debug)]
#[command(name = "satchel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Name or id of the wallet to create or open.
    #[arg(short = 'w', long, value_name = "NAME_OR_ID")]
    pub wallet_name: Option<String>,

    /// Network to create the wallet on.
    #[arg(short = 'n', long, default_value_t = Network::Bitcoin)]
    pub network: Network,

    /// Name or id of the wallet to remove; all keys and related
    /// information will be deleted.
    #[arg(long, value_name = "NAME_OR_ID")]
    pub wallet_remove: Option<String>,

    /// List all known wallets.
    #[arg(short = 'l', long)]
    pub list_wallets: bool,

    /// Show wallet information.
    #[arg(short = 'i', long)]
    pub wallet_info: bool,

    /// Passphrase to recover or create a wallet. Pass the flag without
    /// words to be prompted for a free-form phrase.
    #[arg(long, value_name = "WORD", num_args = 0..)]
    pub passphrase: Option<Vec<String>>,

    /// Entropy strength in bits for generated recovery phrases.
    #[arg(long, default_value_t = DEFAULT_STRENGTH, value_name = "BITS")]
    pub passphrase_strength: usize,

    /// Fee override in satoshis per kilobyte.
    #[arg(short = 'k', long, value_name = "SATOSHI")]
    pub fee_per_kb: Option<u64>,

    /// Data directory holding the wallet registry.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// A lone wallet name behaves as a request for wallet info.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.only_wallet_name_given() {
            self.wallet_info = true;
        }
        self
    }

    /// Data directory, defaulting to `~/.satchel`.
    #[must_use]
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".satchel")
        })
    }

    fn only_wallet_name_given(&self) -> bool {
        self.wallet_name.is_some()
            && !self.list_wallets
            && !self.wallet_info
            && self.wallet_remove.is_none()
            && self.passphrase.is_none()
            && self.fee_per_kb.is_none()
            && self.network == Network::Bitcoin
            && self.passphrase_strength == DEFAULT_STRENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(name: &str) -> Cli {
        Cli {
            wallet_name: Some(name.to_string()),
            network: Network::Bitcoin,
            wallet_remove: None,
            list_wallets: false,
            wallet_info: false,
            passphrase: None,
            passphrase_strength: DEFAULT_STRENGTH,
            fee_per_kb: None,
            data_dir: None,
        }
    }

    #[test]
    fn lone_name_implies_info() {
        let cli = bare("alice").normalize();
        assert!(cli.wallet_info);
    }

    #[test]
    fn other_flags_keep_info_unset() {
        let cli = Cli {
            passphrase: Some(vec![]),
            ..bare("alice")
        }
        .normalize();
        assert!(!cli.wallet_info);

        let cli = Cli {
            network: Network::Testnet,
            ..bare("alice")
        }
        .normalize();
        assert!(!cli.wallet_info);
    }

    #[test]
    fn explicit_flags_parse() {
        let cli = Cli::parse_from([
            "satchel",
            "-w",
            "alice",
            "-n",
            "testnet",
            "--passphrase-strength",
            "256",
        ]);
        assert_eq!(cli.wallet_name.as_deref(), Some("alice"));
        assert_eq!(cli.network, Network::Testnet);
        assert_eq!(cli.passphrase_strength, 256);
        assert!(cli.passphrase.is_none());
    }

    #[test]
    fn passphrase_flag_without_words_is_empty_vec() {
        let cli = Cli::parse_from(["satchel", "-w", "alice", "--passphrase"]);
        assert_eq!(cli.passphrase.as_deref(), Some(&[][..]));
    }

    #[test]
    fn passphrase_flag_collects_words() {
        let cli = Cli::parse_from(["satchel", "-w", "alice", "--passphrase", "zoo", "art"]);
        assert_eq!(
            cli.passphrase,
            Some(vec!["zoo".to_string(), "art".to_string()])
        );
    }
}
