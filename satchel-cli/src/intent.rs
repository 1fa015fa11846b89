//! Intent resolution.
//!
//! Collapses the flag surface into exactly one [`PendingAction`] per
//! invocation. Precedence: list, then delete, then the missing-name error,
//! then the info modifier, then the id/existence check. The resolver is a
//! pure function of the parsed arguments and an existence oracle, so the
//! precedence order is testable without any I/O.

use satchel_store::WalletRef;

use crate::cli::Cli;
use crate::error::CliError;

/// Where the recovery phrase for a wallet creation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseSource {
    /// Generate a fresh phrase at the given entropy strength.
    Generated {
        /// Entropy strength in bits.
        strength_bits: usize,
    },
    /// Prompt once for a free-form phrase.
    Interactive,
    /// Words supplied on the command line.
    Supplied(Vec<String>),
}

/// The single action an invocation resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// List top-level wallets.
    List,
    /// Delete the targeted wallet after re-type confirmation.
    Delete(WalletRef),
    /// Create a wallet that does not exist yet.
    Create(WalletRef, PhraseSource),
    /// Open an existing wallet.
    Open(WalletRef),
    /// Show wallet information, opening or creating the wallet first.
    Info(WalletRef),
}

/// Resolve parsed arguments into exactly one action.
///
/// `exists` reports whether a wallet matching a selector is known to the
/// store. A purely numeric identifier always resolves to an id-open
/// candidate, never to a creation by literal name.
///
/// # Errors
///
/// Returns a validation error when an action requires a wallet name and
/// none was given.
pub fn resolve<F>(cli: &Cli, exists: F) -> Result<PendingAction, CliError>
where
    F: Fn(&WalletRef) -> bool,
{
    // Listing wins over everything; no identifying input at all also lists.
    if cli.list_wallets || !has_identifying_input(cli) {
        return Ok(PendingAction::List);
    }

    if let Some(target) = &cli.wallet_remove {
        return Ok(PendingAction::Delete(WalletRef::parse(target)));
    }

    let Some(name) = &cli.wallet_name else {
        return Err(CliError::Validation(
            "no action: wallet name required".to_string(),
        ));
    };
    let target = WalletRef::parse(name);

    if cli.wallet_info && cli.passphrase.is_none() {
        return Ok(PendingAction::Info(target));
    }

    match &target {
        WalletRef::ByName(_) if !exists(&target) => {
            Ok(PendingAction::Create(target.clone(), phrase_source(cli)))
        }
        _ => Ok(PendingAction::Open(target)),
    }
}

fn has_identifying_input(cli: &Cli) -> bool {
    cli.wallet_name.is_some()
        || cli.wallet_remove.is_some()
        || cli.wallet_info
        || cli.passphrase.is_some()
}

fn phrase_source(cli: &Cli) -> PhraseSource {
    match &cli.passphrase {
        None => PhraseSource::Generated {
            strength_bits: cli.passphrase_strength,
        },
        Some(words) if words.is_empty() => PhraseSource::Interactive,
        Some(words) => PhraseSource::Supplied(words.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DEFAULT_STRENGTH;
    use satchel_keys::Network;

    fn args() -> Cli {
        Cli {
            wallet_name: None,
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

    fn none_exist(_: &WalletRef) -> bool {
        false
    }

    fn all_exist(_: &WalletRef) -> bool {
        true
    }

    #[test]
    fn empty_invocation_lists() {
        let action = resolve(&args(), none_exist).unwrap();
        assert_eq!(action, PendingAction::List);
    }

    #[test]
    fn list_flag_beats_everything() {
        let cli = Cli {
            list_wallets: true,
            wallet_remove: Some("alice".to_string()),
            wallet_name: Some("bob".to_string()),
            ..args()
        };
        assert_eq!(resolve(&cli, all_exist).unwrap(), PendingAction::List);
    }

    #[test]
    fn remove_beats_name_handling() {
        let cli = Cli {
            wallet_remove: Some("alice".to_string()),
            wallet_name: Some("bob".to_string()),
            ..args()
        };
        assert_eq!(
            resolve(&cli, all_exist).unwrap(),
            PendingAction::Delete(WalletRef::ByName("alice".to_string()))
        );
    }

    #[test]
    fn remove_by_id() {
        let cli = Cli {
            wallet_remove: Some("3".to_string()),
            ..args()
        };
        assert_eq!(
            resolve(&cli, all_exist).unwrap(),
            PendingAction::Delete(WalletRef::ById(3))
        );
    }

    #[test]
    fn missing_name_is_an_error() {
        let cli = Cli {
            wallet_info: true,
            ..args()
        };
        let err = resolve(&cli, none_exist).unwrap_err();
        assert!(matches!(err, CliError::Validation(msg) if msg.contains("wallet name required")));
    }

    #[test]
    fn info_modifier_resolves_to_info() {
        let cli = Cli {
            wallet_name: Some("alice".to_string()),
            wallet_info: true,
            ..args()
        };
        assert_eq!(
            resolve(&cli, all_exist).unwrap(),
            PendingAction::Info(WalletRef::ByName("alice".to_string()))
        );
    }

    #[test]
    fn info_with_passphrase_falls_through_to_existence_check() {
        let cli = Cli {
            wallet_name: Some("alice".to_string()),
            wallet_info: true,
            passphrase: Some(vec![]),
            ..args()
        };
        assert_eq!(
            resolve(&cli, all_exist).unwrap(),
            PendingAction::Open(WalletRef::ByName("alice".to_string()))
        );
    }

    #[test]
    fn unknown_name_resolves_to_create() {
        let cli = Cli {
            wallet_name: Some("alice".to_string()),
            ..args()
        };
        assert_eq!(
            resolve(&cli, none_exist).unwrap(),
            PendingAction::Create(
                WalletRef::ByName("alice".to_string()),
                PhraseSource::Generated {
                    strength_bits: DEFAULT_STRENGTH
                }
            )
        );
    }

    #[test]
    fn known_name_resolves_to_open() {
        let cli = Cli {
            wallet_name: Some("alice".to_string()),
            ..args()
        };
        assert_eq!(
            resolve(&cli, all_exist).unwrap(),
            PendingAction::Open(WalletRef::ByName("alice".to_string()))
        );
    }

    #[test]
    fn numeric_name_is_an_id_open_even_when_nothing_exists() {
        // A wallet literally named "7" may exist, but a numeric token is
        // always an id lookup candidate, never a creation by that name.
        let cli = Cli {
            wallet_name: Some("7".to_string()),
            ..args()
        };
        assert_eq!(
            resolve(&cli, none_exist).unwrap(),
            PendingAction::Open(WalletRef::ById(7))
        );
    }

    #[test]
    fn empty_passphrase_flag_means_interactive() {
        let cli = Cli {
            wallet_name: Some("alice".to_string()),
            passphrase: Some(vec![]),
            ..args()
        };
        assert_eq!(
            resolve(&cli, none_exist).unwrap(),
            PendingAction::Create(
                WalletRef::ByName("alice".to_string()),
                PhraseSource::Interactive
            )
        );
    }

    #[test]
    fn supplied_words_are_carried_verbatim() {
        let words = vec!["zoo".to_string(), "art".to_string()];
        let cli = Cli {
            wallet_name: Some("alice".to_string()),
            passphrase: Some(words.clone()),
            ..args()
        };
        assert_eq!(
            resolve(&cli, none_exist).unwrap(),
            PendingAction::Create(
                WalletRef::ByName("alice".to_string()),
                PhraseSource::Supplied(words)
            )
        );
    }

    #[test]
    fn custom_strength_reaches_phrase_source() {
        let cli = Cli {
            wallet_name: Some("alice".to_string()),
            passphrase_strength: 256,
            ..args()
        };
        assert_eq!(
            resolve(&cli, none_exist).unwrap(),
            PendingAction::Create(
                WalletRef::ByName("alice".to_string()),
                PhraseSource::Generated { strength_bits: 256 }
            )
        );
    }
}
