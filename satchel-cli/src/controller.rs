//! Wallet bootstrap controller.
//!
//! Executes the resolved [`PendingAction`], enforcing the confirmation gates
//! in front of irreversible operations: key generation without a backed-up
//! phrase, and wallet deletion. No store mutation happens before its gate
//! has passed.

use colored::Colorize;
use zeroize::Zeroizing;

use satchel_core::mnemonic;
use satchel_keys::{Network, RootKey};
use satchel_store::{StoreError, WalletHandle, WalletRecord, WalletRef, WalletStore};

use crate::error::CliError;
use crate::intent::{PendingAction, PhraseSource};
use crate::prompt::Prompt;

/// Responses accepted as backup confirmation for a generated phrase.
/// Exact matches only; "y" or "yeah" do not count for this gate.
const YES_RESPONSES: [&str; 3] = ["yes", "Yes", "YES"];

/// Invocation-scoped settings beyond the resolved action.
pub struct Options {
    /// Network for newly created wallets.
    pub network: Network,
    /// Entropy strength for generated phrases, in bits.
    pub passphrase_strength: usize,
    /// Whether a passphrase argument was present on the command line.
    pub passphrase_supplied: bool,
    /// Fee override in satoshis per kilobyte, echoed in wallet info.
    pub fee_per_kb: Option<u64>,
}

/// Executes exactly one [`PendingAction`] against the wallet store.
pub struct Controller<'a, P: Prompt> {
    store: &'a mut WalletStore,
    prompt: &'a mut P,
    opts: Options,
}

impl<'a, P: Prompt> Controller<'a, P> {
    pub fn new(store: &'a mut WalletStore, prompt: &'a mut P, opts: Options) -> Self {
        Self {
            store,
            prompt,
            opts,
        }
    }

    /// Run the resolved action to completion.
    pub fn execute(&mut self, action: PendingAction) -> Result<(), CliError> {
        match action {
            PendingAction::List => self.list(),
            PendingAction::Delete(target) => self.delete(&target),
            PendingAction::Create(target, source) => {
                let handle = self.create(&target, &source)?;
                self.print_info(&handle);
                Ok(())
            }
            PendingAction::Open(target) => self.open(&target),
            PendingAction::Info(target) => self.info(&target),
        }
    }

    fn list(&mut self) -> Result<(), CliError> {
        println!();
        println!("{}", "Satchel wallets:".cyan().bold());
        for w in top_level(self.store.list()) {
            println!("[{}] {} ({}) {}", w.id, w.name, w.network, w.owner);
        }
        println!();
        Ok(())
    }

    /// Delete a wallet after the re-type gate.
    ///
    /// The confirmation is the literal target identifier, not a yes/no: a
    /// reflexive keypress cannot destroy a wallet. A mismatch is a cancel,
    /// not an error.
    fn delete(&mut self, target: &WalletRef) -> Result<(), CliError> {
        if !self.store.exists(target) {
            return Err(StoreError::NotFound(target.to_string()).into());
        }

        let answer = self.prompt.read_line(&format!(
            "\nWallet '{target}' with all its keys will be removed and cannot be restored \
             without its recovery phrase.\nPlease retype the exact name or id of the wallet \
             to proceed: "
        ))?;
        if answer != target.to_string() {
            return Err(CliError::Aborted);
        }

        if self.store.delete(target, true)? {
            println!("\nWallet {target} has been removed");
        } else {
            println!("\nError when deleting wallet");
        }
        Ok(())
    }

    /// Create a wallet that does not exist yet.
    ///
    /// Gates, in order: the create-candidate confirmation, then (for
    /// generated phrases) the backup confirmation after the phrase has been
    /// displayed. Nothing is persisted until both have passed.
    fn create(
        &mut self,
        target: &WalletRef,
        source: &PhraseSource,
    ) -> Result<WalletHandle, CliError> {
        let WalletRef::ByName(name) = target else {
            return Err(CliError::Validation(format!(
                "cannot create a wallet from numeric id {target}"
            )));
        };

        let answer = self
            .prompt
            .read_line(&format!("Wallet {name} does not exist, create new wallet [yN]? "))?;
        if !answer.eq_ignore_ascii_case("y") {
            return Err(CliError::Aborted);
        }

        println!(
            "\n{} wallet '{}' ({} network)",
            "CREATE".cyan().bold(),
            name,
            self.opts.network
        );

        let phrase = self.resolve_phrase(source)?;
        let seed = mnemonic::to_seed(&phrase, "");
        let root = RootKey::from_seed(&*seed, self.opts.network)?;
        let xprv = root.to_xprv();

        Ok(self
            .store
            .create(name, self.opts.network.name(), xprv.as_str())?)
    }

    fn resolve_phrase(&mut self, source: &PhraseSource) -> Result<Zeroizing<String>, CliError> {
        match source {
            PhraseSource::Generated { strength_bits } => {
                let phrase = mnemonic::generate(*strength_bits)?;
                println!(
                    "\nYour recovery phrase is: {}",
                    phrase.as_str().green()
                );
                println!(
                    "\nWrite it down on paper and back it up. It is the only way to restore \
                     this wallet and its keys."
                );

                let answer = self.prompt.read_line(
                    "\nType 'yes' if you understood and wrote down your phrase: ",
                )?;
                if !YES_RESPONSES.contains(&answer.as_str()) {
                    println!("Exiting...");
                    return Err(CliError::Aborted);
                }
                Ok(phrase)
            }
            PhraseSource::Interactive => {
                // Escape hatch for advanced recovery: no word-count check.
                Ok(Zeroizing::new(
                    self.prompt.read_line("Enter passphrase: ")?,
                ))
            }
            PhraseSource::Supplied(words) => {
                let words: Vec<&str> = if words.len() == 1 {
                    words[0].split_whitespace().collect()
                } else {
                    words.iter().map(String::as_str).collect()
                };
                if words.len() < 12 {
                    return Err(CliError::Validation(
                        "passphrase with 12 words or more required".to_string(),
                    ));
                }
                Ok(Zeroizing::new(words.join(" ")))
            }
        }
    }

    /// Open an existing wallet by name or id.
    fn open(&mut self, target: &WalletRef) -> Result<(), CliError> {
        let handle = self.store.open(target)?;

        if self.opts.passphrase_supplied {
            // Re-supplying a phrase cannot alter keys that already exist.
            println!(
                "{} passphrase option for existing wallet ignored",
                "WARNING:".yellow().bold()
            );
            self.print_info(&handle);
        } else {
            println!(
                "\nOpened wallet '{}' ({} network)",
                handle.name(),
                handle.record().network
            );
        }
        Ok(())
    }

    /// Show wallet info, opening or creating the wallet first.
    fn info(&mut self, target: &WalletRef) -> Result<(), CliError> {
        let handle = match target {
            WalletRef::ByName(_) if !self.store.exists(target) => {
                let source = PhraseSource::Generated {
                    strength_bits: self.opts.passphrase_strength,
                };
                self.create(target, &source)?
            }
            _ => self.store.open(target)?,
        };

        self.print_info(&handle);
        Ok(())
    }

    fn print_info(&self, handle: &WalletHandle) {
        println!("\n{} {}", "Wallet info for".cyan().bold(), handle.name());
        print!("{}", handle.info());
        if let Some(fee) = self.opts.fee_per_kb {
            println!("Fee rate  {fee} sat/kvB (override)");
        }
        println!();
    }
}

/// Only top-level wallets are listed; sub-wallets are reachable through
/// their parent.
pub(crate) fn top_level(records: &[WalletRecord]) -> impl Iterator<Item = &WalletRecord> {
    records.iter().filter(|w| w.parent_id.is_none())
}
