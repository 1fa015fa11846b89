//! Satchel - a deterministic wallet manager for the command line.
//!
//! Create, recover, inspect, list, and delete deterministic wallets backed
//! by a durable wallet registry.

mod cli;
mod controller;
mod error;
mod intent;
mod prompt;

use clap::Parser;

use cli::Cli;
use controller::{Controller, Options};
use error::CliError;
use prompt::StdinPrompt;
use satchel_store::WalletStore;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse().normalize();
    match run(cli) {
        // A declined confirmation is a deliberate cancel, not a failure.
        Ok(()) | Err(CliError::Aborted) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut store = WalletStore::open_dir(cli.resolve_data_dir())?;
    let action = intent::resolve(&cli, |target| store.exists(target))?;

    let opts = Options {
        network: cli.network,
        passphrase_strength: cli.passphrase_strength,
        passphrase_supplied: cli.passphrase.is_some(),
        fee_per_kb: cli.fee_per_kb,
    };
    let mut prompt = StdinPrompt;
    Controller::new(&mut store, &mut prompt, opts).execute(action)
}
