//! Registry persistence and wallet lifecycle operations.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{StoreError, WalletRecord, WalletRef};

const REGISTRY_FILE: &str = "wallets.json";
const CURRENT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Registry {
    version: u32,
    wallets: Vec<WalletRecord>,
}

/// Durable registry of named wallets inside a data directory.
pub struct WalletStore {
    dir: PathBuf,
    registry: Registry,
}

/// A live handle to one wallet record.
#[derive(Debug, Clone)]
pub struct WalletHandle {
    record: WalletRecord,
}

impl WalletStore {
    /// Open (or initialize) the registry in the given data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the registry
    /// file is unreadable, malformed, or has an unsupported version.
    pub fn open_dir(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let path = dir.join(REGISTRY_FILE);
        let registry = if path.exists() {
            let json = fs::read_to_string(&path)?;
            let registry: Registry = serde_json::from_str(&json)?;
            if registry.version != CURRENT_VERSION {
                return Err(StoreError::Registry(format!(
                    "unsupported registry version {} (expected {CURRENT_VERSION})",
                    registry.version
                )));
            }
            registry
        } else {
            Registry {
                version: CURRENT_VERSION,
                wallets: Vec::new(),
            }
        };

        tracing::debug!(
            path = %path.display(),
            wallets = registry.wallets.len(),
            "registry loaded"
        );

        Ok(Self { dir, registry })
    }

    /// Check whether a wallet matching the selector exists.
    #[must_use]
    pub fn exists(&self, target: &WalletRef) -> bool {
        self.find(target).is_some()
    }

    /// All wallet records, sub-wallets included.
    #[must_use]
    pub fn list(&self) -> &[WalletRecord] {
        &self.registry.wallets
    }

    /// Create a new top-level wallet and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateName`] if a wallet with this name
    /// already exists, or a persistence error if the registry write fails.
    pub fn create(
        &mut self,
        name: &str,
        network: &str,
        root_key: &str,
    ) -> Result<WalletHandle, StoreError> {
        if self.registry.wallets.iter().any(|w| w.name == name) {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        let id = self.next_id();
        let record = WalletRecord {
            id,
            name: name.to_string(),
            network: network.to_string(),
            owner: String::new(),
            parent_id: None,
            root_key: root_key.to_string(),
        };

        self.registry.wallets.push(record.clone());
        self.save()?;
        tracing::info!(id, name, network, "wallet created");

        Ok(WalletHandle { record })
    }

    /// Open an existing wallet by name or id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches the selector.
    pub fn open(&self, target: &WalletRef) -> Result<WalletHandle, StoreError> {
        let record = self
            .find(target)
            .ok_or_else(|| StoreError::NotFound(target.to_string()))?;

        Ok(WalletHandle {
            record: record.clone(),
        })
    }

    /// Delete a wallet and its key material.
    ///
    /// Without `force`, deletion is refused when the wallet has sub-wallets.
    /// With `force`, sub-wallets are removed along with the wallet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches, or
    /// [`StoreError::HasChildren`] when a non-forced delete hits a wallet
    /// with sub-wallets.
    pub fn delete(&mut self, target: &WalletRef, force: bool) -> Result<bool, StoreError> {
        let record = self
            .find(target)
            .ok_or_else(|| StoreError::NotFound(target.to_string()))?;
        let id = record.id;
        let name = record.name.clone();

        let has_children = self
            .registry
            .wallets
            .iter()
            .any(|w| w.parent_id == Some(id));
        if has_children && !force {
            return Err(StoreError::HasChildren(name));
        }

        self.registry
            .wallets
            .retain(|w| w.id != id && w.parent_id != Some(id));
        self.save()?;
        tracing::info!(id, name, "wallet deleted");

        Ok(true)
    }

    fn find(&self, target: &WalletRef) -> Option<&WalletRecord> {
        match target {
            WalletRef::ById(id) => self.registry.wallets.iter().find(|w| w.id == *id),
            WalletRef::ByName(name) => self.registry.wallets.iter().find(|w| &w.name == name),
        }
    }

    fn next_id(&self) -> u32 {
        self.registry.wallets.iter().map(|w| w.id).max().unwrap_or(0) + 1
    }

    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.registry)?;
        let path = self.dir.join(REGISTRY_FILE);

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json.as_bytes())?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            StoreError::Io(e)
        })?;

        Ok(())
    }
}

impl WalletHandle {
    /// The underlying record.
    #[must_use]
    pub fn record(&self) -> &WalletRecord {
        &self.record
    }

    /// Wallet name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Printable summary of the wallet's stored state.
    #[must_use]
    pub fn info(&self) -> String {
        let r = &self.record;
        let mut out = String::new();
        let _ = writeln!(out, "Id        {}", r.id);
        let _ = writeln!(out, "Name      {}", r.name);
        let _ = writeln!(out, "Network   {}", r.network);
        let _ = writeln!(
            out,
            "Owner     {}",
            if r.owner.is_empty() { "-" } else { &r.owner }
        );
        if let Some(parent) = r.parent_id {
            let _ = writeln!(out, "Parent    {parent}");
        }
        let _ = writeln!(out, "Root key  {}", r.root_key);
        out
    }
}
