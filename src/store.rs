//! Injected key-value persistence for billing inputs and the print handoff.
//!
//! The store is an explicit dependency rather than an ambient side channel,
//! so the session logic stays deterministic under test.

use std::{collections::BTreeMap, io::ErrorKind, path::PathBuf};

use crate::{allocate::BillingInputs, prelude::*};

/// Fixed namespace key for the persisted billing inputs.
pub const BILLING_INPUTS_KEY: &str = "ev-cost-inputs";

/// Fixed namespace key for the print-view handoff record.
pub const PRINT_DATA_KEY: &str = "printData";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> Result;
}

/// File-backed store: one `<key>.json` file per key under a fixed directory.
pub struct JsonFileStore {
    directory: PathBuf,
}

impl JsonFileStore {
    pub const fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => {
                Err(error).with_context(|| format!("failed to read the `{key}` record"))
            }
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result {
        std::fs::create_dir_all(&self.directory).with_context(|| {
            format!("failed to create the store directory `{}`", self.directory.display())
        })?;
        std::fs::write(self.path_for(key), value)
            .with_context(|| format!("failed to write the `{key}` record"))
    }
}

/// In-memory store for tests and embedding.
#[derive(Default)]
pub struct MemoryStore(BTreeMap<String, String>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl BillingInputs {
    /// Lenient load: missing or malformed stored data falls back to the
    /// all-zero defaults.
    pub fn load_from(store: &impl KeyValueStore) -> Self {
        Self::load_fallibly_from(store).unwrap_or_else(|error| {
            warn!(error = %format!("{error:#}"), "failed to load the billing inputs, using defaults");
            Self::default()
        })
    }

    fn load_fallibly_from(store: &impl KeyValueStore) -> Result<Self> {
        match store.get(BILLING_INPUTS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Self::default()),
        }
    }

    pub fn persist_to(&self, store: &mut impl KeyValueStore) -> Result {
        store.put(BILLING_INPUTS_KEY, &serde_json::to_string(self)?)
    }
}
