// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use crate::errors::LedgerError;
use crate::models::Transaction;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Finsight", "finsight"));

/// Fixed key under which the transaction snapshot is stored.
pub const SNAPSHOT_KEY: &str = "finsight_transactions";

pub fn snapshot_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(format!("{}.json", SNAPSHOT_KEY)))
}

/// Durable mirror of the ledger: one serialized, order-preserving sequence of
/// transactions under a single fixed key, overwritten in full after every
/// mutation.
pub trait SnapshotStore {
    /// Read the snapshot. Fails open: an absent, unreadable, or unparsable
    /// snapshot is "no history yet" and yields an empty list, never an error.
    fn load(&self) -> Vec<Transaction>;

    /// Overwrite the snapshot with the full current ledger.
    fn save(&self, transactions: &[Transaction]) -> Result<(), LedgerError>;
}

/// JSON-file backend at the platform data dir.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: snapshot_path()?,
        })
    }

    /// Backend at an explicit path. Used by tests and by anything that wants
    /// the snapshot somewhere other than the platform data dir.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Vec<Transaction> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), LedgerError> {
        let raw = serde_json::to_string(transactions).map_err(std::io::Error::from)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory backend for contexts with no durable storage, and for tests.
/// Starts empty; `save` replaces the held snapshot.
#[derive(Default)]
pub struct MemoryStore {
    snapshot: RefCell<Vec<Transaction>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Vec<Transaction> {
        self.snapshot.borrow().clone()
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), LedgerError> {
        *self.snapshot.borrow_mut() = transactions.to_vec();
        Ok(())
    }
}
