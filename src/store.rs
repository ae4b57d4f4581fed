// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::catalog;
use crate::errors::LedgerError;
use crate::filter::{FilterCriteria, filter_and_sort};
use crate::models::{SummaryStats, Transaction, TransactionInput};
use crate::stats::summarize;
use crate::storage::SnapshotStore;

/// Owner of the canonical in-memory transaction list and its durable mirror.
///
/// Constructed once per process with an injected persistence backend. Every
/// successful mutation writes the full snapshot through to the backend; a
/// failed write surfaces as `LedgerError::Persistence` while the in-memory
/// mutation is kept, trading cross-session durability for in-session
/// consistency.
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    backend: Box<dyn SnapshotStore>,
}

impl LedgerStore {
    /// Rehydrate from the backend's snapshot. Runs once, here; a missing or
    /// corrupt snapshot yields an empty ledger (the backend's `load` fails
    /// open).
    pub fn open(backend: Box<dyn SnapshotStore>) -> Self {
        let transactions = backend.load();
        Self {
            transactions,
            backend,
        }
    }

    /// Validate, assign a fresh id, prepend, persist. Returns the created
    /// record.
    pub fn create(&mut self, input: TransactionInput) -> Result<Transaction, LedgerError> {
        validate(&input)?;
        let tx = Transaction {
            id: Uuid::new_v4(),
            date: input.date,
            description: input.description,
            amount: input.amount,
            r#type: input.r#type,
            category_id: input.category_id,
            payment_method: input.payment_method,
        };
        self.transactions.insert(0, tx.clone());
        self.persist()?;
        Ok(tx)
    }

    /// Replace the record matching `id` with all-new fields under the same
    /// id, keeping its position in the ledger. Existence is checked before
    /// validation, so an update against a missing id reports `NotFound`
    /// regardless of the payload.
    pub fn update(&mut self, id: Uuid, input: TransactionInput) -> Result<Transaction, LedgerError> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        validate(&input)?;
        let tx = Transaction {
            id,
            date: input.date,
            description: input.description,
            amount: input.amount,
            r#type: input.r#type,
            category_id: input.category_id,
            payment_method: input.payment_method,
        };
        self.transactions[pos] = tx.clone();
        self.persist()?;
        Ok(tx)
    }

    /// Remove the record matching `id` if present. Deleting an absent id is
    /// a no-op, not an error; the snapshot is rewritten either way.
    pub fn delete(&mut self, id: Uuid) -> Result<(), LedgerError> {
        self.transactions.retain(|t| t.id != id);
        self.persist()
    }

    /// Current ledger for read-only consumption.
    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Derived summary statistics. Side-effect-free.
    pub fn stats(&self) -> SummaryStats {
        summarize(&self.transactions)
    }

    /// Filtered, date-descending projection. Side-effect-free.
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<Transaction> {
        filter_and_sort(&self.transactions, criteria)
    }

    fn persist(&self) -> Result<(), LedgerError> {
        self.backend.save(&self.transactions)
    }
}

fn validate(input: &TransactionInput) -> Result<(), LedgerError> {
    if input.description.trim().is_empty() {
        return Err(LedgerError::Validation(
            "description must not be empty".into(),
        ));
    }
    if input.amount <= Decimal::ZERO {
        return Err(LedgerError::Validation(format!(
            "amount must be greater than zero, got {}",
            input.amount
        )));
    }
    let Some(category) = catalog::category_by_id(&input.category_id) else {
        return Err(LedgerError::Validation(format!(
            "unknown category '{}'",
            input.category_id
        )));
    };
    if category.r#type != input.r#type {
        return Err(LedgerError::Validation(format!(
            "category '{}' is a {} category and cannot be used on a {} transaction",
            category.name,
            category.r#type,
            input.r#type
        )));
    }
    Ok(())
}
