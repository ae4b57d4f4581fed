// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};

/// Display-projection criteria. `r#type: None` keeps every type; an empty
/// search term matches everything. Both filters apply conjunctively.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub r#type: Option<TransactionType>,
    pub search: String,
}

/// Produce a filtered, date-descending projection of the ledger.
///
/// The search term matches case-insensitively against the description. The
/// sort is stable, so records sharing a date keep their ledger order, which
/// is newest-created-first; that is the deterministic tie-break. The input
/// is never mutated and a fresh Vec is returned on every call.
pub fn filter_and_sort(transactions: &[Transaction], criteria: &FilterCriteria) -> Vec<Transaction> {
    let needle = criteria.search.to_lowercase();
    let mut rows: Vec<Transaction> = transactions
        .iter()
        .filter(|t| criteria.r#type.is_none_or(|ty| t.r#type == ty))
        .filter(|t| needle.is_empty() || t.description.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}
