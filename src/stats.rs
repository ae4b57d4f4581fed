// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{SummaryStats, Transaction, TransactionType};

/// Derive summary statistics from a ledger snapshot.
///
/// Single pass; amounts are summed with exact `Decimal` addition. The
/// balance may be negative. An empty snapshot yields all-zero stats.
pub fn summarize(transactions: &[Transaction]) -> SummaryStats {
    let mut stats = SummaryStats::ZERO;
    for t in transactions {
        match t.r#type {
            TransactionType::Income => stats.total_income += t.amount,
            TransactionType::Expense => stats.total_expense += t.amount,
        }
    }
    stats.balance = stats.total_income - stats.total_expense;
    stats
}
