// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog;
use crate::store::LedgerStore;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;
use uuid::Uuid;

/// Check every transaction invariant over the loaded ledger. Snapshots are
/// trusted at load time, so a hand-edited file can carry violations; this is
/// where they surface.
pub fn handle(store: &LedgerStore) -> Result<()> {
    let mut rows = Vec::new();
    let mut seen: HashSet<Uuid> = HashSet::new();

    for t in store.snapshot() {
        if !seen.insert(t.id) {
            rows.push(vec!["duplicate_id".into(), t.id.to_string()]);
        }
        if t.description.trim().is_empty() {
            rows.push(vec!["empty_description".into(), t.id.to_string()]);
        }
        if t.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("{} {}", t.id, t.amount),
            ]);
        }
        match catalog::category_by_id(&t.category_id) {
            None => rows.push(vec![
                "unknown_category".into(),
                format!("{} {}", t.id, t.category_id),
            ]),
            Some(c) if c.r#type != t.r#type => rows.push(vec![
                "category_type_mismatch".into(),
                format!("{} {} on {} transaction", t.id, c.id, t.r#type),
            ]),
            Some(_) => {}
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
