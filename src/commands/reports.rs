// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog;
use crate::models::TransactionType;
use crate::store::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use std::collections::BTreeMap;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let stats = store.stats();
    if !maybe_print_json(json_flag, jsonl_flag, &stats)? {
        let rows = vec![
            vec!["Total income".to_string(), fmt_money(&stats.total_income)],
            vec!["Total expense".to_string(), fmt_money(&stats.total_expense)],
            vec!["Balance".to_string(), fmt_money(&stats.balance)],
        ];
        println!("{}", pretty_table(&["Stat", "Amount"], rows));
    }
    Ok(())
}

fn spend_by_category(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mut totals: BTreeMap<&str, rust_decimal::Decimal> = BTreeMap::new();
    for t in store.snapshot() {
        if t.r#type != TransactionType::Expense {
            continue;
        }
        // Unknown ids fold into the catch-all category, as the dashboard does.
        let name = catalog::category_by_id(&t.category_id)
            .map(|c| c.name)
            .unwrap_or("Lainnya");
        *totals.entry(name).or_default() += t.amount;
    }

    let data: Vec<Vec<String>> = totals
        .iter()
        .map(|(name, total)| vec![name.to_string(), fmt_money(total)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}
