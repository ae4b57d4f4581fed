// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog;
use crate::filter::FilterCriteria;
use crate::models::{Transaction, TransactionInput, TransactionType};
use crate::store::LedgerStore;
use crate::utils::{
    fmt_money, maybe_print_json, parse_amount, parse_date, parse_id, parse_method, parse_type,
    pretty_table,
};
use anyhow::{Context, Result};
use serde::Serialize;

pub fn handle(store: &mut LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn read_input(sub: &clap::ArgMatches) -> Result<TransactionInput> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let r#type = parse_type(sub.get_one::<String>("type").unwrap())?;
    let payment_method = parse_method(sub.get_one::<String>("method").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().clone();
    let category_ref = sub.get_one::<String>("category").unwrap();
    let category = catalog::resolve(category_ref)
        .with_context(|| format!("Category '{}' not found", category_ref))?;
    Ok(TransactionInput {
        date,
        description,
        amount,
        r#type,
        category_id: category.id.to_string(),
        payment_method,
    })
}

fn add(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let input = read_input(sub)?;
    let tx = store.create(input)?;
    println!(
        "Recorded {} {} on {} '{}' (id: {})",
        tx.r#type,
        fmt_money(&tx.amount),
        tx.date,
        tx.description,
        tx.id
    );
    Ok(())
}

fn edit(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;
    let input = read_input(sub)?;
    let tx = store.update(id, input)?;
    println!(
        "Updated {} -> {} {} on {} '{}'",
        tx.id,
        tx.r#type,
        fmt_money(&tx.amount),
        tx.date,
        tx.description
    );
    Ok(())
}

fn rm(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;
    store.delete(id)?;
    println!("Removed transaction {}", id);
    Ok(())
}

fn list(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.method.clone(),
                    r.amount.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Category", "Method", "Amount", "Id"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub method: String,
    pub amount: String,
}

pub fn query_rows(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut criteria = FilterCriteria::default();
    if let Some(ty) = sub.get_one::<String>("type") {
        criteria.r#type = Some(parse_type(ty)?);
    }
    if let Some(term) = sub.get_one::<String>("search") {
        criteria.search = term.clone();
    }
    let mut txs = store.filtered(&criteria);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txs.truncate(*limit);
    }
    Ok(txs.iter().map(row_for).collect())
}

fn row_for(t: &Transaction) -> TransactionRow {
    let category = catalog::category_by_id(&t.category_id)
        .map(|c| c.label())
        .unwrap_or_else(|| "Unknown".to_string());
    let sign = match t.r#type {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };
    TransactionRow {
        id: t.id.to_string(),
        date: t.date.to_string(),
        description: t.description.clone(),
        category,
        method: t.payment_method.to_string(),
        amount: format!("{} {}", sign, fmt_money(&t.amount)),
    }
}
