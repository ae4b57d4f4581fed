// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use finsight::models::{PaymentMethod, TransactionInput, TransactionType};
use finsight::storage::MemoryStore;
use finsight::store::LedgerStore;
use finsight::{cli, commands::transactions};

fn setup() -> LedgerStore {
    let mut store = LedgerStore::open(Box::new(MemoryStore::new()));
    for (description, r#type, category_id, on) in [
        ("Gaji bulanan", TransactionType::Income, "cat_1", "2025-01-01"),
        ("Makan siang", TransactionType::Expense, "cat_3", "2025-01-02"),
        ("Bensin", TransactionType::Expense, "cat_4", "2025-01-03"),
    ] {
        store
            .create(TransactionInput {
                date: NaiveDate::parse_from_str(on, "%Y-%m-%d").unwrap(),
                description: description.into(),
                amount: Decimal::from(10_000),
                r#type,
                category_id: category_id.into(),
                payment_method: PaymentMethod::Cash,
            })
            .unwrap();
    }
    store
}

fn list_matches(argv: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            return list_m.clone();
        }
        panic!("no list subcommand");
    }
    panic!("no tx subcommand");
}

#[test]
fn list_limit_respected() {
    let store = setup();
    let list_m = list_matches(&["finsight", "tx", "list", "--limit", "2"]);
    let rows = transactions::query_rows(&store, &list_m).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-03");
}

#[test]
fn list_type_and_search_flags_compose() {
    let store = setup();
    let list_m = list_matches(&[
        "finsight", "tx", "list", "--type", "expense", "--search", "makan",
    ]);
    let rows = transactions::query_rows(&store, &list_m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Makan siang");
}

#[test]
fn list_rows_render_signed_amounts_and_category_labels() {
    let store = setup();
    let list_m = list_matches(&["finsight", "tx", "list"]);
    let rows = transactions::query_rows(&store, &list_m).unwrap();
    assert_eq!(rows.len(), 3);
    // newest first; Bensin is an expense in Transportasi
    assert!(rows[0].amount.starts_with("- Rp 10.000"));
    assert!(rows[0].category.contains("Transportasi"));
    let salary = rows.iter().find(|r| r.description == "Gaji bulanan").unwrap();
    assert!(salary.amount.starts_with("+ Rp 10.000"));
}

#[test]
fn list_rejects_unknown_type_value() {
    let store = setup();
    let list_m = list_matches(&["finsight", "tx", "list", "--type", "sideways"]);
    assert!(transactions::query_rows(&store, &list_m).is_err());
}
