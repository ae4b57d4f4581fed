// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use finsight::filter::FilterCriteria;
use finsight::models::{PaymentMethod, SummaryStats, TransactionInput, TransactionType};
use finsight::stats::summarize;
use finsight::storage::MemoryStore;
use finsight::store::LedgerStore;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn input(
    description: &str,
    amount: i64,
    r#type: TransactionType,
    category_id: &str,
    on: &str,
    payment_method: PaymentMethod,
) -> TransactionInput {
    TransactionInput {
        date: date(on),
        description: description.into(),
        amount: Decimal::from(amount),
        r#type,
        category_id: category_id.into(),
        payment_method,
    }
}

fn setup() -> LedgerStore {
    LedgerStore::open(Box::new(MemoryStore::new()))
}

#[test]
fn empty_ledger_yields_all_zero_stats() {
    assert_eq!(summarize(&[]), SummaryStats::ZERO);
}

#[test]
fn partitions_by_type_and_balance_is_income_minus_expense() {
    let mut store = setup();
    store
        .create(input("salary", 1_000, TransactionType::Income, "cat_1", "2024-01-01", PaymentMethod::Transfer))
        .unwrap();
    store
        .create(input("bonus", 500, TransactionType::Income, "cat_2", "2024-01-15", PaymentMethod::Transfer))
        .unwrap();
    store
        .create(input("groceries", 300, TransactionType::Expense, "cat_5", "2024-01-20", PaymentMethod::Cash))
        .unwrap();
    store
        .create(input("bills", 400, TransactionType::Expense, "cat_6", "2024-01-25", PaymentMethod::EWallet))
        .unwrap();

    let stats = store.stats();
    assert_eq!(stats.total_income, Decimal::from(1_500));
    assert_eq!(stats.total_expense, Decimal::from(700));
    assert_eq!(stats.balance, stats.total_income - stats.total_expense);
    assert_eq!(stats.balance, Decimal::from(800));
}

#[test]
fn balance_may_go_negative() {
    let mut store = setup();
    store
        .create(input("rent", 900, TransactionType::Expense, "cat_6", "2024-03-01", PaymentMethod::Transfer))
        .unwrap();
    store
        .create(input("tip", 100, TransactionType::Income, "cat_2", "2024-03-02", PaymentMethod::Cash))
        .unwrap();
    assert_eq!(store.stats().balance, Decimal::from(-800));
}

#[test]
fn summarize_is_pure_and_repeatable() {
    let mut store = setup();
    store
        .create(input("salary", 42, TransactionType::Income, "cat_1", "2024-01-01", PaymentMethod::Transfer))
        .unwrap();
    let before: Vec<_> = store.snapshot().iter().map(|t| t.id).collect();

    let first = store.stats();
    let second = store.stats();

    assert_eq!(first, second);
    let after: Vec<_> = store.snapshot().iter().map(|t| t.id).collect();
    assert_eq!(before, after);
}

#[test]
fn salary_then_lunch_sums_and_searches() {
    let mut store = setup();
    store
        .create(input("Gaji bulanan", 5_000_000, TransactionType::Income, "cat_1", "2024-01-01", PaymentMethod::Transfer))
        .unwrap();
    let lunch = store
        .create(input("Makan siang", 25_000, TransactionType::Expense, "cat_3", "2024-01-02", PaymentMethod::Cash))
        .unwrap();

    let stats = store.stats();
    assert_eq!(stats.total_income, Decimal::from(5_000_000));
    assert_eq!(stats.total_expense, Decimal::from(25_000));
    assert_eq!(stats.balance, Decimal::from(4_975_000));

    let found = store.filtered(&FilterCriteria {
        r#type: None,
        search: "makan".into(),
    });
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, lunch.id);
}
