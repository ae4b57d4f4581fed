// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as one JSON object per line"),
    ]
}

fn input_args() -> [Arg; 6] {
    [
        Arg::new("date")
            .long("date")
            .required(true)
            .help("Transaction date, YYYY-MM-DD"),
        Arg::new("amount")
            .long("amount")
            .required(true)
            .help("Positive amount"),
        Arg::new("type")
            .long("type")
            .required(true)
            .help("'income' or 'expense'"),
        Arg::new("category")
            .long("category")
            .required(true)
            .help("Category id (e.g. cat_3) or name"),
        Arg::new("method")
            .long("method")
            .required(true)
            .help("'cash', 'transfer' or 'e-wallet'"),
        Arg::new("description")
            .long("description")
            .required(true)
            .help("Free-text label"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("finsight")
        .version(clap::crate_version!())
        .about("Finsight: personal income/expense ledger")
        .subcommand(Command::new("init").about("Report where the ledger snapshot lives"))
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a new transaction")
                        .args(input_args()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Replace all fields of an existing transaction")
                        .arg(Arg::new("id").required(true).help("Transaction id"))
                        .args(input_args()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction (no-op if absent)")
                        .arg(Arg::new("id").required(true).help("Transaction id")),
                )
                .subcommand(
                    Command::new("list")
                        .about("Filtered history, most recent first")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .help("Keep only 'income' or 'expense' records"),
                        )
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive description match"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize))
                                .help("Show at most N records"),
                        )
                        .args(json_flags()),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived views over the ledger")
                .subcommand(
                    Command::new("summary")
                        .about("Total income, total expense and balance")
                        .args(json_flags()),
                )
                .subcommand(
                    Command::new("spend-by-category")
                        .about("Expense totals grouped by category")
                        .args(json_flags()),
                ),
        )
        .subcommand(
            Command::new("category").about("Category catalog").subcommand(
                Command::new("list")
                    .about("List the fixed categories")
                    .arg(
                        Arg::new("type")
                            .long("type")
                            .help("Keep only 'income' or 'expense' categories"),
                    )
                    .args(json_flags()),
            ),
        )
        .subcommand(Command::new("doctor").about("Scan the ledger for invariant violations"))
}
