// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::CATEGORIES;
use crate::utils::{maybe_print_json, parse_type, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let r#type = sub
                .get_one::<String>("type")
                .map(|s| parse_type(s))
                .transpose()?;
            let cats: Vec<_> = CATEGORIES
                .iter()
                .filter(|c| r#type.is_none_or(|ty| c.r#type == ty))
                .collect();
            if !maybe_print_json(json_flag, jsonl_flag, &cats)? {
                let rows: Vec<Vec<String>> = cats
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.to_string(),
                            c.label(),
                            c.r#type.to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Category", "Type"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
