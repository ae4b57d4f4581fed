// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, TransactionType};

/// The closed category set. Loaded at compile time; not user-editable.
pub static CATEGORIES: [Category; 9] = [
    Category {
        id: "cat_1",
        name: "Gaji",
        icon: "💰",
        r#type: TransactionType::Income,
    },
    Category {
        id: "cat_2",
        name: "Bonus/Sampingan",
        icon: "🎁",
        r#type: TransactionType::Income,
    },
    Category {
        id: "cat_3",
        name: "Makanan & Minuman",
        icon: "🍔",
        r#type: TransactionType::Expense,
    },
    Category {
        id: "cat_4",
        name: "Transportasi",
        icon: "🚗",
        r#type: TransactionType::Expense,
    },
    Category {
        id: "cat_5",
        name: "Belanja",
        icon: "🛍️",
        r#type: TransactionType::Expense,
    },
    Category {
        id: "cat_6",
        name: "Tagihan & Utilitas",
        icon: "💡",
        r#type: TransactionType::Expense,
    },
    Category {
        id: "cat_7",
        name: "Hiburan",
        icon: "🎬",
        r#type: TransactionType::Expense,
    },
    Category {
        id: "cat_8",
        name: "Kesehatan",
        icon: "🏥",
        r#type: TransactionType::Expense,
    },
    Category {
        id: "cat_9",
        name: "Lainnya",
        icon: "📝",
        r#type: TransactionType::Expense,
    },
];

impl Category {
    /// Icon-plus-name label used in list renderings.
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub fn categories_for_type(r#type: TransactionType) -> Vec<&'static Category> {
    CATEGORIES.iter().filter(|c| c.r#type == r#type).collect()
}

/// Resolve a CLI-supplied category reference, accepting either the catalog
/// id (`cat_3`) or the category name (case-insensitive).
pub fn resolve(reference: &str) -> Option<&'static Category> {
    category_by_id(reference).or_else(|| {
        CATEGORIES
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(reference))
    })
}
