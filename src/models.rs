// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which bucket a line item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Income,
    Expense,
}

impl ItemType {
    /// Short tag used in composite item ids (`inc-3`, `exp-0`).
    pub fn tag(self) -> &'static str {
        match self {
            ItemType::Income => "inc",
            ItemType::Expense => "exp",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: u64,
    pub kind: ItemType,
    pub description: String,
    pub amount: Decimal,
}

impl LineItem {
    pub fn dom_id(&self) -> String {
        format!("{}-{}", self.kind.tag(), self.id)
    }
}

/// `None` means there is no income to compare against.
pub type Percentage = Option<i64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub budget: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub percentage: Percentage,
}
