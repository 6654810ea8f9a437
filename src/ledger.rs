// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory income/expense ledger with running totals.
//!
//! Totals are maintained incrementally on every add and delete; the net budget
//! and the spend percentage are recomputed from the totals after each mutation.

use crate::error::LedgerError;
use crate::models::{BudgetSummary, ItemType, LineItem, Percentage};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

#[derive(Debug, Default, Clone)]
struct Buckets {
    income: Vec<LineItem>,
    expense: Vec<LineItem>,
}

impl Buckets {
    fn get(&self, kind: ItemType) -> &Vec<LineItem> {
        match kind {
            ItemType::Income => &self.income,
            ItemType::Expense => &self.expense,
        }
    }

    fn get_mut(&mut self, kind: ItemType) -> &mut Vec<LineItem> {
        match kind {
            ItemType::Income => &mut self.income,
            ItemType::Expense => &mut self.expense,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    income: Decimal,
    expense: Decimal,
}

impl Totals {
    fn get(&self, kind: ItemType) -> Decimal {
        match kind {
            ItemType::Income => self.income,
            ItemType::Expense => self.expense,
        }
    }

    fn get_mut(&mut self, kind: ItemType) -> &mut Decimal {
        match kind {
            ItemType::Income => &mut self.income,
            ItemType::Expense => &mut self.expense,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Ledger {
    items: Buckets,
    totals: Totals,
    budget: Decimal,
    percentage: Percentage,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new item and returns it.
    ///
    /// The id is one past the id of the last item in the bucket, or 0 when the
    /// bucket is empty. Deleting the last item therefore frees its id for reuse.
    pub fn add_item(
        &mut self,
        kind: ItemType,
        description: &str,
        amount: Decimal,
    ) -> Result<LineItem, LedgerError> {
        if amount <= Decimal::ZERO {
            warn!(%kind, %amount, "rejected non-positive amount");
            return Err(LedgerError::InvalidInput(format!(
                "amount must be positive, got {}",
                amount
            )));
        }
        let new_total = self.totals.get(kind).checked_add(amount).ok_or_else(|| {
            LedgerError::InvalidInput(format!("adding {} overflows the {} total", amount, kind))
        })?;

        let bucket = self.items.get_mut(kind);
        let id = bucket.last().map_or(0, |last| last.id + 1);
        let item = LineItem {
            id,
            kind,
            description: description.to_string(),
            amount,
        };
        bucket.push(item.clone());
        *self.totals.get_mut(kind) = new_total;
        self.recalculate();

        debug!(%kind, id, %amount, "item added");
        Ok(item)
    }

    pub fn delete_item(&mut self, kind: ItemType, id: u64) -> Result<(), LedgerError> {
        let bucket = self.items.get_mut(kind);
        let Some(pos) = bucket.iter().position(|i| i.id == id) else {
            warn!(%kind, id, "delete of unknown item");
            return Err(LedgerError::ItemNotFound { kind, id });
        };
        let removed = bucket.remove(pos);
        *self.totals.get_mut(kind) -= removed.amount;
        self.recalculate();

        debug!(%kind, id, amount = %removed.amount, "item deleted");
        Ok(())
    }

    pub fn get_budget(&self) -> BudgetSummary {
        BudgetSummary {
            budget: self.budget,
            total_income: self.totals.income,
            total_expense: self.totals.expense,
            percentage: self.percentage,
        }
    }

    pub fn items(&self, kind: ItemType) -> &[LineItem] {
        self.items.get(kind)
    }

    pub fn item(&self, kind: ItemType, id: u64) -> Option<&LineItem> {
        self.items.get(kind).iter().find(|i| i.id == id)
    }

    /// Share of total income taken by each expense item, in insertion order.
    pub fn expense_percentages(&self) -> Vec<(u64, Percentage)> {
        self.items
            .expense
            .iter()
            .map(|e| (e.id, percent_of(e.amount, self.totals.income)))
            .collect()
    }

    fn recalculate(&mut self) {
        self.budget = self.totals.income - self.totals.expense;
        self.percentage = percent_of(self.totals.expense, self.totals.income);
    }
}

/// `round(100 * part / whole)` with halves rounded away from zero, or `None`
/// when `whole` is not positive.
pub fn percent_of(part: Decimal, whole: Decimal) -> Percentage {
    if whole <= Decimal::ZERO {
        return None;
    }
    // Scaling first keeps exact halves exact; near the top of the range it
    // overflows, so divide first there instead.
    let pct = match part.checked_mul(Decimal::ONE_HUNDRED) {
        Some(scaled) => scaled.checked_div(whole)?,
        None => part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)?,
    };
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}
