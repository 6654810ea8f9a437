// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{ItemType, Percentage};
use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Once;

static ITEM_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(inc|exp)-(\d+)$").expect("valid item ref regex"));

// type, description (may contain spaces), amount
static ADD_ARGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+)\s+(.+?)\s+(\S+)$").expect("valid add regex"));

static TRACING_INIT: Once = Once::new();

/// Installs the stderr fmt subscriber; `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("budgety=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d <= Decimal::ZERO {
        bail!("Amount must be greater than zero, got '{}'", s);
    }
    Ok(d)
}

pub fn parse_item_type(s: &str) -> Result<ItemType> {
    match s.to_lowercase().as_str() {
        "inc" | "income" | "+" => Ok(ItemType::Income),
        "exp" | "expense" | "-" => Ok(ItemType::Expense),
        other => Err(anyhow!("Unknown item type '{}', expected inc|exp", other)),
    }
}

/// Splits a composite id such as `exp-4` into its bucket and numeric id.
pub fn parse_item_ref(s: &str) -> Result<(ItemType, u64)> {
    let caps = ITEM_REF
        .captures(s.trim())
        .with_context(|| format!("Invalid item id '{}', expected inc-<n> or exp-<n>", s))?;
    let kind = parse_item_type(&caps[1])?;
    let id = caps[2]
        .parse::<u64>()
        .with_context(|| format!("Item id out of range in '{}'", s))?;
    Ok((kind, id))
}

/// Parses `<type> <description...> <amount>`.
pub fn parse_add_args(s: &str) -> Result<(ItemType, String, Decimal)> {
    let caps = ADD_ARGS
        .captures(s.trim())
        .context("Usage: add <inc|exp> <description> <amount>")?;
    let kind = parse_item_type(&caps[1])?;
    let desc = caps[2].trim().to_string();
    if desc.is_empty() {
        bail!("Description must not be empty");
    }
    let amount = parse_amount(&caps[3])?;
    Ok((kind, desc, amount))
}

/// `1234.5` as income renders `+ 1,234.50`; as expense `- 1,234.50`.
pub fn fmt_number(d: &Decimal, kind: ItemType) -> String {
    let sign = match kind {
        ItemType::Income => '+',
        ItemType::Expense => '-',
    };
    let fixed = format!(
        "{:.2}",
        d.abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    );
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{} {}.{}", sign, group_thousands(int_part), frac_part)
}

pub fn fmt_budget(d: &Decimal) -> String {
    if d.is_sign_negative() && !d.is_zero() {
        fmt_number(d, ItemType::Expense)
    } else {
        fmt_number(d, ItemType::Income)
    }
}

/// Zero and unknown percentages both render as the placeholder.
pub fn fmt_percentage(p: Percentage, placeholder: &str) -> String {
    match p {
        Some(v) if v > 0 => format!("{}%", v),
        _ => placeholder.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn to_json<T: serde::Serialize>(v: &T) -> Result<String> {
    serde_json::to_string_pretty(v).context("Failed to serialize to JSON")
}
