// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Line-oriented front end for the ledger.
//!
//! All input validation happens here; the ledger only ever sees a known item
//! type, a non-empty description and a positive amount.

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::{ItemType, LineItem};
use crate::utils::{
    fmt_budget, fmt_number, fmt_percentage, month_label, parse_add_args, parse_item_ref,
    pretty_table, to_json,
};
use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use serde_json::json;
use std::io::{BufRead, Write};
use tracing::info;

const HELP: &str = "\
Commands:
  add <inc|exp> <description> <amount>   record an item
  del <inc|exp>-<id>                     remove an item
  show                                   current budget
  list                                   all items
  json                                   budget and items as JSON
  export <csv|json>                      dump items
  help                                   this text
  quit                                   leave the session";

#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub json: bool,
    pub today: NaiveDate,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle(settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    let opts = SessionOptions {
        json: m.get_flag("json"),
        today: Local::now().date_naive(),
    };
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut ledger = Ledger::new();
    run(&mut ledger, settings, opts, stdin.lock(), &mut stdout)
}

/// Reads commands until `quit` or end of input. Bad input is reported and the
/// session carries on; only I/O failures end it early.
pub fn run<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    settings: &Settings,
    opts: SessionOptions,
    input: R,
    out: &mut W,
) -> Result<()> {
    info!("session started");
    write_summary(ledger, settings, opts, out)?;
    for line in input.lines() {
        let line = line?;
        match execute(ledger, settings, opts, &line, out) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => writeln!(out, "Error: {:#}", e)?,
        }
        out.flush()?;
    }
    info!("session ended");
    Ok(())
}

pub fn execute<W: Write>(
    ledger: &mut Ledger,
    settings: &Settings,
    opts: SessionOptions,
    line: &str,
    out: &mut W,
) -> Result<Flow> {
    let line = line.trim();
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match cmd.to_lowercase().as_str() {
        "" => {}
        "add" => {
            let (kind, desc, amount) = parse_add_args(rest)?;
            let item = ledger.add_item(kind, &desc, amount)?;
            writeln!(
                out,
                "Added {}: {} {}",
                item.dom_id(),
                item.description,
                fmt_number(&item.amount, item.kind)
            )?;
            write_summary(ledger, settings, opts, out)?;
        }
        "del" | "delete" | "rm" => {
            let (kind, id) = parse_item_ref(rest)?;
            ledger.delete_item(kind, id)?;
            writeln!(out, "Deleted {}-{}", kind.tag(), id)?;
            write_summary(ledger, settings, opts, out)?;
        }
        "show" => write_summary(ledger, settings, SessionOptions { json: false, ..opts }, out)?,
        "list" => write_items(ledger, settings, out)?,
        "json" => {
            let doc = json!({
                "currency": settings.currency,
                "summary": ledger.get_budget(),
                "income": ledger.items(ItemType::Income),
                "expense": ledger.items(ItemType::Expense),
            });
            writeln!(out, "{}", to_json(&doc)?)?;
        }
        "export" => export(ledger, rest.trim(), out)?,
        "help" | "?" => writeln!(out, "{}", HELP)?,
        "quit" | "exit" => return Ok(Flow::Quit),
        other => bail!("Unknown command '{}' (try 'help')", other),
    }
    Ok(Flow::Continue)
}

pub fn write_summary<W: Write>(
    ledger: &Ledger,
    settings: &Settings,
    opts: SessionOptions,
    out: &mut W,
) -> Result<()> {
    let s = ledger.get_budget();
    if opts.json {
        writeln!(out, "{}", serde_json::to_string(&s)?)?;
        return Ok(());
    }
    writeln!(
        out,
        "Available budget in {}: {} {}",
        month_label(opts.today),
        fmt_budget(&s.budget),
        settings.currency
    )?;
    writeln!(out, "  Income:   {}", fmt_number(&s.total_income, ItemType::Income))?;
    writeln!(
        out,
        "  Expenses: {}  {}",
        fmt_number(&s.total_expense, ItemType::Expense),
        fmt_percentage(s.percentage, &settings.placeholder)
    )?;
    Ok(())
}

fn write_items<W: Write>(ledger: &Ledger, settings: &Settings, out: &mut W) -> Result<()> {
    let income: Vec<Vec<String>> = ledger
        .items(ItemType::Income)
        .iter()
        .map(|i| vec![i.dom_id(), i.description.clone(), fmt_number(&i.amount, i.kind)])
        .collect();
    writeln!(out, "{}", pretty_table(&["Id", "Income", "Value"], income))?;

    let shares = ledger.expense_percentages();
    let expense: Vec<Vec<String>> = ledger
        .items(ItemType::Expense)
        .iter()
        .zip(shares)
        .map(|(e, (_, pct))| {
            vec![
                e.dom_id(),
                e.description.clone(),
                fmt_number(&e.amount, e.kind),
                fmt_percentage(pct, &settings.placeholder),
            ]
        })
        .collect();
    writeln!(out, "{}", pretty_table(&["Id", "Expense", "Value", "%"], expense))?;
    Ok(())
}

fn export<W: Write>(ledger: &Ledger, format: &str, out: &mut W) -> Result<()> {
    let items: Vec<&LineItem> = ledger
        .items(ItemType::Income)
        .iter()
        .chain(ledger.items(ItemType::Expense))
        .collect();
    match format.to_lowercase().as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            wtr.write_record(["type", "id", "description", "amount"])?;
            for i in items {
                wtr.write_record([
                    i.kind.tag().to_string(),
                    i.id.to_string(),
                    i.description.clone(),
                    i.amount.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => writeln!(out, "{}", to_json(&items)?)?,
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    Ok(())
}
