// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgety::commands::session::{self, Flow, SessionOptions};
use budgety::config::Settings;
use budgety::ledger::Ledger;
use budgety::models::{BudgetSummary, ItemType};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::io::Cursor;

fn opts(json: bool) -> SessionOptions {
    SessionOptions {
        json,
        today: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
    }
}

fn run_script(script: &str, json: bool) -> (Ledger, String) {
    let mut ledger = Ledger::new();
    let mut out = Vec::new();
    session::run(
        &mut ledger,
        &Settings::default(),
        opts(json),
        Cursor::new(script.to_string()),
        &mut out,
    )
    .unwrap();
    (ledger, String::from_utf8(out).unwrap())
}

#[test]
fn add_and_delete_update_summary() {
    let (ledger, out) = run_script(
        "add inc Salary 1000\nadd exp Rent 300\nadd inc Bonus 500\ndel exp-0\n",
        false,
    );
    assert!(out.contains("Available budget in October 2026: + 0.00 USD"));
    assert!(out.contains("Added inc-0: Salary + 1,000.00"));
    assert!(out.contains("Added exp-0: Rent - 300.00"));
    assert!(out.contains("  Expenses: - 300.00  30%"));
    assert!(out.contains("Added inc-1: Bonus + 500.00"));
    assert!(out.contains("  Expenses: - 300.00  20%"));
    assert!(out.contains("Deleted exp-0"));
    assert!(out.trim_end().ends_with("  Expenses: - 0.00  ---"));

    let s = ledger.get_budget();
    assert_eq!(s.budget, dec!(1500));
    assert_eq!(s.percentage, Some(0));
}

#[test]
fn invalid_input_is_reported_and_session_continues() {
    let (ledger, out) = run_script(
        "add inc Salary nope\nadd exp Rent -5\nadd inc 100\ndel exp-3\nfrobnicate\nadd exp Rent 300\n",
        false,
    );
    assert_eq!(out.matches("Error:").count(), 5);
    assert!(out.contains("Error: No exp item with id 3"));
    assert!(out.contains("Unknown command 'frobnicate'"));
    assert_eq!(ledger.items(ItemType::Expense).len(), 1);
    assert_eq!(ledger.get_budget().total_expense, dec!(300));
}

#[test]
fn quit_stops_reading_input() {
    let (ledger, _) = run_script("add inc Salary 1000\nquit\nadd inc Bonus 500\n", false);
    assert_eq!(ledger.items(ItemType::Income).len(), 1);
}

#[test]
fn json_mode_prints_machine_readable_summary() {
    let (_, out) = run_script("add inc Salary 1000\nadd exp Rent 250\n", true);
    let last = out.lines().last().unwrap();
    let s: BudgetSummary = serde_json::from_str(last).unwrap();
    assert_eq!(s.budget, dec!(750));
    assert_eq!(s.percentage, Some(25));
}

#[test]
fn unknown_percentage_is_null_in_json() {
    let (_, out) = run_script("add exp Rent 250\n", true);
    let v: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
    assert!(v["percentage"].is_null());
}

#[test]
fn json_command_includes_items() {
    let (_, out) = run_script("add inc Salary 1000\nadd exp Rent 250\njson\n", false);
    let start = out.find("{\n").unwrap();
    let v: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();
    assert_eq!(v["currency"], "USD");
    assert_eq!(v["income"][0]["description"], "Salary");
    assert_eq!(v["expense"][0]["kind"], "expense");
    assert_eq!(v["summary"]["percentage"], 25);
}

#[test]
fn list_shows_ids_and_expense_shares() {
    let (_, out) = run_script(
        "add inc Salary 1000\nadd exp Rent 300\nadd exp Snacks 2\nlist\n",
        false,
    );
    assert!(out.contains("inc-0"));
    assert!(out.contains("exp-1"));
    assert!(out.contains("30%"));
    // 0.2% rounds to zero and is shown as the placeholder
    let snacks = out.lines().find(|l| l.contains("Snacks") && l.contains("│")).unwrap();
    assert!(snacks.contains("---"));
}

#[test]
fn export_csv_lists_every_item() {
    let (_, out) = run_script(
        "add inc Salary 1000\nadd exp Rent, flat 300.50\nexport csv\n",
        false,
    );
    assert!(out.contains("type,id,description,amount"));
    assert!(out.contains("inc,0,Salary,1000"));
    assert!(out.contains("exp,0,\"Rent, flat\",300.50"));
}

#[test]
fn export_rejects_unknown_format() {
    let (_, out) = run_script("export xml\n", false);
    assert!(out.contains("Error: Unknown format: xml"));
}

#[test]
fn execute_handles_single_commands() {
    let mut ledger = Ledger::new();
    let settings = Settings::default();
    let mut out = Vec::new();
    let flow = session::execute(&mut ledger, &settings, opts(false), "", &mut out).unwrap();
    assert_eq!(flow, Flow::Continue);
    let flow = session::execute(&mut ledger, &settings, opts(false), "EXIT", &mut out).unwrap();
    assert_eq!(flow, Flow::Quit);
    assert!(session::execute(&mut ledger, &settings, opts(false), "del inc-0", &mut out).is_err());
}
