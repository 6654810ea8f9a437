// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{Settings, load_from, save_to};
use crate::utils::pretty_table;
use anyhow::Result;
use std::path::Path;

pub fn handle(path: &Path, effective: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let rows = vec![
                vec!["file".to_string(), path.display().to_string()],
                vec!["currency".to_string(), effective.currency.clone()],
                vec!["placeholder".to_string(), effective.placeholder.clone()],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("set", sub)) => {
            let updated = apply(load_from(path)?, sub);
            save_to(path, &updated)?;
            println!("Settings saved to {}", path.display());
        }
        _ => println!("{}", usage()),
    }
    Ok(())
}

/// Help text for the `config` subcommand.
pub fn usage() -> String {
    let mut cli = crate::cli::build_cli();
    match cli.find_subcommand_mut("config") {
        Some(cmd) => cmd.render_help().to_string(),
        None => String::new(),
    }
}

/// Copies any values given on the command line over `current`.
pub fn apply(mut current: Settings, sub: &clap::ArgMatches) -> Settings {
    if let Some(ccy) = sub.get_one::<String>("currency") {
        current.currency = ccy.trim().to_uppercase();
    }
    if let Some(p) = sub.get_one::<String>("placeholder") {
        current.placeholder = p.clone();
    }
    current
}
