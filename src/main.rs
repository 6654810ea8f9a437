// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use budgety::{cli, commands, config, utils};

fn main() -> Result<()> {
    utils::init_tracing();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = match matches.get_one::<String>("config") {
        Some(p) => PathBuf::from(p),
        None => config::config_path()?,
    };
    let settings = config::load(&path)?;

    match matches.subcommand() {
        Some(("session", sub)) => commands::session::handle(&settings, sub)?,
        Some(("config", sub)) => commands::config::handle(&path, &settings, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
