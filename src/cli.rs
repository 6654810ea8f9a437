// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command};

pub fn build_cli() -> Command {
    command!()
        .name("budgety")
        .about("Track income and expenses, see what is left to spend")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .help("Settings file to use instead of the platform default"),
        )
        .subcommand(
            Command::new("session")
                .about("Start an interactive budgeting session (reads commands from stdin)")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the budget summary as JSON after each change"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(Command::new("show").about("Print effective settings"))
                .subcommand(
                    Command::new("set")
                        .about("Update the settings file")
                        .arg(Arg::new("currency").long("currency").value_name("CCY"))
                        .arg(
                            Arg::new("placeholder")
                                .long("placeholder")
                                .value_name("TEXT")
                                .help("Shown in place of the percentage while income is zero"),
                        ),
                ),
        )
}
