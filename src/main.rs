/* hwtrig | main.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Prints the servo trig table to stdout */

/******************************************************************************/

use std::env::var;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use hwtrig::{write_table, TableConfig};
use log::error;

/******************************************************************************/

const LOG_VAR: &str = "HWTRIG_LOG";

fn main() -> ExitCode {
    let filters = var(LOG_VAR).unwrap_or_else(|_| "info".to_string());
    if pretty_env_logger::formatted_builder().parse_filters(&filters).try_init().is_err() {
        eprintln!("could not init logger");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match write_table(&TableConfig::default(), &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
