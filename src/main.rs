// Copyright © 2024 SiteFrame. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # SiteFrame CLI
//!
//! This is the main entry point for the SiteFrame command-line interface.
//! It initialises the logger, resolves the site configuration and prints it
//! (or a validation summary) for the static-site builder.

use std::io;

use anyhow::Context;
use log::info;
use siteframe::cli;

/// Parses the command line, sets up logging and runs the command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, resolved or
/// validated, or if the output cannot be written.
fn run() -> Result<(), anyhow::Error> {
    let matches = cli::build().get_matches();

    env_logger::Builder::new()
        .filter_level(cli::log_level(matches.get_count("verbose")))
        .parse_default_env()
        .init();
    info!("Starting SiteFrame v{}", cli::VERSION);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::execute(&matches, &mut out)
        .context("Failed to resolve the site configuration")?;

    info!("SiteFrame completed successfully");
    Ok(())
}

/// The main entry point for the SiteFrame CLI.
fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
