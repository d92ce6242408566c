// Copyright © 2024 SiteFrame. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line interface for SiteFrame
//!
//! Resolves the site configuration and hands it to the builder on stdout, or
//! checks a configuration file without printing it.
//!
//! # Examples
//!
//! ```
//! use siteframe::cli;
//!
//! let matches = cli::build().get_matches_from(vec![
//!     "siteframe",
//!     "show",
//!     "--format",
//!     "yaml",
//! ]);
//!
//! let show = matches.subcommand_matches("show").unwrap();
//! assert_eq!(show.get_one::<String>("format").unwrap(), "yaml");
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};

use crate::clock::FixedClock;
use crate::core::config::ConfigBuilder;
use crate::core::error::{Result, SiteFrameError};
use crate::model::SiteConfig;
use crate::output::{self, Format};

/// The current version of SiteFrame, as defined in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of environment variables that override configuration fields.
pub const ENV_PREFIX: &str = "SITEFRAME";

/// Builds and configures the SiteFrame command-line interface.
pub fn build() -> Command {
    debug!("Building CLI command structure");

    let config_arg = Arg::new("config")
        .short('c')
        .long("config")
        .help("Configuration file (.toml, .yaml, .yml or .json); defaults to the built-in site")
        .value_parser(value_parser!(PathBuf));

    Command::new("siteframe")
        .author("SiteFrame Contributors")
        .about("Resolves and validates a static site's configuration record.")
        .version(VERSION)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v, -vv)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("show")
                .about("Resolve the configuration and print it for the builder")
                .arg(config_arg.clone())
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format")
                        .value_parser(Format::NAMES)
                        .default_value("json"),
                )
                .arg(
                    Arg::new("year")
                        .long("year")
                        .help("Pin the copyright year instead of reading the clock")
                        .value_parser(value_parser!(i32)),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Resolve and validate the configuration without printing it")
                .arg(config_arg),
        )
}

/// Maps the `-v` count to a log level filter.
pub fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Executes a parsed command line, writing results to `out`.
pub fn execute<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<()> {
    match matches.subcommand() {
        Some(("show", sub_matches)) => {
            let format: Format = sub_matches
                .get_one::<String>("format")
                .map_or(Ok(Format::default()), |f| f.parse())?;
            let config = resolve(sub_matches, sub_matches.get_one::<i32>("year").copied())?;
            let text = output::render(&config, format)?;
            write_out(out, &text)
        }
        Some(("check", sub_matches)) => {
            let config = resolve(sub_matches, None)?;
            info!("Configuration for '{}' is valid", config.title);
            write_out(
                out,
                &format!(
                    "ok: {} ({} presets, {} plugins)\n",
                    config.title,
                    config.presets.len(),
                    config.plugins.len()
                ),
            )
        }
        _ => Err(SiteFrameError::config_error(
            "command",
            "unknown command, use --help",
        )),
    }
}

fn resolve(matches: &ArgMatches, year: Option<i32>) -> Result<Arc<SiteConfig>> {
    let mut builder = ConfigBuilder::new().with_env_prefix(ENV_PREFIX);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        info!("Loading configuration from {}", path.display());
        builder = builder.with_file(path);
    }
    if let Some(year) = year {
        builder = builder.with_clock(FixedClock(year));
    }
    builder.build()
}

fn write_out<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .map_err(|e| SiteFrameError::io_error(PathBuf::from("<stdout>"), e))
}
