// Copyright © 2024 SiteFrame. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # SiteFrame Library
//!
//! SiteFrame describes a static blog/documentation site as one typed,
//! immutable configuration record: identity, deployment target, link policies,
//! locales, content presets, navbar, footer, highlighting themes and plugin
//! wiring. The record is resolved once per build and handed wholesale to the
//! external site builder.
//!
//! Resolution is pure apart from one input: the current calendar year, read
//! through a [`Clock`](crate::core::traits::Clock) for the footer copyright.
//! Every invariant is checked before a record is returned; a violation fails
//! with an error naming the offending field.

#![doc = include_str!("../README.md")]
#![crate_name = "siteframe"]
#![crate_type = "lib"]

use std::sync::Arc;

use crate::core::config::ConfigBuilder;
use crate::core::error::Result;
use crate::core::traits::Clock;
use crate::model::SiteConfig;

/// Module containing the configuration builder, error types and traits.
pub mod core;

/// Provides calendar sources for the copyright year.
pub mod clock;

/// Provides command-line interface utilities.
pub mod cli;

/// Provides the typed site configuration record.
pub mod model;

/// Provides serialisation of resolved records for the builder.
pub mod output;

/// Provides the descriptor of the site this repository builds.
pub mod site;

/// Provides template resolution for text fields.
pub mod template;

/// Provides invariant checking.
pub mod validate;

pub use crate::core::error::SiteFrameError;

/// Produces the resolved configuration record of the site.
///
/// Reads the system clock for the copyright year and nothing else; two calls
/// within the same calendar year return equal records.
///
/// # Errors
///
/// Returns a configuration error naming the violated field if the
/// descriptor breaks an invariant.
pub fn produce_config() -> Result<Arc<SiteConfig>> {
    ConfigBuilder::new().build()
}

/// Produces the resolved configuration record using `clock` for the year.
///
/// # Errors
///
/// See [`produce_config`].
pub fn produce_config_with<C: Clock + 'static>(
    clock: C,
) -> Result<Arc<SiteConfig>> {
    ConfigBuilder::new().with_clock(clock).build()
}
