/// The `config` module provides the configuration builder
pub mod config;

/// The `error` module provides error handling
pub mod error;

/// The `traits` module provides the clock and validation seams
pub mod traits;
