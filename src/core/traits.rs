//! # Core Traits Module
//!
//! The two seams of the configuration layer:
//!
//! - [`Clock`]: the only ambient input a resolution reads. Everything else
//!   in a record is deterministic, so swapping the clock is all it takes to
//!   make a build fully reproducible.
//! - [`Validate`]: implemented by every part of the record so the whole tree
//!   can be checked in one pass, collecting every violation with its field
//!   path.

use crate::core::error::ConfigDiagnostics;
use crate::validate::FieldPath;

/// Source of the current calendar year.
///
/// The year feeds the footer copyright line and nothing else.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Returns the current calendar year.
    fn current_year(&self) -> i32;
}

/// A part of the site configuration that can check its own invariants.
pub trait Validate {
    /// Records every violation found under `path` into `diag`.
    ///
    /// # Arguments
    ///
    /// * `path` - Field path of `self` within the record
    /// * `diag` - Collector for violations
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics);
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(inner) = self {
            inner.validate(path, diag);
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        for (i, item) in self.iter().enumerate() {
            item.validate(&path.index(i), diag);
        }
    }
}
