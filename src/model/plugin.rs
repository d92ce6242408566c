//! Build-time plugin references.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigDiagnostics;
use crate::core::traits::Validate;
use crate::validate::{self, FieldPath};

/// Opaque reference to an external plugin module, e.g.
/// `./plugins/tailwind-plugin.cjs`.
///
/// The record only fixes the module's position in the plugin list; the host
/// loads it and hands it the whole resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginRef(String);

impl PluginRef {
    /// Wraps a module specifier.
    pub fn new<S: Into<String>>(module: S) -> Self {
        Self(module.into())
    }
}

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Validate for PluginRef {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let _ = validate::non_empty(diag, path, &self.0);
    }
}
