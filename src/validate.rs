//! # Invariant Checking
//!
//! Field paths, shared checks and the entry point that validates a whole
//! [`SiteConfig`]. Each part of the record implements
//! [`Validate`](crate::core::traits::Validate) and uses the helpers here, so
//! a single pass reports every violation together with the field it concerns.
//!
//! Paths use the host builder's camelCase key names, e.g.
//! `themeConfig.footer.links[0].items[2].label`.

use std::fmt;

use log::debug;
use url::Url;

use crate::core::error::{ConfigDiagnostics, Result};
use crate::core::traits::Validate;
use crate::model::SiteConfig;

/// Dotted path to a field inside the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    /// The path of the record itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Appends a key.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    /// Appends a list index.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates a resolved record, failing with every violation found.
pub fn validate(config: &SiteConfig) -> Result<()> {
    let mut diag = ConfigDiagnostics::new();
    config.validate(&FieldPath::root(), &mut diag);
    debug!("Validation finished with {} violation(s)", diag.len());
    diag.into_result()
}

/// Requires a non-blank string.
pub(crate) fn non_empty(
    diag: &mut ConfigDiagnostics,
    path: &FieldPath,
    value: &str,
) -> bool {
    if value.trim().is_empty() {
        diag.error(path.as_str(), "must not be empty");
        return false;
    }
    true
}

/// Requires a string without any whitespace (branch names, ids).
pub(crate) fn token(
    diag: &mut ConfigDiagnostics,
    path: &FieldPath,
    value: &str,
) {
    if non_empty(diag, path, value)
        && value.chars().any(char::is_whitespace)
    {
        diag.error(path.as_str(), "must not contain whitespace");
    }
}

/// Requires an absolute `http`/`https` URL with a host.
pub(crate) fn http_url(
    diag: &mut ConfigDiagnostics,
    path: &FieldPath,
    value: &str,
) -> Option<Url> {
    if !non_empty(diag, path, value) {
        return None;
    }
    match Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error(
                    path.as_str(),
                    format!(
                        "scheme `{}` not supported, must be http or https",
                        parsed.scheme()
                    ),
                );
                None
            } else if parsed.host_str().map_or(true, str::is_empty) {
                diag.error(path.as_str(), "URL has no host");
                None
            } else {
                Some(parsed)
            }
        }
        Err(e) => {
            diag.error(
                path.as_str(),
                format!("`{}` is not a valid URL: {}", value, e),
            );
            None
        }
    }
}

/// Requires the canonical site URL: scheme and host only.
///
/// The serving prefix belongs in `baseUrl`, so any path beyond `/`, query or
/// fragment is rejected.
pub(crate) fn site_url(
    diag: &mut ConfigDiagnostics,
    path: &FieldPath,
    value: &str,
) {
    if let Some(parsed) = http_url(diag, path, value) {
        if parsed.path() != "/" {
            diag.error(
                path.as_str(),
                format!(
                    "must not contain a path (found `{}`), put it in baseUrl",
                    parsed.path()
                ),
            );
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            diag.error(
                path.as_str(),
                "must not contain a query or fragment",
            );
        }
    }
}

/// Requires a serving prefix that starts and ends with `/`.
pub(crate) fn base_url(
    diag: &mut ConfigDiagnostics,
    path: &FieldPath,
    value: &str,
) {
    if !value.starts_with('/') || !value.ends_with('/') {
        diag.error(
            path.as_str(),
            format!("`{}` must start and end with `/`", value),
        );
    } else if value.chars().any(char::is_whitespace) {
        diag.error(path.as_str(), "must not contain whitespace");
    }
}

/// Requires an internal route such as `/docs/intro`.
pub(crate) fn route(
    diag: &mut ConfigDiagnostics,
    path: &FieldPath,
    value: &str,
) {
    if !non_empty(diag, path, value) {
        return;
    }
    if !value.starts_with('/') {
        diag.error(
            path.as_str(),
            format!("route `{}` must start with `/`", value),
        );
    } else if value.chars().any(char::is_whitespace) {
        diag.error(path.as_str(), "must not contain whitespace");
    }
}

/// Requires an external link target: an http(s) URL or a `mailto:` address.
pub(crate) fn external_link(
    diag: &mut ConfigDiagnostics,
    path: &FieldPath,
    value: &str,
) {
    if let Some(address) = value.strip_prefix("mailto:") {
        if !address.contains('@') {
            diag.error(
                path.as_str(),
                format!("`{}` is not a valid mailto link", value),
            );
        }
        return;
    }
    let _ = http_url(diag, path, value);
}

/// Requires a site-relative file path such as `img/logo.svg`.
pub(crate) fn relative_path(
    diag: &mut ConfigDiagnostics,
    path: &FieldPath,
    value: &str,
) {
    if !non_empty(diag, path, value) {
        return;
    }
    if value.contains("://") {
        diag.error(
            path.as_str(),
            format!("`{}` must be a relative path, not a URL", value),
        );
    } else if value.starts_with('/') {
        diag.error(
            path.as_str(),
            format!("`{}` must be relative to the site root", value),
        );
    }
}
