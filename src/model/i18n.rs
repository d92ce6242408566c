//! Localisation settings.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigDiagnostics;
use crate::core::traits::Validate;
use crate::validate::{self, FieldPath};

/// Default locale and the ordered set of supported locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    /// Locale used for unprefixed routes and the `html lang` attribute.
    pub default_locale: String,
    /// Supported locales in declaration order.
    pub locales: Vec<String>,
}

impl I18nConfig {
    /// A single-locale configuration.
    pub fn single<S: Into<String>>(locale: S) -> Self {
        let locale = locale.into();
        Self {
            default_locale: locale.clone(),
            locales: vec![locale],
        }
    }

    /// Returns `true` when `locale` is one of the supported locales.
    pub fn supports(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self::single("en")
    }
}

impl Validate for I18nConfig {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let locales_path = path.key("locales");
        if self.locales.is_empty() {
            diag.error(
                locales_path.as_str(),
                "at least one locale is required",
            );
        }

        let mut seen = HashSet::new();
        for (i, locale) in self.locales.iter().enumerate() {
            let item = locales_path.index(i);
            if validate::non_empty(diag, &item, locale)
                && !seen.insert(locale.as_str())
            {
                diag.error(
                    item.as_str(),
                    format!("duplicate locale `{}`", locale),
                );
            }
        }

        let default_path = path.key("defaultLocale");
        if validate::non_empty(diag, &default_path, &self.default_locale)
            && !self.supports(&self.default_locale)
        {
            diag.error(
                default_path.as_str(),
                format!(
                    "`{}` is not one of the configured locales [{}]",
                    self.default_locale,
                    self.locales.join(", ")
                ),
            );
        }
    }
}
