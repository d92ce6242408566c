//! Presentation settings handed to the theme.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigDiagnostics;
use crate::core::traits::Validate;
use crate::model::footer::Footer;
use crate::model::navbar::Navbar;
use crate::validate::{self, FieldPath};

/// Theme configuration: social card, navbar, footer and code highlighting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Social card image, relative to the static directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Top navigation.
    #[serde(default)]
    pub navbar: Navbar,
    /// Footer.
    #[serde(default)]
    pub footer: Footer,
    /// Syntax highlighting.
    #[serde(default)]
    pub prism: PrismConfig,
}

/// Light/dark pair of syntax-highlighting themes, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PrismConfig {
    /// Theme used in light mode.
    pub theme: String,
    /// Theme used in dark mode.
    pub dark_theme: String,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".to_string(),
            dark_theme: "dracula".to_string(),
        }
    }
}

impl Validate for ThemeConfig {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(image) = &self.image {
            validate::relative_path(diag, &path.key("image"), image);
        }
        self.navbar.validate(&path.key("navbar"), diag);
        self.footer.validate(&path.key("footer"), diag);
        self.prism.validate(&path.key("prism"), diag);
    }
}

impl Validate for PrismConfig {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        validate::token(diag, &path.key("theme"), &self.theme);
        validate::token(diag, &path.key("darkTheme"), &self.dark_theme);
    }
}
