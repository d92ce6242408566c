//! # Site Configuration Record
//!
//! The typed record handed to the static-site builder. Keys serialise in
//! camelCase so the output matches the builder's own configuration shape.
//!
//! Every part of the record implements
//! [`Validate`](crate::core::traits::Validate); the record is only handed out
//! by [`ConfigBuilder`](crate::core::config::ConfigBuilder) after its
//! copyright line has been resolved and every invariant holds.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigDiagnostics;
use crate::core::traits::Validate;
use crate::validate::{self, FieldPath};

/// Footer link groups and copyright line.
pub mod footer;
/// Localisation settings.
pub mod i18n;
/// Top navigation bar.
pub mod navbar;
/// Build-time plugin references.
pub mod plugin;
/// Broken-link policy.
pub mod policy;
/// Content pipeline presets.
pub mod preset;
/// Presentation settings.
pub mod theme;

pub use footer::{Footer, FooterGroup, FooterLink, FooterStyle, LinkTarget};
pub use i18n::I18nConfig;
pub use navbar::{Logo, NavItem, NavPosition, Navbar};
pub use plugin::PluginRef;
pub use policy::BrokenLinkPolicy;
pub use preset::{BlogOptions, DocsOptions, Preset, PresetOptions, ThemeOptions};
pub use theme::{PrismConfig, ThemeConfig};

/// The site configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, used in the page title and metadata.
    pub title: String,
    /// Short description shown on the landing page.
    #[serde(default)]
    pub tagline: String,
    /// Favicon path relative to the static directory.
    pub favicon: String,

    /// Canonical production origin, e.g. `https://example.github.io`.
    pub url: String,
    /// Path prefix the site is served under; starts and ends with `/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Owner of the deployment repository.
    pub organization_name: String,
    /// Name of the deployment repository.
    pub project_name: String,
    /// Whether generated URLs end with a slash.
    #[serde(default)]
    pub trailing_slash: bool,
    /// Branch the built site is pushed to.
    #[serde(default = "default_deployment_branch")]
    pub deployment_branch: String,

    /// Policy for broken internal links.
    #[serde(default)]
    pub on_broken_links: BrokenLinkPolicy,
    /// Policy for broken links inside markdown, independent of
    /// `on_broken_links`.
    #[serde(default = "default_markdown_link_policy")]
    pub on_broken_markdown_links: BrokenLinkPolicy,

    /// Localisation.
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Content pipelines in load order.
    #[serde(default)]
    pub presets: Vec<Preset>,
    /// Presentation.
    #[serde(default)]
    pub theme_config: ThemeConfig,
    /// Extension modules in load order.
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
}

impl SiteConfig {
    /// Iterates over every navbar item and footer link label, in display
    /// order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        let nav = self.theme_config.navbar.items.iter().map(NavItem::label);
        let footer = self
            .theme_config
            .footer
            .links
            .iter()
            .flat_map(|group| group.items.iter())
            .map(|link| link.label.as_str());
        nav.chain(footer)
    }
}

impl Validate for SiteConfig {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let _ = validate::non_empty(diag, &path.key("title"), &self.title);
        validate::relative_path(diag, &path.key("favicon"), &self.favicon);

        validate::site_url(diag, &path.key("url"), &self.url);
        validate::base_url(diag, &path.key("baseUrl"), &self.base_url);
        validate::token(
            diag,
            &path.key("organizationName"),
            &self.organization_name,
        );
        validate::token(diag, &path.key("projectName"), &self.project_name);
        validate::token(
            diag,
            &path.key("deploymentBranch"),
            &self.deployment_branch,
        );

        self.i18n.validate(&path.key("i18n"), diag);
        self.presets.validate(&path.key("presets"), diag);
        self.theme_config.validate(&path.key("themeConfig"), diag);
        self.plugins.validate(&path.key("plugins"), diag);
    }
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_deployment_branch() -> String {
    "gh-pages".to_string()
}

fn default_markdown_link_policy() -> BrokenLinkPolicy {
    BrokenLinkPolicy::Warn
}
