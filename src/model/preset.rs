//! Content pipeline presets.
//!
//! A preset is a named bundle (`classic` for the docs + blog pipeline) with an
//! explicit, typed options record. Every option the host recognises for these
//! pipelines has a named field here; unknown keys are rejected at load time.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::error::ConfigDiagnostics;
use crate::core::traits::Validate;
use crate::validate::{self, FieldPath};

/// A `(name, options)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    /// Preset name or module specifier.
    pub name: String,
    /// Options passed to the preset.
    #[serde(default)]
    pub options: PresetOptions,
}

/// Options record of a preset. A missing section disables that pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetOptions {
    /// Documentation pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<DocsOptions>,
    /// Blog pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<BlogOptions>,
    /// Theme options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeOptions>,
}

/// Options of the documentation pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocsOptions {
    /// Source directory of the docs, relative to the site root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// URL route prefix of the docs section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_base_path: Option<String>,
    /// Sidebar definition file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_path: Option<String>,
    /// Base URL for "edit this page" links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

/// Options of the blog pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlogOptions {
    /// Source directory of the posts, relative to the site root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// URL route prefix of the blog section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_base_path: Option<String>,
    /// Title of the blog listing page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_title: Option<String>,
    /// Show the estimated reading time on posts.
    #[serde(default)]
    pub show_reading_time: bool,
    /// Base URL for "edit this page" links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

/// Theme options of a preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeOptions {
    /// Stylesheets appended after the theme's own CSS.
    ///
    /// Accepts a single path or a list on input.
    #[serde(default, deserialize_with = "one_or_many")]
    pub custom_css: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

impl Validate for Preset {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let _ = validate::non_empty(diag, &path.key("name"), &self.name);
        self.options.validate(&path.key("options"), diag);
    }
}

impl Validate for PresetOptions {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        self.docs.validate(&path.key("docs"), diag);
        self.blog.validate(&path.key("blog"), diag);
        self.theme.validate(&path.key("theme"), diag);
    }
}

impl Validate for DocsOptions {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(dir) = &self.path {
            validate::relative_path(diag, &path.key("path"), dir);
        }
        if let Some(prefix) = &self.route_base_path {
            check_route_base(diag, &path.key("routeBasePath"), prefix);
        }
        if let Some(sidebar) = &self.sidebar_path {
            validate::relative_path(diag, &path.key("sidebarPath"), sidebar);
        }
        if let Some(edit_url) = &self.edit_url {
            let _ = validate::http_url(diag, &path.key("editUrl"), edit_url);
        }
    }
}

impl Validate for BlogOptions {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(dir) = &self.path {
            validate::relative_path(diag, &path.key("path"), dir);
        }
        if let Some(prefix) = &self.route_base_path {
            check_route_base(diag, &path.key("routeBasePath"), prefix);
        }
        if let Some(title) = &self.blog_title {
            let _ = validate::non_empty(diag, &path.key("blogTitle"), title);
        }
        if let Some(edit_url) = &self.edit_url {
            let _ = validate::http_url(diag, &path.key("editUrl"), edit_url);
        }
    }
}

impl Validate for ThemeOptions {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let css = path.key("customCss");
        for (i, file) in self.custom_css.iter().enumerate() {
            validate::relative_path(diag, &css.index(i), file);
        }
    }
}

// An empty prefix mounts the section at the site root.
fn check_route_base(
    diag: &mut ConfigDiagnostics,
    path: &FieldPath,
    prefix: &str,
) {
    if prefix.starts_with('/') || prefix.contains("://") {
        diag.error(
            path.as_str(),
            format!("`{}` must be a bare route segment like `docs`", prefix),
        );
    } else if prefix.chars().any(char::is_whitespace) {
        diag.error(path.as_str(), "must not contain whitespace");
    }
}
