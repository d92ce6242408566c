//! Footer link groups and copyright line.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigDiagnostics;
use crate::core::traits::Validate;
use crate::validate::{self, FieldPath};

/// Footer descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footer {
    /// Colour scheme.
    #[serde(default)]
    pub style: FooterStyle,
    /// Link columns in display order.
    #[serde(default)]
    pub links: Vec<FooterGroup>,
    /// Copyright line.
    ///
    /// Before resolution this is a template that may reference `{{year}}`
    /// and the identity fields of the record. After resolution it holds the
    /// rendered text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Footer colour scheme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

/// A titled column of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterGroup {
    /// Column heading.
    pub title: String,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<FooterLink>,
}

/// A labelled footer link.
///
/// Exactly one of `to` or `href` must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFooterLink")]
pub struct FooterLink {
    /// Visible text.
    pub label: String,
    /// Where the link points; written as a `to` or `href` key.
    #[serde(flatten)]
    pub target: LinkTarget,
}

/// Target of a footer link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Internal route.
    To(String),
    /// External URL.
    Href(String),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFooterLink {
    label: String,
    to: Option<String>,
    href: Option<String>,
}

impl TryFrom<RawFooterLink> for FooterLink {
    type Error = String;

    fn try_from(raw: RawFooterLink) -> Result<Self, Self::Error> {
        let target = match (raw.to, raw.href) {
            (Some(route), None) => LinkTarget::To(route),
            (None, Some(url)) => LinkTarget::Href(url),
            (Some(_), Some(_)) => {
                return Err(format!(
                    "footer link `{}` has both `to` and `href`",
                    raw.label
                ));
            }
            (None, None) => {
                return Err(format!(
                    "footer link `{}` needs `to` or `href`",
                    raw.label
                ));
            }
        };
        Ok(Self {
            label: raw.label,
            target,
        })
    }
}

impl FooterGroup {
    /// A titled group of links.
    pub fn new<I>(title: &str, items: I) -> Self
    where
        I: IntoIterator<Item = FooterLink>,
    {
        Self {
            title: title.to_string(),
            items: items.into_iter().collect(),
        }
    }
}

impl FooterLink {
    /// Link to an internal route.
    pub fn to(label: &str, route: &str) -> Self {
        Self {
            label: label.to_string(),
            target: LinkTarget::To(route.to_string()),
        }
    }

    /// Link to an external URL.
    pub fn href(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            target: LinkTarget::Href(url.to_string()),
        }
    }
}

impl Validate for Footer {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        self.links.validate(&path.key("links"), diag);
        if let Some(copyright) = &self.copyright {
            let _ = validate::non_empty(diag, &path.key("copyright"), copyright);
        }
    }
}

impl Validate for FooterGroup {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let _ = validate::non_empty(diag, &path.key("title"), &self.title);
        self.items.validate(&path.key("items"), diag);
    }
}

impl Validate for FooterLink {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let _ = validate::non_empty(diag, &path.key("label"), &self.label);
        match &self.target {
            LinkTarget::To(route) => {
                validate::route(diag, &path.key("to"), route);
            }
            LinkTarget::Href(url) => {
                validate::external_link(diag, &path.key("href"), url);
            }
        }
    }
}
