//! Top navigation bar.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigDiagnostics;
use crate::core::traits::Validate;
use crate::validate::{self, FieldPath};

/// Navigation bar descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Navbar {
    /// Text shown next to the logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Logo asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// Logo image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logo {
    /// Alternative text.
    pub alt: String,
    /// Asset path relative to the static directory.
    pub src: String,
}

/// Side of the bar an item is placed on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    /// Left side, after the title.
    #[default]
    Left,
    /// Right side.
    Right,
}

/// A single clickable navbar entry.
///
/// On input the variant is recognised by its keys: `type = "docSidebar"` with
/// a `sidebarId`, a `to` route, or an `href` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Opens the first page of a docs sidebar.
    DocSidebar(DocSidebarItem),
    /// Links to a route of this site.
    Route(RouteItem),
    /// Links to another site.
    External(ExternalItem),
}

/// Marker for the `type` key of a sidebar item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum DocSidebarKind {
    /// The only accepted value, `docSidebar`.
    #[default]
    #[serde(rename = "docSidebar")]
    DocSidebar,
}

/// Navbar entry opening a docs sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocSidebarItem {
    /// Always `docSidebar`.
    #[serde(rename = "type")]
    pub kind: DocSidebarKind,
    /// Sidebar declared in the sidebar file.
    pub sidebar_id: String,
    /// Visible text.
    pub label: String,
    /// Placement.
    #[serde(default)]
    pub position: NavPosition,
}

/// Navbar entry linking to an internal route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteItem {
    /// Route such as `/blog`.
    pub to: String,
    /// Visible text.
    pub label: String,
    /// Placement.
    #[serde(default)]
    pub position: NavPosition,
}

/// Navbar entry linking to an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExternalItem {
    /// Absolute URL.
    pub href: String,
    /// Visible text.
    pub label: String,
    /// Placement.
    #[serde(default)]
    pub position: NavPosition,
}

impl NavItem {
    /// Sidebar item.
    pub fn doc_sidebar(sidebar_id: &str, label: &str, position: NavPosition) -> Self {
        NavItem::DocSidebar(DocSidebarItem {
            kind: DocSidebarKind::DocSidebar,
            sidebar_id: sidebar_id.to_string(),
            label: label.to_string(),
            position,
        })
    }

    /// Internal route item.
    pub fn route(to: &str, label: &str, position: NavPosition) -> Self {
        NavItem::Route(RouteItem {
            to: to.to_string(),
            label: label.to_string(),
            position,
        })
    }

    /// External link item.
    pub fn external(href: &str, label: &str, position: NavPosition) -> Self {
        NavItem::External(ExternalItem {
            href: href.to_string(),
            label: label.to_string(),
            position,
        })
    }

    /// Visible text of the item.
    pub fn label(&self) -> &str {
        match self {
            NavItem::DocSidebar(item) => &item.label,
            NavItem::Route(item) => &item.label,
            NavItem::External(item) => &item.label,
        }
    }
}

impl Validate for Navbar {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(title) = &self.title {
            let _ = validate::non_empty(diag, &path.key("title"), title);
        }
        self.logo.validate(&path.key("logo"), diag);
        self.items.validate(&path.key("items"), diag);
    }
}

impl Validate for Logo {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let _ = validate::non_empty(diag, &path.key("alt"), &self.alt);
        validate::relative_path(diag, &path.key("src"), &self.src);
    }
}

impl Validate for NavItem {
    fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let _ = validate::non_empty(diag, &path.key("label"), self.label());
        match self {
            NavItem::DocSidebar(item) => {
                validate::token(diag, &path.key("sidebarId"), &item.sidebar_id);
            }
            NavItem::Route(item) => {
                validate::route(diag, &path.key("to"), &item.to);
            }
            NavItem::External(item) => {
                validate::external_link(diag, &path.key("href"), &item.href);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_are_recognised_by_keys() {
        let items: Vec<NavItem> = serde_json::from_str(
            r#"[
                {"type": "docSidebar", "sidebarId": "tutorialSidebar", "position": "left", "label": "Documents"},
                {"to": "/blog", "label": "Blog", "position": "left"},
                {"href": "https://github.com/HongThaiPham", "label": "GitHub", "position": "right"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            items,
            vec![
                NavItem::doc_sidebar("tutorialSidebar", "Documents", NavPosition::Left),
                NavItem::route("/blog", "Blog", NavPosition::Left),
                NavItem::external(
                    "https://github.com/HongThaiPham",
                    "GitHub",
                    NavPosition::Right
                ),
            ]
        );
    }

    #[test]
    fn test_position_defaults_to_left() {
        let item: NavItem =
            serde_json::from_str(r#"{"to": "/blog", "label": "Blog"}"#).unwrap();
        assert_eq!(item, NavItem::route("/blog", "Blog", NavPosition::Left));
    }

    #[test]
    fn test_item_with_both_targets_is_rejected() {
        let result: Result<NavItem, _> = serde_json::from_str(
            r#"{"to": "/blog", "href": "https://x.dev", "label": "Blog"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_sidebar_item_serialises_type_key() {
        let json = serde_json::to_value(NavItem::doc_sidebar(
            "tutorialSidebar",
            "Documents",
            NavPosition::Left,
        ))
        .unwrap();
        assert_eq!(json["type"], "docSidebar");
        assert_eq!(json["sidebarId"], "tutorialSidebar");
    }

    #[test]
    fn test_empty_label_names_item() {
        let navbar = Navbar {
            title: Some("Leo's Note".to_string()),
            logo: None,
            items: vec![
                NavItem::route("/blog", "Blog", NavPosition::Left),
                NavItem::external("https://github.com", " ", NavPosition::Right),
            ],
        };
        let mut diag = ConfigDiagnostics::new();
        navbar.validate(&FieldPath::root().key("navbar"), &mut diag);
        let fields: Vec<_> = diag.iter().map(|d| d.field.clone()).collect();
        assert_eq!(fields, vec!["navbar.items[1].label"]);
    }
}
