//! # Leo's Note
//!
//! The descriptor of the site this repository builds. It is a draft: the
//! copyright line is still a template until
//! [`ConfigBuilder::build`](crate::core::config::ConfigBuilder::build)
//! resolves it.

use crate::model::{
    BlogOptions, BrokenLinkPolicy, DocsOptions, Footer, FooterGroup,
    FooterLink, FooterStyle, I18nConfig, Logo, NavItem, NavPosition, Navbar,
    PluginRef, Preset, PresetOptions, PrismConfig, SiteConfig, ThemeConfig,
    ThemeOptions,
};

const TITLE: &str = "Leo's Note";
const REPOSITORY: &str = "https://github.com/HongThaiPham/hongthaipham.github.io";
const GITHUB: &str = "https://github.com/HongThaiPham";

/// Returns the unresolved site descriptor.
pub fn descriptor() -> SiteConfig {
    SiteConfig {
        title: TITLE.to_string(),
        tagline: "Sharing my insights here and building cool things with code"
            .to_string(),
        favicon: "img/favicon.ico".to_string(),

        url: "https://hongthaipham.github.io".to_string(),
        base_url: "/".to_string(),
        organization_name: "HongThaiPham".to_string(),
        project_name: "hongthaipham.github.io".to_string(),
        trailing_slash: false,
        deployment_branch: "gh-pages".to_string(),

        on_broken_links: BrokenLinkPolicy::Throw,
        on_broken_markdown_links: BrokenLinkPolicy::Warn,

        i18n: I18nConfig::single("en"),

        presets: vec![classic_preset()],
        theme_config: ThemeConfig {
            image: Some("img/docusaurus-social-card.jpg".to_string()),
            navbar: navbar(),
            footer: footer(),
            prism: PrismConfig {
                theme: "github".to_string(),
                dark_theme: "dracula".to_string(),
            },
        },
        plugins: vec![PluginRef::new("./plugins/tailwind-plugin.cjs")],
    }
}

fn classic_preset() -> Preset {
    Preset {
        name: "classic".to_string(),
        options: PresetOptions {
            docs: Some(DocsOptions {
                sidebar_path: Some("./sidebars.ts".to_string()),
                edit_url: Some(format!("{}/blob/main/", REPOSITORY)),
                ..Default::default()
            }),
            blog: Some(BlogOptions {
                show_reading_time: true,
                edit_url: Some(format!("{}/tree/main/", REPOSITORY)),
                ..Default::default()
            }),
            theme: Some(ThemeOptions {
                custom_css: vec!["./src/css/custom.css".to_string()],
            }),
        },
    }
}

fn navbar() -> Navbar {
    Navbar {
        title: Some(TITLE.to_string()),
        logo: Some(Logo {
            alt: format!("{} Logo", TITLE),
            src: "img/logo.svg".to_string(),
        }),
        items: vec![
            NavItem::doc_sidebar(
                "tutorialSidebar",
                "Documents",
                NavPosition::Left,
            ),
            NavItem::route("/blog", "Blog", NavPosition::Left),
            NavItem::external(GITHUB, "GitHub", NavPosition::Right),
        ],
    }
}

fn footer() -> Footer {
    Footer {
        style: FooterStyle::Dark,
        links: vec![
            FooterGroup::new(
                "Docs",
                [FooterLink::to("Documents", "/docs/intro")],
            ),
            FooterGroup::new(
                "Social",
                [
                    FooterLink::href(
                        "Discord",
                        "https://discordapp.com/users/496849090018279464",
                    ),
                    FooterLink::href(
                        "Twitter",
                        "https://twitter.com/leopham_it",
                    ),
                    FooterLink::href(
                        "LinkedIn",
                        "https://www.linkedin.com/in/leo-pham-1208/",
                    ),
                    FooterLink::href("Telegram", "https://t.me/leopham_siro"),
                ],
            ),
            FooterGroup::new(
                "More",
                [
                    FooterLink::to("Blog", "/blog"),
                    FooterLink::href("GitHub", GITHUB),
                ],
            ),
        ],
        copyright: Some(
            "Copyright © {{year}} {{title}}. Built with Docusaurus."
                .to_string(),
        ),
    }
}
