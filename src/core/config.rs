//! # Configuration Module
//!
//! Loads a draft [`SiteConfig`], applies overrides, resolves its templates
//! and validates it. The builder is the only way a record leaves the crate,
//! so every record a caller holds is fully resolved and valid.
//!
//! ## Sources, in order of precedence (lowest first)
//!
//! - the draft: a TOML, YAML or JSON file, or the built-in site descriptor
//! - environment variables `<PREFIX>_<KEY>`
//! - programmatic overrides
//!
//! ## Example
//!
//! ```rust
//! use siteframe::clock::FixedClock;
//! use siteframe::core::config::ConfigBuilder;
//! use siteframe::model::BrokenLinkPolicy;
//!
//! let config = ConfigBuilder::new()
//!     .with_override("on_broken_markdown_links", "ignore")
//!     .with_clock(FixedClock(2026))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.on_broken_links, BrokenLinkPolicy::Throw);
//! assert_eq!(config.on_broken_markdown_links, BrokenLinkPolicy::Ignore);
//! ```

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use toml::Value as TomlValue;

use crate::clock::SystemClock;
use crate::core::error::{Result, SiteFrameError};
use crate::core::traits::Clock;
use crate::model::{BrokenLinkPolicy, SiteConfig};
use crate::site;
use crate::template::{self, HandlebarsRenderer};
use crate::validate;

/// Draft file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl SourceFormat {
    /// Detects the format of `path` from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(SourceFormat::Toml),
            Some("yaml" | "yml") => Ok(SourceFormat::Yaml),
            Some("json") => Ok(SourceFormat::Json),
            _ => Err(SiteFrameError::config_error(
                "configFile",
                format!(
                    "unsupported config file `{}`, expected .toml, .yaml, .yml or .json",
                    path.display()
                ),
            )),
        }
    }

    /// Name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            SourceFormat::Toml => "TOML",
            SourceFormat::Yaml => "YAML",
            SourceFormat::Json => "JSON",
        }
    }
}

/// Builds a resolved [`SiteConfig`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    env_prefix: Option<String>,
    overrides: Vec<(String, TomlValue)>,
    clock: Option<Box<dyn Clock>>,
}

impl ConfigBuilder {
    /// Initialises a new `ConfigBuilder` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the draft from a configuration file instead of the built-in
    /// descriptor.
    ///
    /// # Parameters
    /// - `path`: A `.toml`, `.yaml`, `.yml` or `.json` file.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a prefix for environment variables that override scalar fields.
    ///
    /// # Parameters
    /// - `prefix`: The prefix for environment variables (e.g., "SITEFRAME").
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Adds a key-value pair to override a scalar field.
    ///
    /// Overrides apply in the order they are added, after environment
    /// variables.
    pub fn with_override<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<TomlValue>,
    {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Replaces the system clock used for the copyright year.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Loads, overrides, resolves and validates the record.
    ///
    /// Fails fast with the first loading or override error, or with every
    /// invariant violation found in the resolved record.
    pub fn build(self) -> Result<Arc<SiteConfig>> {
        let mut config = match &self.config_file {
            Some(path) => load_from_file(path)?,
            None => {
                debug!("No config file given, using the built-in descriptor");
                site::descriptor()
            }
        };

        if let Some(prefix) = &self.env_prefix {
            apply_env_overrides(&mut config, prefix)?;
        }
        apply_overrides(&mut config, &self.overrides)?;

        let clock: &dyn Clock = match &self.clock {
            Some(clock) => clock.as_ref(),
            None => &SystemClock,
        };
        template::resolve_copyright(
            &mut config,
            clock,
            &HandlebarsRenderer::new(),
        )?;
        validate::validate(&config)?;

        info!(
            "Resolved site configuration for '{}' ({} preset(s), {} plugin(s))",
            config.title,
            config.presets.len(),
            config.plugins.len()
        );
        Ok(Arc::new(config))
    }
}

/// Reads a draft record from `path`.
pub fn load_from_file(path: &Path) -> Result<SiteConfig> {
    let format = SourceFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|e| SiteFrameError::io_error(path.to_path_buf(), e))?;
    debug!("Loading {} config from {}", format.name(), path.display());
    parse(&content, format, path)
}

fn parse(
    content: &str,
    format: SourceFormat,
    path: &Path,
) -> Result<SiteConfig> {
    let parsed: std::result::Result<SiteConfig, String> = match format {
        SourceFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        SourceFormat::Yaml => {
            serde_yml::from_str(content).map_err(|e| e.to_string())
        }
        SourceFormat::Json => {
            serde_json::from_str(content).map_err(|e| e.to_string())
        }
    };
    parsed.map_err(|message| {
        SiteFrameError::parse_error(path.to_path_buf(), format.name(), message)
    })
}

fn apply_env_overrides(config: &mut SiteConfig, prefix: &str) -> Result<()> {
    let marker = format!("{}_", prefix);
    let mut vars: Vec<(String, OsString)> = env::vars_os()
        .filter_map(|(key, value)| {
            let key = key.to_string_lossy();
            key.starts_with(&marker).then(|| (key.into_owned(), value))
        })
        .collect();
    vars.sort();

    for (key, value) in vars {
        let config_key = key[marker.len()..].to_lowercase();
        if !is_known_key(&config_key) {
            warn!("Ignoring unknown environment override {}", key);
            continue;
        }
        let value = value.into_string().map_err(|_| {
            SiteFrameError::config_error(key.as_str(), "value is not valid UTF-8")
        })?;
        debug!("Applying environment override {}", key);
        apply_config_value(config, &config_key, &value)?;
    }
    Ok(())
}

fn apply_overrides(
    config: &mut SiteConfig,
    overrides: &[(String, TomlValue)],
) -> Result<()> {
    for (key, value) in overrides {
        match value {
            TomlValue::String(s) => apply_config_value(config, key, s)?,
            TomlValue::Array(items) if key == "i18n_locales" => {
                config.i18n.locales = locale_list(key, items)?;
            }
            TomlValue::Array(_) | TomlValue::Table(_) => {
                return Err(SiteFrameError::config_error(
                    key.as_str(),
                    "expected a scalar value",
                ));
            }
            other => apply_config_value(config, key, &other.to_string())?,
        }
    }
    Ok(())
}

fn locale_list(key: &str, items: &[TomlValue]) -> Result<Vec<String>> {
    items
        .iter()
        .map(|item| match item {
            TomlValue::String(locale) => Ok(locale.trim().to_string()),
            _ => Err(SiteFrameError::config_error(
                key,
                "expected a list of locale strings",
            )),
        })
        .collect()
}

const KNOWN_KEYS: &[&str] = &[
    "title",
    "tagline",
    "favicon",
    "url",
    "base_url",
    "organization_name",
    "project_name",
    "trailing_slash",
    "deployment_branch",
    "on_broken_links",
    "on_broken_markdown_links",
    "i18n_default_locale",
    "i18n_locales",
];

fn is_known_key(key: &str) -> bool {
    KNOWN_KEYS.contains(&key)
}

fn apply_config_value(
    config: &mut SiteConfig,
    key: &str,
    value: &str,
) -> Result<()> {
    match key {
        "title" => config.title = value.to_string(),
        "tagline" => config.tagline = value.to_string(),
        "favicon" => config.favicon = value.to_string(),
        "url" => config.url = value.to_string(),
        "base_url" => config.base_url = value.to_string(),
        "organization_name" => config.organization_name = value.to_string(),
        "project_name" => config.project_name = value.to_string(),
        "trailing_slash" => {
            config.trailing_slash = value.trim().parse().map_err(|e| {
                SiteFrameError::config_error(
                    "trailingSlash",
                    format!("invalid value '{}': {}", value, e),
                )
            })?;
        }
        "deployment_branch" => config.deployment_branch = value.to_string(),
        "on_broken_links" => {
            config.on_broken_links = parse_policy("onBrokenLinks", value)?;
        }
        "on_broken_markdown_links" => {
            config.on_broken_markdown_links =
                parse_policy("onBrokenMarkdownLinks", value)?;
        }
        "i18n_default_locale" => {
            config.i18n.default_locale = value.trim().to_string();
        }
        "i18n_locales" => {
            config.i18n.locales = value
                .split(',')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
        }
        _ => {
            return Err(SiteFrameError::config_error(
                key,
                "unknown configuration key",
            ));
        }
    }
    Ok(())
}

fn parse_policy(field: &str, value: &str) -> Result<BrokenLinkPolicy> {
    value.parse().map_err(|_| {
        SiteFrameError::config_error(
            field,
            format!("unknown policy `{}`, expected throw, warn or ignore", value),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use tempfile::TempDir;

    fn build(builder: ConfigBuilder) -> Result<Arc<SiteConfig>> {
        builder.with_clock(FixedClock(2026)).build()
    }

    #[test]
    fn test_default_build_is_resolved() {
        let config = build(ConfigBuilder::new()).unwrap();
        assert_eq!(config.title, "Leo's Note");
        assert_eq!(
            config.theme_config.footer.copyright.as_deref(),
            Some("Copyright © 2026 Leo's Note. Built with Docusaurus.")
        );
    }

    #[test]
    fn test_policies_are_independent() {
        let config = build(
            ConfigBuilder::new().with_override("on_broken_links", "ignore"),
        )
        .unwrap();
        assert_eq!(config.on_broken_links, BrokenLinkPolicy::Ignore);
        assert_eq!(config.on_broken_markdown_links, BrokenLinkPolicy::Warn);

        let config = build(
            ConfigBuilder::new()
                .with_override("on_broken_markdown_links", "throw"),
        )
        .unwrap();
        assert_eq!(config.on_broken_links, BrokenLinkPolicy::Throw);
        assert_eq!(config.on_broken_markdown_links, BrokenLinkPolicy::Throw);
    }

    #[test]
    fn test_default_locale_must_be_supported() {
        let err = build(
            ConfigBuilder::new().with_override("i18n_default_locale", "fr"),
        )
        .unwrap_err();
        assert_eq!(err.fields(), vec!["i18n.defaultLocale"]);

        let config = build(
            ConfigBuilder::new()
                .with_override("i18n_locales", "en, fr")
                .with_override("i18n_default_locale", "fr"),
        )
        .unwrap();
        assert_eq!(config.i18n.default_locale, "fr");
        assert_eq!(config.i18n.locales, vec!["en", "fr"]);
    }

    #[test]
    fn test_boolean_override_from_toml_value() {
        let config =
            build(ConfigBuilder::new().with_override("trailing_slash", true))
                .unwrap();
        assert!(config.trailing_slash);

        let err = build(
            ConfigBuilder::new().with_override("trailing_slash", "maybe"),
        )
        .unwrap_err();
        assert_eq!(err.fields(), vec!["trailingSlash"]);
    }

    #[test]
    fn test_locale_list_override() {
        let config = build(
            ConfigBuilder::new()
                .with_override("i18n_locales", vec!["en", "fr"])
                .with_override("i18n_default_locale", "fr"),
        )
        .unwrap();
        assert_eq!(config.i18n.locales, vec!["en", "fr"]);

        let err = build(
            ConfigBuilder::new().with_override("i18n_locales", vec![1_i64, 2]),
        )
        .unwrap_err();
        assert_eq!(err.fields(), vec!["i18n_locales"]);
    }

    #[test]
    fn test_non_scalar_override_is_rejected() {
        let err = build(ConfigBuilder::new().with_override("title", vec!["a"]))
            .unwrap_err();
        assert_eq!(err.fields(), vec!["title"]);

        let err = build(
            ConfigBuilder::new()
                .with_override("tagline", toml::value::Table::new()),
        )
        .unwrap_err();
        assert_eq!(err.fields(), vec!["tagline"]);
    }

    #[test]
    fn test_braces_in_title_are_kept_literally() {
        let config =
            build(ConfigBuilder::new().with_override("title", "My {{Notes}}"))
                .unwrap();
        assert_eq!(config.title, "My {{Notes}}");
        assert_eq!(
            config.theme_config.footer.copyright.as_deref(),
            Some("Copyright © 2026 My {{Notes}}. Built with Docusaurus.")
        );
    }

    #[test]
    fn test_unknown_override_key_is_rejected() {
        let err =
            build(ConfigBuilder::new().with_override("colour", "blue"))
                .unwrap_err();
        assert_eq!(err.fields(), vec!["colour"]);
    }

    #[test]
    fn test_invalid_override_value_fails_validation() {
        let err = build(
            ConfigBuilder::new()
                .with_override("url", "https://example.com/blog")
                .with_override("base_url", "blog"),
        )
        .unwrap_err();
        assert_eq!(err.fields(), vec!["url", "baseUrl"]);
    }

    #[test]
    fn test_env_overrides() {
        env::set_var("SFTEST_ENV_TITLE", "Env Title");
        env::set_var("SFTEST_ENV_ON_BROKEN_LINKS", "warn");
        env::set_var("SFTEST_ENV_SOMETHING_ELSE", "ignored");

        let config =
            build(ConfigBuilder::new().with_env_prefix("SFTEST_ENV")).unwrap();
        assert_eq!(config.title, "Env Title");
        assert_eq!(config.on_broken_links, BrokenLinkPolicy::Warn);
        assert_eq!(config.on_broken_markdown_links, BrokenLinkPolicy::Warn);
        assert_eq!(
            config.theme_config.footer.copyright.as_deref(),
            Some("Copyright © 2026 Env Title. Built with Docusaurus.")
        );
    }

    #[test]
    fn test_env_keys_need_the_separator() {
        env::set_var("SFTEST_SEPTITLE", "Hijacked");
        env::set_var("SFTEST_SEP__TAGLINE", "Hijacked");
        env::set_var("SFTEST_SEP_FAVICON", "img/other.ico");

        let config =
            build(ConfigBuilder::new().with_env_prefix("SFTEST_SEP")).unwrap();
        assert_eq!(config.title, "Leo's Note");
        assert_ne!(config.tagline, "Hijacked");
        assert_eq!(config.favicon, "img/other.ico");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_environment() {
        use std::os::unix::ffi::OsStringExt;

        env::set_var(
            "SFTEST_UNRELATED_BYTES",
            OsString::from_vec(vec![0x66, 0xff]),
        );
        env::set_var(
            OsString::from_vec(b"SFTEST_RAW_\xff".to_vec()),
            "ignored",
        );
        let config =
            build(ConfigBuilder::new().with_env_prefix("SFTEST_RAW")).unwrap();
        assert_eq!(config.title, "Leo's Note");

        env::set_var("SFTEST_BYTES_TITLE", OsString::from_vec(vec![0xff]));
        let err = build(ConfigBuilder::new().with_env_prefix("SFTEST_BYTES"))
            .unwrap_err();
        assert_eq!(err.fields(), vec!["SFTEST_BYTES_TITLE"]);
    }

    #[test]
    fn test_programmatic_override_beats_env() {
        env::set_var("SFTEST_PRIO_TAGLINE", "from env");
        let config = build(
            ConfigBuilder::new()
                .with_env_prefix("SFTEST_PRIO")
                .with_override("tagline", "from code"),
        )
        .unwrap();
        assert_eq!(config.tagline, "from code");
    }

    #[test]
    fn test_load_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site.toml");
        fs::write(
            &path,
            r#"
title = "Notes"
favicon = "img/favicon.ico"
url = "https://notes.example.com"
organizationName = "someone"
projectName = "notes"
onBrokenMarkdownLinks = "ignore"

[i18n]
defaultLocale = "vi"
locales = ["en", "vi"]

[[presets]]
name = "classic"

[presets.options.blog]
showReadingTime = true

[themeConfig.footer]
style = "dark"
copyright = "© {{year}} {{organizationName}}"

[[themeConfig.footer.links]]
title = "Docs"
items = [{ label = "Documents", to = "/docs/intro" }]
"#,
        )
        .unwrap();

        let config = build(ConfigBuilder::new().with_file(&path)).unwrap();
        assert_eq!(config.title, "Notes");
        assert_eq!(config.on_broken_links, BrokenLinkPolicy::Throw);
        assert_eq!(config.on_broken_markdown_links, BrokenLinkPolicy::Ignore);
        assert_eq!(config.i18n.default_locale, "vi");
        assert!(
            config.presets[0].options.blog.as_ref().unwrap().show_reading_time
        );
        assert_eq!(
            config.theme_config.footer.copyright.as_deref(),
            Some("© 2026 someone")
        );
    }

    #[test]
    fn test_load_yaml_and_json_files() {
        let temp_dir = TempDir::new().unwrap();

        let yaml = temp_dir.path().join("site.yml");
        fs::write(
            &yaml,
            "title: Notes\nfavicon: img/favicon.ico\nurl: https://notes.example.com\norganizationName: someone\nprojectName: notes\nplugins:\n  - ./plugins/tailwind-plugin.cjs\n",
        )
        .unwrap();
        let config = build(ConfigBuilder::new().with_file(&yaml)).unwrap();
        assert_eq!(config.plugins.len(), 1);

        let json = temp_dir.path().join("site.json");
        fs::write(
            &json,
            r#"{"title": "Notes", "favicon": "img/favicon.ico", "url": "https://notes.example.com", "organizationName": "someone", "projectName": "notes", "trailingSlash": true}"#,
        )
        .unwrap();
        let config = build(ConfigBuilder::new().with_file(&json)).unwrap();
        assert!(config.trailing_slash);
    }

    #[test]
    fn test_file_errors() {
        let temp_dir = TempDir::new().unwrap();

        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(
            build(ConfigBuilder::new().with_file(&missing)),
            Err(SiteFrameError::IOError { .. })
        ));

        let broken = temp_dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            build(ConfigBuilder::new().with_file(&broken)),
            Err(SiteFrameError::ParseError { format: "JSON", .. })
        ));

        let unknown = temp_dir.path().join("site.ini");
        fs::write(&unknown, "title=x").unwrap();
        let err = build(ConfigBuilder::new().with_file(&unknown)).unwrap_err();
        assert_eq!(err.fields(), vec!["configFile"]);
    }
}
