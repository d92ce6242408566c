//! # Output Module
//!
//! Serialises a resolved record for the static-site builder. The record is
//! printed, never written to disk by this crate.

use std::fmt;
use std::str::FromStr;

use crate::core::error::{Result, SiteFrameError};
use crate::model::SiteConfig;

/// Serialisation formats understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
    /// TOML.
    Toml,
}

impl Format {
    /// Names accepted on the command line.
    pub const NAMES: [&'static str; 3] = ["json", "yaml", "toml"];

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = SiteFrameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            other => Err(SiteFrameError::config_error(
                "format",
                format!("unknown output format `{}`", other),
            )),
        }
    }
}

/// Serialises `config` in `format`.
///
/// Output is deterministic: the same record always yields the same bytes.
pub fn render(config: &SiteConfig, format: Format) -> Result<String> {
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(config)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| e.to_string()),
        Format::Yaml => serde_yml::to_string(config).map_err(|e| e.to_string()),
        Format::Toml => toml::to_string(config).map_err(|e| e.to_string()),
    };
    rendered.map_err(|message| {
        SiteFrameError::serialization_error(format.as_str(), message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::core::config::ConfigBuilder;

    fn resolved() -> std::sync::Arc<SiteConfig> {
        ConfigBuilder::new()
            .with_clock(FixedClock(2026))
            .build()
            .unwrap()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn test_json_round_trips() {
        let config = resolved();
        let json = render(&config, Format::Json).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, config.as_ref());
    }

    #[test]
    fn test_yaml_and_toml_round_trip() {
        let config = resolved();

        let yaml = render(&config, Format::Yaml).unwrap();
        let back: SiteConfig = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(&back, config.as_ref());

        let toml_text = render(&config, Format::Toml).unwrap();
        let back: SiteConfig = toml::from_str(&toml_text).unwrap();
        assert_eq!(&back, config.as_ref());
    }

    #[test]
    fn test_same_year_builds_are_byte_identical() {
        let first = render(&resolved(), Format::Json).unwrap();
        let second = render(&resolved(), Format::Json).unwrap();
        assert_eq!(first, second);
    }
}
