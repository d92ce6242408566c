//! # Template Rendering Module
//!
//! Resolves the text templates a draft record may carry. The footer copyright
//! line is the only one today: it is rendered with Handlebars in strict mode
//! against the fields that are already defined when resolution runs, plus the
//! current year read from a [`Clock`].
//!
//! A reference to anything outside that context is a forward or dangling
//! reference and fails resolution with an error naming the copyright field.

use handlebars::Handlebars;
use log::debug;
use serde_json::{json, Value as JsonValue};

use crate::core::error::{Result, SiteFrameError};
use crate::core::traits::Clock;
use crate::model::SiteConfig;

/// Field path of the copyright template.
pub const COPYRIGHT_FIELD: &str = "themeConfig.footer.copyright";

/// Renderer for Handlebars text templates.
///
/// Output is plain text, so HTML escaping is disabled.
/// Strict mode is always on: a reference to a missing variable is an error
/// instead of rendering as empty text.
#[derive(Clone)]
pub struct HandlebarsRenderer {
    engine: Handlebars<'static>,
}

impl std::fmt::Debug for HandlebarsRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlebarsRenderer")
            .field("strict_mode", &self.engine.strict_mode())
            .finish()
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlebarsRenderer {
    /// Creates a strict, non-escaping renderer.
    pub fn new() -> Self {
        let mut engine = Handlebars::new();
        engine.register_escape_fn(handlebars::no_escape);
        engine.set_strict_mode(true);
        Self { engine }
    }

    /// Renders `template` against `context`.
    pub fn render(
        &self,
        template: &str,
        context: &JsonValue,
    ) -> Result<String> {
        self.engine.render_template(template, context).map_err(|e| {
            SiteFrameError::TemplateRenderingError {
                message: e.to_string(),
                template: template.to_string(),
                source: Some(Box::new(e)),
            }
        })
    }
}

/// Values a record's templates may reference.
///
/// Only identity and deployment fields are exposed; they never depend on a
/// template themselves, so rendering cannot observe a half-built record.
pub fn template_context(config: &SiteConfig, year: i32) -> JsonValue {
    json!({
        "year": year,
        "title": config.title,
        "tagline": config.tagline,
        "url": config.url,
        "baseUrl": config.base_url,
        "organizationName": config.organization_name,
        "projectName": config.project_name,
    })
}

/// Renders the copyright template of `config` in place.
///
/// The clock is the single source of non-determinism in a resolved record.
pub fn resolve_copyright(
    config: &mut SiteConfig,
    clock: &dyn Clock,
    renderer: &HandlebarsRenderer,
) -> Result<()> {
    let Some(template) = config.theme_config.footer.copyright.as_deref()
    else {
        return Ok(());
    };

    let year = clock.current_year();
    let context = template_context(config, year);
    let rendered = renderer.render(template, &context).map_err(|e| {
        SiteFrameError::config_error(COPYRIGHT_FIELD, e.to_string())
    })?;

    debug!("Resolved copyright for year {}: {}", year, rendered);
    config.theme_config.footer.copyright = Some(rendered);
    Ok(())
}
