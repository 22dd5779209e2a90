// src/infrastructure/templates.rs
use std::path::Path;
use tera::{Context, Tera};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    NotFound(String),
    #[error("template rendering failed: {0}")]
    Render(String),
    #[error("failed to load templates: {0}")]
    Load(String),
}

/// Compiled templates, shared read-only across requests.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load every `*.html` file below `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Load`] when a template fails to parse.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let pattern = dir.as_ref().join("**").join("*.html");
        let pattern = pattern.to_string_lossy();
        let tera = Tera::new(&pattern).map_err(|err| TemplateError::Load(err.to_string()))?;
        tracing::debug!(
            templates = tera.get_template_names().count(),
            pattern = %pattern,
            "templates loaded"
        );
        Ok(Self { tera })
    }

    /// Compile templates from in-memory sources.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Load`] when a template fails to parse.
    pub fn from_raw<'a>(
        templates: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)
            .map_err(|err| TemplateError::Load(err.to_string()))?;
        Ok(Self { tera })
    }

    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|candidate| candidate == name)
    }

    /// Render `name` with `context`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] for unknown names and
    /// [`TemplateError::Render`] when rendering fails.
    pub fn render(&self, name: &str, context: &Context) -> Result<String, TemplateError> {
        if !self.has_template(name) {
            return Err(TemplateError::NotFound(name.to_string()));
        }
        self.tera
            .render(name, context)
            .map_err(|err| TemplateError::Render(err.to_string()))
    }
}
