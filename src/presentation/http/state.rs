// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::config::AppConfig;
use crate::infrastructure::templates::TemplateEngine;
use axum::http::HeaderName;
use std::sync::Arc;

/// Request-facing settings derived from [`AppConfig`].
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub language_code: String,
    pub languages: Vec<String>,
    pub remote_user_header: HeaderName,
    pub allowed_origins: Vec<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            language_code: "en-us".into(),
            languages: vec!["en-us".into()],
            remote_user_header: HeaderName::from_static("x-remote-user"),
            allowed_origins: Vec::new(),
        }
    }
}

impl HttpSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let defaults = Self::default();
        Self {
            language_code: config.language_code().to_string(),
            languages: config.languages().to_vec(),
            remote_user_header: HeaderName::from_bytes(config.remote_user_header().as_bytes())
                .unwrap_or(defaults.remote_user_header),
            allowed_origins: config.allowed_origins().to_vec(),
        }
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub templates: Arc<TemplateEngine>,
    pub settings: Arc<HttpSettings>,
}
