// src/presentation/http/middleware/locale.rs
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Request, State},
    http::{
        Extensions, HeaderValue,
        header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, VARY},
    },
    middleware::Next,
    response::Response,
};

/// Language code chosen for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLanguage(String);

impl ActiveLanguage {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The negotiated language, or the configured default when no
    /// negotiation ran for this request.
    #[must_use]
    pub fn current(extensions: &Extensions) -> Option<Self> {
        extensions.get::<Self>().cloned().or_else(|| {
            extensions
                .get::<HttpState>()
                .map(|state| Self::new(state.settings.language_code.clone()))
        })
    }
}

/// Language ranges from an `Accept-Language` value, best first.
/// Wildcards and `q=0` entries are dropped.
#[must_use]
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut ranges: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim().to_lowercase();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = pieces
                .filter_map(|param| param.trim().split_once('='))
                .find(|(key, _)| key.trim() == "q")
                .and_then(|(_, value)| value.trim().parse::<f32>().ok())
                .map_or(1.0, |q| q.clamp(0.0, 1.0));
            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    // stable: equal weights keep header order
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranges.into_iter().map(|(tag, _)| tag).collect()
}

/// Best supported variant of `code`: exact match, then the generic code,
/// then any supported variant sharing the generic code.
#[must_use]
pub fn supported_variant(code: &str, supported: &[String]) -> Option<String> {
    if supported.iter().any(|s| s == code) {
        return Some(code.to_string());
    }
    let generic = code.split('-').next().unwrap_or(code);
    if supported.iter().any(|s| s == generic) {
        return Some(generic.to_string());
    }
    let prefix = format!("{generic}-");
    supported.iter().find(|s| s.starts_with(&prefix)).cloned()
}

#[must_use]
pub fn negotiate_language(header: Option<&str>, supported: &[String], default: &str) -> String {
    header
        .map(parse_accept_language)
        .unwrap_or_default()
        .iter()
        .find_map(|code| supported_variant(code, supported))
        .unwrap_or_else(|| default.to_string())
}

pub async fn locale_middleware(
    State(state): State<HttpState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let language = negotiate_language(
        header,
        &state.settings.languages,
        &state.settings.language_code,
    );
    request
        .extensions_mut()
        .insert(ActiveLanguage::new(language.clone()));

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    if !headers.contains_key(CONTENT_LANGUAGE)
        && let Ok(value) = HeaderValue::from_str(&language)
    {
        headers.insert(CONTENT_LANGUAGE, value);
    }
    headers.append(VARY, HeaderValue::from_static("accept-language"));
    response
}
