// src/presentation/http/views/template.rs
use super::logging::ViewLogger;
use crate::infrastructure::templates::TemplateEngine;
use axum::{
    extract::Request,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
};
use headers::{Allow, HeaderMapExt};
use std::sync::Arc;
use tera::Context;

/// Response extension naming the template a response was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedTemplate(pub &'static str);

/// Serves one fixed template for GET and HEAD.
pub struct TemplateView {
    templates: Arc<TemplateEngine>,
    template_name: &'static str,
}

impl TemplateView {
    pub const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::HEAD, Method::OPTIONS];

    #[must_use]
    pub const fn new(templates: Arc<TemplateEngine>, template_name: &'static str) -> Self {
        Self {
            templates,
            template_name,
        }
    }

    #[must_use]
    pub fn handle(&self, request: &Request, log: &ViewLogger) -> Response {
        match *request.method() {
            Method::GET | Method::HEAD => self.get(&Context::new(), log),
            Method::OPTIONS => with_allow(StatusCode::OK.into_response()),
            _ => {
                log.warn(&format!(
                    "method not allowed: {} {}",
                    request.method(),
                    request.uri().path()
                ));
                with_allow(StatusCode::METHOD_NOT_ALLOWED.into_response())
            }
        }
    }

    #[must_use]
    pub fn get(&self, context: &Context, log: &ViewLogger) -> Response {
        match self.templates.render(self.template_name, context) {
            Ok(html) => {
                let mut response = Html(html).into_response();
                response
                    .extensions_mut()
                    .insert(RenderedTemplate(self.template_name));
                response
            }
            Err(err) => {
                log.warn(&format!("template rendering failed: {err}"));
                (StatusCode::INTERNAL_SERVER_ERROR, "template rendering failed").into_response()
            }
        }
    }
}

fn with_allow(mut response: Response) -> Response {
    let allow: Allow = TemplateView::ALLOWED_METHODS.into_iter().collect();
    response.headers_mut().typed_insert(allow);
    response
}
