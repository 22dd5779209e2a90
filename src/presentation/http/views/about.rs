// src/presentation/http/views/about.rs
use super::{Loggable, TemplateView, View, ViewLogger};
use crate::presentation::http::state::HttpState;
use async_trait::async_trait;
use axum::{extract::Request, response::Response};
use std::sync::Arc;

/// Static "about" page.
pub struct AboutView {
    template: TemplateView,
}

impl AboutView {
    pub const TEMPLATE_NAME: &'static str = "about.html";
}

impl Loggable for AboutView {}

#[async_trait]
impl View for AboutView {
    fn from_state(state: &HttpState) -> Self {
        Self {
            template: TemplateView::new(Arc::clone(&state.templates), Self::TEMPLATE_NAME),
        }
    }

    async fn handle(&mut self, request: Request, log: &ViewLogger) -> Response {
        self.template.handle(&request, log)
    }
}
