// src/presentation/http/views/mod.rs
pub mod about;
pub mod logging;
pub mod template;

pub use about::AboutView;
pub use logging::{DispatchContext, Loggable, ViewLogger, ViewName, log_dispatch};
pub use template::{RenderedTemplate, TemplateView};

use crate::presentation::http::state::HttpState;
use async_trait::async_trait;
use axum::{Extension, extract::Request, response::Response};

/// A request handler built fresh for every request.
#[async_trait]
pub trait View: Loggable + Send + Sized + 'static {
    fn from_state(state: &HttpState) -> Self;

    async fn handle(&mut self, request: Request, log: &ViewLogger) -> Response;
}

/// A view together with its instance-scoped logger.
pub struct LoggedView<V> {
    view: V,
    log: Option<ViewLogger>,
}

impl<V: View> LoggedView<V> {
    #[must_use]
    pub fn new(view: V) -> Self {
        Self::attach(view, None)
    }

    /// Keep an already attached logger instead of creating one.
    #[must_use]
    pub fn with_logger(view: V, log: ViewLogger) -> Self {
        Self::attach(view, Some(log))
    }

    fn attach(view: V, log: Option<ViewLogger>) -> Self {
        let mut this = Self { view, log };
        this.logger();
        this
    }

    /// The attached logger, created on first access.
    pub fn logger(&mut self) -> &ViewLogger {
        self.log.get_or_insert_with(ViewLogger::for_type::<V>)
    }

    pub async fn dispatch(mut self, request: Request) -> Response {
        let log = logging::begin_dispatch::<V>(self.logger(), &request);
        let response = self.view.handle(request, &log).await;
        self.log = Some(log);
        response
    }
}

/// Axum handler that builds `V` for the request and dispatches it.
pub async fn serve_view<V: View>(Extension(state): Extension<HttpState>, request: Request) -> Response {
    LoggedView::new(V::from_state(&state)).dispatch(request).await
}
