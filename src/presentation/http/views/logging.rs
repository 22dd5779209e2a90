// src/presentation/http/views/logging.rs
//! Contextual loggers for request handlers.
//!
//! A handler type opts in by implementing [`Loggable`]. Each request then
//! gets its own [`ViewLogger`], named after the handler, and the dispatch
//! pipeline runs `gather`, `rebind`, then `delegate`:
//!
//! 1. [`DispatchContext::gather`] collects the request fields,
//! 2. [`ViewLogger::bind`] gives the logger a fresh context and, when
//!    `LOG_DISPATCH` is set, one `"dispatch"` event is emitted,
//! 3. the next handler runs and its response is returned untouched.

use crate::presentation::http::middleware::locale::ActiveLanguage;
use crate::presentation::http::middleware::remote_user::RequestUser;
use axum::{
    extract::{OriginalUri, Request},
    http::{Extensions, Method},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Per-handler logging configuration.
pub trait Loggable {
    /// Overrides the type path as the logger name.
    const LOGGER_NAME: Option<&'static str> = None;
    /// Include the requesting user's username.
    const BIND_USER: bool = false;
    /// Include the active language code.
    const LANGUAGE: bool = true;
    /// Emit an info-level `dispatch` event before delegating.
    const LOG_DISPATCH: bool = true;
}

/// Fully qualified path of `T` with any generic arguments removed.
#[must_use]
pub fn type_path<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.split_once('<').map_or(full, |(path, _)| path)
}

/// Last segment of [`type_path`].
#[must_use]
pub fn class_name<T: ?Sized>() -> &'static str {
    let path = type_path::<T>();
    path.rsplit("::").next().unwrap_or(path)
}

#[must_use]
pub fn logger_name<T: Loggable + ?Sized>() -> &'static str {
    T::LOGGER_NAME.unwrap_or_else(type_path::<T>)
}

/// Structured logger handle bound to one handler instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLogger {
    name: Arc<str>,
}

impl ViewLogger {
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn for_type<T: Loggable + ?Sized>() -> Self {
        Self::new(logger_name::<T>())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Same logger, fresh context.
    #[must_use]
    pub fn bind(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
        }
    }

    pub fn dispatch(&self, context: &DispatchContext) {
        tracing::info!(
            logger = %self.name,
            class = context.class,
            method = %context.method,
            path = %context.path,
            view_name = context.view_name,
            username = context.username.as_deref(),
            language = context.language.as_deref(),
            "dispatch"
        );
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!(logger = %self.name, "{message}");
    }
}

/// Route name, attached as a request extension by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewName(&'static str);

impl ViewName {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchContext {
    pub class: &'static str,
    pub method: Method,
    pub path: String,
    pub view_name: Option<&'static str>,
    pub username: Option<String>,
    pub language: Option<String>,
}

impl DispatchContext {
    #[must_use]
    pub fn gather<T: Loggable + ?Sized>(request: &Request) -> Self {
        Self::from_parts::<T>(request.method(), request.uri().path(), request.extensions())
    }

    #[must_use]
    pub fn from_parts<T: Loggable + ?Sized>(
        method: &Method,
        path: &str,
        extensions: &Extensions,
    ) -> Self {
        let path = extensions
            .get::<OriginalUri>()
            .map_or(path, |original| original.path())
            .to_string();

        let username = T::BIND_USER.then(|| {
            extensions
                .get::<RequestUser>()
                .map(|user| user.username().to_string())
                .unwrap_or_default()
        });

        let language = if T::LANGUAGE {
            ActiveLanguage::current(extensions).map(|lang| lang.as_str().to_string())
        } else {
            None
        };

        Self {
            class: class_name::<T>(),
            method: method.clone(),
            path,
            view_name: extensions.get::<ViewName>().copied().map(ViewName::as_str),
            username,
            language,
        }
    }
}

/// Run the `gather` and `rebind` steps for `T` and return the rebound logger.
#[must_use]
pub fn begin_dispatch<T: Loggable + ?Sized>(logger: &ViewLogger, request: &Request) -> ViewLogger {
    let context = DispatchContext::gather::<T>(request);
    let logger = logger.bind();
    if T::LOG_DISPATCH {
        logger.dispatch(&context);
    }
    logger
}

/// Middleware form of the pipeline for plain axum handlers.
///
/// Usage: `axum::middleware::from_fn(log_dispatch::<ArticleApi>)`
pub async fn log_dispatch<T: Loggable + ?Sized>(request: Request, next: Next) -> Response {
    let _ = begin_dispatch::<T>(&ViewLogger::for_type::<T>(), &request);
    next.run(request).await
}
