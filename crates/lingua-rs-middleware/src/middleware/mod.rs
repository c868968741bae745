//! Middleware framework for lingua-rs.
//!
//! This module provides the [`Middleware`] trait and [`MiddlewarePipeline`]
//! for processing requests and responses. Middleware components can intercept
//! requests before they reach the handler and responses before they are sent
//! to the client.
//!
//! ## Middleware Execution Order
//!
//! Middleware is processed in order for requests (first added = first to
//! process) and in reverse order for responses (first added = last to
//! process), the "onion" model.

pub mod locale;

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use tracing::Instrument;

use lingua_rs_core::logging::request_span;
use lingua_rs_core::LocaleError;
use lingua_rs_http::{HttpRequest, HttpResponse};

/// The type for an async handler function used in the pipeline.
pub type ViewHandler =
    Box<dyn Fn(HttpRequest) -> Pin<Box<dyn Future<Output = HttpResponse> + Send>> + Send + Sync>;

/// A middleware component that can process requests and responses.
///
/// Each middleware can:
/// - Inspect or modify the request before it reaches the handler (`process_request`)
/// - Inspect or modify the response after the handler returns (`process_response`)
/// - Handle an error raised during handler processing (`process_exception`)
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use lingua_rs_middleware::Middleware;
/// use lingua_rs_http::{HttpRequest, HttpResponse};
/// use lingua_rs_core::LocaleError;
///
/// struct LoggingMiddleware;
///
/// #[async_trait]
/// impl Middleware for LoggingMiddleware {
///     async fn process_request(&self, _request: &mut HttpRequest) -> Option<HttpResponse> {
///         None // Allow request to continue
///     }
///
///     async fn process_response(&self, _request: &HttpRequest, response: HttpResponse) -> HttpResponse {
///         response
///     }
///
///     async fn process_exception(&self, _request: &HttpRequest, _error: &LocaleError) -> Option<HttpResponse> {
///         None
///     }
/// }
/// ```
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Process an incoming request before it reaches the handler.
    ///
    /// Return `Some(HttpResponse)` to short-circuit the pipeline and skip the
    /// handler. Return `None` to allow the request to continue to the next
    /// middleware and eventually the handler.
    async fn process_request(&self, request: &mut HttpRequest) -> Option<HttpResponse>;

    /// Process the response after the handler has been called.
    ///
    /// This is called in reverse middleware order (last added = first to
    /// process the response).
    async fn process_response(
        &self,
        request: &HttpRequest,
        response: HttpResponse,
    ) -> HttpResponse;

    /// Handle an error that occurred during handler processing.
    ///
    /// Return `Some(HttpResponse)` to provide a custom error response.
    /// Return `None` to let the default error handling proceed.
    async fn process_exception(
        &self,
        request: &HttpRequest,
        error: &LocaleError,
    ) -> Option<HttpResponse>;
}

/// A pipeline of middleware components that processes requests and responses.
///
/// The pipeline runs middleware in order for requests and in reverse order
/// for responses. Each request is processed inside its own tracing span
/// carrying a generated request id.
///
/// # Examples
///
/// ```
/// use lingua_rs_middleware::{LocaleNegotiationMiddleware, MiddlewarePipeline};
/// use lingua_rs_core::I18nSettings;
///
/// let settings = I18nSettings {
///     locales: vec!["de".into(), "en".into()],
///     ..Default::default()
/// };
/// let mut pipeline = MiddlewarePipeline::new();
/// pipeline.add(LocaleNegotiationMiddleware::from_settings(&settings).unwrap());
/// ```
pub struct MiddlewarePipeline {
    middlewares: Vec<Box<dyn Middleware>>,
}

impl Default for MiddlewarePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl MiddlewarePipeline {
    /// Creates a new empty middleware pipeline.
    pub const fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Adds a middleware to the end of the pipeline.
    pub fn add(&mut self, middleware: impl Middleware + 'static) {
        self.middlewares.push(Box::new(middleware));
    }

    /// Returns the number of middleware components in the pipeline.
    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    /// Returns `true` if the pipeline has no middleware components.
    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }

    /// Processes a request through the full middleware pipeline and handler.
    ///
    /// 1. Calls `process_request` on each middleware in order. If any returns
    ///    `Some(response)`, short-circuits and runs `process_response` in
    ///    reverse on only the middleware that already ran.
    /// 2. Calls the handler with a rebuilt request.
    /// 3. Calls `process_response` on each middleware in reverse order.
    pub async fn process(&self, request: HttpRequest, handler: &ViewHandler) -> HttpResponse {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = request_span(&request_id);
        self.process_inner(request, handler).instrument(span).await
    }

    async fn process_inner(
        &self,
        mut request: HttpRequest,
        handler: &ViewHandler,
    ) -> HttpResponse {
        // Phase 1: process_request (forward order)
        for (i, mw) in self.middlewares.iter().enumerate() {
            if let Some(response) = mw.process_request(&mut request).await {
                // Short-circuit: run process_response on already-processed middleware
                let mut resp = response;
                for j in (0..=i).rev() {
                    resp = self.middlewares[j].process_response(&request, resp).await;
                }
                return resp;
            }
        }

        // Phase 2: call the handler with a rebuilt request
        let handler_request = rebuild_request(&request);
        let response = handler(handler_request).await;

        // Phase 3: process_response (reverse order)
        let mut resp = response;
        for mw in self.middlewares.iter().rev() {
            resp = mw.process_response(&request, resp).await;
        }

        resp
    }
}

/// Rebuilds an `HttpRequest` from an existing one to pass ownership to the
/// handler.
///
/// The rebuilt request carries the same method, path, query string, headers,
/// metadata, path parameters, and bound translator as the original.
fn rebuild_request(request: &HttpRequest) -> HttpRequest {
    let mut builder = HttpRequest::builder()
        .method(request.method().clone())
        .path(request.path())
        .query_string(request.query_string())
        .scheme(request.scheme())
        .body(request.body().to_vec())
        // The whole map, so repeated values for one name survive.
        .headers(request.headers().clone());

    for (key, value) in request.meta() {
        builder = builder.meta(key, value);
    }

    let mut req = builder.build();
    req.set_path_params(request.path_params().clone());
    if let Some(translator) = request.i18n() {
        req.set_i18n(translator.clone());
    }
    req
}

impl std::fmt::Debug for MiddlewarePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiddlewarePipeline")
            .field("middleware_count", &self.middlewares.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use lingua_rs_core::Translator;

    /// Records every stage it sees into one shared log.
    struct StageLog {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Middleware for StageLog {
        async fn process_request(&self, _request: &mut HttpRequest) -> Option<HttpResponse> {
            self.log.lock().unwrap().push(format!("req {}", self.name));
            None
        }

        async fn process_response(
            &self,
            _request: &HttpRequest,
            response: HttpResponse,
        ) -> HttpResponse {
            self.log.lock().unwrap().push(format!("resp {}", self.name));
            response
        }

        async fn process_exception(
            &self,
            _request: &HttpRequest,
            _error: &LocaleError,
        ) -> Option<HttpResponse> {
            None
        }
    }

    /// Rejects every request before the handler, like the binder does for an
    /// unsupported path-parameter locale.
    struct RejectAll;

    #[async_trait]
    impl Middleware for RejectAll {
        async fn process_request(&self, _request: &mut HttpRequest) -> Option<HttpResponse> {
            Some(HttpResponse::not_found("no such locale"))
        }

        async fn process_response(
            &self,
            _request: &HttpRequest,
            response: HttpResponse,
        ) -> HttpResponse {
            response
        }

        async fn process_exception(
            &self,
            _request: &HttpRequest,
            _error: &LocaleError,
        ) -> Option<HttpResponse> {
            None
        }
    }

    /// Attaches a fixed-locale translator, a minimal stand-in for the binder.
    struct BindFixedLocale(&'static str);

    #[async_trait]
    impl Middleware for BindFixedLocale {
        async fn process_request(&self, request: &mut HttpRequest) -> Option<HttpResponse> {
            request.set_i18n(Translator::new(self.0));
            None
        }

        async fn process_response(
            &self,
            _request: &HttpRequest,
            response: HttpResponse,
        ) -> HttpResponse {
            response
        }

        async fn process_exception(
            &self,
            _request: &HttpRequest,
            _error: &LocaleError,
        ) -> Option<HttpResponse> {
            None
        }
    }

    fn stage_log() -> (Arc<Mutex<Vec<String>>>, impl Fn(&'static str) -> StageLog) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let make = {
            let log = log.clone();
            move |name| StageLog {
                name,
                log: log.clone(),
            }
        };
        (log, make)
    }

    fn make_handler() -> ViewHandler {
        Box::new(|_req| Box::pin(async { HttpResponse::ok("handler response") }))
    }

    #[tokio::test]
    async fn test_empty_pipeline_passes_handler_response_through() {
        let pipeline = MiddlewarePipeline::new();
        assert!(pipeline.is_empty());

        let handler = make_handler();
        let response = pipeline.process(HttpRequest::builder().build(), &handler).await;
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.content_bytes(), b"handler response");
    }

    #[tokio::test]
    async fn test_onion_ordering() {
        let (log, stage) = stage_log();
        let mut pipeline = MiddlewarePipeline::new();
        pipeline.add(stage("outer"));
        pipeline.add(stage("inner"));
        assert_eq!(pipeline.len(), 2);

        let handler = make_handler();
        pipeline.process(HttpRequest::builder().build(), &handler).await;

        // Requests run in registration order, responses in reverse.
        assert_eq!(
            *log.lock().unwrap(),
            vec!["req outer", "req inner", "resp inner", "resp outer"]
        );
    }

    #[tokio::test]
    async fn test_short_circuit_unwinds_only_middleware_that_ran() {
        let (log, stage) = stage_log();
        let mut pipeline = MiddlewarePipeline::new();
        pipeline.add(stage("before"));
        pipeline.add(RejectAll);
        pipeline.add(stage("after"));

        let handler = make_handler();
        let response = pipeline.process(HttpRequest::builder().build(), &handler).await;

        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
        // "after" never saw the request, so it must not see the response.
        assert_eq!(*log.lock().unwrap(), vec!["req before", "resp before"]);
    }

    #[tokio::test]
    async fn test_binding_attached_in_process_request_reaches_handler() {
        let seen = Arc::new(Mutex::new(None));
        let seen_by_handler = seen.clone();
        let handler: ViewHandler = Box::new(move |request| {
            let seen = seen_by_handler.clone();
            Box::pin(async move {
                *seen.lock().unwrap() = request.i18n().map(|t| t.locale().to_string());
                HttpResponse::ok("")
            })
        });

        let mut pipeline = MiddlewarePipeline::new();
        pipeline.add(BindFixedLocale("fr"));
        pipeline.process(HttpRequest::builder().build(), &handler).await;

        assert_eq!(seen.lock().unwrap().as_deref(), Some("fr"));
    }

    #[tokio::test]
    async fn test_pipeline_debug() {
        let mut pipeline = MiddlewarePipeline::new();
        pipeline.add(BindFixedLocale("de"));
        let debug = format!("{pipeline:?}");
        assert!(debug.contains("middleware_count"));
        assert!(debug.contains('1'));
    }

    #[tokio::test]
    async fn test_rebuild_request_preserves_shape() {
        let mut request = HttpRequest::builder()
            .method(http::Method::POST)
            .path("/fr/articles/")
            .query_string("lang=de")
            .path_param("languageCode", "fr")
            .header("language", "en")
            .build();
        request.set_i18n(Translator::new("fr"));

        let rebuilt = rebuild_request(&request);
        assert_eq!(rebuilt.method(), &http::Method::POST);
        assert_eq!(rebuilt.path(), "/fr/articles/");
        assert_eq!(rebuilt.query_string(), "lang=de");
        assert_eq!(rebuilt.path_param("languageCode"), Some("fr"));
        assert_eq!(rebuilt.header("language"), Some("en"));
        assert_eq!(rebuilt.i18n().map(Translator::locale), Some("fr"));
    }

    #[tokio::test]
    async fn test_rebuild_request_keeps_repeated_header_values() {
        let mut headers = http::HeaderMap::new();
        headers.append(
            http::header::ACCEPT_LANGUAGE,
            http::HeaderValue::from_static("fr-CA"),
        );
        headers.append(
            http::header::ACCEPT_LANGUAGE,
            http::HeaderValue::from_static("en;q=0.8"),
        );
        let request = HttpRequest::builder().headers(headers).build();

        let rebuilt = rebuild_request(&request);
        let values: Vec<&str> = rebuilt
            .headers()
            .get_all(http::header::ACCEPT_LANGUAGE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        assert_eq!(values, vec!["fr-CA", "en;q=0.8"]);
    }
}
