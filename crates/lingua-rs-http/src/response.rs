//! HTTP response types.
//!
//! [`HttpResponse`] covers plain text/byte responses, JSON responses, and
//! view responses that carry a [`RenderContext`] for a downstream template
//! engine. The locale merger only ever touches view responses.

use std::collections::HashMap;

use axum::response::IntoResponse;
use http::{HeaderMap, HeaderValue, StatusCode};

use lingua_rs_core::Translator;

/// The body content of an HTTP response.
#[derive(Debug)]
pub enum ResponseContent {
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// UTF-8 text.
    Text(String),
}

/// The template rendering context carried by a view response.
///
/// Holds the variables the handler passed to the view plus, after the locale
/// merger has run, the authoritative `languageCode` value and the request's
/// [`Translator`] for the template engine's translation helpers.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    template: String,
    values: HashMap<String, serde_json::Value>,
    translator: Option<Translator>,
}

impl RenderContext {
    /// Creates a context for the given template with the given variables.
    pub fn new(template: impl Into<String>, values: HashMap<String, serde_json::Value>) -> Self {
        Self {
            template: template.into(),
            values,
            translator: None,
        }
    }

    /// Returns the template name.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns a context value.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Returns `true` if the context contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Sets a context value, overwriting any existing entry.
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.values.insert(key.into(), value);
    }

    /// Sets a context value only if the key is not already present.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.values.entry(key.into()).or_insert(value);
    }

    /// Returns all context values.
    pub const fn values(&self) -> &HashMap<String, serde_json::Value> {
        &self.values
    }

    /// Returns the attached translation handle, if the merger has run.
    pub const fn translator(&self) -> Option<&Translator> {
        self.translator.as_ref()
    }

    /// Attaches the translation handle for template helpers.
    pub fn set_translator(&mut self, translator: Translator) {
        self.translator = Some(translator);
    }
}

/// An HTTP response.
///
/// # Examples
///
/// ```
/// use lingua_rs_http::HttpResponse;
///
/// let response = HttpResponse::ok("Hello, World!");
/// assert_eq!(response.status(), http::StatusCode::OK);
/// assert!(!response.is_view());
/// ```
#[derive(Debug)]
pub struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    content: ResponseContent,
    charset: String,
    content_type: String,
    render: Option<RenderContext>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with the given status code and text body.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            content: ResponseContent::Text(body.into()),
            charset: "utf-8".to_string(),
            content_type: "text/html".to_string(),
            render: None,
        }
    }

    /// Creates a new `HttpResponse` with the given status code and byte body.
    pub fn with_bytes(status: StatusCode, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            content: ResponseContent::Bytes(body),
            charset: "utf-8".to_string(),
            content_type: "application/octet-stream".to_string(),
            render: None,
        }
    }

    /// Creates a 200 OK response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// Creates a 404 Not Found response.
    pub fn not_found(body: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, body)
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request(body: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, body)
    }

    /// Creates a 500 Internal Server Error response.
    pub fn server_error(body: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, body)
    }

    /// Creates a view response for the given template and context variables.
    ///
    /// The body stays empty at this layer; a downstream template engine
    /// renders it from the [`RenderContext`] after the locale merger has
    /// injected `languageCode` and the translation handle.
    pub fn view(template: &str, context: HashMap<String, serde_json::Value>) -> Self {
        let mut response = Self::new(StatusCode::OK, "");
        response.render = Some(RenderContext::new(template, context));
        response
    }

    /// Returns the status code.
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Sets the status code.
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Returns `true` if the status is a client or server error.
    pub fn is_error(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    /// Returns a reference to the headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a mutable reference to the headers.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Adds a header to the response.
    #[must_use]
    pub fn set_header(mut self, name: http::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Returns the content type.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Sets the content type.
    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.content_type = content_type.into();
    }

    /// Returns the response body as the content enum.
    pub const fn content(&self) -> &ResponseContent {
        &self.content
    }

    /// Returns the body as bytes.
    pub fn content_bytes(&self) -> Vec<u8> {
        match &self.content {
            ResponseContent::Bytes(b) => b.clone(),
            ResponseContent::Text(t) => t.as_bytes().to_vec(),
        }
    }

    /// Returns `true` if this is a view response carrying a render context.
    pub const fn is_view(&self) -> bool {
        self.render.is_some()
    }

    /// Returns the render context of a view response.
    pub const fn render_context(&self) -> Option<&RenderContext> {
        self.render.as_ref()
    }

    /// Returns a mutable reference to the render context.
    pub fn render_context_mut(&mut self) -> Option<&mut RenderContext> {
        self.render.as_mut()
    }

    /// Returns the full content type header value including charset.
    fn full_content_type(&self) -> String {
        if self.content_type.starts_with("text/") || self.content_type.contains("json") {
            format!("{}; charset={}", self.content_type, self.charset)
        } else {
            self.content_type.clone()
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> axum::response::Response {
        let mut builder = axum::response::Response::builder().status(self.status);

        if let Ok(ct) = HeaderValue::from_str(&self.full_content_type()) {
            builder = builder.header(http::header::CONTENT_TYPE, ct);
        }

        let body = match self.content {
            ResponseContent::Text(text) => axum::body::Body::from(text),
            ResponseContent::Bytes(bytes) => axum::body::Body::from(bytes),
        };

        let response = builder.body(body).unwrap_or_else(|_| {
            axum::response::Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(axum::body::Body::from("Internal Server Error"))
                .expect("fallback response should always be valid")
        });

        let (mut parts, body) = response.into_parts();
        for (key, value) in &self.headers {
            parts.headers.insert(key, value.clone());
        }
        axum::response::Response::from_parts(parts, body)
    }
}

/// A JSON response.
///
/// Serializes the given data as JSON and sets the content type to
/// `application/json`.
pub struct JsonResponse;

impl JsonResponse {
    /// Creates a new JSON response from a serializable value.
    ///
    /// Returns an error response if serialization fails.
    pub fn new<T: serde::Serialize>(data: &T) -> HttpResponse {
        Self::with_status(StatusCode::OK, data)
    }

    /// Creates a new JSON response with a custom status code.
    pub fn with_status<T: serde::Serialize>(status: StatusCode, data: &T) -> HttpResponse {
        match serde_json::to_string(data) {
            Ok(json) => {
                let mut response = HttpResponse::new(status, json);
                response.set_content_type("application/json");
                response
            }
            Err(e) => HttpResponse::server_error(format!("JSON serialization error: {e}")),
        }
    }
}

/// A 404 Not Found response.
pub struct HttpResponseNotFound;

impl HttpResponseNotFound {
    /// Creates a 404 Not Found response with the given body.
    pub fn new(body: impl Into<String>) -> HttpResponse {
        HttpResponse::not_found(body)
    }
}
