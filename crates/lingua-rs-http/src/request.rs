//! HTTP request type.
//!
//! [`HttpRequest`] provides access to the request method, path, headers, query
//! parameters, route path parameters, and server metadata, plus the typed slot
//! holding the per-request locale binding.

use std::collections::HashMap;

use http::{HeaderMap, Method};

use lingua_rs_core::Translator;

use crate::querydict::QueryDict;

/// An HTTP request.
///
/// Instances are created from an incoming Axum request via
/// [`HttpRequest::from_axum`], or through [`HttpRequest::builder`] in tests.
///
/// The locale binding lives in a private, typed field rather than a
/// string-keyed metadata map: unrelated code cannot guess or overwrite it,
/// and there is no shared value it could be lazily initialized from. It is
/// `None` until the binding middleware attaches a fresh [`Translator`].
///
/// # Examples
///
/// ```
/// use lingua_rs_http::HttpRequest;
///
/// let request = HttpRequest::builder()
///     .method(http::Method::GET)
///     .path("/fr/articles/")
///     .path_param("languageCode", "fr")
///     .query_string("page=1")
///     .build();
///
/// assert_eq!(request.path(), "/fr/articles/");
/// assert_eq!(request.path_param("languageCode"), Some("fr"));
/// assert_eq!(request.get().get("page"), Some("1"));
/// assert!(request.i18n().is_none());
/// ```
#[derive(Debug)]
pub struct HttpRequest {
    method: Method,
    path: String,
    query_string: String,
    get: QueryDict,
    headers: HeaderMap,
    meta: HashMap<String, String>,
    path_params: HashMap<String, String>,
    body: Vec<u8>,
    scheme: String,
    i18n: Option<Translator>,
}

impl HttpRequest {
    /// Creates a new [`HttpRequestBuilder`].
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::default()
    }

    /// Creates an `HttpRequest` from an Axum/hyper request and its body bytes.
    ///
    /// Route path parameters are not known at this layer; the router attaches
    /// them afterwards via [`set_path_params`](Self::set_path_params).
    pub fn from_axum(parts: http::request::Parts, body: Vec<u8>) -> Self {
        let method = parts.method;
        let uri = parts.uri;
        let headers = parts.headers;

        let path = uri.path().to_string();
        let query_string = uri.query().unwrap_or("").to_string();
        let get = QueryDict::parse(&query_string);

        // Build the META dict from HTTP_ headers and standard entries.
        let mut meta = HashMap::new();
        for (name, value) in &headers {
            let meta_key = format!("HTTP_{}", name.as_str().to_uppercase().replace('-', "_"));
            if let Ok(v) = value.to_str() {
                meta.insert(meta_key, v.to_string());
            }
        }
        meta.insert("REQUEST_METHOD".to_string(), method.to_string());
        meta.insert("PATH_INFO".to_string(), path.clone());
        meta.insert("QUERY_STRING".to_string(), query_string.clone());

        let scheme = if headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "https")
        {
            "https".to_string()
        } else {
            "http".to_string()
        };

        Self {
            method,
            path,
            query_string,
            get,
            headers,
            meta,
            path_params: HashMap::new(),
            body,
            scheme,
            i18n: None,
        }
    }

    /// Returns the HTTP method.
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request path (without query string).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the raw query string (without the leading `?`).
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Returns the GET query parameters as a [`QueryDict`].
    pub const fn get(&self) -> &QueryDict {
        &self.get
    }

    /// Returns the request headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a header value as a string, looked up case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the META dictionary containing server-level metadata.
    pub const fn meta(&self) -> &HashMap<String, String> {
        &self.meta
    }

    /// Returns a mutable reference to the META dictionary.
    pub fn meta_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.meta
    }

    /// Returns the route path parameters captured by the router.
    pub const fn path_params(&self) -> &HashMap<String, String> {
        &self.path_params
    }

    /// Returns a single route path parameter.
    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    /// Sets the route path parameters on this request.
    pub fn set_path_params(&mut self, params: HashMap<String, String>) {
        self.path_params = params;
    }

    /// Returns the raw request body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the URL scheme (`"http"` or `"https"`).
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns `true` if the request uses HTTPS.
    pub fn is_secure(&self) -> bool {
        self.scheme == "https"
    }

    /// Returns the locale binding, if one has been attached.
    pub const fn i18n(&self) -> Option<&Translator> {
        self.i18n.as_ref()
    }

    /// Attaches the per-request locale binding.
    ///
    /// Called exactly once per request by the binding middleware, before any
    /// handler code runs.
    pub fn set_i18n(&mut self, translator: Translator) {
        self.i18n = Some(translator);
    }
}

/// Builder for constructing [`HttpRequest`] instances in tests.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: Method,
    path: String,
    query_string: String,
    headers: HeaderMap,
    meta: HashMap<String, String>,
    path_params: HashMap<String, String>,
    body: Vec<u8>,
    scheme: String,
}

impl Default for HttpRequestBuilder {
    fn default() -> Self {
        Self {
            method: Method::GET,
            path: "/".to_string(),
            query_string: String::new(),
            headers: HeaderMap::new(),
            meta: HashMap::new(),
            path_params: HashMap::new(),
            body: Vec::new(),
            scheme: "http".to_string(),
        }
    }
}

impl HttpRequestBuilder {
    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the request path.
    #[must_use]
    pub fn path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    /// Sets the query string (without leading `?`).
    #[must_use]
    pub fn query_string(mut self, qs: &str) -> Self {
        self.query_string = qs.to_string();
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            http::header::HeaderName::from_bytes(name.as_bytes()),
            http::header::HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Replaces the header map wholesale.
    ///
    /// Unlike [`header`](Self::header) this preserves repeated values for
    /// the same header name.
    #[must_use]
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a META entry.
    #[must_use]
    pub fn meta(mut self, key: &str, value: &str) -> Self {
        self.meta.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a route path parameter.
    #[must_use]
    pub fn path_param(mut self, name: &str, value: &str) -> Self {
        self.path_params.insert(name.to_string(), value.to_string());
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Sets the scheme (http or https).
    #[must_use]
    pub fn scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    /// Builds the [`HttpRequest`].
    pub fn build(self) -> HttpRequest {
        let get = QueryDict::parse(&self.query_string);

        let mut meta = self.meta;
        meta.entry("REQUEST_METHOD".to_string())
            .or_insert_with(|| self.method.to_string());
        meta.entry("PATH_INFO".to_string())
            .or_insert_with(|| self.path.clone());
        meta.entry("QUERY_STRING".to_string())
            .or_insert_with(|| self.query_string.clone());

        HttpRequest {
            method: self.method,
            path: self.path,
            query_string: self.query_string,
            get,
            headers: self.headers,
            meta,
            path_params: self.path_params,
            body: self.body,
            scheme: self.scheme,
            i18n: None,
        }
    }
}
