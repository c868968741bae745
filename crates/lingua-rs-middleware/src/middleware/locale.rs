//! Locale negotiation middleware.
//!
//! Resolves one locale per request before the handler runs, binds a
//! per-request [`Translator`] onto the request, and merges the locale into
//! view render contexts on the way out.

use async_trait::async_trait;
use http::HeaderValue;

use lingua_rs_core::{I18nSettings, LocaleError, LocaleResult, Translator};
use lingua_rs_http::{HttpRequest, HttpResponse};
use lingua_rs_negotiation::{LocaleResolver, Resolution};

use super::Middleware;

/// The render-context key that carries the resolved locale identifier.
pub const LANGUAGE_CODE_KEY: &str = "languageCode";

/// Middleware that resolves the request locale and binds a translator.
///
/// On the way in, runs the precedence chain (path parameter, query parameter,
/// language header, default) and attaches a [`Translator`] for the winning
/// locale to the request. A request whose path parameter names an unsupported
/// locale is rejected with a 404 before it reaches the handler.
///
/// On the way out, non-error view responses get the request's translator and
/// the `languageCode` key merged into their render context, and non-error
/// responses get a `Content-Language` header. Error responses pass through
/// untouched.
#[derive(Debug, Clone)]
pub struct LocaleNegotiationMiddleware {
    resolver: LocaleResolver,
}

impl LocaleNegotiationMiddleware {
    /// Creates the middleware around an already-built resolver.
    pub const fn new(resolver: LocaleResolver) -> Self {
        Self { resolver }
    }

    /// Builds the middleware from i18n settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty locale list or a default
    /// that is not in the list.
    pub fn from_settings(settings: &I18nSettings) -> LocaleResult<Self> {
        Ok(Self::new(LocaleResolver::from_settings(settings)?))
    }

    /// Returns the resolver this middleware applies.
    pub const fn resolver(&self) -> &LocaleResolver {
        &self.resolver
    }
}

#[async_trait]
impl Middleware for LocaleNegotiationMiddleware {
    async fn process_request(&self, request: &mut HttpRequest) -> Option<HttpResponse> {
        match self.resolver.resolve(request) {
            Resolution::Resolved(locale) => {
                request
                    .meta_mut()
                    .insert("LANGUAGE_CODE".to_string(), locale.clone());
                request.set_i18n(Translator::new(locale));
                None
            }
            Resolution::Unsupported(requested) => {
                let error = LocaleError::UnsupportedLocale { requested };
                tracing::debug!(%error, "rejecting request");
                Some(HttpResponse::not_found(error.to_string()))
            }
        }
    }

    async fn process_response(
        &self,
        request: &HttpRequest,
        mut response: HttpResponse,
    ) -> HttpResponse {
        if response.is_error() {
            return response;
        }

        let Some(translator) = request.i18n() else {
            return response;
        };

        if let Ok(value) = HeaderValue::from_str(translator.locale()) {
            response
                .headers_mut()
                .insert(http::header::CONTENT_LANGUAGE, value);
        }

        if let Some(context) = response.render_context_mut() {
            // Handler-provided keys survive, but languageCode is authoritative.
            context.insert(
                LANGUAGE_CODE_KEY,
                serde_json::Value::String(translator.locale().to_string()),
            );
            context.set_translator(translator.clone());
        }

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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn middleware(ids: &[&str]) -> LocaleNegotiationMiddleware {
        LocaleNegotiationMiddleware::from_settings(&I18nSettings {
            locales: ids.iter().map(ToString::to_string).collect(),
            language_header_field: Some("language".to_string()),
            query_parameter: Some("lang".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_binds_translator_for_default_locale() {
        let mw = middleware(&["de", "en", "fr"]);
        let mut request = HttpRequest::builder().build();
        let short_circuit = mw.process_request(&mut request).await;
        assert!(short_circuit.is_none());
        assert_eq!(request.i18n().map(Translator::locale), Some("de"));
        assert_eq!(request.meta().get("LANGUAGE_CODE").unwrap(), "de");
    }

    #[tokio::test]
    async fn test_rejects_unsupported_path_param_with_exact_message() {
        let mw = middleware(&["de", "en", "fr"]);
        let mut request = HttpRequest::builder()
            .path_param("languageCode", "en-US")
            .build();
        let response = mw.process_request(&mut request).await.unwrap();
        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(
            String::from_utf8(response.content_bytes()).unwrap(),
            "No localization available for en-US"
        );
    }

    #[tokio::test]
    async fn test_merges_language_code_into_render_context() {
        let mw = middleware(&["de", "en", "fr"]);
        let mut request = HttpRequest::builder().query_string("lang=fr").build();
        assert!(mw.process_request(&mut request).await.is_none());

        let mut values = HashMap::new();
        values.insert(
            "title".to_string(),
            serde_json::Value::String("Hello".to_string()),
        );
        let response = HttpResponse::view("index", values);
        let response = mw.process_response(&request, response).await;

        let context = response.render_context().unwrap();
        assert_eq!(
            context.get(LANGUAGE_CODE_KEY),
            Some(&serde_json::Value::String("fr".to_string()))
        );
        assert_eq!(
            context.get("title"),
            Some(&serde_json::Value::String("Hello".to_string()))
        );
        assert_eq!(context.translator().map(Translator::locale), Some("fr"));
    }

    #[tokio::test]
    async fn test_overwrites_handler_language_code() {
        let mw = middleware(&["de", "en", "fr"]);
        let mut request = HttpRequest::builder().query_string("lang=fr").build();
        assert!(mw.process_request(&mut request).await.is_none());

        let mut values = HashMap::new();
        values.insert(
            LANGUAGE_CODE_KEY.to_string(),
            serde_json::Value::String("xx".to_string()),
        );
        let response = HttpResponse::view("index", values);
        let response = mw.process_response(&request, response).await;

        assert_eq!(
            response.render_context().unwrap().get(LANGUAGE_CODE_KEY),
            Some(&serde_json::Value::String("fr".to_string()))
        );
    }

    #[tokio::test]
    async fn test_error_response_untouched() {
        let mw = middleware(&["de", "en", "fr"]);
        let mut request = HttpRequest::builder().build();
        assert!(mw.process_request(&mut request).await.is_none());

        let response = HttpResponse::not_found("missing");
        let response = mw.process_response(&request, response).await;
        assert!(response.headers().get(http::header::CONTENT_LANGUAGE).is_none());
        assert!(response.render_context().is_none());
    }

    #[tokio::test]
    async fn test_sets_content_language_header() {
        let mw = middleware(&["de", "en", "fr"]);
        let mut request = HttpRequest::builder().header("language", "en").build();
        assert!(mw.process_request(&mut request).await.is_none());

        let response = HttpResponse::ok("body");
        let response = mw.process_response(&request, response).await;
        assert_eq!(
            response
                .headers()
                .get(http::header::CONTENT_LANGUAGE)
                .unwrap(),
            "en"
        );
    }

    #[tokio::test]
    async fn test_from_settings_rejects_empty_locales() {
        let result = LocaleNegotiationMiddleware::from_settings(&I18nSettings::default());
        assert!(result.is_err());
    }
}
