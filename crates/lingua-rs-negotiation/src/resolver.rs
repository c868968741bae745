//! The locale precedence resolver.
//!
//! [`LocaleResolver::resolve`] applies the precedence chain (path parameter,
//! query parameter, language header, default) and produces exactly one
//! [`Resolution`] per call. The resolver owns no mutable state: it is a pure
//! function of the request plus the immutable registry, so it can be shared
//! between concurrent requests and invoked repeatedly with the same outcome.

use lingua_rs_core::{I18nSettings, LocaleResult};
use lingua_rs_http::HttpRequest;

use crate::accept;
use crate::registry::LocaleRegistry;

/// The name of the route path parameter carrying an explicit locale request.
pub const LANGUAGE_CODE_PARAM: &str = "languageCode";

/// The immediate result of one resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A locale was resolved (from a hint or the default).
    Resolved(String),
    /// An explicitly requested path-parameter locale is not supported.
    ///
    /// Carries the rejected identifier verbatim. Only the path-parameter
    /// level may reject; all other hints degrade silently.
    Unsupported(String),
}

/// Applies the precedence algorithm to pick one locale per request.
///
/// # Examples
///
/// ```
/// use lingua_rs_core::I18nSettings;
/// use lingua_rs_http::HttpRequest;
/// use lingua_rs_negotiation::{LocaleResolver, Resolution};
///
/// let resolver = LocaleResolver::from_settings(&I18nSettings {
///     locales: vec!["de".into(), "en".into(), "fr".into()],
///     query_parameter: Some("lang".into()),
///     ..Default::default()
/// }).unwrap();
///
/// let request = HttpRequest::builder().query_string("lang=fr").build();
/// assert_eq!(resolver.resolve(&request), Resolution::Resolved("fr".into()));
///
/// let request = HttpRequest::builder().build();
/// assert_eq!(resolver.resolve(&request), Resolution::Resolved("de".into()));
/// ```
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    registry: LocaleRegistry,
    query_parameter: Option<String>,
    header_field: Option<String>,
}

impl LocaleResolver {
    /// Creates a resolver over an already-configured registry.
    ///
    /// The header field name is normalized to lower case once here so that
    /// per-request lookups compare case-insensitively without re-normalizing.
    pub fn new(
        registry: LocaleRegistry,
        query_parameter: Option<String>,
        header_field: Option<String>,
    ) -> Self {
        Self {
            registry,
            query_parameter,
            header_field: header_field.map(|f| f.to_ascii_lowercase()),
        }
    }

    /// Builds the registry from settings and wraps it in a resolver.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty locale list or a default
    /// that is not in the list.
    pub fn from_settings(settings: &I18nSettings) -> LocaleResult<Self> {
        let registry =
            LocaleRegistry::configure(settings.locales.clone(), settings.default_locale.clone())?;
        Ok(Self::new(
            registry,
            settings.query_parameter.clone(),
            settings.language_header_field.clone(),
        ))
    }

    /// Returns the registry this resolver consults.
    pub const fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Resolves the locale for one request.
    ///
    /// Strictly ordered precedence; once a level yields a usable locale, the
    /// lower levels are not consulted:
    ///
    /// 1. Path parameter `languageCode`: must be supported, otherwise the
    ///    request is rejected with [`Resolution::Unsupported`].
    /// 2. The configured query parameter: an unsupported value is treated
    ///    as "not provided" and resolution continues down the chain.
    /// 3. The configured header field, matched as a ranked language-range
    ///    list.
    /// 4. The registry default.
    ///
    /// Performs no I/O and never suspends.
    pub fn resolve(&self, request: &HttpRequest) -> Resolution {
        // 1. Path parameter: explicit, and the only level that can reject.
        if let Some(requested) = request.path_param(LANGUAGE_CODE_PARAM) {
            return self.registry.canonical(requested).map_or_else(
                || {
                    tracing::debug!(requested = %requested, "unsupported path-parameter locale");
                    Resolution::Unsupported(requested.to_string())
                },
                |canonical| {
                    tracing::debug!(locale = %canonical, "locale from path parameter");
                    Resolution::Resolved(canonical.to_string())
                },
            );
        }

        // 2. Query parameter: an unsupported value degrades silently.
        if let Some(param) = &self.query_parameter {
            if let Some(requested) = request.get().get(param) {
                if let Some(canonical) = self.registry.canonical(requested) {
                    tracing::debug!(locale = %canonical, "locale from query parameter");
                    return Resolution::Resolved(canonical.to_string());
                }
                tracing::debug!(requested = %requested, "ignoring unsupported query locale");
            }
        }

        // 3. Header field: ranked language-range matching.
        if let Some(field) = &self.header_field {
            if let Some(value) = request.header(field) {
                if let Some(matched) = accept::negotiate(value, &self.registry) {
                    tracing::debug!(locale = %matched, "locale from header");
                    return Resolution::Resolved(matched);
                }
            }
        }

        // 4. Default.
        tracing::debug!(locale = %self.registry.default_locale(), "locale from default");
        Resolution::Resolved(self.registry.default_locale().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(ids: &[&str]) -> LocaleResolver {
        LocaleResolver::from_settings(&I18nSettings {
            locales: ids.iter().map(ToString::to_string).collect(),
            language_header_field: Some("language".to_string()),
            query_parameter: Some("lang".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_no_hints_resolves_default() {
        let resolver = resolver(&["de", "en", "fr"]);
        let request = HttpRequest::builder().build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Resolved("de".to_string())
        );
    }

    #[test]
    fn test_path_param_wins_over_header_and_query() {
        let resolver = resolver(&["de", "en", "fr"]);
        let request = HttpRequest::builder()
            .path("/fr/localized/resource")
            .path_param(LANGUAGE_CODE_PARAM, "fr")
            .query_string("lang=de")
            .header("language", "en")
            .build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Resolved("fr".to_string())
        );
    }

    #[test]
    fn test_unsupported_path_param_rejects() {
        let resolver = resolver(&["de", "en", "fr"]);
        let request = HttpRequest::builder()
            .path_param(LANGUAGE_CODE_PARAM, "en-US")
            .build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Unsupported("en-US".to_string())
        );
    }

    #[test]
    fn test_query_param_used_without_path_param() {
        let resolver = resolver(&["de", "en", "fr"]);
        let request = HttpRequest::builder().query_string("lang=fr").build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Resolved("fr".to_string())
        );
    }

    #[test]
    fn test_query_param_wins_over_header() {
        let resolver = resolver(&["de", "en", "fr"]);
        let request = HttpRequest::builder()
            .query_string("lang=fr")
            .header("language", "en")
            .build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Resolved("fr".to_string())
        );
    }

    #[test]
    fn test_unsupported_query_param_degrades_to_header() {
        let resolver = resolver(&["de", "en", "fr"]);
        let request = HttpRequest::builder()
            .query_string("lang=xx")
            .header("language", "en")
            .build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Resolved("en".to_string())
        );
    }

    #[test]
    fn test_unsupported_query_param_degrades_to_default() {
        let resolver = resolver(&["de", "en", "fr"]);
        let request = HttpRequest::builder().query_string("lang=xx").build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Resolved("de".to_string())
        );
    }

    #[test]
    fn test_header_match() {
        let resolver = resolver(&["de", "en", "fr"]);
        let request = HttpRequest::builder().header("language", "fr").build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Resolved("fr".to_string())
        );
    }

    #[test]
    fn test_header_field_name_case_insensitive() {
        let settings = I18nSettings {
            locales: vec!["de".to_string(), "fr".to_string()],
            language_header_field: Some("Language".to_string()),
            ..Default::default()
        };
        let resolver = LocaleResolver::from_settings(&settings).unwrap();
        let request = HttpRequest::builder().header("language", "fr").build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Resolved("fr".to_string())
        );
    }

    #[test]
    fn test_header_ranked_ranges() {
        let resolver = resolver(&["de", "en-GB", "en", "fr"]);
        let request = HttpRequest::builder()
            .header("language", "es,en-GB,en-US;q=0.9,en;q=0.8")
            .build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Resolved("en-GB".to_string())
        );
    }

    #[test]
    fn test_unmatched_header_degrades_to_default() {
        let resolver = resolver(&["de", "en", "fr"]);
        let request = HttpRequest::builder().header("language", "es,it").build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Resolved("de".to_string())
        );
    }

    #[test]
    fn test_unconfigured_query_and_header_are_not_consulted() {
        let settings = I18nSettings {
            locales: vec!["de".to_string(), "fr".to_string()],
            ..Default::default()
        };
        let resolver = LocaleResolver::from_settings(&settings).unwrap();
        let request = HttpRequest::builder()
            .query_string("lang=fr")
            .header("language", "fr")
            .build();
        assert_eq!(
            resolver.resolve(&request),
            Resolution::Resolved("de".to_string())
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = resolver(&["de", "en", "fr"]);
        let request = HttpRequest::builder()
            .query_string("lang=fr")
            .header("language", "en")
            .build();
        let first = resolver.resolve(&request);
        let second = resolver.resolve(&request);
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_settings_empty_locales_fails() {
        let result = LocaleResolver::from_settings(&I18nSettings::default());
        assert!(result.is_err());
    }
}
