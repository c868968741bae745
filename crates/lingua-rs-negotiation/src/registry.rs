//! The supported-locale registry.
//!
//! [`LocaleRegistry`] holds the configured set of locale identifiers and the
//! default. It is created once at startup, validated eagerly, and never
//! mutated afterwards, so sharing it between concurrent requests is safe:
//! every request only reads it.

use lingua_rs_core::{LocaleError, LocaleResult};

/// Returns the implicit default locale for a configured list: its first
/// element. Order is significant and preserved exactly as configured.
///
/// # Errors
///
/// Returns [`LocaleError::ConfigurationError`] if the list is empty.
///
/// # Examples
///
/// ```
/// use lingua_rs_negotiation::extract_default_locale;
///
/// let locales = vec!["fr".to_string(), "de".to_string()];
/// assert_eq!(extract_default_locale(&locales).unwrap(), "fr");
/// assert!(extract_default_locale(&[]).is_err());
/// ```
pub fn extract_default_locale(locales: &[String]) -> LocaleResult<&str> {
    locales.first().map(String::as_str).ok_or_else(|| {
        LocaleError::ConfigurationError("no locales defined".to_string())
    })
}

/// The immutable set of supported locale identifiers plus one default.
///
/// Lookups are case-insensitive and return the configured spelling, so a
/// request hint of `"EN-gb"` matches a configured `"en-GB"`.
///
/// # Examples
///
/// ```
/// use lingua_rs_negotiation::LocaleRegistry;
///
/// let registry = LocaleRegistry::configure(
///     vec!["de".to_string(), "en-GB".to_string()],
///     None,
/// ).unwrap();
///
/// assert_eq!(registry.default_locale(), "de");
/// assert!(registry.is_supported("en-GB"));
/// assert_eq!(registry.canonical("EN-gb"), Some("en-GB"));
/// assert!(!registry.is_supported("fr"));
/// ```
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<String>,
    default_locale: String,
}

impl LocaleRegistry {
    /// Builds a registry from the configured locale list and optional
    /// explicit default.
    ///
    /// When `default` is `None` the first element of `locales` becomes the
    /// default. An explicit default must itself be a configured locale; it is
    /// matched case-insensitively like every other lookup and the configured
    /// spelling is what gets stored.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::ConfigurationError`] if `locales` is empty or
    /// the explicit default is not in the list.
    pub fn configure(locales: Vec<String>, default: Option<String>) -> LocaleResult<Self> {
        let implicit = extract_default_locale(&locales)?.to_string();

        let default_locale = match default {
            Some(requested) => match locales.iter().find(|l| l.eq_ignore_ascii_case(&requested)) {
                Some(canonical) => canonical.clone(),
                None => {
                    return Err(LocaleError::ConfigurationError(format!(
                        "default locale {requested} is not in the configured locales"
                    )));
                }
            },
            None => implicit,
        };

        Ok(Self {
            locales,
            default_locale,
        })
    }

    /// Returns `true` if the identifier matches a configured locale
    /// (case-insensitively).
    pub fn is_supported(&self, id: &str) -> bool {
        self.canonical(id).is_some()
    }

    /// Returns the configured spelling of an identifier, matched
    /// case-insensitively, or `None` if it is not supported.
    pub fn canonical(&self, id: &str) -> Option<&str> {
        self.locales
            .iter()
            .find(|l| l.eq_ignore_ascii_case(id))
            .map(String::as_str)
    }

    /// Returns the default locale.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Returns the configured locales, in configuration order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }
}
