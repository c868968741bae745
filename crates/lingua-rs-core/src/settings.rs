//! Settings for the lingua-rs toolkit.
//!
//! [`Settings`] holds process-wide configuration and [`LazySettings`] provides
//! a globally-accessible instance configured once at startup. Configuration is
//! read-only after startup; per-request code only ever reads it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{LocaleError, LocaleResult};

/// Internationalization configuration.
///
/// Everything the negotiation pipeline needs: the supported locales (order is
/// significant, the first entry is the implicit default), the optional
/// explicit default, the catalog directory, and the names of the query
/// parameter and header field consulted during resolution.
///
/// # Examples
///
/// ```
/// use lingua_rs_core::settings::I18nSettings;
///
/// let i18n = I18nSettings {
///     locales: vec!["de".to_string(), "en".to_string(), "fr".to_string()],
///     language_header_field: Some("language".to_string()),
///     query_parameter: Some("lang".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(i18n.locales[0], "de");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
    /// Supported locale identifiers, in precedence order. Must be non-empty.
    pub locales: Vec<String>,
    /// The default locale. When absent, the first entry of `locales` is used.
    pub default_locale: Option<String>,
    /// Directory containing `<locale>.json` catalog files.
    pub directory: Option<PathBuf>,
    /// Header field consulted during resolution (compared case-insensitively).
    pub language_header_field: Option<String>,
    /// Query parameter consulted during resolution.
    pub query_parameter: Option<String>,
}

/// The complete set of toolkit settings.
///
/// # Examples
///
/// ```
/// use lingua_rs_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
    /// Internationalization configuration.
    pub i18n: I18nSettings,
    /// Pass-through options for collaborators (view engine, catalog backend).
    /// Not interpreted by this toolkit.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            i18n: I18nSettings::default(),
            extra: HashMap::new(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::ConfigurationError`] if the document is not
    /// valid TOML or does not match the settings schema.
    pub fn from_toml_str(content: &str) -> LocaleResult<Self> {
        toml::from_str(content)
            .map_err(|e| LocaleError::ConfigurationError(format!("invalid settings TOML: {e}")))
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup, then use
/// [`get`](LazySettings::get) anywhere. The contained settings never change
/// after configuration, so sharing them between concurrent requests is safe.
///
/// # Panics
///
/// [`get`](LazySettings::get) panics if settings have not been configured.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::ConfigurationError`] if called more than once.
    pub fn configure(&self, settings: Settings) -> LocaleResult<()> {
        self.inner.set(settings).map_err(|_| {
            LocaleError::ConfigurationError("settings already configured".to_string())
        })
    }

    /// Returns the configured settings.
    ///
    /// # Panics
    ///
    /// Panics if [`configure`](Self::configure) has not been called.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("settings accessed before configuration")
    }

    /// Returns the configured settings, or `None` if not yet configured.
    pub fn try_get(&self) -> Option<&Settings> {
        self.inner.get()
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();
