//! Error types for the lingua-rs toolkit.
//!
//! [`LocaleError`] covers the two failure classes the toolkit distinguishes:
//! fatal configuration problems detected at startup, and the single
//! per-request rejection (an explicitly requested locale that is not
//! configured). Everything else (unmatched query hints, unparseable header
//! ranges) degrades silently and never surfaces as an error.

use thiserror::Error;

/// The primary error type for lingua-rs.
///
/// Each variant maps to an HTTP status code via [`LocaleError::status_code`].
#[derive(Error, Debug)]
pub enum LocaleError {
    /// A configuration value is missing or invalid (fatal, at startup).
    ///
    /// Raised for an empty or absent locale list, or a default locale that
    /// is not a member of the configured set. The system must not start
    /// without a valid registry.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An explicitly requested locale (path parameter) is not configured.
    ///
    /// Recoverable at the request level: the boundary layer maps this to a
    /// "not found" response carrying the rejected identifier verbatim.
    #[error("No localization available for {requested}")]
    UnsupportedLocale {
        /// The locale identifier the client asked for, verbatim.
        requested: String,
    },

    /// A translation catalog file could not be parsed.
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// An I/O error occurred while loading catalog files.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LocaleError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// - `UnsupportedLocale` -> 404
    /// - Everything else -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::UnsupportedLocale { .. } => 404,
            Self::ConfigurationError(_) | Self::CatalogError(_) | Self::IoError(_) => 500,
        }
    }
}

/// A convenience type alias for `Result<T, LocaleError>`.
pub type LocaleResult<T> = Result<T, LocaleError>;
