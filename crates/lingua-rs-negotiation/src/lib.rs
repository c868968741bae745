//! # lingua-rs-negotiation
//!
//! Locale negotiation: decides, per request, which locale governs message
//! translation and view rendering. The decision follows a strict precedence
//! chain (route path parameter, then query parameter, then language header,
//! then the configured default) and is a pure function of request data plus
//! the immutable [`LocaleRegistry`].
//!
//! ## Modules
//!
//! - [`registry`] - The configured set of supported locales and the default
//! - [`accept`] - Accept-Language-style header parsing and matching
//! - [`resolver`] - The precedence algorithm producing one [`Resolution`]

pub mod accept;
pub mod registry;
pub mod resolver;

pub use registry::{extract_default_locale, LocaleRegistry};
pub use resolver::{LocaleResolver, Resolution, LANGUAGE_CODE_PARAM};
