//! # lingua-rs-core
//!
//! Core types for the lingua-rs locale negotiation toolkit. This crate has no
//! HTTP dependencies and provides the foundation for the other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and the [`LocaleResult`] alias
//! - [`settings`] - Configuration, including the [`settings::I18nSettings`] block
//! - [`logging`] - Tracing-based logging integration
//! - [`i18n`] - Translation catalog and the per-request [`Translator`] handle

pub mod error;
pub mod i18n;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{LocaleError, LocaleResult};
pub use i18n::Translator;
pub use settings::{I18nSettings, Settings, SETTINGS};
