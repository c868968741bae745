//! # lingua-rs
//!
//! Per-request locale negotiation for async web services.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `lingua-rs` to get the whole stack, or depend on
//! individual crates for finer-grained control.
//!
//! ## Quick start
//!
//! ```
//! use lingua_rs::core::I18nSettings;
//! use lingua_rs::middleware::{LocaleNegotiationMiddleware, MiddlewarePipeline};
//!
//! let settings = I18nSettings {
//!     locales: vec!["de".into(), "en".into(), "fr".into()],
//!     query_parameter: Some("lang".into()),
//!     language_header_field: Some("language".into()),
//!     ..Default::default()
//! };
//!
//! let mut pipeline = MiddlewarePipeline::new();
//! pipeline.add(LocaleNegotiationMiddleware::from_settings(&settings).unwrap());
//! ```
//!
//! Every request that passes through the pipeline carries its own
//! [`Translator`](lingua_rs_core::Translator): no shared mutable locale state
//! exists anywhere in the stack, so concurrent requests for different locales
//! never observe each other.

/// Core types: errors, settings, logging, and the translation catalog.
pub use lingua_rs_core as core;

/// HTTP layer: request, response, query dictionaries, render contexts.
pub use lingua_rs_http as http;

/// Locale negotiation: registry, header matching, precedence resolution.
pub use lingua_rs_negotiation as negotiation;

/// Middleware pipeline and the locale negotiation middleware.
pub use lingua_rs_middleware as middleware;
