//! Translation catalog and the per-request translation handle.
//!
//! The catalog is loaded once at startup (from JSON files or programmatic
//! registration) and is read-only for the lifetime of the process. Per-request
//! translation goes through a [`Translator`], a small handle bound to exactly
//! one locale, constructed fresh for every request by the binding middleware.
//!
//! There is deliberately no "activate a language" API with process- or
//! thread-scoped state: when many requests are interleaved on one thread, a
//! shared current-language slot lets one request's locale leak into another's
//! response. A `Translator` is owned by its request and cannot alias.
//!
//! ## Quick Start
//!
//! ```
//! use lingua_rs_core::i18n::{catalog, Translator};
//!
//! catalog::register_translations("es", vec![
//!     ("Hello", "Hola"),
//!     ("Goodbye", "Adiós"),
//! ]);
//!
//! let t = Translator::new("es");
//! assert_eq!(t.gettext("Hello"), "Hola");
//! assert_eq!(t.gettext("Untranslated"), "Untranslated");
//! ```

pub mod catalog;
mod translator;

pub use translator::Translator;
