//! # lingua-rs-middleware
//!
//! The request/response middleware pipeline and the built-in locale
//! negotiation middleware.
//!
//! The pipeline follows the "onion" model: middleware runs in registration
//! order on the way in (`process_request`) and in reverse order on the way
//! out (`process_response`). Any middleware may short-circuit the onion by
//! returning a response from `process_request`, in which case only the
//! middleware that already ran see the response.
//!
//! [`LocaleNegotiationMiddleware`] is the centerpiece: it resolves a locale
//! for every request before the handler runs, binds a per-request
//! [`Translator`](lingua_rs_core::Translator) onto the request, and merges
//! the locale into view render contexts on the way out.

pub mod middleware;

pub use middleware::locale::{LocaleNegotiationMiddleware, LANGUAGE_CODE_KEY};
pub use middleware::{Middleware, MiddlewarePipeline, ViewHandler};
