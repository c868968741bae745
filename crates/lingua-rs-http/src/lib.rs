//! # lingua-rs-http
//!
//! HTTP layer for the lingua-rs toolkit: [`HttpRequest`] and [`HttpResponse`]
//! types used by the negotiation pipeline, plus [`QueryDict`] for query-string
//! access. Requests carry the per-request locale binding in a typed slot;
//! view responses carry a [`RenderContext`] the merger writes into.

pub mod querydict;
pub mod request;
pub mod response;

pub use querydict::QueryDict;
pub use request::{HttpRequest, HttpRequestBuilder};
pub use response::{HttpResponse, HttpResponseNotFound, JsonResponse, RenderContext};
