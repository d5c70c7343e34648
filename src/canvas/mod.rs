//! Canvas LMS HTTP access layer.
//!
//! [`CanvasClient`] turns accessor calls into authenticated, paginated and
//! retried requests against `https://<host>/api/v1`, and normalizes every
//! failure into an [`ApiError`].
//!
//! - [`client`]: the request pipeline
//! - [`retry`]: backoff policy and per-request retry state
//! - [`pagination`]: `Link` header parsing
//! - [`query`]: query-string builder
//! - [`accessors`]: one `impl CanvasClient` block per API area

pub mod accessors;
pub mod client;
pub mod error;
pub mod pagination;
pub mod query;
pub mod retry;

pub use accessors::*;
pub use client::{CanvasClient, ClientOptions, RequestOptions};
pub use error::{ApiError, CanvasError, CanvasResult};
pub use query::Query;
pub use retry::{RetryPolicy, RetryState};
