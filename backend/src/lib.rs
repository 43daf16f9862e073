//! In-memory user management service.
//!
//! The [`domain`] module holds the user model, validation rules and the
//! [`domain::ports::UserStore`] port. [`outbound::memory`] implements the
//! port over a locked vector and [`inbound::http`] exposes it as a REST API.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
