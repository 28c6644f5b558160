//! Backend library modules.
//!
//! Hexagonal layout: `domain` owns the comment feed model and ports,
//! `inbound` and `outbound` adapt HTTP and Reddit respectively, and
//! `server` wires the Actix application together.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
