//! Roster backend: a REST service over an ordered collection of user records.
//!
//! Layout follows a hexagonal split:
//! - [`domain`]: record types, collection semantics, ports, and the service.
//! - [`inbound::http`]: Actix handlers and error mapping.
//! - [`outbound::persistence`]: in-memory and JSON file repositories.

pub mod doc;
pub mod domain;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
