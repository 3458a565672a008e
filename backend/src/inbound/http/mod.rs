//! HTTP inbound adapter exposing the users REST endpoints.

pub mod error;
pub mod health;
pub mod routes;
pub mod schemas;
pub mod state;
pub mod users;
pub(crate) mod validation;

pub use crate::domain::ApiResult;
