//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the users and health endpoints and the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it in
//! debug builds and `openapi-dump` prints it for external tooling.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserFieldsSchema, UserSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "List, create, update, and delete user contact records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, UserFieldsSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "User record management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
