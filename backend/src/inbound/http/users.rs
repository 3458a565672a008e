//! Users API handlers.
//!
//! ```text
//! GET    /users        list every record
//! POST   /users        create a record, 201 with the assigned id
//! PUT    /users/{id}   merge fields over a record, 200 (empty when unknown)
//! DELETE /users/{id}   remove a record, 204 whether or not it existed
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{User, UserFields};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserFieldsSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{ID_FIELD, parse_user_id};

/// List every user record in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use roster_backend::inbound::http::users::list_users;
///
/// let _app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Create a user record; the server assigns the id.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserFieldsSchema,
    responses(
        (status = 201, description = "Created user", body = UserSchema),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserFields>,
) -> ApiResult<HttpResponse> {
    let user = state.users_command.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Merge the supplied fields over an existing record.
///
/// An unknown id is not an error: the response is 200 with an empty body and
/// nothing changes.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UserFieldsSchema,
    responses(
        (status = 200, description = "Updated user, or empty when no user matches", body = UserSchema),
        (status = 400, description = "Malformed id or body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserFields>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner(), ID_FIELD)?;
    let updated = state
        .users_command
        .update_user(id, payload.into_inner())
        .await?;
    Ok(match updated {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::Ok().finish(),
    })
}

/// Remove a record if present.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "Deleted, or nothing to delete"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner(), ID_FIELD)?;
    state.users_command.delete_user(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests;
