//! Route table for the HTTP adapter.

use actix_web::{HttpRequest, HttpResponse, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::health::{live, ready};
use crate::inbound::http::users::{create_user, delete_user, list_users, update_user};
use crate::inbound::http::validation::json_error_handler;

/// Register the users and health endpoints, the JSON body policy, and the
/// `not_found` fallback.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use roster_backend::inbound::http::routes::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(list_users)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .service(ready)
        .service(live)
        .default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}
