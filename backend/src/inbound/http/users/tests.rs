//! Tests for users API handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::Trace;
use crate::domain::ports::{MockUsersCommand, MockUsersQuery};
use crate::domain::{Error, UserDirectoryService, UserId};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::routes::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::InMemoryUserRepository;

fn seeded_state() -> HttpState {
    let repo = InMemoryUserRepository::seeded([
        crate::domain::UserFields::new("Alice", "Smith", "9876543210", "a@x.com"),
        crate::domain::UserFields::new("Bob", "Jones", "8123456780", "b@x.com"),
    ]);
    HttpState::from_service(Arc::new(UserDirectoryService::new(Arc::new(repo))))
}

#[fixture]
fn state() -> HttpState {
    seeded_state()
}

macro_rules! init_app {
    ($state:expr) => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::Data::new(HealthState::new()))
                .wrap(Trace)
                .configure(configure),
        )
        .await
    };
}

#[rstest]
#[actix_web::test]
async fn list_returns_all_records_in_order(state: HttpState) {
    let app = init_app!(state);
    let req = actix_test::TestRequest::get().uri("/users").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!([
            {"id": 1, "firstName": "Alice", "lastName": "Smith", "phoneNumber": "9876543210", "emailAddress": "a@x.com"},
            {"id": 2, "firstName": "Bob", "lastName": "Jones", "phoneNumber": "8123456780", "emailAddress": "b@x.com"}
        ])
    );
}

#[rstest]
#[actix_web::test]
async fn create_assigns_next_id_and_ignores_body_id(state: HttpState) {
    let app = init_app!(state);
    let req = actix_test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "id": 99,
            "firstName": "Carol",
            "lastName": "White",
            "phoneNumber": "7000000000",
            "emailAddress": "c@x.com"
        }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["firstName"], "Carol");
}

#[rstest]
#[actix_web::test]
async fn create_stores_the_body_without_checking_its_shape(state: HttpState) {
    let app = init_app!(state);
    let req = actix_test::TestRequest::post()
        .uri("/users")
        .set_json(json!({"firstName": "Ada", "phoneNumber": 9876543210_u64, "nickname": "x"}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let expected = json!({"id": 3, "firstName": "Ada", "phoneNumber": 9876543210_u64, "nickname": "x"});
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, expected);

    let list: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert_eq!(list.get(2), Some(&expected));
}

#[rstest]
#[actix_web::test]
async fn update_merges_supplied_fields(state: HttpState) {
    let app = init_app!(state);
    let req = actix_test::TestRequest::put()
        .uri("/users/2")
        .set_json(json!({"lastName": "Brown", "firstName": null, "id": 7, "phoneNumber": 1}))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({"id": 2, "firstName": "Bob", "lastName": "Brown", "phoneNumber": 1, "emailAddress": "b@x.com"})
    );
}

#[rstest]
#[actix_web::test]
async fn update_of_unknown_id_returns_empty_ok(state: HttpState) {
    let app = init_app!(state);
    let req = actix_test::TestRequest::put()
        .uri("/users/42")
        .set_json(json!({"firstName": "Zed"}))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(actix_test::read_body(res).await.is_empty());

    let list: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert_eq!(list.as_array().map(Vec::len), Some(2));
}

#[rstest]
#[case("/users/1", 1)]
#[case("/users/42", 2)]
#[actix_web::test]
async fn delete_always_returns_no_content(
    state: HttpState,
    #[case] uri: &str,
    #[case] remaining: usize,
) {
    let app = init_app!(state);
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(uri).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(actix_test::read_body(res).await.is_empty());

    let list: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert_eq!(list.as_array().map(Vec::len), Some(remaining));
}

#[rstest]
#[case::put(actix_test::TestRequest::put().set_json(json!({})))]
#[case::delete(actix_test::TestRequest::delete())]
#[actix_web::test]
async fn non_numeric_id_is_rejected(state: HttpState, #[case] req: actix_test::TestRequest) {
    let app = init_app!(state);
    let res = actix_test::call_service(&app, req.uri("/users/abc").to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let trace_header = res
        .headers()
        .get("trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "id");
    assert_eq!(body["traceId"].as_str(), trace_header.as_deref());
}

#[rstest]
#[case::malformed("{not json")]
#[case::string(r#""text""#)]
#[case::array(r#"[{"firstName": "Ada"}]"#)]
#[actix_web::test]
async fn unreadable_bodies_are_invalid_requests(state: HttpState, #[case] payload: &'static str) {
    let app = init_app!(state);
    let req = actix_test::TestRequest::post()
        .uri("/users")
        .insert_header(("content-type", "application/json"))
        .set_payload(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "body");
}

#[rstest]
#[actix_web::test]
async fn unknown_routes_are_not_found(state: HttpState) {
    let app = init_app!(state);
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/people").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
}

#[rstest]
#[actix_web::test]
async fn command_failures_are_redacted() {
    let mut query = MockUsersQuery::new();
    query.expect_list_users().never();
    let mut command = MockUsersCommand::new();
    command
        .expect_delete_user()
        .withf(|id| *id == UserId::new(5))
        .times(1)
        .return_once(|_| Err(Error::internal("user store unavailable: disk full")));
    let app = init_app!(HttpState::new(Arc::new(query), Arc::new(command)));

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/5").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
}

#[rstest]
#[actix_web::test]
async fn list_failures_surface_as_internal_errors() {
    let mut query = MockUsersQuery::new();
    query
        .expect_list_users()
        .times(1)
        .return_once(|| Err(Error::internal("user store corrupt: bad json")));
    let app = init_app!(HttpState::new(
        Arc::new(query),
        Arc::new(MockUsersCommand::new())
    ));

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
