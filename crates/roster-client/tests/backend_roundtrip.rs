//! End-to-end checks of the client library against a live roster backend.
//!
//! Each test binds the real backend routes to an ephemeral port and drives
//! them through `HttpUsersClient`, the form controller, and the list view.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use roster_backend::Trace;
use roster_backend::domain::UserDirectoryService;
use roster_backend::inbound::http::health::HealthState;
use roster_backend::inbound::http::routes::configure;
use roster_backend::inbound::http::state::HttpState;
use roster_backend::outbound::persistence::InMemoryUserRepository;
use roster_client::{
    ClientError, DeleteOutcome, FieldName, HttpUsersClient, LOAD_FAILED_MESSAGE, SubmitOutcome,
    UserForm, UserInput, UserListView, UsersGateway,
};

struct LiveBackend {
    base_url: String,
    handle: ServerHandle,
}

impl LiveBackend {
    fn start() -> Self {
        let repository = Arc::new(InMemoryUserRepository::new());
        let service = Arc::new(UserDirectoryService::new(repository));
        let http_state = web::Data::new(HttpState::from_service(service));
        let health_state = web::Data::new(HealthState::new());
        let bound = HttpServer::new(move || {
            App::new()
                .app_data(http_state.clone())
                .app_data(health_state.clone())
                .wrap(Trace)
                .configure(configure)
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind ephemeral port");
        let addr = bound.addrs().first().copied().expect("bound address");
        let running = bound.run();
        let handle = running.handle();
        actix_rt::spawn(running);
        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    fn client(&self) -> HttpUsersClient {
        HttpUsersClient::new(&self.base_url).expect("client for live backend")
    }

    async fn stop(self) {
        self.handle.stop(true).await;
    }
}

fn fill(form: &mut UserForm, first: &str, last: &str, phone: &str, email: &str) {
    form.change(FieldName::FirstName, first);
    form.change(FieldName::LastName, last);
    form.change(FieldName::PhoneNumber, phone);
    form.change(FieldName::EmailAddress, email);
}

fn input(first: &str) -> UserInput {
    UserInput {
        first_name: first.to_owned(),
        last_name: "Tester".to_owned(),
        phone_number: "9876543210".to_owned(),
        email_address: format!("{}@example.com", first.to_lowercase()),
    }
}

#[actix_rt::test]
async fn form_and_list_drive_the_full_lifecycle() {
    let backend = LiveBackend::start();
    let client = backend.client();
    let mut view = UserListView::new();
    assert!(view.reload(&client).await);
    assert!(view.users().is_empty());

    let mut form = UserForm::create();
    fill(&mut form, " Alice ", "Smith", "9876543210", "A@X.com");
    let gateway = &client;
    let refreshed = &mut view;
    let created = form
        .submit(gateway, move || async move {
            refreshed.reload(gateway).await;
        })
        .await;
    let SubmitOutcome::Saved(Some(alice)) = created else {
        panic!("create should succeed, got {created:?}");
    };
    assert_eq!(alice.id, 1);
    assert_eq!(alice.first_name.as_deref(), Some("Alice"));
    assert_eq!(alice.email_address.as_deref(), Some("a@x.com"));
    assert_eq!(view.users(), [alice.clone()].as_slice());

    client
        .create_user(&UserInput {
            first_name: "Bob".to_owned(),
            last_name: "Jones".to_owned(),
            phone_number: "8123456780".to_owned(),
            email_address: "b@x.com".to_owned(),
        })
        .await
        .expect("create second user");
    view.reload(&client).await;
    view.set_query("812");
    let matched: Vec<u64> = view.visible().iter().map(|user| user.id).collect();
    assert_eq!(matched, vec![2]);

    let mut edit = UserForm::edit(&alice);
    edit.change(FieldName::LastName, "Brown");
    let edited = edit.submit(&client, || async {}).await;
    let SubmitOutcome::Saved(Some(updated)) = edited else {
        panic!("update should succeed, got {edited:?}");
    };
    assert_eq!(updated.id, alice.id);
    assert_eq!(updated.last_name.as_deref(), Some("Brown"));
    assert_eq!(updated.phone_number, alice.phone_number);

    view.set_query("");
    view.request_delete(alice.id).expect("alice is listed");
    assert_eq!(
        view.confirm_delete(&client).await,
        DeleteOutcome::Deleted(alice.id)
    );
    let remaining: Vec<u64> = view.users().iter().map(|user| user.id).collect();
    assert_eq!(remaining, vec![2]);

    backend.stop().await;
}

#[actix_rt::test]
async fn unknown_ids_are_no_ops() {
    let backend = LiveBackend::start();
    let client = backend.client();
    client.create_user(&input("Carol")).await.expect("create");

    let updated = client
        .update_user(42, &input("Dave"))
        .await
        .expect("update of unknown id succeeds");
    client
        .delete_user(42)
        .await
        .expect("delete of unknown id succeeds");

    assert!(updated.is_none());
    let users = client.list_users().await.expect("list");
    assert_eq!(users.len(), 1);
    assert_eq!(users.first().and_then(|u| u.first_name.as_deref()), Some("Carol"));

    backend.stop().await;
}

#[actix_rt::test]
async fn ids_are_not_reused_after_delete() {
    let backend = LiveBackend::start();
    let client = backend.client();
    client.create_user(&input("Erin")).await.expect("create");
    let second = client.create_user(&input("Frank")).await.expect("create");
    client.delete_user(second.id).await.expect("delete");

    let third = client.create_user(&input("Grace")).await.expect("create");

    assert_eq!(third.id, second.id + 1);
    backend.stop().await;
}

#[actix_rt::test]
async fn error_envelopes_become_status_errors() {
    let backend = LiveBackend::start();
    let misrouted =
        HttpUsersClient::new(&format!("{}/missing", backend.base_url)).expect("client");

    let err = misrouted.list_users().await.expect_err("unknown route");

    assert!(
        matches!(err, ClientError::Status { status: 404, .. }),
        "unexpected error: {err:?}"
    );
    backend.stop().await;
}

#[actix_rt::test]
async fn unreachable_service_raises_banner() {
    let addr = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("reserve a port");
    let client = HttpUsersClient::new(&format!("http://{addr}")).expect("client");
    let mut view = UserListView::new();

    assert!(!view.reload(&client).await);
    assert_eq!(view.error(), Some(LOAD_FAILED_MESSAGE));
}
