use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Json;
use client::config::ClientConfig;
use client::controller::{FormController, Outcome};
use client::state::ui::UiState;
use form::{FormFields, FormInput, validate};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use super::*;
use crate::terminal::TerminalView;

async fn echo_location(Json(body): Json<Value>) -> Json<Value> {
    let location = body["location"].as_str().unwrap_or("?").to_owned();
    Json(json!({ "success": true, "activities": format!("Picnic in {location}") }))
}

async fn server_error() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn rate_limited() -> Json<Value> {
    Json(json!({ "success": false, "activities": "", "error": "rate limited" }))
}

async fn empty_body() -> &'static str {
    ""
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({ "success": true, "activities": "too late" }))
}

async fn spawn_planner() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new()
        .route("/api/activities", post(echo_location))
        .route("/error", post(server_error))
        .route("/rate-limited", post(rate_limited))
        .route("/empty", post(empty_body))
        .route("/slow", post(slow));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn transport(request_secs: u64) -> ReqwestTransport {
    let http = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(request_secs))
        .build()
        .expect("client");
    ReqwestTransport::with_client(http, request_secs)
}

fn default_body() -> String {
    validate(&FormInput::from_fields(&FormFields::default()))
        .unwrap()
        .to_json()
        .unwrap()
}

#[test]
fn new_builds_with_default_timeouts() {
    assert!(ReqwestTransport::new(client::config::Timeouts::default()).is_ok());
}

#[tokio::test]
async fn posts_json_and_returns_status_and_body() {
    let base = spawn_planner().await;
    let reply = transport(5)
        .post_json(&format!("{base}/api/activities"), default_body())
        .await
        .unwrap();
    assert_eq!(reply.status, 200);
    let body: Value = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(body["activities"], "Picnic in Yverdon-les-Bains");
}

#[tokio::test]
async fn non_2xx_is_a_reply_not_a_transport_error() {
    let base = spawn_planner().await;
    let reply = transport(5)
        .post_json(&format!("{base}/error"), default_body())
        .await
        .unwrap();
    assert_eq!(reply.status, 500);
    assert_eq!(reply.body, "boom");
}

#[tokio::test]
async fn slow_backend_maps_to_timeout() {
    let base = spawn_planner().await;
    let err = transport(1)
        .post_json(&format!("{base}/slow"), default_body())
        .await
        .unwrap_err();
    assert_eq!(err, SubmitError::Timeout { secs: 1 });
}

#[tokio::test]
async fn unreachable_backend_maps_to_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let err = transport(5)
        .post_json(&format!("http://{addr}/api/activities"), default_body())
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)), "{err:?}");
}

fn controller_for(
    base: &str,
    path: &str,
    fields: FormFields,
) -> FormController<TerminalView<Vec<u8>, Vec<u8>>, ReqwestTransport> {
    let config = ClientConfig {
        endpoint_path: path.to_owned(),
        ..ClientConfig::default()
    }
    .with_base_url(base)
    .unwrap();
    FormController::new(TerminalView::new(fields, Vec::new(), Vec::new()), transport(5), &config)
}

fn output(buf: &std::cell::RefCell<Vec<u8>>) -> String {
    String::from_utf8(buf.borrow().clone()).unwrap()
}

#[tokio::test]
async fn end_to_end_success_prints_activities() {
    let base = spawn_planner().await;
    let fields = FormFields {
        num_children: "2".to_owned(),
        ages: "4, 7".to_owned(),
        weather: "rainy".to_owned(),
        location: "Geneva".to_owned(),
        special_cases: String::new(),
    };
    let c = controller_for(&base, "/api/activities", fields);

    assert_eq!(c.submit().await, Outcome::Activities("Picnic in Geneva".to_owned()));
    assert_eq!(c.state(), UiState::ShowingResult);
    assert_eq!(output(&c.view().out), "Picnic in Geneva\n");
}

#[tokio::test]
async fn end_to_end_http_500_renders_error() {
    let base = spawn_planner().await;
    let c = controller_for(&base, "/error", FormFields::default());

    assert_eq!(c.submit().await, Outcome::Failed(SubmitError::Status { status: 500 }));
    assert_eq!(c.state(), UiState::ShowingError);
    assert!(c.state().panels().submit_enabled);
    assert_eq!(output(&c.view().out), "");
    assert!(output(&c.view().err).ends_with("error: HTTP error! status: 500\n"));
}

#[tokio::test]
async fn end_to_end_application_failure_shows_backend_message() {
    let base = spawn_planner().await;
    let c = controller_for(&base, "/rate-limited", FormFields::default());

    assert_eq!(
        c.submit().await,
        Outcome::Failed(SubmitError::Application("rate limited".to_owned()))
    );
    assert!(output(&c.view().err).ends_with("error: rate limited\n"));
}

#[tokio::test]
async fn end_to_end_empty_body_is_protocol_error() {
    let base = spawn_planner().await;
    let c = controller_for(&base, "/empty", FormFields::default());

    assert_eq!(c.submit().await, Outcome::Failed(SubmitError::EmptyBody));
}
