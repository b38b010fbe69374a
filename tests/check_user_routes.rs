mod common;

use common::*;
use gatekeeper::api::{self, CheckUserResponse, ErrorBody};
use gatekeeper::domain_model::DestinationPolicy;
use serde_json::json;
use warp::http::StatusCode;

async fn post(
    service: std::sync::Arc<dyn gatekeeper::application_port::LookupService>,
    path: &str,
    body: serde_json::Value,
) -> warp::http::Response<warp::hyper::body::Bytes> {
    let filter = api::service(service, api::cors(&[]).unwrap());
    warp::test::request()
        .method("POST")
        .path(path)
        .json(&body)
        .reply(&filter)
        .await
}

fn lookup(body: &[u8]) -> CheckUserResponse {
    serde_json::from_slice(body).unwrap()
}

fn message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body).unwrap().message
}

#[tokio::test]
async fn known_user_gets_stored_destination() {
    let res = post(
        seeded_service(DestinationPolicy::allow_any()),
        "/check_user",
        json!({ "username": "alice" }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        lookup(res.body()),
        CheckUserResponse::found("https://dest.example/alice".into())
    );
}

#[tokio::test]
async fn unknown_user_has_no_link_field() {
    let res = post(
        seeded_service(DestinationPolicy::allow_any()),
        "/check_user",
        json!({ "username": "bob" }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(body, json!({ "exists": false }));
}

#[tokio::test]
async fn lookup_is_case_sensitive_and_untrimmed() {
    for username in ["eve", "EVE", " Eve", "Eve "] {
        let res = post(
            seeded_service(DestinationPolicy::allow_any()),
            "/check_user",
            json!({ "username": username }),
        )
        .await;
        assert_eq!(lookup(res.body()), CheckUserResponse::not_found(), "{username:?}");
    }
}

#[tokio::test]
async fn store_failure_is_a_generic_500() {
    let res = post(
        unreachable_service(),
        "/check_user",
        json!({ "username": "carol" }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = std::str::from_utf8(res.body()).unwrap();
    assert!(!body.contains("exists"));
    assert!(!body.contains("pool timed out"));
    assert_eq!(message(res.body()).as_deref(), Some("Internal error"));
}

#[tokio::test]
async fn blank_username_is_a_client_error() {
    let res = post(
        seeded_service(DestinationPolicy::allow_any()),
        "/check_user",
        json!({ "username": "  " }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(res.body()).as_deref(), Some("Username is required"));
}

#[tokio::test]
async fn oversize_username_is_a_client_error() {
    let res = post(
        seeded_service(DestinationPolicy::allow_any()),
        "/check_user",
        json!({ "username": "a".repeat(256) }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(res.body()).as_deref(), Some("Username is too long"));
}

#[tokio::test]
async fn missing_or_mistyped_username_is_a_client_error() {
    for body in [json!({}), json!({ "username": null }), json!({ "username": 7 })] {
        let res = post(
            seeded_service(DestinationPolicy::allow_any()),
            "/check_user",
            body,
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message(res.body()).as_deref(), Some("Invalid request body"));
    }
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let filter = api::service(
        seeded_service(DestinationPolicy::allow_any()),
        api::cors(&[]).unwrap(),
    );

    let res = warp::test::request()
        .method("POST")
        .path("/check_user")
        .header("content-type", "application/json")
        .body("not json")
        .reply(&filter)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(res.body()).as_deref(), Some("Invalid request body"));
}

#[tokio::test]
async fn non_json_content_type_is_a_client_error() {
    let filter = api::service(
        seeded_service(DestinationPolicy::allow_any()),
        api::cors(&[]).unwrap(),
    );

    let res = warp::test::request()
        .method("POST")
        .path("/check_user")
        .header("content-type", "text/plain")
        .body(r#"{"username":"alice"}"#)
        .reply(&filter)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(res.body()).as_deref(), Some("Invalid request body"));
}

#[tokio::test]
async fn legacy_path_serves_the_same_contract() {
    let res = post(
        seeded_service(DestinationPolicy::allow_any()),
        "/verify-user",
        json!({ "username": "alice" }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(lookup(res.body()).exists);
}

#[tokio::test]
async fn destination_outside_allow_list_is_withheld() {
    let res = post(
        seeded_service(DestinationPolicy::new(["dest.example"])),
        "/check_user",
        json!({ "username": "mallory" }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!std::str::from_utf8(res.body()).unwrap().contains("elsewhere.test"));
}

#[tokio::test]
async fn wrong_method_and_path_are_rejected() {
    let filter = api::service(
        seeded_service(DestinationPolicy::allow_any()),
        api::cors(&[]).unwrap(),
    );

    let res = warp::test::request()
        .method("GET")
        .path("/check_user")
        .reply(&filter)
        .await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    let res = warp::test::request()
        .method("POST")
        .path("/check_user/extra")
        .json(&json!({ "username": "alice" }))
        .reply(&filter)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let filter = api::service(
        seeded_service(DestinationPolicy::allow_any()),
        api::cors(&["https://login.example".to_string()]).unwrap(),
    );

    let res = warp::test::request()
        .method("OPTIONS")
        .path("/check_user")
        .header("origin", "https://login.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .reply(&filter)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["access-control-allow-origin"],
        "https://login.example"
    );
}

#[test]
fn cors_origins_must_be_bare_origins() {
    assert!(api::cors(&["https://login.example/path".to_string()]).is_err());
    assert!(api::cors(&["login.example".to_string()]).is_err());
    assert!(api::cors(&["http://localhost:5173".to_string()]).is_ok());
}
