use crate::common;
use assert_json_diff::assert_json_eq;
use cf_client::error::AppError;
use cf_client::model::http::is_invalid_auth_token;
use reqwest::Method;
use serde_json::json;

fn invalid_token_body() -> serde_json::Value {
    json!({
        "code": 1000,
        "description": "Invalid Auth Token",
        "error_code": "CF-InvalidAuthToken",
    })
}

#[test]
fn detects_invalid_token_error_code() {
    assert!(is_invalid_auth_token(&invalid_token_body()));
}

#[test]
fn ignores_other_bodies() {
    assert!(!is_invalid_auth_token(&json!({ "error_code": "CF-NotFound" })));
    assert!(!is_invalid_auth_token(&json!({ "error_code": 1000 })));
    assert!(!is_invalid_auth_token(&json!({ "resources": [] })));
    assert!(!is_invalid_auth_token(&json!(["CF-InvalidAuthToken"])));
    assert!(!is_invalid_auth_token(&json!("CF-InvalidAuthToken")));
    assert!(!is_invalid_auth_token(&json!(null)));
}

#[tokio::test]
async fn dispatch_rejects_non_get_methods_without_network() {
    let mut server = common::start_server().await;
    let client = common::http_client_for(&mut server).await;
    let _login = common::mock_login(&mut server, "token-1").await;
    client.login().await.unwrap();

    let target = server
        .mock("POST", "/v2/organizations")
        .expect(0)
        .create_async()
        .await;

    let url = format!("{}/v2/organizations", server.url());
    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        match client.dispatch(method.clone(), &url).await {
            Err(AppError::UnsupportedMethod(m)) => assert_eq!(m, method),
            other => panic!("expected UnsupportedMethod, got {other:?}"),
        }
    }
    target.assert_async().await;
}

#[tokio::test]
async fn dispatch_before_login_fails_without_network() {
    let mut server = common::start_server().await;
    let client = common::http_client_for(&mut server).await;

    let login = server
        .mock("POST", "/oauth/token")
        .expect(0)
        .create_async()
        .await;
    let target = server
        .mock("GET", "/v2/organizations")
        .expect(0)
        .create_async()
        .await;

    let result = client.get("/v2/organizations").await;

    assert!(matches!(result, Err(AppError::NotLoggedIn)));
    login.assert_async().await;
    target.assert_async().await;
}

#[tokio::test]
async fn dispatch_returns_body_unchanged() {
    let mut server = common::start_server().await;
    let client = common::http_client_for(&mut server).await;
    let _login = common::mock_login(&mut server, "token-1").await;
    client.login().await.unwrap();

    let expected = json!({
        "total_results": 1,
        "resources": [{ "metadata": { "guid": "org-1" }, "entity": { "name": "dev" } }],
    });
    let target = server
        .mock("GET", "/v2/organizations")
        .match_header("authorization", "bearer token-1")
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(expected.to_string())
        .expect(1)
        .create_async()
        .await;

    let body = client.get("/v2/organizations").await.unwrap();

    assert_json_eq!(body, expected);
    target.assert_async().await;
}

#[tokio::test]
async fn dispatch_relogs_in_once_and_retries() {
    let mut server = common::start_server().await;
    let client = common::http_client_for(&mut server).await;

    let first_login = common::mock_login(&mut server, "stale-token").await;
    let relogin = common::mock_login(&mut server, "fresh-token").await;

    let rejected = server
        .mock("GET", "/v2/organizations")
        .match_header("authorization", "bearer stale-token")
        .with_status(200)
        .with_body(invalid_token_body().to_string())
        .expect(1)
        .create_async()
        .await;
    let expected = json!({ "total_results": 0, "resources": [] });
    let accepted = server
        .mock("GET", "/v2/organizations")
        .match_header("authorization", "bearer fresh-token")
        .with_status(200)
        .with_body(expected.to_string())
        .expect(1)
        .create_async()
        .await;

    client.login().await.unwrap();
    let body = client.get("/v2/organizations").await.unwrap();

    assert_json_eq!(body, expected);
    first_login.assert_async().await;
    relogin.assert_async().await;
    rejected.assert_async().await;
    accepted.assert_async().await;

    let session = client.auth().session().await.unwrap();
    assert_eq!(session.access_token, "fresh-token");
}

#[tokio::test]
async fn dispatch_returns_second_rejection_without_third_attempt() {
    let mut server = common::start_server().await;
    let client = common::http_client_for(&mut server).await;

    let login = server
        .mock("POST", "/oauth/token")
        .with_status(200)
        .with_body(common::token_body("revoked-token"))
        .expect(2)
        .create_async()
        .await;
    let rejected = server
        .mock("GET", "/v2/organizations")
        .with_status(200)
        .with_body(invalid_token_body().to_string())
        .expect(2)
        .create_async()
        .await;

    client.login().await.unwrap();
    let body = client.get("/v2/organizations").await.unwrap();

    assert_json_eq!(body, invalid_token_body());
    // initial login plus exactly one re-login
    login.assert_async().await;
    rejected.assert_async().await;
}

#[tokio::test]
async fn dispatch_checks_body_not_status_for_token_errors() {
    let mut server = common::start_server().await;
    let client = common::http_client_for(&mut server).await;

    let _first_login = common::mock_login(&mut server, "stale-token").await;
    let _relogin = common::mock_login(&mut server, "fresh-token").await;

    let rejected = server
        .mock("GET", "/v2/spaces/space-1/apps")
        .match_header("authorization", "bearer stale-token")
        .with_status(401)
        .with_body(invalid_token_body().to_string())
        .expect(1)
        .create_async()
        .await;
    let accepted = server
        .mock("GET", "/v2/spaces/space-1/apps")
        .match_header("authorization", "bearer fresh-token")
        .with_status(200)
        .with_body(json!({ "resources": [] }).to_string())
        .expect(1)
        .create_async()
        .await;

    client.login().await.unwrap();
    let body = client.get("/v2/spaces/space-1/apps").await.unwrap();

    assert_json_eq!(body, json!({ "resources": [] }));
    rejected.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn dispatch_passes_through_other_error_bodies() {
    let mut server = common::start_server().await;
    let client = common::http_client_for(&mut server).await;

    let login = common::mock_login(&mut server, "token-1").await;
    let not_found = json!({
        "code": 30003,
        "description": "The organization could not be found: missing",
        "error_code": "CF-OrganizationNotFound",
    });
    let target = server
        .mock("GET", "/v2/organizations/missing/summary")
        .with_status(404)
        .with_body(not_found.to_string())
        .expect(1)
        .create_async()
        .await;

    client.login().await.unwrap();
    let body = client.get("/v2/organizations/missing/summary").await.unwrap();

    assert_json_eq!(body, not_found);
    login.assert_async().await;
    target.assert_async().await;
}

#[tokio::test]
async fn dispatch_propagates_failed_relogin() {
    let mut server = common::start_server().await;
    let client = common::http_client_for(&mut server).await;

    let _login = common::mock_login(&mut server, "token-1").await;
    let _relogin = server
        .mock("POST", "/oauth/token")
        .with_status(401)
        .with_body("password expired")
        .expect(1)
        .create_async()
        .await;
    let _rejected = server
        .mock("GET", "/v2/organizations")
        .with_status(200)
        .with_body(invalid_token_body().to_string())
        .expect(1)
        .create_async()
        .await;

    client.login().await.unwrap();

    match client.get("/v2/organizations").await {
        Err(AppError::LoginError(body)) => assert_eq!(body, "password expired"),
        other => panic!("expected LoginError, got {other:?}"),
    }
}

#[tokio::test]
async fn dispatch_reports_unparsable_body() {
    let mut server = common::start_server().await;
    let client = common::http_client_for(&mut server).await;

    let _login = common::mock_login(&mut server, "token-1").await;
    let _target = server
        .mock("GET", "/v2/organizations")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    client.login().await.unwrap();

    assert!(matches!(
        client.get("/v2/organizations").await,
        Err(AppError::Json(_))
    ));
}

#[tokio::test]
async fn logout_blocks_further_requests() {
    let mut server = common::start_server().await;
    let client = common::http_client_for(&mut server).await;

    let _login = common::mock_login(&mut server, "token-1").await;
    let target = server
        .mock("GET", "/v2/organizations")
        .with_status(200)
        .with_body(json!({ "resources": [] }).to_string())
        .expect(1)
        .create_async()
        .await;

    client.login().await.unwrap();
    client.get("/v2/organizations").await.unwrap();
    client.logout().await;

    assert!(matches!(
        client.get("/v2/organizations").await,
        Err(AppError::NotLoggedIn)
    ));
    target.assert_async().await;
}
