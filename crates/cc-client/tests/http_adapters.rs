//! HTTP adapter integration tests
//!
//! Runs the UAA and Cloud Controller clients against an in-process axum
//! server that mimics the relevant endpoints.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use reqwest::Client;
use routesync_cc_client::{CloudControllerClient, UaaClient, UaaConfig};
use routesync_ports::{ClientError, ControlPlaneClient, TokenProvider};
use serde_json::{Value, json};

const TOKEN: &str = "test-access-token";
/// base64("routesync:s3cret")
const BASIC_AUTH: &str = "Basic cm91dGVzeW5jOnMzY3JldA==";

// ============================================================================
// Mock server
// ============================================================================

struct ServerState {
    base_url: String,
}

fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case(&format!("bearer {}", TOKEN)))
        .unwrap_or(false)
}

async fn oauth_token(
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let auth = headers.get("authorization").and_then(|v| v.to_str().ok());
    if auth != Some(BASIC_AUTH) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if form.get("grant_type").map(String::as_str) != Some("client_credentials") {
        return Err(StatusCode::BAD_REQUEST);
    }

    Ok(Json(json!({
        "access_token": TOKEN,
        "token_type": "bearer",
        "expires_in": 599
    })))
}

fn route_json(guid: &str, domain_guid: &str) -> Value {
    json!({
        "guid": guid,
        "host": format!("{guid}-host"),
        "path": "",
        "url": format!("{guid}-host.example.com"),
        "destinations": [],
        "relationships": {
            "domain": {"data": {"guid": domain_guid}},
            "space": {"data": {"guid": "space-0"}}
        }
    })
}

async fn routes(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    if !is_authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let page = match query.get("page").map(String::as_str) {
        Some("2") => json!({
            "pagination": {"next": null},
            "resources": [route_json("route-2", "domain-0")]
        }),
        _ => json!({
            "pagination": {"next": {"href": format!("{}/v3/routes?page=2", state.base_url)}},
            "resources": [route_json("route-0", "domain-0"), route_json("route-1", "domain-1")]
        }),
    };
    Ok(Json(page))
}

async fn domains(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if !is_authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "pagination": {"next": null},
        "resources": [
            {"guid": "domain-0", "name": "example.com", "internal": false},
            {"guid": "domain-1", "name": "apps.internal", "internal": true}
        ]
    })))
}

async fn spaces() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "cc is down")
}

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let state = Arc::new(ServerState {
        base_url: base_url.clone(),
    });
    let app = Router::new()
        .route("/oauth/token", post(oauth_token))
        .route("/v3/routes", get(routes))
        .route("/v3/domains", get(domains))
        .route("/v3/spaces", get(spaces))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base_url
}

/// Serves `/v3/domains` with a fixed `next` href built from the server base url
async fn start_paging_server(next_href: fn(&str) -> String) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let next = next_href(&base_url);
    let app = Router::new().route(
        "/v3/domains",
        get(move || {
            let next = next.clone();
            async move {
                Json(json!({
                    "pagination": {"next": {"href": next}},
                    "resources": [{"guid": "domain-0", "name": "example.com", "internal": false}]
                }))
            }
        }),
    );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base_url
}

// ============================================================================
// UAA
// ============================================================================

#[tokio::test]
async fn test_uaa_client_fetches_token() {
    let _ = env_logger::try_init();
    let base_url = start_server().await;

    let uaa = UaaClient::new(
        Client::new(),
        UaaConfig::new(base_url, "routesync", "s3cret"),
    );

    assert_eq!(uaa.get_token().await.unwrap(), TOKEN);
}

#[tokio::test]
async fn test_uaa_client_reports_rejected_credentials() {
    let base_url = start_server().await;

    let uaa = UaaClient::new(Client::new(), UaaConfig::new(base_url, "routesync", "wrong"));

    let err = uaa.get_token().await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 401, .. }));
}

// ============================================================================
// Cloud Controller
// ============================================================================

#[tokio::test]
async fn test_list_routes_follows_pagination() {
    let _ = env_logger::try_init();
    let base_url = start_server().await;
    let cc = CloudControllerClient::new(Client::new(), base_url);

    let routes = cc.list_routes(TOKEN).await.unwrap();

    let guids: Vec<&str> = routes.iter().map(|r| r.guid.as_str()).collect();
    assert_eq!(guids, vec!["route-0", "route-1", "route-2"]);
    assert_eq!(routes[1].domain_guid(), "domain-1");
    assert!(routes[0].destinations.is_empty());
}

#[tokio::test]
async fn test_list_domains() {
    let base_url = start_server().await;
    let cc = CloudControllerClient::new(Client::new(), base_url);

    let domains = cc.list_domains(TOKEN).await.unwrap();

    assert_eq!(domains.len(), 2);
    assert!(domains[1].internal);
}

#[tokio::test]
async fn test_list_with_bad_token_is_status_error() {
    let base_url = start_server().await;
    let cc = CloudControllerClient::new(Client::new(), base_url);

    let err = cc.list_domains("not-the-token").await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_server_error_keeps_body() {
    let base_url = start_server().await;
    let cc = CloudControllerClient::new(Client::new(), base_url);

    let err = cc.list_spaces(TOKEN).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Status {
            status: 500,
            body: "cc is down".to_string()
        }
    );
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let cc = CloudControllerClient::new(Client::new(), base_url);
    let err = cc.list_routes(TOKEN).await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn test_repeated_next_link_stops_listing() {
    let base_url = start_paging_server(|base| format!("{base}/v3/domains")).await;
    let cc = CloudControllerClient::new(Client::new(), base_url);

    let result = tokio::time::timeout(Duration::from_secs(3), cc.list_domains(TOKEN))
        .await
        .expect("listing should end on a repeated next link");

    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::Other(_)));
    assert!(err.to_string().contains("already fetched"));
}

#[tokio::test]
async fn test_next_link_to_other_origin_is_rejected() {
    let base_url =
        start_paging_server(|_| "http://other-host.invalid/v3/domains?page=2".to_string()).await;
    let cc = CloudControllerClient::new(Client::new(), base_url);

    let err = cc.list_domains(TOKEN).await.unwrap_err();

    assert!(matches!(err, ClientError::Other(_)));
    assert!(err.to_string().contains("leaves origin"));
}
