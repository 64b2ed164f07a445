//! HttpClient against a mock backend.

use pkg_client::{ApiError, HttpClient};
use pkg_panel::RequestPanel;
use pkg_types::{Draft, NewSecretRequest, RequestId, SecretType};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn db_prod() -> serde_json::Value {
    json!({
        "id": 1,
        "secret_name": "db-prod",
        "secret_type": "database",
        "justification": "x",
        "status": "pending",
        "created_at": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn list_decodes_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/secret-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([db_prod()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri()).unwrap();
    let requests = client.list_requests().await.unwrap();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, RequestId::Int(1));
    assert_eq!(requests[0].secret_name, "db-prod");
    assert_eq!(requests[0].created_at, "2024-01-01T00:00:00Z");
}

#[tokio::test]
async fn list_empty_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/secret-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri()).unwrap();
    assert!(client.list_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/secret-requests"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri()).unwrap();
    match client.list_requests().await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "down for maintenance");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/secret-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri()).unwrap();
    assert!(matches!(
        client.list_requests().await,
        Err(ApiError::Parse(_))
    ));
}

#[tokio::test]
async fn unreachable_backend_is_a_connection_error() {
    // Port 9 (discard) is not expected to accept HTTP connections.
    let client = HttpClient::new("http://127.0.0.1:9").unwrap();
    assert!(matches!(
        client.list_requests().await,
        Err(ApiError::Connection(_))
    ));
}

#[tokio::test]
async fn create_posts_exact_type_for_each_option() {
    let server = MockServer::start().await;
    for ty in ["database", "api", "ssh"] {
        Mock::given(method("POST"))
            .and(path("/api/secret-requests"))
            .and(body_json(json!({
                "secret_name": "svc",
                "secret_type": ty,
                "justification": "needed"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 9 })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = HttpClient::new(server.uri()).unwrap();
    for ty in SecretType::ALL {
        let body = NewSecretRequest {
            secret_name: "svc".to_string(),
            secret_type: ty,
            justification: "needed".to_string(),
        };
        client.create_request(&body).await.unwrap();
    }
}

#[tokio::test]
async fn create_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/secret-requests"))
        .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri()).unwrap();
    client.create_request(&Draft::default().to_body()).await.unwrap();
}

#[tokio::test]
async fn token_is_sent_as_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/secret-requests"))
        .and(header("authorization", "Bearer s3cr3t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri())
        .unwrap()
        .with_token(Some("s3cr3t".to_string()));
    client.list_requests().await.unwrap();
}

#[tokio::test]
async fn health_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri()).unwrap();
    assert_eq!(client.health().await.unwrap().status, "healthy");
}

#[tokio::test]
async fn panel_submit_then_refetch_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/secret-requests"))
        .and(body_json(json!({
            "secret_name": "db-prod",
            "secret_type": "database",
            "justification": "x"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/secret-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([db_prod()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri()).unwrap();
    let mut panel = RequestPanel::new();
    panel.set_secret_name("db-prod");
    panel.set_justification("x");
    panel.submit_request(&client).await;

    assert_eq!(panel.draft(), &Draft::default());
    assert_eq!(panel.requests().len(), 1);
    assert_eq!(panel.requests()[0].status, "pending");
}

#[tokio::test]
async fn panel_failed_submit_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/secret-requests"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/secret-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri()).unwrap();
    let mut panel = RequestPanel::new();
    panel.set_secret_name("db-prod");
    panel.submit_request(&client).await;

    assert_eq!(panel.draft().secret_name, "db-prod");
    assert_eq!(panel.failures(), 1);
}
