use ess_client::{Column, EssClient, UpdateError, UpdateRequest};
use serde_json::json;
use time::macros::date;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> UpdateRequest {
    UpdateRequest::build(
        Some(Column::Script2ReceiveDate),
        "1, 2, x, 3",
        Some(date!(2024 - 04 - 05)),
    )
    .unwrap()
}

#[tokio::test]
async fn puts_json_body_to_update_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/ess/update"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "date": "05-04-2024",
            "nno": [1, 2, 3],
            "column": "Script2_ReceiveDate"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = EssClient::new(&server.uri()).unwrap();
    let response = client.update(&request()).await.unwrap();

    assert_eq!(response.message(), Some("ok"));
}

#[tokio::test]
async fn rejection_surfaces_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/ess/update"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "X"})))
        .mount(&server)
        .await;

    let client = EssClient::new(&server.uri()).unwrap();
    let err = client.update(&request()).await.unwrap_err();

    assert_eq!(
        err,
        UpdateError::Rejected {
            status: 400,
            message: "X".to_string()
        }
    );
    assert_eq!(err.to_string(), "X");
}

#[tokio::test]
async fn rejection_without_error_field_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/ess/update"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = EssClient::new(&server.uri()).unwrap();
    let err = client.update(&request()).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to update");
}

#[tokio::test]
async fn empty_error_field_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/ess/update"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": ""})))
        .mount(&server)
        .await;

    let client = EssClient::new(&server.uri()).unwrap();
    let err = client.update(&request()).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to update");
}

#[tokio::test]
async fn success_with_non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/ess/update"))
        .respond_with(ResponseTemplate::new(200).set_body_string("done"))
        .mount(&server)
        .await;

    let client = EssClient::new(&server.uri()).unwrap();
    let err = client.update(&request()).await.unwrap_err();

    assert!(matches!(err, UpdateError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = EssClient::new(&format!("http://{addr}")).unwrap();
    let err = client.update(&request()).await.unwrap_err();

    match err {
        UpdateError::Transport(message) => assert!(!message.is_empty()),
        other => panic!("expected transport error, got {other:?}"),
    }
}
