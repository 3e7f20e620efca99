use pretty_assertions::assert_eq;
use serde_json::json;
use sodachat_api::{ApiConfig, ApiError, AskClient, HttpAskClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpAskClient {
    HttpAskClient::new(&ApiConfig::new(server.uri()))
}

#[tokio::test]
async fn test_successful_reply_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "message": "I want to buy a coke" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "One coke coming right up!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reply = client.send_message("I want to buy a coke").await.unwrap();

    assert_eq!(reply, "One coke coming right up!");
}

#[tokio::test]
async fn test_non_success_status_is_an_error_regardless_of_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "response": "this body is ignored"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.send_message("hi").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn test_client_error_status_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask/"))
        .respond_with(ResponseTemplate::new(422).set_body_string("missing field `message`"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.send_message("hi").await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 422);
            assert_eq!(body, "missing field `message`");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "wrong key" })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.send_message("hi").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    // Reserve a free port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = HttpAskClient::new(&ApiConfig::new(format!("http://127.0.0.1:{}", port)));
    let err = client.send_message("hi").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }), "got {:?}", err);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAskClient::new(&ApiConfig::new(format!("{}/", server.uri())));
    assert_eq!(client.send_message("ping").await.unwrap(), "ok");
}
