use gateway_ui::registry_client::{forward_get, forward_post, registry_client};
use std::net::SocketAddr;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

// Integration tests for the registry proxy functions against a mock registry
async fn start_mock_registry(ready_tx: oneshot::Sender<SocketAddr>) -> std::io::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;

    // Signal that the server is ready and where it listens
    let _ = ready_tx.send(listener.local_addr()?);

    loop {
        let (mut stream, _) = listener.accept().await?;

        tokio::spawn(async move {
            let mut reader = BufReader::new(&mut stream);
            let mut request_line = String::new();

            if reader.read_line(&mut request_line).await.is_err() {
                return;
            }

            // Drain the remaining HTTP headers
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).await.is_err() {
                    return;
                }

                if line.trim().is_empty() {
                    break;
                }
            }

            let (status_line, response_body) = if request_line.starts_with("GET /getalldata") {
                (
                    "HTTP/1.1 200 OK",
                    r#"[{"_id":"1","serialNumber":"GW-1","name":"warehouse","ipAddress":"10.0.0.7","status":true,"devices":[],"createdAt":"","updatedAt":""}]"#,
                )
            } else if request_line.starts_with("POST /register") {
                ("HTTP/1.1 200 OK", r#"{"message":"registered"}"#)
            } else if request_line.starts_with("POST /savedevice") {
                ("HTTP/1.1 400 Bad Request", r#"{"message":"gateway not found"}"#)
            } else {
                ("HTTP/1.1 404 Not Found", r#"{"message":"unknown route"}"#)
            };

            let http_response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
                status_line,
                response_body.len(),
                response_body
            );

            let _ = stream.write_all(http_response.as_bytes()).await;
        });
    }
}

async fn spawn_mock_registry() -> (String, tokio::task::JoinHandle<()>) {
    let (ready_tx, ready_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        let _ = start_mock_registry(ready_tx).await;
    });

    let addr = ready_rx.await.expect("server failed to start");

    (format!("http://{addr}"), server_handle)
}

#[tokio::test]
async fn test_forward_get_passes_payload_through() {
    let (base_url, server_handle) = spawn_mock_registry().await;

    let client = registry_client().expect("failed to create registry client");

    let response = forward_get(&client, &base_url, "/getalldata")
        .await
        .expect("failed to forward request");

    assert!(response.status().is_success());

    let body = actix_web::body::to_bytes(response.into_body())
        .await
        .expect("failed to read response body");
    let body = String::from_utf8(body.to_vec()).expect("invalid UTF-8 in response body");
    assert!(body.contains("GW-1"));
    assert!(body.contains("10.0.0.7"));

    server_handle.abort();
}

#[tokio::test]
async fn test_forward_post_passes_success_through() {
    let (base_url, server_handle) = spawn_mock_registry().await;

    let client = registry_client().expect("failed to create registry client");

    let payload = br#"{"serialNumber":"GW-1","name":"warehouse","ipv4Address":"10.0.0.7"}"#;
    let response = forward_post(&client, &base_url, "/register", payload.to_vec())
        .await
        .expect("failed to forward request");

    assert!(response.status().is_success());

    let body = actix_web::body::to_bytes(response.into_body())
        .await
        .expect("failed to read response body");
    assert_eq!(&body[..], &br#"{"message":"registered"}"#[..]);

    server_handle.abort();
}

#[tokio::test]
async fn test_forward_post_passes_rejection_status_through() {
    let (base_url, server_handle) = spawn_mock_registry().await;

    let client = registry_client().expect("failed to create registry client");

    let payload = br#"{"serialNumber":"GW-404","uid":42,"vendor":"acme"}"#;
    let response = forward_post(&client, &base_url, "/savedevice", payload.to_vec())
        .await
        .expect("failed to forward request");

    assert_eq!(response.status().as_u16(), 400);

    let body = actix_web::body::to_bytes(response.into_body())
        .await
        .expect("failed to read response body");
    assert_eq!(&body[..], &br#"{"message":"gateway not found"}"#[..]);

    server_handle.abort();
}

#[tokio::test]
async fn test_forward_get_fails_when_registry_is_down() {
    let client = registry_client().expect("failed to create registry client");

    // Nothing listens here; the connection must fail
    let result = forward_get(&client, "http://127.0.0.1:9", "/getalldata").await;

    assert!(result.is_err());
}
