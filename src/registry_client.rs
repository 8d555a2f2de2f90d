use actix_web::{http::StatusCode, HttpResponse};
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

const REGISTRY_TIMEOUT_SECS: u64 = 30;

/// Create the HTTP client used to reach the gateway registry
pub fn registry_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(REGISTRY_TIMEOUT_SECS))
        .build()
        .context("failed to create registry HTTP client")
}

/// Forward a GET request to the registry, passing status and body through
pub async fn forward_get(client: &Client, base_url: &str, path: &str) -> Result<HttpResponse> {
    let res = client
        .get(format!("{base_url}{path}"))
        .send()
        .await
        .context("send request failed")?;

    into_http_response(res).await
}

/// Forward a POST with a JSON body to the registry, passing status and body through
pub async fn forward_post(
    client: &Client,
    base_url: &str,
    path: &str,
    body: Vec<u8>,
) -> Result<HttpResponse> {
    let res = client
        .post(format!("{base_url}{path}"))
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .context("send request failed")?;

    into_http_response(res).await
}

async fn into_http_response(res: reqwest::Response) -> Result<HttpResponse> {
    let status_code =
        StatusCode::from_u16(res.status().as_u16()).context("get status code failed")?;

    let body = res.bytes().await.context("collect response body failed")?;

    Ok(HttpResponse::build(status_code).body(body))
}
