//! Health and metrics endpoint integration tests.
//!
//! `/health` returns plain text "OK" for liveness probes.
//! `/ready` returns JSON with the store's status.

use wifi_test_utils::{network_body, TestWifiServer};

#[tokio::test]
async fn test_health_endpoint_returns_200() -> Result<(), anyhow::Error> {
    let server = TestWifiServer::spawn_in_memory().await?;

    let response = reqwest::get(format!("{}/health", server.url())).await?;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await?, "OK");

    Ok(())
}

#[tokio::test]
async fn test_ready_endpoint_returns_json() -> Result<(), anyhow::Error> {
    let server = TestWifiServer::spawn_in_memory().await?;

    let response = reqwest::get(format!("{}/ready", server.url())).await?;

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert!(
        content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json")),
        "Expected application/json content type, got {:?}",
        content_type
    );

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "healthy");

    Ok(())
}

#[tokio::test]
async fn test_metrics_endpoint_returns_200() -> Result<(), anyhow::Error> {
    let server = TestWifiServer::spawn_in_memory().await?;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/networks", server.url()))
        .json(&network_body("home", "AA:BB:CC:DD:EE:FF", "WPA2", -40))
        .send()
        .await?;

    let response = client
        .get(format!("{}/metrics", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), 200);

    Ok(())
}

#[tokio::test]
async fn test_unknown_route_returns_404() -> Result<(), anyhow::Error> {
    let server = TestWifiServer::spawn_in_memory().await?;

    let response = reqwest::get(format!("{}/v1/nonexistent", server.url())).await?;

    assert_eq!(response.status(), 404);

    Ok(())
}
