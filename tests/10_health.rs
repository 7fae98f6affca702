mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::get(server.url("/health")).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    assert!(body.get("timestamp").is_some(), "missing timestamp: {}", body);
    Ok(())
}

#[tokio::test]
async fn root_says_hello_world() -> Result<()> {
    let server = common::spawn_server().await?;

    let body = reqwest::get(server.url("/")).await?.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"Hello": "World"}));
    Ok(())
}

#[tokio::test]
async fn dropped_server_stops_listening() -> Result<()> {
    let server = common::spawn_server().await?;
    let url = server.url("/health");
    drop(server);

    assert!(reqwest::get(&url).await.is_err(), "server still answering after drop");
    Ok(())
}
