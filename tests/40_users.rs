mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn create_user_never_returns_password() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/user/"))
        .json(&json!({
            "username": "jane",
            "email": "jane@example.com",
            "full_name": "Jane Doe",
            "password": "hunter2"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let text = res.text().await?;
    assert!(!text.contains("hunter2"), "raw password leaked: {}", text);
    assert!(!text.contains("password"), "password field leaked: {}", text);

    let body: Value = serde_json::from_str(&text)?;
    assert_eq!(
        body,
        json!({"username": "jane", "email": "jane@example.com", "full_name": "Jane Doe"})
    );
    Ok(())
}

#[tokio::test]
async fn create_user_without_password_is_422() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/user/"))
        .json(&json!({"username": "jane", "email": "jane@example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = res.json::<Value>().await?;
    assert!(body["field_errors"].get("password").is_some(), "{}", body);
    Ok(())
}

#[tokio::test]
async fn read_user_by_name() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::get(server.url("/user?name=anyone")).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["username"], "Test");
    assert_eq!(body["email"], "jj@email.com");
    Ok(())
}
