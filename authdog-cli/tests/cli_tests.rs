//! End-to-end tests for the `authdog` binary and its command functions.

use assert_cmd::Command;
use authdog::ClientConfig;
use authdog_cli::commands;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authdog() -> Command {
    let mut cmd = Command::cargo_bin("authdog").expect("binary should be built");
    cmd.env_remove("AUTHDOG_BASE_URL")
        .env_remove("AUTHDOG_API_KEY")
        .env_remove("AUTHDOG_TIMEOUT_MS")
        .env("RUST_LOG", "error");
    cmd
}

#[test]
fn session_command_prints_credentials() -> Result<(), Box<dyn std::error::Error>> {
    authdog()
        .args(["session", "--url", "https://app.example.com/cb?token=tok&application_uuid=app"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""authorization": "tok""#))
        .stdout(predicate::str::contains(r#""target": "https://app.example.com/cb""#));
    Ok(())
}

#[test]
fn session_command_without_credentials_fails() -> Result<(), Box<dyn std::error::Error>> {
    authdog()
        .args(["session", "--url", "https://app.example.com/"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: unauthorized"));
    Ok(())
}

#[test]
fn session_command_reads_storage_flags() -> Result<(), Box<dyn std::error::Error>> {
    authdog()
        .args([
            "session",
            "--url",
            "https://app.example.com/",
            "--storage",
            "adog.sid=stored",
            "--storage",
            "adog.appId=app",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""authorization": "stored""#))
        .stdout(predicate::str::contains(r#""action": "none""#));
    Ok(())
}

#[test]
fn logout_command_prints_effects() -> Result<(), Box<dyn std::error::Error>> {
    authdog()
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action": "reload""#))
        .stdout(predicate::str::contains("adog.sid"));
    Ok(())
}

#[test]
fn no_args_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    authdog().assert().failure().stderr(predicate::str::contains("Usage: authdog"));
    Ok(())
}

#[test]
fn userinfo_against_unreachable_server_fails() -> Result<(), Box<dyn std::error::Error>> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    authdog()
        .args(["userinfo", "--token", "t", "--base-url", &format!("http://{addr}")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: Request failed: "));
    Ok(())
}

#[tokio::test]
async fn userinfo_command_prints_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/userinfo"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "code": 200, "message": "OK" },
            "session": { "remainingSeconds": 60 },
            "user": {
                "id": "123",
                "externalId": "ext",
                "userName": "jdoe",
                "displayName": "Test User",
                "locale": "en",
                "active": true,
                "names": { "id": "n", "familyName": "Doe", "givenName": "J" },
                "photos": [],
                "phoneNumbers": [],
                "addresses": [],
                "emails": [],
                "verifications": [],
                "provider": "email",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z",
                "environmentId": "env"
            }
        })))
        .mount(&server)
        .await;

    let out = commands::userinfo(ClientConfig::new(server.uri()), "tok", false).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["user"]["id"], "123");
    assert_eq!(value["user"]["displayName"], "Test User");
    assert_eq!(value["user"]["nickName"], serde_json::Value::Null);
}

#[tokio::test]
async fn userinfo_command_reports_rejected_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/userinfo"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = commands::userinfo(ClientConfig::new(server.uri()), "bad", false).await.unwrap_err();

    assert_eq!(authdog_cli::exit_code_for(&err), 2);
    assert_eq!(err.to_string(), "Unauthorized - invalid or expired token");
}

#[tokio::test]
async fn session_fetch_includes_application_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/oauth2/application/userinfo/app"))
        .and(header("authorization", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": { "id": "u9" } })))
        .expect(1)
        .mount(&server)
        .await;

    let out = commands::bootstrap(
        ClientConfig::new(server.uri()),
        "https://app.example.com/?token=tok&application_uuid=app",
        &Default::default(),
        true,
    )
    .await
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["user"]["id"], "u9");
}
