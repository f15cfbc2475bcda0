//! Login, registration, logout and token refresh.

use campus_market::application::services::Navigator;
use campus_market::domain::Route;
use campus_market::infrastructure::storage::{keys, MemoryStore};
use campus_market::presentation::cli::Command;

use crate::common::*;

fn login(username: &str, password: &str) -> Command {
    Command::Login {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn register(username: &str) -> Command {
    Command::Register {
        username: username.to_string(),
        email: format!("{}@ait.ac.th", username),
        password: "password123".to_string(),
        confirm_password: None,
    }
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_stores_tokens_and_greets() {
    let app = TestApp::spawn().await;

    let output = app.app.run(login(USERNAME, PASSWORD)).await.unwrap();

    assert!(output.contains("Logged in successfully"));
    assert!(output.contains("Welcome, Somchai"));
    assert_eq!(app.stored(keys::ACCESS_TOKEN).as_deref(), Some(ACCESS_TOKEN));
    assert_eq!(app.stored(keys::REFRESH_TOKEN).as_deref(), Some(REFRESH_TOKEN));
    assert!(app.context().session.is_authenticated());
    assert_eq!(app.context().navigator.current(), Route::Home);
}

#[tokio::test]
async fn test_login_failure_shows_server_detail() {
    let app = TestApp::spawn().await;

    let err = app.app.run(login(USERNAME, "wrong-password")).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "No active account found with the given credentials"
    );
    assert!(app.stored(keys::ACCESS_TOKEN).is_none());
    assert!(!app.context().session.is_authenticated());
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = TestApp::spawn().await;

    let err = app.app.run(login("", "")).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Username is required"));
    assert!(message.contains("Password is required"));
}

// =============================================================================
// Stored session
// =============================================================================

#[tokio::test]
async fn test_stored_token_restores_session() {
    let app = TestApp::spawn_logged_in().await;

    let user = app.context().session.current_user().unwrap();
    assert_eq!(user.username, USERNAME);
}

#[tokio::test]
async fn test_rejected_stored_token_is_cleared() {
    let app = TestApp::spawn_with(MemoryStore::with_entries([
        (keys::ACCESS_TOKEN, "stale"),
        (keys::REFRESH_TOKEN, "stale-refresh"),
    ]))
    .await;

    assert!(!app.context().session.is_authenticated());
    assert!(app.stored(keys::ACCESS_TOKEN).is_none());
    assert!(app.stored(keys::REFRESH_TOKEN).is_none());
}

#[tokio::test]
async fn test_logout_clears_tokens_and_goes_home() {
    let app = TestApp::spawn_logged_in().await;
    app.context().navigator.navigate(Route::Cart);

    let output = app.app.run(Command::Logout).await.unwrap();

    assert!(output.contains("Logged out"));
    assert!(app.stored(keys::ACCESS_TOKEN).is_none());
    assert!(!app.context().session.is_authenticated());
    assert_eq!(app.context().navigator.current(), Route::Home);
}

#[tokio::test]
async fn test_refresh_token_keeps_refresh_token() {
    let app = TestApp::spawn_logged_in().await;

    let output = app.app.run(Command::RefreshToken).await.unwrap();

    assert!(output.contains("Access token refreshed"));
    assert_eq!(
        app.stored(keys::ACCESS_TOKEN).as_deref(),
        Some(REFRESHED_ACCESS_TOKEN)
    );
    assert_eq!(app.stored(keys::REFRESH_TOKEN).as_deref(), Some(REFRESH_TOKEN));
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_taken_username_shows_field_error() {
    let app = TestApp::spawn().await;

    let err = app.app.run(register("taken")).await.unwrap_err();

    assert!(err
        .to_string()
        .contains("A user with that username already exists."));
    assert!(!app.context().session.is_authenticated());
}

#[tokio::test]
async fn test_register_rejects_foreign_email_before_calling_api() {
    let app = TestApp::spawn().await;
    let command = Command::Register {
        username: "somying".into(),
        email: "somying@gmail.com".into(),
        password: "password123".into(),
        confirm_password: None,
    };

    let err = app.app.run(command).await.unwrap_err();

    assert!(err.to_string().contains("Email must end with @ait.ac.th"));
}

#[tokio::test]
async fn test_register_then_failed_login_asks_for_manual_login() {
    let app = TestApp::spawn().await;

    // The stub only accepts the fixed credentials, so the automatic login fails.
    let output = app.app.run(register("somying")).await.unwrap();

    assert!(output.contains("Automatic login failed"));
    assert!(!app.context().session.is_authenticated());
    assert_eq!(app.context().navigator.current(), Route::Login);
}

#[tokio::test]
async fn test_register_logs_in_with_same_credentials() {
    let app = TestApp::spawn().await;

    let output = app.app.run(register(USERNAME)).await.unwrap();

    assert!(output.contains("Registration successful!"));
    assert_eq!(app.stored(keys::ACCESS_TOKEN).as_deref(), Some(ACCESS_TOKEN));
    assert_eq!(
        app.context().session.current_user().map(|u| u.username),
        Some(USERNAME.to_string())
    );
}
