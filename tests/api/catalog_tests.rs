//! Home feed, item detail, search and the cart guard.

use campus_market::application::services::Navigator;
use campus_market::domain::Route;
use campus_market::presentation::cli::{Command, ItemArgs, SearchArgs};

use crate::common::*;

fn item_args(id: i64) -> ItemArgs {
    ItemArgs {
        id,
        add_to_cart: false,
        wishlist: false,
        notes: None,
        feature: false,
        unfeature: false,
    }
}

#[tokio::test]
async fn test_home_lists_every_section() {
    let app = TestApp::spawn().await;

    let output = app.app.run(Command::Home).await.unwrap();

    assert!(output.contains("== Featured Items =="));
    assert!(output.contains("Desk lamp  350.00 THB  [Featured]"));
    assert!(output.contains("== Barter =="));
    assert!(output.contains("Acoustic guitar"));
    assert!(!output.contains("Membership Benefits"));
}

#[tokio::test]
async fn test_home_offers_membership_to_logged_in_non_members() {
    let app = TestApp::spawn_logged_in().await;

    let output = app.app.run(Command::Home).await.unwrap();

    assert!(output.contains("Unlock exclusive features with membership!"));
}

#[tokio::test]
async fn test_barter_shows_desired_item() {
    let app = TestApp::spawn().await;

    let output = app.app.run(Command::Barter).await.unwrap();

    assert!(output.contains("Want to swap: Bicycle"));
}

#[tokio::test]
async fn test_item_detail() {
    let app = TestApp::spawn().await;

    let output = app.app.run(Command::Item(item_args(LAMP_ID))).await.unwrap();

    assert!(output.contains("== Desk lamp =="));
    assert!(output.contains("Condition: Like new"));
    assert!(output.contains("Seller: mei"));
    assert_eq!(app.context().navigator.current(), Route::Item(LAMP_ID));
}

#[tokio::test]
async fn test_missing_item_shows_server_detail() {
    let app = TestApp::spawn().await;

    let err = app.app.run(Command::Item(item_args(99))).await.unwrap_err();

    assert_eq!(err.to_string(), "Not found.");
}

#[tokio::test]
async fn test_anonymous_add_to_cart_redirects_to_login() {
    let app = TestApp::spawn().await;
    let args = ItemArgs {
        add_to_cart: true,
        ..item_args(LAMP_ID)
    };

    let output = app.app.run(Command::Item(args)).await.unwrap();

    assert!(output.contains("Please log in to continue"));
    assert_eq!(app.context().navigator.current(), Route::Login);
    assert!(app.stub.recorded.lock().cart_adds.is_empty());
}

#[tokio::test]
async fn test_add_to_cart_sends_one_unit() {
    let app = TestApp::spawn_logged_in().await;
    let args = ItemArgs {
        add_to_cart: true,
        ..item_args(LAMP_ID)
    };

    let output = app.app.run(Command::Item(args)).await.unwrap();

    assert!(output.contains("Added to cart (1 pieces)"));
    let recorded = app.stub.recorded.lock();
    assert_eq!(recorded.cart_adds.len(), 1);
    assert_eq!(recorded.cart_adds[0]["item_id"], LAMP_ID);
    assert_eq!(recorded.cart_adds[0]["quantity"], 1);
}

#[tokio::test]
async fn test_only_owner_may_feature() {
    let app = TestApp::spawn_logged_in().await;
    let args = ItemArgs {
        feature: true,
        ..item_args(LAMP_ID)
    };

    let err = app.app.run(Command::Item(args)).await.unwrap_err();

    assert_eq!(err.to_string(), "Could not change the featured flag");
}

#[tokio::test]
async fn test_search_filters_by_text() {
    let app = TestApp::spawn().await;
    let args = SearchArgs {
        q: "lamp".into(),
        ..Default::default()
    };

    let output = app.app.run(Command::Search(args)).await.unwrap();

    assert!(output.contains("Results: 1"));
    assert!(output.contains("Desk lamp"));
    assert!(!output.contains("Acoustic guitar"));
    assert_eq!(
        app.context().navigator.current(),
        Route::Search(Some("lamp".into()))
    );
}

#[tokio::test]
async fn test_cart_is_guarded() {
    let app = TestApp::spawn().await;

    let output = app.app.run(Command::Cart { action: None }).await.unwrap();

    assert!(output.contains("Please log in to continue"));
    assert!(!output.contains("Shopping Cart"));
}

#[tokio::test]
async fn test_cart_renders_lines_and_total() {
    let app = TestApp::spawn_logged_in().await;
    let args = ItemArgs {
        add_to_cart: true,
        ..item_args(LAMP_ID)
    };
    app.app.run(Command::Item(args)).await.unwrap();

    let output = app.app.run(Command::Cart { action: None }).await.unwrap();

    assert!(output.contains("== Shopping Cart =="));
    assert!(output.contains("Desk lamp  x1  350.00 THB"));
    assert!(output.contains("Total: 350.00 THB"));
}
