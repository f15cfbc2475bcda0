//! Wanted posts and the language switcher.

use campus_market::application::services::Navigator;
use campus_market::domain::{Language, Route};
use campus_market::i18n::lookup;
use campus_market::infrastructure::storage::keys;
use campus_market::presentation::cli::{Command, WantedArgs};

use crate::common::*;

fn rice_cooker() -> WantedArgs {
    WantedArgs {
        title: "Rice cooker".into(),
        max_price: "400".into(),
        contact: "081-234-5678".into(),
        location: "Dorm B".into(),
        ..Default::default()
    }
}

// =============================================================================
// Wanted
// =============================================================================

#[tokio::test]
async fn test_wanted_list_is_public() {
    let app = TestApp::spawn().await;

    let output = app.app.run(Command::Wanted { mine: false }).await.unwrap();

    assert!(output.contains("Rice cooker  Max Price 500.00 THB"));
    assert!(output.contains("Location: Dorm A"));
}

#[tokio::test]
async fn test_paid_post_attaches_fee_and_shows_note() {
    let app = TestApp::spawn_logged_in().await;

    let output = app.app.run(Command::WantedNew(rice_cooker())).await.unwrap();

    assert!(output.contains("Free posts used: 3"));
    assert!(output.contains("Payment Required: 10.00 THB"));
    assert!(output.contains("Posted successfully!"));
    assert!(output.contains("Online payment is not supported"));

    let recorded = app.stub.recorded.lock();
    assert_eq!(recorded.wanted_posts.len(), 1);
    assert_eq!(recorded.wanted_posts[0]["paid_amount"], "10.00");
    assert_eq!(recorded.wanted_posts[0]["max_price"], "400.00");
    assert_eq!(recorded.wanted_posts[0]["condition_preference"], "any");
    drop(recorded);

    assert_eq!(app.context().navigator.current(), Route::Wanted);
}

#[tokio::test]
async fn test_blank_title_is_refused_locally() {
    let app = TestApp::spawn_logged_in().await;
    let args = WantedArgs {
        title: "  ".into(),
        ..rice_cooker()
    };

    let err = app.app.run(Command::WantedNew(args)).await.unwrap_err();

    assert!(err.to_string().contains("Title is required"));
    assert!(app.stub.recorded.lock().wanted_posts.is_empty());
}

#[tokio::test]
async fn test_new_wanted_is_guarded() {
    let app = TestApp::spawn().await;

    let output = app.app.run(Command::WantedNew(rice_cooker())).await.unwrap();

    assert!(output.contains("Please log in to continue"));
    assert!(app.stub.recorded.lock().wanted_posts.is_empty());
}

// =============================================================================
// Language
// =============================================================================

#[tokio::test]
async fn test_language_change_persists_and_applies() {
    let app = TestApp::spawn().await;

    app.app
        .run(Command::Lang {
            code: Some(Language::Th),
            next: false,
        })
        .await
        .unwrap();
    let output = app.app.run(Command::Home).await.unwrap();

    assert_eq!(app.stored(keys::LANGUAGE).as_deref(), Some("th"));
    assert!(output.contains(&lookup(Language::Th, "home.featured.title", None)));
}

#[tokio::test]
async fn test_language_cycle() {
    let app = TestApp::spawn().await;

    let output = app
        .app
        .run(Command::Lang {
            code: None,
            next: true,
        })
        .await
        .unwrap();

    assert!(output.contains("(zh)"));
    assert_eq!(app.stored(keys::LANGUAGE).as_deref(), Some("zh"));
}
