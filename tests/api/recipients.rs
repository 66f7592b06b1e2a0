use claims::{assert_matches, assert_ok, assert_ok_eq};
use sg_newsletter::newsletter_client::{ApiResponse, NewsletterApiError};
use wiremock::ResponseTemplate;

use crate::helpers::{field, spawn_app, success};

#[tokio::test]
async fn add_recipients_attaches_a_list_to_a_newsletter() {
    let app = spawn_app().await;
    app.respond_once("/newsletter/recipients/add.json", success())
        .await;

    assert_ok_eq!(
        app.client.add_recipients("weekly", "readers").await,
        ApiResponse::Success
    );

    let form = app.sent_form().await;
    assert_eq!(field(&form, "name"), Some("weekly"));
    assert_eq!(field(&form, "list"), Some("readers"));
}

#[tokio::test]
async fn get_recipients_returns_the_assigned_lists() {
    let app = spawn_app().await;
    let lists = serde_json::json!([{ "list": "readers" }]);
    app.respond_once(
        "/newsletter/recipients/get.json",
        ResponseTemplate::new(200).set_body_json(lists.clone()),
    )
    .await;

    assert_ok_eq!(
        app.client.get_recipients("weekly").await,
        ApiResponse::Json(lists)
    );
    assert_eq!(field(&app.sent_form().await, "name"), Some("weekly"));
}

#[tokio::test]
async fn delete_recipients_detaches_a_list() {
    let app = spawn_app().await;
    app.respond_once("/newsletter/recipients/delete.json", success())
        .await;

    assert_ok!(app.client.delete_recipients("weekly", "readers").await);

    let form = app.sent_form().await;
    assert_eq!(field(&form, "name"), Some("weekly"));
    assert_eq!(field(&form, "list"), Some("readers"));
}

#[tokio::test]
async fn unknown_newsletter_is_reported() {
    let app = spawn_app().await;
    app.respond_once(
        "/newsletter/recipients/get.json",
        ResponseTemplate::new(401).set_body_json(serde_json::json!({ "error": "Unknown newsletter" })),
    )
    .await;

    let outcome = app.client.get_recipients("ghost").await;

    assert_matches!(outcome, Err(NewsletterApiError::Rejected(_)));
    assert_eq!(app.client.error_message(), "Unknown newsletter.");
}
