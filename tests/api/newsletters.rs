use claims::{assert_ok, assert_ok_eq};
use fake::{
    Fake,
    faker::lorem::en::{Paragraph, Sentence},
};
use sg_newsletter::{domain::NewsletterContent, newsletter_client::ApiResponse};
use wiremock::ResponseTemplate;

use crate::helpers::{field, keys, spawn_app, success};

fn get_subject() -> String {
    Sentence(1..2).fake()
}

fn get_content() -> String {
    Paragraph(1..10).fake()
}

#[tokio::test]
async fn add_newsletter_sends_identity_name_and_both_bodies() {
    let app = spawn_app().await;
    app.respond_once("/newsletter/add.json", success()).await;

    let subject = get_subject();
    let text = get_content();
    let html = format!("<p>{text}</p>");

    let outcome = app
        .client
        .add_newsletter(
            "Editorial",
            "weekly",
            NewsletterContent::new(&subject, &html, &text),
        )
        .await;

    assert_ok_eq!(outcome, ApiResponse::Success);
    let form = app.sent_form().await;
    assert_eq!(field(&form, "identity"), Some("Editorial"));
    assert_eq!(field(&form, "name"), Some("weekly"));
    assert_eq!(field(&form, "subject"), Some(subject.as_str()));
    assert_eq!(field(&form, "html"), Some(html.as_str()));
    assert_eq!(field(&form, "text"), Some(text.as_str()));
}

#[tokio::test]
async fn edit_newsletter_sends_old_and_new_names() {
    let app = spawn_app().await;
    app.respond_once("/newsletter/edit.json", success()).await;

    let outcome = app
        .client
        .edit_newsletter(
            "Editorial",
            "weekly",
            "weekly-digest",
            NewsletterContent::new("Digest", "<b>news</b>", "news"),
        )
        .await;

    assert_ok!(outcome);
    let form = app.sent_form().await;
    assert_eq!(
        keys(&form),
        ["api_user", "api_key", "name", "newname", "identity", "subject", "text", "html"]
    );
    assert_eq!(field(&form, "name"), Some("weekly"));
    assert_eq!(field(&form, "newname"), Some("weekly-digest"));
}

#[tokio::test]
async fn list_newsletters_without_a_filter_sends_only_credentials() {
    let app = spawn_app().await;
    app.respond_once(
        "/newsletter/list.json",
        ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "name": "weekly" }])),
    )
    .await;

    let outcome = app.client.list_newsletters(None).await;

    assert_ok_eq!(
        outcome,
        ApiResponse::Json(serde_json::json!([{ "name": "weekly" }]))
    );
    assert_eq!(keys(&app.sent_form().await), ["api_user", "api_key"]);
}

#[tokio::test]
async fn list_newsletters_with_a_filter_sends_the_name() {
    let app = spawn_app().await;
    app.respond_once(
        "/newsletter/list.json",
        ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "name": "weekly" }])),
    )
    .await;

    assert_ok!(app.client.list_newsletters(Some("weekly")).await);
    assert_eq!(field(&app.sent_form().await, "name"), Some("weekly"));
}

#[tokio::test]
async fn get_and_delete_newsletter_address_it_by_name() {
    let app = spawn_app().await;
    app.respond_once(
        "/newsletter/get.json",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": "weekly" })),
    )
    .await;
    app.respond_once("/newsletter/delete.json", success()).await;

    assert_ok!(app.client.get_newsletter("weekly").await);
    assert_ok_eq!(
        app.client.delete_newsletter("weekly").await,
        ApiResponse::Success
    );

    let requests = app.api_server.received_requests().await.unwrap();
    for request in &requests {
        let form = crate::helpers::parse_form(request);
        assert_eq!(field(&form, "name"), Some("weekly"));
    }
}
