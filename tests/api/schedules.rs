use claims::{assert_err, assert_matches, assert_ok};
use sg_newsletter::newsletter_client::{ApiResponse, NewsletterApiError};
use wiremock::{Mock, ResponseTemplate, matchers::any};

use crate::helpers::{field, keys, spawn_app, success};

#[tokio::test]
async fn absolute_time_is_sent_as_iso8601_without_a_delay() {
    let app = spawn_app().await;
    app.respond_once("/newsletter/schedule/add.json", success())
        .await;

    assert_ok!(
        app.client
            .add_schedule("weekly", Some("2024-01-01 10:00"), None)
            .await
    );

    let form = app.sent_form().await;
    assert_eq!(field(&form, "name"), Some("weekly"));
    assert_eq!(field(&form, "at"), Some("2024-01-01T10:00:00+0000"));
    assert_eq!(field(&form, "after"), None);
}

#[tokio::test]
async fn relative_delay_is_sent_as_minutes() {
    let app = spawn_app().await;
    app.respond_once("/newsletter/schedule/add.json", success())
        .await;

    assert_ok!(app.client.add_schedule("weekly", None, Some(30)).await);

    let form = app.sent_form().await;
    assert_eq!(field(&form, "after"), Some("30"));
    assert_eq!(field(&form, "at"), None);
}

#[tokio::test]
async fn absolute_time_wins_over_delay() {
    let app = spawn_app().await;
    app.respond_once("/newsletter/schedule/add.json", success())
        .await;

    assert_ok!(
        app.client
            .add_schedule("weekly", Some("2024-06-01T08:15:00Z"), Some(30))
            .await
    );

    let form = app.sent_form().await;
    assert_eq!(field(&form, "at"), Some("2024-06-01T08:15:00+0000"));
    assert_eq!(field(&form, "after"), None);
}

#[tokio::test]
async fn no_timing_sends_only_the_name() {
    let app = spawn_app().await;
    app.respond_once("/newsletter/schedule/add.json", success())
        .await;

    assert_ok!(app.client.add_schedule("weekly", None, None).await);

    assert_eq!(
        keys(&app.sent_form().await),
        ["api_user", "api_key", "name"]
    );
}

#[tokio::test]
async fn data_responses_also_count_as_scheduled() {
    let app = spawn_app().await;
    app.respond_once(
        "/newsletter/schedule/add.json",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "date": "2024-01-01" })),
    )
    .await;

    assert_ok!(app.client.add_schedule("weekly", None, Some(5)).await);
}

#[tokio::test]
async fn unparseable_time_fails_before_any_request() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(success())
        .expect(0)
        .mount(&app.api_server)
        .await;

    let outcome = app
        .client
        .add_schedule("weekly", Some("whenever you like"), None)
        .await;

    assert_matches!(outcome, Err(NewsletterApiError::InvalidScheduleTime(_)));
    assert!(app.client.error_message().contains("whenever you like"));
}

#[tokio::test]
async fn rejected_schedule_is_a_failure() {
    let app = spawn_app().await;
    app.respond_once(
        "/newsletter/schedule/add.json",
        ResponseTemplate::new(400).set_body_json(serde_json::json!({ "error": "Newsletter has no recipients" })),
    )
    .await;

    assert_err!(app.client.add_schedule("weekly", None, Some(10)).await);
    assert_eq!(app.client.error_message(), "Newsletter has no recipients.");
}

#[tokio::test]
async fn get_and_delete_schedule_address_the_newsletter() {
    let app = spawn_app().await;
    let schedule = serde_json::json!({ "date": "2024-01-01 10:00:00" });
    app.respond_once(
        "/newsletter/schedule/get.json",
        ResponseTemplate::new(200).set_body_json(schedule.clone()),
    )
    .await;
    app.respond_once("/newsletter/schedule/delete.json", success())
        .await;

    let fetched = app.client.get_schedule("weekly").await;
    let cancelled = app.client.delete_schedule("weekly").await;

    assert_eq!(assert_ok!(fetched), ApiResponse::Json(schedule));
    assert_eq!(assert_ok!(cancelled), ApiResponse::Success);
}
