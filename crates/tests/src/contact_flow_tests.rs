use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{ContactField, ContactFormState};

use crate::common;

fn fill(state: &mut ContactFormState) {
    state.edit(ContactField::Name, "Ada".into());
    state.edit(ContactField::Email, "ada@x.com".into());
    state.edit(ContactField::Message, "Hi".into());
}

/// Run one submit attempt the way the page does: gate on validation, then
/// resolve the state from the delivery result.
async fn submit(state: &mut ContactFormState, client: &app::client::SubmitClient) {
    if !state.begin_submit() {
        return;
    }
    match client.send(state.values()).await {
        Ok(()) => state.submit_succeeded(),
        Err(e) => state.submit_failed(e.user_message()),
    }
}

#[tokio::test]
async fn invalid_form_never_reaches_the_network() {
    let (endpoint, received) = common::spawn_receiver(StatusCode::OK).await;
    let client = common::client_for(&endpoint);

    let mut state = ContactFormState::new();
    submit(&mut state, &client).await;

    assert_eq!(state.field_errors().len(), 3);
    assert_eq!(
        state.field_error(ContactField::Name),
        Some("Name is required")
    );
    assert!(!state.is_submitting());
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn successful_submit_resets_the_form() {
    let (endpoint, received) = common::spawn_receiver(StatusCode::OK).await;
    let client = common::client_for(&endpoint);

    let mut state = ContactFormState::new();
    fill(&mut state);
    submit(&mut state, &client).await;

    assert_eq!(state, ContactFormState::new());
    assert_eq!(
        *received.lock().unwrap(),
        vec![serde_json::json!({"name": "Ada", "email": "ada@x.com", "message": "Hi"})]
    );
}

#[tokio::test]
async fn failed_submit_keeps_the_entered_text() {
    let (endpoint, _received) = common::spawn_receiver(StatusCode::BAD_GATEWAY).await;
    let client = common::client_for(&endpoint);

    let mut state = ContactFormState::new();
    fill(&mut state);
    submit(&mut state, &client).await;

    assert!(!state.is_submitting());
    assert_eq!(state.value(ContactField::Name), "Ada");
    assert_eq!(state.value(ContactField::Email), "ada@x.com");
    assert_eq!(state.value(ContactField::Message), "Hi");
    assert!(state.field_errors().is_empty());
    assert_eq!(
        state.submit_error(),
        Some("Your message could not be sent. Please try again.")
    );
}

#[tokio::test]
async fn failure_then_retry_succeeds_without_retyping() {
    let (bad_endpoint, _) = common::spawn_receiver(StatusCode::SERVICE_UNAVAILABLE).await;
    let (good_endpoint, received) = common::spawn_receiver(StatusCode::OK).await;

    let mut state = ContactFormState::new();
    fill(&mut state);

    submit(&mut state, &common::client_for(&bad_endpoint)).await;
    assert!(state.submit_error().is_some());

    // The entered text survived, so a retry submits the same body.
    submit(&mut state, &common::client_for(&good_endpoint)).await;
    assert_eq!(state, ContactFormState::new());
    assert_eq!(received.lock().unwrap().len(), 1);
}
