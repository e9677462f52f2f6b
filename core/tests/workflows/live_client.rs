// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Wizard workflow against the HTTP client and a mock booking service.

use jiff::civil::{date, time};
use slotbook_api::{ApiConfig, ConsultationClient};
use slotbook_core::{
    Action, AvailabilityState, AvailabilityStore, ConsultationType, Duration, Notice, Step, Wizard,
    WizardView,
};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{TODAY, fill_customer};

fn client_for(server: &MockServer) -> ConsultationClient {
    ConsultationClient::new(ApiConfig::new(server.uri())).expect("Failed to create client")
}

#[tokio::test]
async fn wizard_books_through_http_client() {
    // Arrange
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/consultation/available-dates"))
        .and(query_param("duration", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"dates": [{"date": "2026-01-20", "hasSlots": true, "slots": [{"time": "10:00", "available": true}]}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/consultation/apply"))
        .and(body_partial_json(serde_json::json!({
            "type": "ai",
            "duration": 30,
            "date": "2026-01-20",
            "time": "10:00",
            "agreedToTerms": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"success": true, "consultationId": 42}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut wizard = Wizard::new(TODAY);

    // Act
    for action in [
        Action::SelectType(ConsultationType::Ai),
        Action::GoToStep(Step::DateTimeSelection),
        Action::SelectDate(date(2026, 1, 20)),
        Action::SelectSlot(time(10, 0, 0, 0)),
        Action::GoToStep(Step::CustomerInfo),
    ] {
        wizard.handle(action, &client, &client).await.unwrap();
    }
    fill_customer(&mut wizard);
    wizard
        .handle(Action::Submit, &client, &client)
        .await
        .unwrap();

    // Assert
    let WizardView::Submitted { confirmation } = wizard.view() else {
        panic!("expected the confirmation, alert: {:?}", wizard.alert());
    };
    assert_eq!(confirmation.consultation_id.as_str(), "42");
    assert_eq!(confirmation.path, "/consultation/complete?id=42");
}

#[tokio::test]
async fn server_error_field_becomes_calendar_notice() {
    // Arrange
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/consultation/available-dates"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"error": "Calendar is under maintenance"}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut wizard = Wizard::new(TODAY);

    // Act
    wizard
        .handle(Action::SelectType(ConsultationType::Ai), &client, &client)
        .await
        .unwrap();
    wizard
        .handle(Action::GoToStep(Step::DateTimeSelection), &client, &client)
        .await
        .unwrap();

    // Assert
    let WizardView::DateTimeSelection { month, .. } = wizard.view() else {
        panic!("expected the date step");
    };
    assert_eq!(
        month.notice,
        Some(Notice::Failed("Calendar is under maintenance".to_string()))
    );
    assert!(wizard.availability().is_empty());
}

#[tokio::test]
async fn body_without_dates_leaves_store_failed_and_empty() {
    // Arrange
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/consultation/available-dates"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"unexpected": true}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;
    let client = client_for(&mock_server);
    let mut store = AvailabilityStore::new();

    // Act
    let state = store.refresh(&client, Duration::Minutes30).await.clone();

    // Assert
    assert!(matches!(state, AvailabilityState::Failed(_)), "got {state:?}");
    assert!(store.is_empty());
}
