// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Booking wizard workflow tests.
//!
//! These tests drive the wizard the way a front end would: by reading the view
//! and dispatching the actions it offers.

use jiff::civil::{date, time};
use slotbook_core::{
    Action, ConsultationType, Duration, Effect, GridCell, Notice, Step, ValidationError, Wizard,
    WizardError, WizardView,
};

use crate::common::{FakeGateway, FakeSource, TODAY, available_day, fill_customer};

fn january_source() -> FakeSource {
    FakeSource::with_days(vec![available_day(
        date(2026, 1, 20),
        &[(time(10, 0, 0, 0), true)],
    )])
}

#[tokio::test]
async fn booking_ai_session_produces_expected_payload() {
    // Arrange
    let source = january_source();
    let gateway = FakeGateway::accepting("cons_123");
    let mut wizard = Wizard::new(TODAY);

    // Act - step 1
    wizard
        .handle(Action::SelectType(ConsultationType::Ai), &source, &gateway)
        .await
        .unwrap();
    wizard
        .handle(Action::SelectDuration(Duration::Minutes30), &source, &gateway)
        .await
        .unwrap();
    wizard
        .handle(Action::GoToStep(Step::DateTimeSelection), &source, &gateway)
        .await
        .unwrap();

    // Act - step 2, choose through the view
    let WizardView::DateTimeSelection { month, .. } = wizard.view() else {
        panic!("expected the date step");
    };
    let select_date = month
        .day(date(2026, 1, 20))
        .and_then(|cell| cell.on_select())
        .expect("2026-01-20 should be selectable");
    wizard.handle(select_date, &source, &gateway).await.unwrap();

    let WizardView::DateTimeSelection { slots, .. } = wizard.view() else {
        panic!("expected the date step");
    };
    let select_slot = slots
        .and_then(|list| list.cells.first().and_then(|cell| cell.on_select()))
        .expect("10:00 should be selectable");
    wizard.handle(select_slot, &source, &gateway).await.unwrap();

    // Assert - forward navigation enabled
    let WizardView::DateTimeSelection { can_proceed, .. } = wizard.view() else {
        panic!("expected the date step");
    };
    assert!(can_proceed);

    // Act - step 3 and submit
    wizard
        .handle(Action::GoToStep(Step::CustomerInfo), &source, &gateway)
        .await
        .unwrap();
    fill_customer(&mut wizard);
    wizard
        .handle(Action::Submit, &source, &gateway)
        .await
        .unwrap();

    // Assert
    assert_eq!(source.requests(), vec![Duration::Minutes30]);
    let payloads = gateway.payloads();
    assert_eq!(payloads.len(), 1);
    let body = serde_json::to_value(payloads[0].to_request()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "type": "ai",
            "duration": 30,
            "date": "2026-01-20",
            "time": "10:00",
            "customerName": "Hanako Yamada",
            "customerEmail": "hanako@example.com",
            "customerPhone": "090-0000-0000",
            "message": "First time",
            "agreedToTerms": true
        })
    );

    assert_eq!(wizard.step(), Step::Submitted);
    let WizardView::Submitted { confirmation } = wizard.view() else {
        panic!("expected the confirmation");
    };
    assert_eq!(confirmation.path, "/consultation/complete?id=cons_123");
}

#[tokio::test]
async fn failed_availability_fetch_leaves_nothing_selectable() {
    // Arrange
    let source = FakeSource::failing("Could not load availability.");
    let gateway = FakeGateway::accepting("unused");
    let mut wizard = Wizard::new(TODAY);

    // Act
    wizard
        .handle(Action::SelectType(ConsultationType::Mental), &source, &gateway)
        .await
        .unwrap();
    wizard
        .handle(Action::GoToStep(Step::DateTimeSelection), &source, &gateway)
        .await
        .unwrap();

    // Assert
    let WizardView::DateTimeSelection {
        month, can_proceed, ..
    } = wizard.view()
    else {
        panic!("expected the date step");
    };
    assert_eq!(
        month.notice,
        Some(Notice::Failed("Could not load availability.".to_string()))
    );
    assert!(!can_proceed);
    let selectable = month
        .cells
        .iter()
        .filter(|cell| matches!(cell, GridCell::Day(day) if day.is_selectable()))
        .count();
    assert_eq!(selectable, 0);

    // Choosing a date anyway changes nothing
    wizard
        .handle(Action::SelectDate(date(2026, 1, 20)), &source, &gateway)
        .await
        .unwrap();
    assert_eq!(wizard.selection().date, None);
}

#[tokio::test]
async fn failed_fetch_can_be_retried_by_reentering_step() {
    let gateway = FakeGateway::accepting("unused");
    let mut wizard = Wizard::new(TODAY);
    wizard
        .dispatch(Action::SelectType(ConsultationType::Ai))
        .unwrap();

    let failing = FakeSource::failing("down");
    wizard
        .handle(Action::GoToStep(Step::DateTimeSelection), &failing, &gateway)
        .await
        .unwrap();
    assert!(wizard.availability().is_empty());

    wizard
        .dispatch(Action::GoToStep(Step::TypeSelection))
        .unwrap();
    let working = january_source();
    wizard
        .handle(Action::GoToStep(Step::DateTimeSelection), &working, &gateway)
        .await
        .unwrap();
    assert_eq!(wizard.availability().len(), 1);
}

#[tokio::test]
async fn changing_duration_clears_chosen_date_and_time() {
    // Arrange
    let source = january_source();
    let gateway = FakeGateway::accepting("unused");
    let mut wizard = Wizard::new(TODAY);
    for action in [
        Action::SelectType(ConsultationType::Ai),
        Action::GoToStep(Step::DateTimeSelection),
        Action::SelectDate(date(2026, 1, 20)),
        Action::SelectSlot(time(10, 0, 0, 0)),
    ] {
        wizard.handle(action, &source, &gateway).await.unwrap();
    }
    assert!(wizard.selection().is_complete());

    // Act
    wizard
        .handle(Action::SelectDuration(Duration::Minutes60), &source, &gateway)
        .await
        .unwrap();

    // Assert
    assert_eq!(wizard.selection().date, None);
    assert_eq!(wizard.selection().time, None);
    assert_eq!(
        source.requests(),
        vec![Duration::Minutes30, Duration::Minutes60]
    );
}

#[tokio::test]
async fn late_response_for_previous_duration_is_ignored() {
    // Arrange
    let mut wizard = Wizard::new(TODAY);
    wizard
        .dispatch(Action::SelectType(ConsultationType::Ai))
        .unwrap();
    let Effect::RefreshAvailability(first) = wizard
        .dispatch(Action::GoToStep(Step::DateTimeSelection))
        .unwrap()
    else {
        panic!("expected a refresh");
    };
    let Effect::RefreshAvailability(second) = wizard
        .dispatch(Action::SelectDuration(Duration::Minutes60))
        .unwrap()
    else {
        panic!("expected a refresh");
    };

    // Act - the newer request resolves first
    let sixty = vec![available_day(date(2026, 1, 22), &[(time(9, 0, 0, 0), true)])];
    let thirty = vec![available_day(date(2026, 1, 20), &[(time(10, 0, 0, 0), true)])];
    assert!(wizard.availability_loaded(second, Ok(sixty)));
    assert!(!wizard.availability_loaded(first, Ok(thirty)));

    // Assert
    assert_eq!(wizard.availability().duration(), Some(Duration::Minutes60));
    assert!(wizard.availability().get(date(2026, 1, 20)).is_none());
    assert!(wizard.availability().get(date(2026, 1, 22)).is_some());
}

#[tokio::test]
async fn missing_consent_shows_alert_and_sends_nothing() {
    // Arrange
    let source = january_source();
    let gateway = FakeGateway::accepting("unused");
    let mut wizard = Wizard::new(TODAY);
    for action in [
        Action::SelectType(ConsultationType::Ai),
        Action::GoToStep(Step::DateTimeSelection),
        Action::SelectDate(date(2026, 1, 20)),
        Action::SelectSlot(time(10, 0, 0, 0)),
        Action::GoToStep(Step::CustomerInfo),
    ] {
        wizard.handle(action, &source, &gateway).await.unwrap();
    }
    fill_customer(&mut wizard);
    wizard
        .dispatch(Action::SetConsent(slotbook_core::Consent::CommerceDisclosure, false))
        .unwrap();

    // Act
    let err = wizard
        .handle(Action::Submit, &source, &gateway)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        WizardError::Validation(ValidationError::MissingConsent(_))
    ));
    assert!(gateway.payloads().is_empty());
    let WizardView::CustomerInfo { alert, .. } = wizard.view() else {
        panic!("expected the customer step");
    };
    assert_eq!(
        alert.as_deref(),
        Some("Please agree to the commercial transactions disclosure.")
    );
}

#[tokio::test]
async fn rejected_booking_shows_server_message() {
    // Arrange
    let source = january_source();
    let gateway = FakeGateway::rejecting("This slot has just been taken.");
    let mut wizard = Wizard::new(TODAY);
    for action in [
        Action::SelectType(ConsultationType::Ai),
        Action::GoToStep(Step::DateTimeSelection),
        Action::SelectDate(date(2026, 1, 20)),
        Action::SelectSlot(time(10, 0, 0, 0)),
        Action::GoToStep(Step::CustomerInfo),
    ] {
        wizard.handle(action, &source, &gateway).await.unwrap();
    }
    fill_customer(&mut wizard);

    // Act
    wizard
        .handle(Action::Submit, &source, &gateway)
        .await
        .unwrap();

    // Assert
    assert_eq!(wizard.step(), Step::CustomerInfo);
    let WizardView::CustomerInfo {
        alert,
        submit_enabled,
        ..
    } = wizard.view()
    else {
        panic!("expected the customer step");
    };
    assert_eq!(alert.as_deref(), Some("This slot has just been taken."));
    assert!(submit_enabled);
}
