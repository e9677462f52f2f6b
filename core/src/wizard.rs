// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The three-step booking wizard.
//!
//! All state lives in [`Wizard`]. Views never mutate it directly; they produce
//! [`Action`]s which are fed to [`Wizard::dispatch`]. Work that needs the
//! network is returned as an [`Effect`] for the caller to carry out, and its
//! outcome is reported back through [`Wizard::availability_loaded`] or
//! [`Wizard::submission_finished`]. [`Wizard::perform`] does both halves for
//! callers that simply want to await the result.

use std::fmt;

use async_trait::async_trait;
use jiff::civil::{Date, Time};
use slotbook_api::{ApiError, ApplyRequest, ConsultationClient, ConsultationId};

use crate::availability::{
    AvailabilityDay, AvailabilitySource, AvailabilityState, AvailabilityStore, RefreshTicket,
};
use crate::datetime::{clock_time, iso_date};
use crate::error::{AvailabilityError, BookingError, ValidationError, WizardError};
use crate::month::{DayStatus, MonthCursor, classify_day};
use crate::types::{BookingSelection, Consent, ConsultationType, CustomerInfo, Duration};

/// Path of the confirmation page, keyed by the consultation id.
const CONFIRMATION_PATH: &str = "/consultation/complete";

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Choose the consultation type and session length.
    TypeSelection,
    /// Choose a date and a time slot.
    DateTimeSelection,
    /// Enter contact details and give consents.
    CustomerInfo,
    /// The booking service accepted the booking.
    Submitted,
}

impl Step {
    /// 1-based position of the step.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::TypeSelection => 1,
            Self::DateTimeSelection => 2,
            Self::CustomerInfo => 3,
            Self::Submitted => 4,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TypeSelection => "type selection",
            Self::DateTimeSelection => "date and time selection",
            Self::CustomerInfo => "customer information",
            Self::Submitted => "submitted",
        })
    }
}

/// Messages from the views to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Choose the consultation type.
    SelectType(ConsultationType),
    /// Choose the session length. Clears any chosen date and time.
    SelectDuration(Duration),
    /// Show the previous month.
    PrevMonth,
    /// Show the next month.
    NextMonth,
    /// Choose a date; ignored unless the date is available.
    SelectDate(Date),
    /// Choose a slot on the chosen date; ignored unless the slot is available.
    SelectSlot(Time),
    /// Edit the name field.
    UpdateName(String),
    /// Edit the email field.
    UpdateEmail(String),
    /// Edit the phone field.
    UpdatePhone(String),
    /// Edit the message field.
    UpdateMessage(String),
    /// Tick or untick a consent.
    SetConsent(Consent, bool),
    /// Move to a step.
    GoToStep(Step),
    /// Submit the booking.
    Submit,
}

/// Work requested by the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Fetch availability for the ticket's duration and report it with
    /// [`Wizard::availability_loaded`].
    RefreshAvailability(RefreshTicket),
    /// Send the payload and report the outcome with [`Wizard::submission_finished`].
    Submit(BookingPayload),
}

/// A complete, validated booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPayload {
    /// Consultation type.
    pub kind: ConsultationType,
    /// Session length.
    pub duration: Duration,
    /// Local date.
    pub date: Date,
    /// Local start time.
    pub time: Time,
    /// Trimmed name.
    pub customer_name: String,
    /// Trimmed email address.
    pub customer_email: String,
    /// Trimmed phone number, possibly empty.
    pub customer_phone: String,
    /// Trimmed message, possibly empty.
    pub message: String,
}

impl BookingPayload {
    /// Wire form of the payload. Consents are always given at this point.
    #[must_use]
    pub fn to_request(&self) -> ApplyRequest {
        ApplyRequest {
            kind: self.kind.as_str().to_string(),
            duration: self.duration.minutes(),
            date: iso_date(self.date),
            time: clock_time(self.time),
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            customer_phone: self.customer_phone.clone(),
            message: self.message.clone(),
            agreed_to_terms: true,
        }
    }
}

/// Receiver of finished bookings.
#[async_trait]
pub trait BookingGateway {
    /// Submits the booking and returns its identifier.
    async fn submit(&self, payload: &BookingPayload) -> Result<ConsultationId, BookingError>;
}

#[async_trait]
impl BookingGateway for ConsultationClient {
    async fn submit(&self, payload: &BookingPayload) -> Result<ConsultationId, BookingError> {
        self.apply(&payload.to_request()).await.map_err(|e| match e {
            ApiError::Remote(msg) => BookingError::Rejected(msg),
            e => BookingError::Transport(e.user_message().to_string()),
        })
    }
}

/// Where the booking ends up after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Identifier assigned by the booking service.
    pub consultation_id: ConsultationId,
    /// Confirmation page path, e.g. `/consultation/complete?id=cons_123`.
    pub path: String,
}

impl Confirmation {
    fn new(consultation_id: ConsultationId) -> Self {
        let path = format!(
            "{CONFIRMATION_PATH}?id={}",
            urlencoding::encode(consultation_id.as_str())
        );
        Self {
            consultation_id,
            path,
        }
    }
}

/// State of one booking session.
#[derive(Debug)]
pub struct Wizard {
    step: Step,
    selection: BookingSelection,
    customer: CustomerInfo,
    availability: AvailabilityStore,
    cursor: MonthCursor,
    today: Date,
    submitting: bool,
    alert: Option<String>,
    confirmation: Option<Confirmation>,
}

impl Wizard {
    /// Starts a new booking on the first step. `today` is the local date in the
    /// service timezone.
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            step: Step::TypeSelection,
            selection: BookingSelection::default(),
            customer: CustomerInfo::default(),
            availability: AvailabilityStore::new(),
            cursor: MonthCursor::containing(today),
            today,
            submitting: false,
            alert: None,
            confirmation: None,
        }
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Type, duration, date and time chosen so far.
    #[must_use]
    pub const fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    /// Contact details and consents entered so far.
    #[must_use]
    pub const fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Availability of the current duration.
    #[must_use]
    pub const fn availability(&self) -> &AvailabilityStore {
        &self.availability
    }

    /// Displayed month.
    #[must_use]
    pub const fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// The local date the wizard treats as today.
    #[must_use]
    pub const fn today(&self) -> Date {
        self.today
    }

    /// Whether a submission is waiting for the booking service.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Message to show to the user, if any.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Result of the successful submission.
    #[must_use]
    pub const fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Applies an action and returns the work it requires.
    ///
    /// Choosing an unavailable date or slot is not an error; it simply has no
    /// effect. While a submission is in flight only month navigation is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if a step transition or the submission is not allowed,
    /// or if the action would change a booking that is being submitted.
    pub fn dispatch(&mut self, action: Action) -> Result<Effect, WizardError> {
        if self.step == Step::Submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if self.submitting && !matches!(action, Action::PrevMonth | Action::NextMonth) {
            return Err(WizardError::SubmissionInFlight);
        }
        tracing::debug!(?action, step = %self.step, "dispatch");

        match action {
            Action::SelectType(kind) => {
                self.selection.kind = Some(kind);
                Ok(Effect::None)
            }
            Action::SelectDuration(duration) => Ok(self.select_duration(duration)),
            Action::PrevMonth => {
                if self.cursor > MonthCursor::containing(self.today) {
                    self.cursor.prev_month();
                }
                Ok(Effect::None)
            }
            Action::NextMonth => {
                self.cursor.next_month();
                Ok(Effect::None)
            }
            Action::SelectDate(date) => {
                self.select_date(date);
                Ok(Effect::None)
            }
            Action::SelectSlot(time) => {
                self.select_slot(time);
                Ok(Effect::None)
            }
            Action::UpdateName(v) => {
                self.customer.name = v;
                Ok(Effect::None)
            }
            Action::UpdateEmail(v) => {
                self.customer.email = v;
                Ok(Effect::None)
            }
            Action::UpdatePhone(v) => {
                self.customer.phone = v;
                Ok(Effect::None)
            }
            Action::UpdateMessage(v) => {
                self.customer.message = v;
                Ok(Effect::None)
            }
            Action::SetConsent(consent, value) => {
                self.customer.consents.set(consent, value);
                Ok(Effect::None)
            }
            Action::GoToStep(target) => self.go_to_step(target),
            Action::Submit => self.submit(),
        }
    }

    /// Moves to `target`.
    ///
    /// Moving back is always allowed and keeps every selection. Moving forward
    /// is allowed one step at a time and only when the current step is
    /// complete. Moving to [`Step::Submitted`] submits the booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition would skip a step, or if the input
    /// it requires is missing.
    pub fn go_to_step(&mut self, target: Step) -> Result<Effect, WizardError> {
        if self.step == Step::Submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if target == Step::Submitted {
            return self.submit();
        }
        if target == self.step {
            return Ok(Effect::None);
        }
        if target.number() > self.step.number() + 1 {
            return Err(WizardError::SkipForward {
                from: self.step,
                to: target,
            });
        }

        let blocked = |reason| WizardError::StepBlocked { target, reason };
        match target {
            Step::TypeSelection => {
                self.step = Step::TypeSelection;
                Ok(Effect::None)
            }
            Step::DateTimeSelection => {
                if self.selection.kind.is_none() {
                    return Err(blocked(ValidationError::MissingType));
                }
                Ok(self.enter_date_time())
            }
            Step::CustomerInfo => {
                if self.selection.date.is_none() {
                    return Err(blocked(ValidationError::MissingDate));
                }
                if self.selection.time.is_none() {
                    return Err(blocked(ValidationError::MissingTime));
                }
                self.step = Step::CustomerInfo;
                Ok(Effect::None)
            }
            Step::Submitted => self.submit(),
        }
    }

    /// Enters the date and time step and requests fresh availability.
    ///
    /// The calendar opens on the month of the chosen date, or the current
    /// month when no date is chosen.
    pub fn enter_date_time(&mut self) -> Effect {
        self.step = Step::DateTimeSelection;
        self.cursor = MonthCursor::containing(self.selection.date.unwrap_or(self.today));
        Effect::RefreshAvailability(self.availability.begin_refresh(self.selection.duration))
    }

    /// Validates the booking and hands it off for submission.
    ///
    /// A failed validation is also kept as the alert of the form.
    ///
    /// # Errors
    ///
    /// Returns an error if a submission is in flight, the wizard is not on the
    /// customer step, or any input is missing.
    pub fn submit(&mut self) -> Result<Effect, WizardError> {
        if self.step == Step::Submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if self.step != Step::CustomerInfo {
            return Err(WizardError::SkipForward {
                from: self.step,
                to: Step::Submitted,
            });
        }

        match self.validate() {
            Ok(payload) => {
                self.submitting = true;
                self.alert = None;
                tracing::info!(kind = %payload.kind, date = %payload.date, "submitting booking");
                Ok(Effect::Submit(payload))
            }
            Err(reason) => {
                tracing::debug!(%reason, "submission blocked");
                self.alert = Some(reason.to_string());
                Err(WizardError::Validation(reason))
            }
        }
    }

    /// Checks the whole booking and assembles the payload.
    ///
    /// # Errors
    ///
    /// Returns the first missing or invalid input.
    pub fn validate(&self) -> Result<BookingPayload, ValidationError> {
        let kind = self.selection.kind.ok_or(ValidationError::MissingType)?;
        let date = self.selection.date.ok_or(ValidationError::MissingDate)?;
        let time = self.selection.time.ok_or(ValidationError::MissingTime)?;

        let name = self.customer.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = self.customer.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if let Some(consent) = self.customer.consents.first_missing() {
            return Err(ValidationError::MissingConsent(consent));
        }

        Ok(BookingPayload {
            kind,
            duration: self.selection.duration,
            date,
            time,
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            customer_phone: self.customer.phone.trim().to_string(),
            message: self.customer.message.trim().to_string(),
        })
    }

    /// Applies a finished availability fetch.
    ///
    /// Returns `false` if the response was superseded by a newer request. A
    /// chosen date or slot that is no longer available is dropped.
    pub fn availability_loaded(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<AvailabilityDay>, AvailabilityError>,
    ) -> bool {
        if !self.availability.complete_refresh(ticket, result) {
            return false;
        }
        if self.availability.state() == &AvailabilityState::Ready {
            self.drop_unavailable_selection();
        }
        true
    }

    /// Applies the outcome of a submission.
    ///
    /// Success completes the wizard. Failure keeps every input, shows the
    /// error and allows another attempt.
    pub fn submission_finished(&mut self, result: Result<ConsultationId, BookingError>) {
        if !self.submitting {
            tracing::debug!("ignoring submission result with nothing in flight");
            return;
        }
        self.submitting = false;

        match result {
            Ok(id) => {
                tracing::info!(%id, "booking accepted");
                self.step = Step::Submitted;
                self.alert = None;
                self.confirmation = Some(Confirmation::new(id));
            }
            Err(e) => {
                tracing::warn!(error = %e, "booking failed");
                self.alert = Some(e.user_message().to_string());
            }
        }
    }

    /// Carries out `effect` and applies its outcome.
    pub async fn perform<S, G>(&mut self, effect: Effect, source: &S, gateway: &G)
    where
        S: AvailabilitySource + ?Sized,
        G: BookingGateway + ?Sized,
    {
        match effect {
            Effect::None => {}
            Effect::RefreshAvailability(ticket) => {
                let result = source.fetch(ticket.duration()).await;
                self.availability_loaded(ticket, result);
            }
            Effect::Submit(payload) => {
                let result = gateway.submit(&payload).await;
                self.submission_finished(result);
            }
        }
    }

    /// Dispatches `action` and carries out the resulting effect.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Wizard::dispatch`].
    pub async fn handle<S, G>(
        &mut self,
        action: Action,
        source: &S,
        gateway: &G,
    ) -> Result<(), WizardError>
    where
        S: AvailabilitySource + ?Sized,
        G: BookingGateway + ?Sized,
    {
        let effect = self.dispatch(action)?;
        self.perform(effect, source, gateway).await;
        Ok(())
    }

    fn select_duration(&mut self, duration: Duration) -> Effect {
        self.selection.duration = duration;
        self.selection.date = None;
        self.selection.time = None;

        if self.step == Step::DateTimeSelection {
            Effect::RefreshAvailability(self.availability.begin_refresh(duration))
        } else {
            self.availability.clear();
            Effect::None
        }
    }

    fn select_date(&mut self, date: Date) {
        if classify_day(date, self.today, &self.availability) != DayStatus::Available {
            tracing::debug!(%date, "ignoring unavailable date");
            return;
        }
        self.selection.time = None;
        self.selection.date = Some(date);
    }

    fn select_slot(&mut self, time: Time) {
        let available = self
            .selection
            .date
            .and_then(|date| self.availability.get(date))
            .is_some_and(|day| day.is_available_at(time));
        if available {
            self.selection.time = Some(time);
        } else {
            tracing::debug!(%time, "ignoring unavailable slot");
        }
    }

    fn drop_unavailable_selection(&mut self) {
        let Some(date) = self.selection.date else {
            return;
        };
        if classify_day(date, self.today, &self.availability) != DayStatus::Available {
            tracing::debug!(%date, "chosen date is no longer available");
            self.selection.date = None;
            self.selection.time = None;
            return;
        }
        let slot_gone = self
            .selection
            .time
            .is_some_and(|t| !self.availability.get(date).is_some_and(|d| d.is_available_at(t)));
        if slot_gone {
            tracing::debug!(%date, "chosen slot is no longer available");
            self.selection.time = None;
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
