// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! View models of the wizard steps. Pure functions of [`Wizard`] state.

use crate::datetime::clock_time;
use crate::month::{MonthGrid, render_month};
use crate::slots::{SlotList, date_heading, render_slots};
use crate::types::{ConsultationType, CustomerInfo, Duration};
use crate::wizard::{Action, Confirmation, Step, Wizard};

/// A consultation type choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeOption {
    /// The type.
    pub kind: ConsultationType,
    /// Display name.
    pub label: &'static str,
    /// Currently chosen.
    pub selected: bool,
}

impl TypeOption {
    /// Action dispatched when chosen.
    #[must_use]
    pub const fn on_select(&self) -> Action {
        Action::SelectType(self.kind)
    }
}

/// A session length choice with its price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationOption {
    /// The length.
    pub duration: Duration,
    /// e.g. `30 min`.
    pub label: String,
    /// e.g. `¥3,000`.
    pub price_label: String,
    /// Currently chosen.
    pub selected: bool,
}

impl DurationOption {
    /// Action dispatched when chosen.
    #[must_use]
    pub const fn on_select(&self) -> Action {
        Action::SelectDuration(self.duration)
    }
}

/// Recap of the booking shown next to the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    /// Consultation type name.
    pub kind: String,
    /// Session length.
    pub duration: String,
    /// Price.
    pub price: String,
    /// Date with weekday.
    pub date: String,
    /// Start time.
    pub time: String,
}

/// What the current step displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardView {
    /// Step 1.
    TypeSelection {
        /// Types in display order.
        types: Vec<TypeOption>,
        /// Lengths in display order.
        durations: Vec<DurationOption>,
        /// Whether the forward control is enabled.
        can_proceed: bool,
    },

    /// Step 2.
    DateTimeSelection {
        /// Calendar of the displayed month.
        month: MonthGrid,
        /// Slots of the chosen date.
        slots: Option<SlotList>,
        /// Whether the forward control is enabled.
        can_proceed: bool,
    },

    /// Step 3.
    CustomerInfo {
        /// Booking recap.
        summary: BookingSummary,
        /// Form contents.
        customer: CustomerInfo,
        /// Whether the submit control is enabled.
        submit_enabled: bool,
        /// Message shown above the submit control.
        alert: Option<String>,
    },

    /// Done.
    Submitted {
        /// Where to go next.
        confirmation: Confirmation,
    },
}

impl Wizard {
    /// Builds the view of the current step.
    #[must_use]
    pub fn view(&self) -> WizardView {
        if let Some(confirmation) = self.confirmation() {
            return WizardView::Submitted {
                confirmation: confirmation.clone(),
            };
        }

        let selection = self.selection();
        match self.step() {
            Step::TypeSelection => WizardView::TypeSelection {
                types: ConsultationType::ALL
                    .into_iter()
                    .map(|kind| TypeOption {
                        kind,
                        label: kind.label(),
                        selected: selection.kind == Some(kind),
                    })
                    .collect(),
                durations: Duration::ALL
                    .into_iter()
                    .map(|duration| DurationOption {
                        duration,
                        label: duration.to_string(),
                        price_label: duration.price_label(),
                        selected: selection.duration == duration,
                    })
                    .collect(),
                can_proceed: selection.kind.is_some(),
            },

            Step::DateTimeSelection => {
                let month = render_month(
                    self.cursor(),
                    self.availability(),
                    selection.date,
                    self.today(),
                );
                let slots = selection
                    .date
                    .and_then(|date| self.availability().get(date))
                    .map(|day| render_slots(day, selection.time));
                let can_proceed = slots.as_ref().is_some_and(|s| s.can_proceed);
                WizardView::DateTimeSelection {
                    month,
                    slots,
                    can_proceed,
                }
            }

            Step::CustomerInfo | Step::Submitted => WizardView::CustomerInfo {
                summary: self.summary(),
                customer: self.customer().clone(),
                submit_enabled: !self.is_submitting(),
                alert: self.alert().map(str::to_string),
            },
        }
    }

    /// Recap of the current selection; unset parts are empty.
    #[must_use]
    pub fn summary(&self) -> BookingSummary {
        let selection = self.selection();
        BookingSummary {
            kind: selection
                .kind
                .map(|k| k.label().to_string())
                .unwrap_or_default(),
            duration: selection.duration.to_string(),
            price: selection.duration.price_label(),
            date: selection.date.map(date_heading).unwrap_or_default(),
            time: selection.time.map(clock_time).unwrap_or_default(),
        }
    }
}
