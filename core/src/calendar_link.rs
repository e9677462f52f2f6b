// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! "Add to calendar" links for booked sessions.
//!
//! A link pre-fills the event form of an external calendar service. Dates and
//! times are sent as zone-less tokens together with an explicit `ctz`, so the
//! result does not depend on the timezone of whoever opens the link.

use jiff::civil::{Date, Time};
use urlencoding::encode;

use crate::config::{Config, DEFAULT_CALENDAR_URL, DEFAULT_ONLINE_PLACEHOLDER, DEFAULT_TIMEZONE};
use crate::datetime::{compute_end_time, format_token, parse_date, parse_time};

const JOIN_VIA_LINK: &str = "Please join via the link above.";
const JOIN_LINK_BY_EMAIL: &str = "The join link will be emailed to you before the session.";
const ADD_TO_CALENDAR: &str = "Add to Google Calendar";
const PENDING_NOTICE: &str = "Available once the date is confirmed";

/// An event to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEvent<'a> {
    /// Event title.
    pub title: &'a str,
    /// Local date of the start.
    pub date: Date,
    /// Local start time.
    pub start: Time,
    /// Local end time; two hours after `start` when absent.
    pub end: Option<Time>,
    /// Meeting URL; only used when it is an absolute http(s) URL.
    pub meeting_url: Option<&'a str>,
    /// Leading text of the event details.
    pub description: Option<&'a str>,
}

/// Builds event-creation URLs for an external calendar service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLinkBuilder {
    base_url: String,
    timezone: String,
    online_placeholder: String,
}

impl Default for CalendarLinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CALENDAR_URL, DEFAULT_TIMEZONE)
    }
}

impl CalendarLinkBuilder {
    /// Creates a builder targeting `base_url`, pinning every event to `timezone`.
    pub fn new(base_url: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timezone: timezone.into(),
            online_placeholder: DEFAULT_ONLINE_PLACEHOLDER.to_string(),
        }
    }

    /// Creates a builder from the core configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.calendar_base_url, &config.timezone)
            .with_online_placeholder(&config.online_placeholder)
    }

    /// Sets the location used when there is no usable meeting URL.
    #[must_use]
    pub fn with_online_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.online_placeholder = placeholder.into();
        self
    }

    /// Timezone the events are pinned to.
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Builds the event-creation URL. No request is made.
    #[must_use]
    pub fn build(&self, event: &CalendarEvent<'_>) -> String {
        let end = event.end.unwrap_or_else(|| compute_end_time(event.start));
        // an end at or before the start belongs to the next day
        let end_date = if end <= event.start {
            event.date.tomorrow().unwrap_or(event.date)
        } else {
            event.date
        };

        let dates = format!(
            "{}/{}",
            format_token(event.date, event.start),
            format_token(end_date, end)
        );

        let meeting = meeting_url(event.meeting_url);
        let location = meeting.unwrap_or(&self.online_placeholder);

        let mut details = String::new();
        if let Some(description) = event.description.filter(|d| !d.trim().is_empty()) {
            details.push_str(description.trim());
            details.push_str("\n\n");
        }
        match meeting {
            Some(url) => {
                details.push_str("Meeting link: ");
                details.push_str(url);
                details.push('\n');
                details.push_str(JOIN_VIA_LINK);
            }
            None => details.push_str(JOIN_LINK_BY_EMAIL),
        }

        format!(
            "{}?action=TEMPLATE&text={}&dates={}&ctz={}&details={}&location={}",
            self.base_url,
            encode(event.title),
            encode(&dates),
            encode(&self.timezone),
            encode(&details),
            encode(location),
        )
    }
}

/// Returns the trimmed URL if it is an absolute `http`/`https` URL with a host.
#[must_use]
pub fn meeting_url(raw: Option<&str>) -> Option<&str> {
    let raw = raw?.trim();
    let url = url::Url::parse(raw).ok()?;
    let usable = matches!(url.scheme(), "http" | "https") && url.host_str().is_some();
    usable.then_some(raw)
}

/// A session of a purchased course, as listed after payment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ScheduleItem {
    /// 1-based position in the course.
    pub session_number: u32,
    /// Course name.
    pub course_title: String,
    /// Local date `YYYY-MM-DD`, unknown until scheduled.
    #[serde(default)]
    pub date: Option<String>,
    /// Local start `HH:MM`, unknown until scheduled.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Local end `HH:MM`.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Meeting URL, possibly not yet a valid URL.
    #[serde(default)]
    pub online_url: Option<String>,
}

impl ScheduleItem {
    /// Event title, e.g. `Intro to AI (Session 2)`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} (Session {})", self.course_title, self.session_number)
    }

    /// Builds the calendar link, or `None` if the date or start time is missing
    /// or malformed.
    #[must_use]
    pub fn calendar_link(&self, builder: &CalendarLinkBuilder) -> Option<String> {
        let date = parse_date(non_empty(self.date.as_deref())?).ok()?;
        let start = parse_clock(non_empty(self.start_time.as_deref())?)?;
        let end = match non_empty(self.end_time.as_deref()) {
            Some(raw) => {
                let end = parse_clock(raw);
                if end.is_none() {
                    tracing::warn!(
                        session = self.session_number,
                        end = raw,
                        "ignoring malformed end time"
                    );
                }
                end
            }
            None => None,
        };

        let title = self.title();
        let description = format!(
            "{}: session {}",
            self.course_title.trim(),
            self.session_number
        );
        Some(builder.build(&CalendarEvent {
            title: &title,
            date,
            start,
            end,
            meeting_url: self.online_url.as_deref(),
            description: Some(&description),
        }))
    }

    /// What to show in place of the "add to calendar" control.
    #[must_use]
    pub fn affordance(&self, builder: &CalendarLinkBuilder) -> CalendarAffordance {
        match self.calendar_link(builder) {
            Some(url) => CalendarAffordance::Link {
                session_number: self.session_number,
                label: ADD_TO_CALENDAR.to_string(),
                url,
            },
            None => {
                tracing::debug!(session = self.session_number, "schedule item not yet dated");
                CalendarAffordance::Pending {
                    session_number: self.session_number,
                    notice: PENDING_NOTICE.to_string(),
                }
            }
        }
    }
}

/// The "add to calendar" control of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarAffordance {
    /// An active link.
    Link {
        /// Session the link belongs to.
        session_number: u32,
        /// Control label.
        label: String,
        /// Event-creation URL.
        url: String,
    },

    /// A disabled placeholder.
    Pending {
        /// Session the placeholder belongs to.
        session_number: u32,
        /// Why there is no link yet.
        notice: String,
    },
}

/// One control per session, each derived independently.
#[must_use]
pub fn schedule_affordances(
    items: &[ScheduleItem],
    builder: &CalendarLinkBuilder,
) -> Vec<CalendarAffordance> {
    items.iter().map(|item| item.affordance(builder)).collect()
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Accepts `HH:MM` and database-style `HH:MM:SS`, dropping the seconds.
fn parse_clock(s: &str) -> Option<Time> {
    let hm = match s.len() {
        8 if s.as_bytes().get(5) == Some(&b':') => s.get(..5)?,
        _ => s,
    };
    parse_time(hm).ok()
}
