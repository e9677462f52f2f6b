// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use jiff::civil::{Date, Time};

use crate::error::FormatError;

/// Kind of consultation being booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ConsultationType {
    /// Consultation about adopting AI.
    Ai,

    /// Mental health consultation.
    Mental,
}

impl ConsultationType {
    /// All types, in display order.
    pub const ALL: [Self; 2] = [Self::Ai, Self::Mental];

    /// Wire value sent to the booking service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Mental => "mental",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ai => "AI consultation",
            Self::Mental => "Mental consultation",
        }
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsultationType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai" => Ok(Self::Ai),
            "mental" => Ok(Self::Mental),
            _ => Err(FormatError::InvalidValue {
                field: "consultation type",
                value: s.to_string(),
            }),
        }
    }
}

/// Session length. Each length has a fixed price.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Duration {
    /// 30 minutes.
    #[default]
    #[cfg_attr(feature = "clap", clap(name = "30"))]
    Minutes30,

    /// 60 minutes.
    #[cfg_attr(feature = "clap", clap(name = "60"))]
    Minutes60,
}

impl Duration {
    /// All lengths, in display order.
    pub const ALL: [Self; 2] = [Self::Minutes30, Self::Minutes60];

    /// Length in minutes.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        match self {
            Self::Minutes30 => 30,
            Self::Minutes60 => 60,
        }
    }

    /// Price in yen.
    #[must_use]
    pub const fn price_yen(self) -> u32 {
        match self {
            Self::Minutes30 => 3_000,
            Self::Minutes60 => 5_000,
        }
    }

    /// Price formatted for display, e.g. `¥3,000`.
    #[must_use]
    pub fn price_label(self) -> String {
        format_yen(self.price_yen())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

impl TryFrom<u16> for Duration {
    type Error = FormatError;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        match minutes {
            30 => Ok(Self::Minutes30),
            60 => Ok(Self::Minutes60),
            _ => Err(FormatError::InvalidValue {
                field: "duration",
                value: minutes.to_string(),
            }),
        }
    }
}

impl FromStr for Duration {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes: u16 = s.trim().parse().map_err(|_| FormatError::InvalidValue {
            field: "duration",
            value: s.to_string(),
        })?;
        Self::try_from(minutes)
    }
}

impl serde::Serialize for Duration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.minutes())
    }
}

impl<'de> serde::Deserialize<'de> for Duration {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let minutes = u16::deserialize(deserializer)?;
        Self::try_from(minutes).map_err(serde::de::Error::custom)
    }
}

fn format_yen(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('¥');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The consultation being assembled by the wizard.
///
/// `time` is only meaningful while `date` is set; both are cleared whenever the
/// duration changes, because availability depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSelection {
    /// Chosen consultation type.
    pub kind: Option<ConsultationType>,

    /// Chosen session length.
    pub duration: Duration,

    /// Chosen local date.
    pub date: Option<Date>,

    /// Chosen local start time on `date`.
    pub time: Option<Time>,
}

impl BookingSelection {
    /// Whether every part of the selection is chosen.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.kind.is_some() && self.date.is_some() && self.time.is_some()
    }
}

/// One of the agreements required before booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consent {
    /// Terms of service.
    Terms,

    /// Cancellation policy.
    CancellationPolicy,

    /// Disclosure under the Specified Commercial Transactions Act.
    CommerceDisclosure,
}

impl Consent {
    /// All consents, in the order they are shown.
    pub const ALL: [Self; 3] = [
        Self::Terms,
        Self::CancellationPolicy,
        Self::CommerceDisclosure,
    ];
}

impl fmt::Display for Consent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Terms => "terms of service",
            Self::CancellationPolicy => "cancellation policy",
            Self::CommerceDisclosure => "commercial transactions disclosure",
        })
    }
}

/// Agreement flags, each independent of the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Consents {
    /// Agreed to the terms of service.
    pub terms: bool,
    /// Agreed to the cancellation policy.
    pub cancellation_policy: bool,
    /// Acknowledged the commercial transactions disclosure.
    pub commerce_disclosure: bool,
}

impl Consents {
    /// All three consents given.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            terms: true,
            cancellation_policy: true,
            commerce_disclosure: true,
        }
    }

    /// Returns whether the given consent is granted.
    #[must_use]
    pub const fn get(&self, consent: Consent) -> bool {
        match consent {
            Consent::Terms => self.terms,
            Consent::CancellationPolicy => self.cancellation_policy,
            Consent::CommerceDisclosure => self.commerce_disclosure,
        }
    }

    /// Sets the given consent.
    pub const fn set(&mut self, consent: Consent, value: bool) {
        match consent {
            Consent::Terms => self.terms = value,
            Consent::CancellationPolicy => self.cancellation_policy = value,
            Consent::CommerceDisclosure => self.commerce_disclosure = value,
        }
    }

    /// The first consent that is still missing.
    #[must_use]
    pub fn first_missing(&self) -> Option<Consent> {
        Consent::ALL.into_iter().find(|c| !self.get(*c))
    }
}

/// Contact details entered on the last step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number, empty when not given.
    pub phone: String,
    /// Free-text message, empty when not given.
    pub message: String,
    /// Agreements.
    pub consents: Consents,
}
