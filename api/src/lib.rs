// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the consultation booking endpoints: the availability feed
//! (`GET /api/consultation/available-dates`) and the application endpoint
//! (`POST /api/consultation/apply`).

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::ConsultationClient;
pub use crate::config::ApiConfig;
pub use crate::error::ApiError;
pub use crate::types::{
    ApplyRequest, ApplyResponse, AvailableDatesResponse, ConsultationId, DateAvailability,
    SlotAvailability,
};
