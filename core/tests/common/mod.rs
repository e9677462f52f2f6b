// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - In-memory stand-ins for the booking service

mod fakes;
mod fixtures;

#[allow(unused_imports)]
pub use fakes::{FakeGateway, FakeSource};
#[allow(unused_imports)]
pub use fixtures::{TODAY, available_day, fill_customer, schedule_item};
