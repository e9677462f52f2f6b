// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use slotbook_core::Duration;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn duration() -> Arg {
        arg!(-d --duration <MINUTES> "Session length in minutes")
            .value_parser(value_parser!(Duration))
            .default_value("30")
    }

    pub fn get_duration(matches: &ArgMatches) -> Duration {
        matches
            .get_one::<Duration>("duration")
            .copied()
            .unwrap_or_default()
    }
}
