// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg};
use slotbook_core::{AvailabilityStore, Duration, MonthCursor, render_month};

use crate::arg::CommonArgs;
use crate::config::Config;
use crate::render::write_month;
use crate::util::parse_month_arg;

#[derive(Debug, Clone, Copy)]
pub struct CmdCalendar {
    pub duration: Duration,
    pub month: Option<MonthCursor>,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show which days of a month can be booked")
            .arg(CommonArgs::duration())
            .arg(
                arg!(-m --month <MONTH> "Month to show, as YYYY-MM [default: current month]")
                    .value_parser(parse_month_arg),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            duration: CommonArgs::get_duration(matches),
            month: matches.get_one::<MonthCursor>("month").copied(),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing availability calendar...");
        let client = config.client()?;
        let today = config.core.today()?;

        let mut store = AvailabilityStore::new();
        store.refresh(&client, self.duration).await;

        let cursor = self.month.unwrap_or(MonthCursor::containing(today));
        let grid = render_month(cursor, &store, None, today);
        write_month(&mut io::stdout().lock(), &grid)
    }
}
