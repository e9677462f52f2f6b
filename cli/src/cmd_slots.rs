// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use jiff::civil::Date;
use slotbook_core::{
    AvailabilityState, AvailabilityStore, DayStatus, Duration, classify_day, iso_date,
    render_slots,
};

use crate::arg::CommonArgs;
use crate::config::Config;
use crate::render::write_slots;
use crate::util::parse_date_arg;

#[derive(Debug, Clone, Copy)]
pub struct CmdSlots {
    pub date: Date,
    pub duration: Duration,
}

impl CmdSlots {
    pub const NAME: &str = "slots";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the time slots of a day")
            .arg(arg!(date: <DATE> "Day to show, as YYYY-MM-DD").value_parser(parse_date_arg))
            .arg(CommonArgs::duration())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<Date>("date") {
            Some(date) => Self {
                date: *date,
                duration: CommonArgs::get_duration(matches),
            },
            _ => unreachable!(),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing time slots...");
        let client = config.client()?;
        let today = config.core.today()?;

        let mut store = AvailabilityStore::new();
        if let AvailabilityState::Failed(msg) =
            store.refresh(&client, self.duration).await
        {
            return Err(msg.clone().into());
        }

        let status = classify_day(self.date, today, &store);
        match (status, store.get(self.date)) {
            (DayStatus::Available | DayStatus::Unavailable, Some(day)) => {
                write_slots(&mut io::stdout().lock(), &render_slots(day, None))
            }
            _ => {
                println!(
                    "{} {}",
                    iso_date(self.date).bold(),
                    describe_closed_day(status).dimmed()
                );
                Ok(())
            }
        }
    }
}

pub fn describe_closed_day(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Past => "is in the past",
        DayStatus::Closed => "is closed, no consultations on Sundays",
        DayStatus::Unavailable => "has no free time slots",
        DayStatus::Available => "can be booked",
    }
}
