// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg};
use jiff::civil::{Date, Time};
use slotbook_core::{CalendarEvent, CalendarLinkBuilder};

use crate::config::Config;
use crate::util::{parse_date_arg, parse_time_arg};

#[derive(Debug, Clone)]
pub struct CmdLink {
    pub title: String,
    pub date: Date,
    pub start: Time,
    pub end: Option<Time>,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl CmdLink {
    pub const NAME: &str = "link";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print an \"add to calendar\" link for a session")
            .arg(arg!(--title <TITLE> "Event title").required(true))
            .arg(
                arg!(--date <DATE> "Day of the session, as YYYY-MM-DD")
                    .required(true)
                    .value_parser(parse_date_arg),
            )
            .arg(
                arg!(--start <TIME> "Start time, as HH:MM")
                    .required(true)
                    .value_parser(parse_time_arg),
            )
            .arg(
                arg!(--end <TIME> "End time, as HH:MM [default: two hours after start]")
                    .required(false)
                    .value_parser(parse_time_arg),
            )
            .arg(arg!(--url <URL> "Online meeting link").required(false))
            .arg(arg!(--description <TEXT> "Event description").required(false))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let (Some(title), Some(date), Some(start)) = (
            matches.get_one::<String>("title"),
            matches.get_one::<Date>("date"),
            matches.get_one::<Time>("start"),
        ) else {
            unreachable!()
        };

        Self {
            title: title.clone(),
            date: *date,
            start: *start,
            end: matches.get_one::<Time>("end").copied(),
            url: matches.get_one::<String>("url").cloned(),
            description: matches.get_one::<String>("description").cloned(),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "building calendar link...");
        let builder = CalendarLinkBuilder::from_config(&config.core);
        self.write(&builder, &mut io::stdout().lock())
    }

    pub fn write(
        &self,
        builder: &CalendarLinkBuilder,
        w: &mut impl io::Write,
    ) -> Result<(), Box<dyn Error>> {
        let event = CalendarEvent {
            title: &self.title,
            date: self.date,
            start: self.start,
            end: self.end,
            meeting_url: self.url.as_deref(),
            description: self.description.as_deref(),
        };
        writeln!(w, "{}", builder.build(&event))?;
        Ok(())
    }
}
