// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use slotbook_core::{CalendarLinkBuilder, ScheduleItem, schedule_affordances};
use tokio::fs;

use crate::config::Config;
use crate::render::write_affordances;

#[derive(Debug, Clone)]
pub struct CmdSchedule {
    pub path: PathBuf,
}

impl CmdSchedule {
    pub const NAME: &str = "schedule";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List calendar links for the sessions of a course")
            .long_about(
                "\
List calendar links for the sessions of a course. FILE holds the sessions either as a JSON \
array or as TOML `[[sessions]]` tables, with the fields session_number, course_title, date, \
start_time, end_time and online_url.",
            )
            .arg(
                arg!(<FILE> "Course schedule file")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<PathBuf>("FILE") {
            Some(path) => Self { path: path.clone() },
            None => unreachable!(),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing schedule links...");
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| format!("Failed to read {}: {e}", self.path.display()))?;

        let items = self.parse(&content)?;
        tracing::debug!(count = items.len(), "parsed schedule");

        let builder = CalendarLinkBuilder::from_config(&config.core);
        let affordances = schedule_affordances(&items, &builder);
        write_affordances(&mut io::stdout().lock(), &affordances)
    }

    fn parse(&self, content: &str) -> Result<Vec<ScheduleItem>, Box<dyn Error>> {
        let is_json = self
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(content)?)
        } else {
            let file: ScheduleFile = toml::from_str(content)?;
            Ok(file.sessions)
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ScheduleFile {
    #[serde(default)]
    sessions: Vec<ScheduleItem>,
}
