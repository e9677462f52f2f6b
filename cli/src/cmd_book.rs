// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jiff::civil::{Date, Time};
use slotbook_core::{
    Action, AvailabilitySource, AvailabilityState, BookingError, BookingGateway, Consent, Consents,
    ConsultationType, Duration, Step, Wizard, classify_day, clock_time, iso_date,
};

use crate::arg::CommonArgs;
use crate::cmd_slots::describe_closed_day;
use crate::config::Config;
use crate::render::write_summary;
use crate::util::{parse_date_arg, parse_time_arg};

#[derive(Debug, Clone)]
pub struct CmdBook {
    pub kind: ConsultationType,
    pub duration: Duration,
    pub date: Date,
    pub time: Time,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub consents: Consents,
    pub dry_run: bool,
}

impl CmdBook {
    pub const NAME: &str = "book";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Book a consultation")
            .arg(
                arg!(-t --"type" <TYPE> "Consultation type")
                    .required(true)
                    .value_parser(value_parser!(ConsultationType)),
            )
            .arg(CommonArgs::duration())
            .arg(
                arg!(--date <DATE> "Day of the session, as YYYY-MM-DD")
                    .required(true)
                    .value_parser(parse_date_arg),
            )
            .arg(
                arg!(--time <TIME> "Start of the session, as HH:MM")
                    .required(true)
                    .value_parser(parse_time_arg),
            )
            .arg(arg!(--name <NAME> "Your full name").required(true))
            .arg(arg!(--email <EMAIL> "Your email address").required(true))
            .arg(arg!(--phone <PHONE> "Your phone number").required(false))
            .arg(arg!(--message <MESSAGE> "Anything we should know beforehand").required(false))
            .arg(arg!(--"agree-terms" "Agree to the terms of service"))
            .arg(arg!(--"agree-cancellation-policy" "Agree to the cancellation policy"))
            .arg(arg!(
                --"agree-commerce-disclosure" "Acknowledge the commercial transactions disclosure"
            ))
            .arg(arg!(-y --"agree-all" "Give all three agreements at once"))
            .arg(arg!(--"dry-run" "Validate and print the booking without sending it"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let (Some(kind), Some(date), Some(time), Some(name), Some(email)) = (
            matches.get_one::<ConsultationType>("type"),
            matches.get_one::<Date>("date"),
            matches.get_one::<Time>("time"),
            matches.get_one::<String>("name"),
            matches.get_one::<String>("email"),
        ) else {
            unreachable!()
        };

        let all = matches.get_flag("agree-all");
        let consents = Consents {
            terms: all || matches.get_flag("agree-terms"),
            cancellation_policy: all || matches.get_flag("agree-cancellation-policy"),
            commerce_disclosure: all || matches.get_flag("agree-commerce-disclosure"),
        };

        Self {
            kind: *kind,
            duration: CommonArgs::get_duration(matches),
            date: *date,
            time: *time,
            name: name.clone(),
            email: email.clone(),
            phone: matches.get_one::<String>("phone").cloned(),
            message: matches.get_one::<String>("message").cloned(),
            consents,
            dry_run: matches.get_flag("dry-run"),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "booking consultation...");
        let client = config.client()?;
        let mut wizard = Wizard::new(config.core.today()?);
        self.book(&mut wizard, &client, &client, &mut io::stdout())
            .await
    }

    /// Walks the wizard through every step with the given answers.
    pub async fn book<S, G>(
        &self,
        wizard: &mut Wizard,
        source: &S,
        gateway: &G,
        out: &mut impl io::Write,
    ) -> Result<(), Box<dyn Error>>
    where
        S: AvailabilitySource + ?Sized,
        G: BookingGateway + ?Sized,
    {
        let choose = [
            Action::SelectType(self.kind),
            Action::SelectDuration(self.duration),
            Action::GoToStep(Step::DateTimeSelection),
        ];
        for action in choose {
            wizard.handle(action, source, gateway).await?;
        }
        if let AvailabilityState::Failed(msg) = wizard.availability().state() {
            return Err(format!("Failed to load availability: {msg}").into());
        }

        wizard.dispatch(Action::SelectDate(self.date))?;
        if wizard.selection().date != Some(self.date) {
            let status = classify_day(self.date, wizard.today(), wizard.availability());
            return Err(format!("{} {}", iso_date(self.date), describe_closed_day(status)).into());
        }

        wizard.dispatch(Action::SelectSlot(self.time))?;
        if wizard.selection().time != Some(self.time) {
            let free = wizard
                .availability()
                .get(self.date)
                .map(|day| {
                    day.slots
                        .iter()
                        .filter(|s| s.available)
                        .map(|s| clock_time(s.time))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            return Err(format!(
                "{} on {} is not available, free slots: {free}",
                clock_time(self.time),
                iso_date(self.date)
            )
            .into());
        }

        wizard.dispatch(Action::GoToStep(Step::CustomerInfo))?;
        let fill = [
            Action::UpdateName(self.name.clone()),
            Action::UpdateEmail(self.email.clone()),
            Action::UpdatePhone(self.phone.clone().unwrap_or_default()),
            Action::UpdateMessage(self.message.clone().unwrap_or_default()),
        ];
        for action in fill {
            wizard.dispatch(action)?;
        }
        for consent in Consent::ALL {
            wizard.dispatch(Action::SetConsent(consent, self.consents.get(consent)))?;
        }

        if self.dry_run {
            let payload = wizard.validate()?;
            write_summary(out, &wizard.summary())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&payload.to_request())?)?;
            return Ok(());
        }

        wizard.handle(Action::Submit, source, gateway).await?;
        match wizard.confirmation() {
            Some(confirmation) => {
                write_summary(out, &wizard.summary())?;
                writeln!(
                    out,
                    "{} Consultation {} booked, see {}",
                    "Done:".green(),
                    confirmation.consultation_id,
                    confirmation.path
                )?;
                Ok(())
            }
            None => Err(wizard
                .alert()
                .unwrap_or(BookingError::FALLBACK_MESSAGE)
                .to_string()
                .into()),
        }
    }
}
