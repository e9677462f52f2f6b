// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, process};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use slotbook_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_book::CmdBook;
use crate::cmd_calendar::CmdCalendar;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_link::CmdLink;
use crate::cmd_schedule::CmdSchedule;
use crate::cmd_slots::CmdSlots;
use crate::config::{Config, parse_config};

/// Run the slotbook command-line interface.
///
/// Logging goes to stderr and is controlled by `RUST_LOG`, defaulting to `warn`.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Book consultations and export sessions to your calendar.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config <CONFIG> "Path to the configuration file")
                    .required(false)
                    .global(true)
                    .long_help(
                        "\
Path to the configuration file. Defaults to $SLOTBOOK_CONFIG, then \
$XDG_CONFIG_HOME/slotbook/config.toml on Linux and MacOS, %LOCALAPPDATA%/slotbook/config.toml \
on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdCalendar::command())
            .subcommand(CmdSlots::command())
            .subcommand(CmdBook::command())
            .subcommand(CmdLink::command())
            .subcommand(CmdSchedule::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)),
            Some((CmdSlots::NAME, matches)) => Slots(CmdSlots::from(matches)),
            Some((CmdBook::NAME, matches)) => Book(CmdBook::from(matches)),
            Some((CmdLink::NAME, matches)) => Link(CmdLink::from(matches)),
            Some((CmdSchedule::NAME, matches)) => Schedule(CmdSchedule::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show bookable days of a month
    Calendar(CmdCalendar),

    /// List time slots of a day
    Slots(CmdSlots),

    /// Book a consultation
    Book(CmdBook),

    /// Print a calendar link
    Link(CmdLink),

    /// Print calendar links for a course schedule
    Schedule(CmdSchedule),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Calendar(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Slots(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            Book(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            Link(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            Schedule(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Config) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        f(&config).await
    }
}
