// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::generate;
use clap_complete_nushell::Nushell;

use crate::Cli;

/// Shells a completion script can be written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[value(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// Writes the completion script of `cmd` for this shell.
    pub fn write_script(self, cmd: &mut Command, out: &mut impl io::Write) {
        use clap_complete::Shell as Builtin;

        let bin = cmd.get_name().to_string();
        let builtin = match self {
            Shell::Nushell => return generate(Nushell {}, cmd, bin, out),
            Shell::Bash => Builtin::Bash,
            Shell::Elvish => Builtin::Elvish,
            Shell::Fish => Builtin::Fish,
            Shell::PowerShell => Builtin::PowerShell,
            Shell::Zsh => Builtin::Zsh,
        };
        generate(builtin, cmd, bin, out);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the shell completion script for slotbook")
            .hide(true)
            .arg(arg!(<SHELL> "Target shell").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let Some(shell) = matches.get_one::<Shell>("SHELL") else {
            unreachable!()
        };
        Self { shell: *shell }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(shell = ?self.shell, "writing completion script...");
        self.shell.write_script(&mut Cli::command(), &mut io::stdout());
        Ok(())
    }
}
