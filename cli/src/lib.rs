// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of slotbook.

mod arg;
mod cli;
mod cmd_book;
mod cmd_calendar;
mod cmd_generate_completion;
mod cmd_link;
mod cmd_schedule;
mod cmd_slots;
mod config;
mod render;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_book::CmdBook;
pub use crate::cmd_calendar::CmdCalendar;
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::cmd_link::CmdLink;
pub use crate::cmd_schedule::CmdSchedule;
pub use crate::cmd_slots::CmdSlots;
pub use crate::config::{Config, parse_config};
