use clap::{ArgAction, Parser};

use crate::config::{DurationField, PhaseDurations, parse_minutes};
use crate::error::ConfigError;
use crate::pomodoro::phase::{
    POMODORO_LONG_BREAK_MINUTES, POMODORO_SHORT_BREAK_MINUTES, POMODORO_WORK_MINUTES,
};

const ABOUT: &str = "The Pomodoro Technique is a time management method developed by Francesco \
Cirillo in the late 1980s. Pick a task, set the pomodoro to 25 minutes and focus on nothing but \
that task until the clock rings. Then take a short break (5 minutes will do), and after every \
four pomodoros take a longer one.";

const CORE_COMMANDS: &str = "CORE COMMANDS
  --w, --work          Set the work duration in minutes (default: 25)
  --sb, --short-break  Set the short break duration in minutes (default: 5)
  --lb, --long-break   Set the long break duration in minutes after four pomodoros (default: 15)
  --gui                Open the interactive terminal UI
  --help               Show this help message and exit.
  --version            Show program's version number and exit.";

#[derive(Debug, Parser)]
#[command(name = "pomodoro", version, about = ABOUT, after_help = CORE_COMMANDS)]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Work duration in minutes
    #[arg(short, long, visible_alias = "w", default_value_t = POMODORO_WORK_MINUTES, value_parser = work_minutes)]
    pub work: u64,

    /// Short break duration in minutes
    #[arg(short, long, visible_alias = "sb", default_value_t = POMODORO_SHORT_BREAK_MINUTES, value_parser = short_break_minutes)]
    pub short_break: u64,

    /// Long break duration in minutes, taken after four pomodoros
    #[arg(short, long, visible_alias = "lb", default_value_t = POMODORO_LONG_BREAK_MINUTES, value_parser = long_break_minutes)]
    pub long_break: u64,

    /// Open the interactive terminal UI
    #[arg(long)]
    pub gui: bool,

    /// No bell and no desktop notification when a work phase ends
    #[arg(long)]
    pub silent: bool,

    /// Log debug output to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Args {
    pub fn durations(&self) -> Result<PhaseDurations, ConfigError> {
        PhaseDurations::from_minutes(self.work, self.short_break, self.long_break)
    }
}

fn work_minutes(raw: &str) -> Result<u64, ConfigError> {
    parse_minutes(DurationField::Work, raw)
}

fn short_break_minutes(raw: &str) -> Result<u64, ConfigError> {
    parse_minutes(DurationField::ShortBreak, raw)
}

fn long_break_minutes(raw: &str) -> Result<u64, ConfigError> {
    parse_minutes(DurationField::LongBreak, raw)
}
