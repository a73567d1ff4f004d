use std::fmt;

use crate::error::ConfigError;
use crate::pomodoro::phase::{
    POMODORO_LONG_BREAK_MINUTES, POMODORO_SHORT_BREAK_MINUTES, POMODORO_WORK_MINUTES, Phase,
};

const SECONDS_PER_MINUTE: u64 = 60;

/// Which of the three configurable durations a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationField {
    Work,
    ShortBreak,
    LongBreak,
}

impl DurationField {
    pub fn label(&self) -> &'static str {
        match self {
            DurationField::Work => "Work (minutes)",
            DurationField::ShortBreak => "Short break (minutes)",
            DurationField::LongBreak => "Long break (minutes)",
        }
    }
}

impl fmt::Display for DurationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DurationField::Work => "work duration",
            DurationField::ShortBreak => "short break duration",
            DurationField::LongBreak => "long break duration",
        };
        f.write_str(name)
    }
}

/// Configured length of each phase, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDurations {
    work: u64,
    short_break: u64,
    long_break: u64,
}

impl PhaseDurations {
    pub fn from_secs(work: u64, short_break: u64, long_break: u64) -> Self {
        Self {
            work,
            short_break,
            long_break,
        }
    }

    pub fn from_minutes(work: u64, short_break: u64, long_break: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            work: minutes_to_secs(DurationField::Work, work)?,
            short_break: minutes_to_secs(DurationField::ShortBreak, short_break)?,
            long_break: minutes_to_secs(DurationField::LongBreak, long_break)?,
        })
    }

    /// Parses the three raw text entries of the interactive form.
    pub fn parse(work: &str, short_break: &str, long_break: &str) -> Result<Self, ConfigError> {
        Self::from_minutes(
            parse_minutes(DurationField::Work, work)?,
            parse_minutes(DurationField::ShortBreak, short_break)?,
            parse_minutes(DurationField::LongBreak, long_break)?,
        )
    }

    pub fn for_phase(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Working => self.work,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }

    pub fn minutes(&self, phase: Phase) -> u64 {
        self.for_phase(phase) / SECONDS_PER_MINUTE
    }
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self::from_secs(
            POMODORO_WORK_MINUTES * SECONDS_PER_MINUTE,
            POMODORO_SHORT_BREAK_MINUTES * SECONDS_PER_MINUTE,
            POMODORO_LONG_BREAK_MINUTES * SECONDS_PER_MINUTE,
        )
    }
}

/// Parses a whole, positive number of minutes.
pub fn parse_minutes(field: DurationField, input: &str) -> Result<u64, ConfigError> {
    let trimmed = input.trim();
    let minutes: i128 = trimmed.parse().map_err(|_| ConfigError::NotANumber {
        field,
        input: input.to_string(),
    })?;
    if minutes <= 0 {
        return Err(ConfigError::NotPositive { field });
    }
    let minutes = u64::try_from(minutes).map_err(|_| ConfigError::TooLong {
        field,
        input: trimmed.to_string(),
    })?;
    minutes_to_secs(field, minutes)?;
    Ok(minutes)
}

fn minutes_to_secs(field: DurationField, minutes: u64) -> Result<u64, ConfigError> {
    if minutes == 0 {
        return Err(ConfigError::NotPositive { field });
    }
    minutes
        .checked_mul(SECONDS_PER_MINUTE)
        .ok_or_else(|| ConfigError::TooLong {
            field,
            input: minutes.to_string(),
        })
}
