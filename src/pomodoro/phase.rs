pub const TICK_INTERVAL_MS: u64 = 1000; // One countdown step per second
pub const POMODORO_WORK_MINUTES: u64 = 25; // Default Pomodoro work time
pub const POMODORO_SHORT_BREAK_MINUTES: u64 = 5; // Default short break time
pub const POMODORO_LONG_BREAK_MINUTES: u64 = 15; // Default long break time
pub const LONG_BREAK_INTERVAL: u32 = 4; // Every 4th finished work phase earns a long break

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Working,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Phase::Working => "WORK",
            Phase::ShortBreak => "SHORT BREAK",
            Phase::LongBreak => "LONG BREAK",
        }
    }

    pub(crate) fn emoji(&self) -> &str {
        match self {
            Phase::Working => "💼",
            Phase::ShortBreak => "☕",
            Phase::LongBreak => "🌴",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, Phase::Working)
    }
}
