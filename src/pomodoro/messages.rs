use rand::seq::IndexedRandom;

pub const LONG_BREAK_MESSAGES: [&str; 4] = [
    "Facing the sea, spring flowers bloom.",
    "Hold on to what you have, let go of what you cannot reach.",
    "The bright moon shines between the pines, clear springs flow over the stones.",
    "At sunrise the river flowers outshine fire; in spring the water turns blue as indigo.",
];

pub const COMPLETION_MESSAGE: &str = "Congratulations, you finished a pomodoro! Take a break.";
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers!";

pub const HELP_MESSAGE: &str = "Pomodoro guide:\n\n\
1. Set the work, short break and long break durations.\n\
2. Press Start to begin the countdown.\n\
3. When a work phase ends you hear a ding and see a completion message.\n\
4. Use Pause/Resume to stop and continue the countdown.\n\
5. Every four pomodoros you get a long break.";

/// Repeats are allowed; the pick has no bearing on timing.
pub fn random_long_break_message() -> &'static str {
    LONG_BREAK_MESSAGES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(LONG_BREAK_MESSAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pick_comes_from_the_fixed_set() {
        for _ in 0..32 {
            assert!(LONG_BREAK_MESSAGES.contains(&random_long_break_message()));
        }
    }
}
