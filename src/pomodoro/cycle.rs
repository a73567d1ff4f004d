//! The phase cycle: work, short break, work, ... with a long break after every
//! fourth finished work phase.
//!
//! [`PhaseCycle`] is a plain state machine. It never sleeps; a driver calls
//! [`PhaseCycle::tick`] once per scheduler tick and reacts to the returned
//! [`Tick`]. Pausing is a flag check inside `tick`, so resuming continues from
//! the exact remaining value and the active phase is never lost.

use tracing::{debug, info};

use super::phase::{LONG_BREAK_INTERVAL, Phase};
use crate::config::PhaseDurations;

/// Remaining seconds of the active phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
}

impl Countdown {
    pub fn new(remaining: u64) -> Self {
        Self { remaining }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Steps one second down. Returns `true` on the step that lands on zero,
    /// or when the countdown was already exhausted.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

/// Emitted when the active phase runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub finished: Phase,
    pub next: Phase,
    pub completed: u32,
}

impl PhaseChange {
    pub fn finished_work(&self) -> bool {
        self.finished == Phase::Working
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still inside the same phase.
    Counted { remaining: u64 },
    /// Paused; nothing moved.
    Paused,
    Completed(PhaseChange),
}

/// Phase that follows `finished`, given the count of finished work phases
/// including the one that just ended.
pub fn next_phase(finished: Phase, completed: u32) -> Phase {
    match finished {
        Phase::Working if completed > 0 && completed % LONG_BREAK_INTERVAL == 0 => {
            Phase::LongBreak
        }
        Phase::Working => Phase::ShortBreak,
        Phase::ShortBreak | Phase::LongBreak => Phase::Working,
    }
}

#[derive(Debug, Clone)]
pub struct PhaseCycle {
    durations: PhaseDurations,
    phase: Phase,
    countdown: Countdown,
    completed: u32,
    paused: bool,
}

impl PhaseCycle {
    pub fn new(durations: PhaseDurations) -> Self {
        Self::with_completed(durations, 0)
    }

    /// Starts a fresh work phase while keeping an earlier completed count.
    pub fn with_completed(durations: PhaseDurations, completed: u32) -> Self {
        Self {
            durations,
            phase: Phase::Working,
            countdown: Countdown::new(durations.for_phase(Phase::Working)),
            completed,
            paused: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> u64 {
        self.countdown.remaining()
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn durations(&self) -> PhaseDurations {
        self.durations
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!(paused, remaining = self.remaining(), "pause state changed");
        }
        self.paused = paused;
    }

    /// Flips the pause flag and returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    pub fn tick(&mut self) -> Tick {
        if self.paused {
            return Tick::Paused;
        }
        if !self.countdown.tick() {
            return Tick::Counted {
                remaining: self.countdown.remaining(),
            };
        }

        let finished = self.phase;
        if finished == Phase::Working {
            self.completed = self.completed.saturating_add(1);
        }
        let next = next_phase(finished, self.completed);
        self.phase = next;
        self.countdown = Countdown::new(self.durations.for_phase(next));
        info!(
            finished = finished.as_str(),
            next = next.as_str(),
            completed = self.completed,
            "phase complete"
        );
        Tick::Completed(PhaseChange {
            finished,
            next,
            completed: self.completed,
        })
    }
}

/// Unending sequence of `(phase, seconds)` pairs a cycle runs through.
#[derive(Debug, Clone)]
pub struct Schedule {
    durations: PhaseDurations,
    upcoming: Phase,
    completed: u32,
}

impl Schedule {
    pub fn new(durations: PhaseDurations) -> Self {
        Self {
            durations,
            upcoming: Phase::Working,
            completed: 0,
        }
    }
}

impl Iterator for Schedule {
    type Item = (Phase, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let phase = self.upcoming;
        if phase == Phase::Working {
            self.completed = self.completed.saturating_add(1);
        }
        self.upcoming = next_phase(phase, self.completed);
        Some((phase, self.durations.for_phase(phase)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn one_second_each() -> PhaseDurations {
        PhaseDurations::from_secs(1, 1, 1)
    }

    fn finish_phase(cycle: &mut PhaseCycle) -> PhaseChange {
        loop {
            if let Tick::Completed(change) = cycle.tick() {
                return change;
            }
        }
    }

    #[test]
    fn countdown_stays_at_zero() {
        let mut countdown = Countdown::new(1);
        assert!(countdown.tick());
        assert!(countdown.tick());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn breaks_follow_work_in_short_short_short_long_order() {
        let mut cycle = PhaseCycle::new(one_second_each());
        let mut breaks = Vec::new();
        for _ in 0..5 {
            let work = finish_phase(&mut cycle);
            assert!(work.finished_work());
            breaks.push(work.next);
            let rest = finish_phase(&mut cycle);
            assert_eq!(rest.next, Phase::Working);
        }
        assert_eq!(
            breaks,
            vec![
                Phase::ShortBreak,
                Phase::ShortBreak,
                Phase::ShortBreak,
                Phase::LongBreak,
                Phase::ShortBreak,
            ]
        );
    }

    #[test]
    fn full_round_of_four_pomodoros_ends_in_long_break() {
        let mut cycle = PhaseCycle::new(one_second_each());
        let mut last_break = None;
        for _ in 0..4 {
            finish_phase(&mut cycle);
            last_break = Some(cycle.phase());
            finish_phase(&mut cycle);
        }
        assert_eq!(cycle.completed(), 4);
        assert_eq!(last_break, Some(Phase::LongBreak));
        assert_eq!(cycle.phase(), Phase::Working);
    }

    #[test]
    fn only_work_completion_advances_the_count() {
        let mut cycle = PhaseCycle::new(PhaseDurations::from_secs(2, 3, 4));
        assert_eq!(cycle.tick(), Tick::Counted { remaining: 1 });
        let change = finish_phase(&mut cycle);
        assert_eq!(change.completed, 1);
        assert_eq!(cycle.remaining(), 3);

        finish_phase(&mut cycle);
        assert_eq!(cycle.completed(), 1);
        assert_eq!(cycle.phase(), Phase::Working);
        assert_eq!(cycle.remaining(), 2);
    }

    #[test]
    fn paused_cycle_does_not_move() {
        let mut cycle = PhaseCycle::new(PhaseDurations::from_secs(1, 5, 5));
        cycle.set_paused(true);
        for _ in 0..10 {
            assert_eq!(cycle.tick(), Tick::Paused);
        }
        assert_eq!(cycle.remaining(), 1);
        assert_eq!(cycle.phase(), Phase::Working);
        assert_eq!(cycle.completed(), 0);
    }

    #[test]
    fn resuming_keeps_the_break_phase() {
        let mut cycle = PhaseCycle::new(PhaseDurations::from_secs(1, 10, 20));
        finish_phase(&mut cycle);
        cycle.tick();
        assert_eq!(cycle.phase(), Phase::ShortBreak);
        assert_eq!(cycle.remaining(), 9);

        assert!(cycle.toggle_pause());
        cycle.tick();
        assert!(!cycle.toggle_pause());

        assert_eq!(cycle.phase(), Phase::ShortBreak);
        assert_eq!(cycle.tick(), Tick::Counted { remaining: 8 });
    }

    #[test]
    fn with_completed_carries_the_count_into_a_new_work_phase() {
        let mut cycle = PhaseCycle::with_completed(one_second_each(), 3);
        assert_eq!(cycle.phase(), Phase::Working);
        let change = finish_phase(&mut cycle);
        assert_eq!(change.completed, 4);
        assert_eq!(change.next, Phase::LongBreak);
    }

    #[test]
    fn schedule_lists_phases_with_their_durations() {
        let durations = PhaseDurations::from_secs(25, 5, 15);
        let phases: Vec<_> = Schedule::new(durations).take(9).collect();
        assert_eq!(
            phases,
            vec![
                (Phase::Working, 25),
                (Phase::ShortBreak, 5),
                (Phase::Working, 25),
                (Phase::ShortBreak, 5),
                (Phase::Working, 25),
                (Phase::ShortBreak, 5),
                (Phase::Working, 25),
                (Phase::LongBreak, 15),
                (Phase::Working, 25),
            ]
        );
    }

    #[test]
    fn next_phase_rule() {
        assert_eq!(next_phase(Phase::Working, 1), Phase::ShortBreak);
        assert_eq!(next_phase(Phase::Working, 4), Phase::LongBreak);
        assert_eq!(next_phase(Phase::Working, 8), Phase::LongBreak);
        assert_eq!(next_phase(Phase::Working, 0), Phase::ShortBreak);
        assert_eq!(next_phase(Phase::LongBreak, 4), Phase::Working);
        assert_eq!(next_phase(Phase::ShortBreak, 3), Phase::Working);
    }

    proptest! {
        #[test]
        fn countdown_reaches_zero_exactly_once(remaining in 1u64..2_000) {
            let mut countdown = Countdown::new(remaining);
            let expirations = (0..remaining).filter(|_| countdown.tick()).count();
            prop_assert_eq!(countdown.remaining(), 0);
            prop_assert_eq!(expirations, 1);
        }

        #[test]
        fn phase_lasts_exactly_its_duration(work in 1u64..300, short_break in 1u64..300) {
            let mut cycle = PhaseCycle::new(PhaseDurations::from_secs(work, short_break, 1));
            let completions = (0..work)
                .filter(|_| matches!(cycle.tick(), Tick::Completed(_)))
                .count();
            prop_assert_eq!(completions, 1);
            prop_assert_eq!(cycle.phase(), Phase::ShortBreak);
            prop_assert_eq!(cycle.remaining(), short_break);
        }

        #[test]
        fn pause_then_resume_without_ticks_changes_nothing(work in 1u64..600, steps in 0u64..600) {
            let mut cycle = PhaseCycle::new(PhaseDurations::from_secs(work, 5, 15));
            for _ in 0..steps {
                cycle.tick();
            }
            let before = (cycle.phase(), cycle.remaining(), cycle.completed());
            cycle.set_paused(true);
            cycle.set_paused(false);
            prop_assert_eq!((cycle.phase(), cycle.remaining(), cycle.completed()), before);
        }
    }
}
