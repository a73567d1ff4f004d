//! Command-line mode: one status line per tick, rewritten in place.

use chrono::Local;
use std::io::{self, Write};
use tracing::info;

use crate::notify::NotificationSink;
use crate::pomodoro::clock_face::format_remaining;
use crate::pomodoro::cycle::{PhaseChange, PhaseCycle, Tick};
use crate::pomodoro::messages::{COMPLETION_MESSAGE, random_long_break_message};
use crate::pomodoro::phase::{LONG_BREAK_INTERVAL, Phase};
use crate::runtime::{self, Shutdown};

pub struct Console<W, S> {
    out: W,
    sink: S,
}

impl<W: Write, S: NotificationSink> Console<W, S> {
    pub fn new(out: W, sink: S) -> Self {
        Self { out, sink }
    }

    pub fn into_parts(self) -> (W, S) {
        (self.out, self.sink)
    }

    /// Drives `cycle` until `shutdown` fires. Returns the number of work
    /// phases finished during the run.
    pub async fn run(&mut self, cycle: &mut PhaseCycle, shutdown: &mut Shutdown) -> io::Result<u32> {
        let started_with = cycle.completed();
        let mut ticker = runtime::ticker().await;

        self.announce_work(cycle)?;
        self.print_status(cycle)?;

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    match cycle.tick() {
                        Tick::Counted { .. } => {}
                        Tick::Paused => continue,
                        Tick::Completed(change) => self.on_phase_change(cycle, change)?,
                    }
                    self.print_status(cycle)?;
                }
            }
        }

        let finished = cycle.completed() - started_with;
        writeln!(self.out)?;
        writeln!(self.out, "INFO Received interrupt signal, exiting.")?;
        writeln!(self.out, "INFO Pomodoros completed this session: {}", finished)?;
        self.out.flush()?;
        info!(finished, "console run cancelled");
        Ok(finished)
    }

    fn on_phase_change(&mut self, cycle: &PhaseCycle, change: PhaseChange) -> io::Result<()> {
        writeln!(self.out)?;
        self.log_line(&format!(
            "Switched from {} to {} mode",
            change.finished.as_str(),
            change.next.as_str()
        ))?;

        if change.finished_work() {
            writeln!(self.out, "INFO Work done, take a break!")?;
            writeln!(self.out, "INFO Press Ctrl+C to exit the pomodoro clock")?;
            self.sink.play_cue();
            self.sink.show_completion_dialog(COMPLETION_MESSAGE);
        }

        let durations = cycle.durations();
        match change.next {
            Phase::LongBreak => {
                writeln!(
                    self.out,
                    "INFO {} pomodoros have passed, take a long break! Duration {} minutes.",
                    LONG_BREAK_INTERVAL,
                    durations.minutes(Phase::LongBreak)
                )?;
                writeln!(self.out, "{}", random_long_break_message())?;
            }
            Phase::ShortBreak => {
                writeln!(
                    self.out,
                    "INFO Short break, duration {} minutes.",
                    durations.minutes(Phase::ShortBreak)
                )?;
            }
            Phase::Working => self.announce_work(cycle)?,
        }
        Ok(())
    }

    fn announce_work(&mut self, cycle: &PhaseCycle) -> io::Result<()> {
        writeln!(self.out, "INFO Welcome to the pomodoro clock!")?;
        writeln!(
            self.out,
            "INFO Starting work, duration {} minutes.",
            cycle.durations().minutes(Phase::Working)
        )?;
        writeln!(self.out, "INFO Press Ctrl+C to exit the pomodoro clock")
    }

    fn print_status(&mut self, cycle: &PhaseCycle) -> io::Result<()> {
        let phase = cycle.phase();
        write!(
            self.out,
            "\r{} {} {} remaining ",
            phase.emoji(),
            phase.as_str(),
            format_remaining(cycle.remaining())
        )?;
        self.out.flush()
    }

    fn log_line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "[{}] {}", Local::now().format("%H:%M:%S"), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhaseDurations;
    use crate::notify::RecordingSink;
    use crate::pomodoro::messages::LONG_BREAK_MESSAGES;
    use crate::runtime::shutdown_channel;
    use tokio::time::{Duration, sleep};

    fn cancel_after(millis: u64) -> Shutdown {
        let (handle, shutdown) = shutdown_channel();
        tokio::spawn(async move {
            sleep(Duration::from_millis(millis)).await;
            handle.trigger();
        });
        shutdown
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_mid_countdown_stops_ticking() {
        let mut cycle = PhaseCycle::new(PhaseDurations::default());
        let mut shutdown = cancel_after(4_500);
        let mut console = Console::new(Vec::new(), RecordingSink::default());

        let finished = console.run(&mut cycle, &mut shutdown).await.unwrap();
        let (out, sink) = console.into_parts();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(finished, 0);
        assert_eq!(cycle.remaining(), 25 * 60 - 4);
        assert_eq!(out.matches('\r').count(), 5);
        assert!(out.contains("WORK 24:56 remaining"));
        assert!(out.trim_end().ends_with("Pomodoros completed this session: 0"));
        assert_eq!(sink.cues, 0);

        // Nothing keeps ticking once the run returned.
        sleep(Duration::from_secs(10)).await;
        assert_eq!(cycle.remaining(), 25 * 60 - 4);
    }

    #[tokio::test(start_paused = true)]
    async fn four_pomodoros_lead_to_one_long_break() {
        let mut cycle = PhaseCycle::new(PhaseDurations::from_secs(1, 1, 1));
        let mut shutdown = cancel_after(8_500);
        let mut console = Console::new(Vec::new(), RecordingSink::default());

        let finished = console.run(&mut cycle, &mut shutdown).await.unwrap();
        let (out, sink) = console.into_parts();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(finished, 4);
        assert_eq!(cycle.completed(), 4);
        assert_eq!(cycle.phase(), Phase::Working);
        assert_eq!(out.matches("to LONG BREAK mode").count(), 1);
        assert_eq!(out.matches("to SHORT BREAK mode").count(), 3);
        assert_eq!(
            LONG_BREAK_MESSAGES
                .iter()
                .filter(|message| out.contains(*message))
                .count(),
            1
        );
        assert_eq!(sink.cues, 4);
        assert_eq!(sink.dialogs, vec![COMPLETION_MESSAGE; 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn paused_cycle_prints_nothing_new() {
        let mut cycle = PhaseCycle::new(PhaseDurations::from_secs(3, 1, 1));
        cycle.set_paused(true);
        let mut shutdown = cancel_after(5_500);
        let mut console = Console::new(Vec::new(), RecordingSink::default());

        console.run(&mut cycle, &mut shutdown).await.unwrap();
        let (out, _) = console.into_parts();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(out.matches('\r').count(), 1);
        assert_eq!(cycle.remaining(), 3);
    }
}
