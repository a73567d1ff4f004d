use notify_rust::Notification;
use std::io::{self, Write};
use std::thread;
use tracing::{debug, warn};

const NOTIFICATION_SUMMARY: &str = "Pomodoro - Task complete";

/// Where completion feedback goes: an audible cue and a completion dialog.
pub trait NotificationSink {
    fn play_cue(&mut self);
    fn show_completion_dialog(&mut self, message: &str);
}

/// Terminal bell plus a desktop notification.
#[derive(Debug, Clone, Copy)]
pub struct DesktopNotifier {
    enabled: bool,
}

impl DesktopNotifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new(true)
    }
}

impl NotificationSink for DesktopNotifier {
    fn play_cue(&mut self) {
        if !self.enabled {
            return;
        }
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            debug!("failed to ring terminal bell: {e}");
        }
    }

    fn show_completion_dialog(&mut self, message: &str) {
        if !self.enabled {
            return;
        }
        let body = message.to_string();
        // D-Bus delivery can block; keep it off the tick loop.
        thread::spawn(move || {
            if let Err(e) = send_notification(&body) {
                warn!("Failed to send notification: {e}");
            }
        });
    }
}

fn send_notification(message: &str) -> Result<(), Box<dyn std::error::Error>> {
    Notification::new()
        .summary(NOTIFICATION_SUMMARY)
        .body(message)
        .appname("pomodoro")
        .timeout(0) // No auto-dismiss
        .show()?;
    Ok(())
}

/// Remembers every cue and dialog instead of emitting them.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub cues: usize,
    pub dialogs: Vec<String>,
}

#[cfg(test)]
impl NotificationSink for RecordingSink {
    fn play_cue(&mut self) {
        self.cues += 1;
    }

    fn show_completion_dialog(&mut self, message: &str) {
        self.dialogs.push(message.to_string());
    }
}
