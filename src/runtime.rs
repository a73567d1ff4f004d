use tokio::sync::watch;
use tokio::time::{Duration, Interval, MissedTickBehavior, interval};
use tracing::{debug, warn};

use crate::pomodoro::phase::TICK_INTERVAL_MS;

/// Cancellation seen by a tick driver.
#[derive(Debug, Clone)]
pub struct Shutdown {
    receiver: watch::Receiver<bool>,
}

/// Trigger side of [`Shutdown`].
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    sender: watch::Sender<bool>,
}

pub fn shutdown_channel() -> (ShutdownHandle, Shutdown) {
    let (sender, receiver) = watch::channel(false);
    (ShutdownHandle { sender }, Shutdown { receiver })
}

impl ShutdownHandle {
    pub fn trigger(&self) {
        self.sender.send_replace(true);
    }
}

impl Shutdown {
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once a trigger fires. A dropped handle never cancels.
    pub async fn cancelled(&mut self) {
        if self.receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// One-second scheduler with its immediate first tick already consumed.
pub async fn ticker() -> Interval {
    let mut ticker = interval(Duration::from_millis(TICK_INTERVAL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;
    ticker
}

/// Turns the process interrupt signal into a shutdown trigger.
pub fn spawn_interrupt_listener(handle: ShutdownHandle) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                debug!("interrupt received");
                handle.trigger();
            }
            Err(e) => warn!("Failed to listen for interrupt signal: {e}"),
        }
    });
}
