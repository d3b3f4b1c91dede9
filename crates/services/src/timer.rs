use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Monotonic one-second countdown.
///
/// `start` schedules a tick every wall-clock second: `on_tick` receives
/// the remaining count after each decrement (`N-1`, `N-2`, ..., `0`)
/// and `on_expire` fires exactly once when the count reaches zero,
/// after which ticking stops on its own. A zero duration expires
/// immediately without ticking.
///
/// There is never more than one schedule per instance: starting again
/// replaces the previous one, and `stop` is an idempotent halt. There
/// is no pause/resume; a countdown runs until stop or expiry.
#[derive(Debug, Default)]
pub struct CountdownTimer {
    handle: Option<JoinHandle<()>>,
}

impl CountdownTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting down from `duration_seconds`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<T, E>(&mut self, duration_seconds: u32, mut on_tick: T, on_expire: E)
    where
        T: FnMut(u32) + Send + 'static,
        E: FnOnce() + Send + 'static,
    {
        self.stop();

        if duration_seconds == 0 {
            on_expire();
            return;
        }

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;

            let mut remaining = duration_seconds;
            loop {
                interval.tick().await;
                remaining -= 1;
                on_tick(remaining);
                if remaining == 0 {
                    break;
                }
            }
            on_expire();
        });
        self.handle = Some(handle);
    }

    /// Halt the countdown. Calling this when already stopped is a no-op.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// True while a schedule may still fire.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
