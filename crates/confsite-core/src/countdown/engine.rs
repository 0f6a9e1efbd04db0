//! Repeating countdown ticker
//!
//! The engine recomputes [`TimeLeft`] on a fixed interval and publishes each
//! value on a `watch` channel. The running ticker is owned by a
//! [`CountdownHandle`]; stopping (or dropping) the handle halts it.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::TimeLeft;
use crate::clock::Clock;
use crate::config::ConferenceConfig;

/// Default refresh interval
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// One published countdown value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownTick {
    pub remaining: TimeLeft,
    /// True once the target instant has been reached
    pub elapsed: bool,
}

/// Computes the time left until a fixed target instant
#[derive(Clone)]
pub struct CountdownEngine {
    target: DateTime<Utc>,
    interval: Duration,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for CountdownEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountdownEngine")
            .field("target", &self.target)
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl CountdownEngine {
    /// Create an engine ticking once per second
    pub fn new(target: DateTime<Utc>, clock: Arc<dyn Clock>) -> Self {
        Self {
            target,
            interval: DEFAULT_TICK_INTERVAL,
            clock,
        }
    }

    /// Build an engine from the conference section of the site config
    pub fn from_config(config: &ConferenceConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(config.starts_at, clock).with_interval(config.tick_interval())
    }

    /// Builder method to change the tick interval.
    ///
    /// A zero interval is raised to one millisecond.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Compute the current value from the clock
    pub fn tick(&self) -> CountdownTick {
        let now = self.clock.now();
        CountdownTick {
            remaining: TimeLeft::between(now, self.target),
            elapsed: now >= self.target,
        }
    }

    /// Spawn the ticker on the current Tokio runtime.
    ///
    /// The first tick is published immediately; the ticker keeps running
    /// after the target has passed (publishing zeros) until stopped.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn start(&self) -> CountdownHandle {
        let (tick_tx, tick_rx) = watch::channel(self.tick());
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let engine = self.clone();

        info!(
            target_instant = %engine.target,
            interval_ms = engine.interval.as_millis() as u64,
            "Starting countdown"
        );

        let task = tokio::spawn(async move {
            let mut timer = tokio::time::interval(engine.interval);
            // A late tick is dropped rather than replayed in a burst
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = timer.tick() => {
                        let tick = engine.tick();
                        tick_tx.send_replace(tick);
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }

            debug!("Countdown ticker exited");
        });

        CountdownHandle {
            ticks: tick_rx,
            shutdown_tx,
            task: Some(task),
        }
    }
}

/// Owner of a running countdown ticker
#[derive(Debug)]
pub struct CountdownHandle {
    ticks: watch::Receiver<CountdownTick>,
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl CountdownHandle {
    /// Receiver notified on every tick
    pub fn subscribe(&self) -> watch::Receiver<CountdownTick> {
        self.ticks.clone()
    }

    /// Most recently published value
    pub fn latest(&self) -> CountdownTick {
        *self.ticks.borrow()
    }

    pub fn is_running(&self) -> bool {
        !*self.shutdown_tx.borrow()
            && self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Halt the ticker. Returns false if it was already stopped.
    ///
    /// At most the tick already in flight completes after this returns.
    pub fn stop(&mut self) -> bool {
        if *self.shutdown_tx.borrow() {
            return false;
        }
        self.shutdown_tx.send_replace(true);
        if let Some(task) = &self.task {
            task.abort();
        }
        info!("Stopped countdown");
        true
    }

    /// Wait for the ticker task to finish. Call after [`stop`](Self::stop).
    pub async fn stopped(&mut self) {
        if let Some(task) = self.task.take() {
            // Cancellation is the expected outcome of abort()
            let _ = task.await;
        }
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::TimeZone;

    fn start_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_tick_before_target() {
        let clock = Arc::new(ManualClock::new(start_instant()));
        let engine = CountdownEngine::new(start_instant() + chrono::Duration::days(1), clock);
        let tick = engine.tick();
        assert_eq!(tick.remaining.days, 1);
        assert!(!tick.elapsed);
    }

    #[test]
    fn test_tick_after_target() {
        let clock = Arc::new(ManualClock::new(start_instant()));
        let engine = CountdownEngine::new(start_instant(), clock.clone());
        clock.advance(chrono::Duration::hours(5));
        let tick = engine.tick();
        assert!(tick.remaining.is_zero());
        assert!(tick.elapsed);
    }

    #[test]
    fn test_zero_interval_raised() {
        let clock = Arc::new(ManualClock::new(start_instant()));
        let engine = CountdownEngine::new(start_instant(), clock).with_interval(Duration::ZERO);
        assert_eq!(engine.interval(), Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let clock = Arc::new(ManualClock::new(start_instant()));
        let engine = CountdownEngine::new(start_instant() + chrono::Duration::seconds(10), clock);
        let mut handle = engine.start();
        assert!(handle.is_running());

        assert!(handle.stop());
        assert!(!handle.stop());
        handle.stopped().await;
        assert!(!handle.is_running());
    }
}
