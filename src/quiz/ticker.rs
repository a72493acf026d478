//! Countdown tick sources
//!
//! The session never sleeps or spawns timers itself. It arms and cancels a
//! [`Ticker`] and the driver feeds elapsed ticks back through
//! `QuizSession::on_timer_tick`, which keeps the state machine deterministic
//! under test.

use std::time::{Duration, Instant};

/// A cancellable repeating tick owned by a quiz session
pub trait Ticker {
    /// Start ticking every `period`, replacing any earlier schedule
    fn arm(&mut self, period: Duration);
    /// Stop ticking
    fn cancel(&mut self);
    /// Whether a schedule is active
    fn is_armed(&self) -> bool;
}

/// Hand-driven ticker that records how it was armed and cancelled
#[derive(Debug, Default, Clone)]
pub struct ManualTicker {
    active: usize,
    peak_active: usize,
    arms: usize,
    cancels: usize,
    period: Option<Duration>,
}

impl ManualTicker {
    /// Create an idle ticker
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of schedules currently running
    pub fn active(&self) -> usize {
        self.active
    }

    /// Highest number of schedules that ever ran at once
    pub fn peak_active(&self) -> usize {
        self.peak_active
    }

    /// Number of `arm` calls
    pub fn arms(&self) -> usize {
        self.arms
    }

    /// Number of `cancel` calls that stopped a running schedule
    pub fn cancels(&self) -> usize {
        self.cancels
    }

    /// Period of the last arm
    pub fn period(&self) -> Option<Duration> {
        self.period
    }
}

impl Ticker for ManualTicker {
    fn arm(&mut self, period: Duration) {
        // Arming on top of a live schedule stacks a second one.
        self.active += 1;
        self.arms += 1;
        self.period = Some(period);
        self.peak_active = self.peak_active.max(self.active);
    }

    fn cancel(&mut self) {
        if self.active > 0 {
            self.active -= 1;
            self.cancels += 1;
        }
    }

    fn is_armed(&self) -> bool {
        self.active > 0
    }
}

/// Wall-clock deadline ticker for polling event loops
#[derive(Debug, Clone)]
pub struct ClockTicker {
    period: Duration,
    next_due: Option<Instant>,
}

impl ClockTicker {
    /// Create a disarmed ticker
    pub fn new() -> Self {
        Self {
            period: crate::TICK_PERIOD,
            next_due: None,
        }
    }

    /// Arm relative to an explicit instant
    pub fn arm_at(&mut self, now: Instant, period: Duration) {
        self.period = period;
        self.next_due = Some(now + period);
    }

    /// Number of whole periods elapsed since the last call, consuming them
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due || self.period.is_zero() {
            return 0;
        }

        let overdue = now.duration_since(due);
        let behind = overdue.as_nanos() / self.period.as_nanos();
        let count = u32::try_from(behind).unwrap_or(u32::MAX).saturating_add(1);
        self.next_due = Some(due + self.period * count);
        count
    }

    /// Time until the next tick is due, or `None` when disarmed
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

impl Default for ClockTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker for ClockTicker {
    fn arm(&mut self, period: Duration) {
        self.arm_at(Instant::now(), period);
    }

    fn cancel(&mut self) {
        self.next_due = None;
    }

    fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }
}

/// Tokio interval ticker for async drivers
#[derive(Debug, Default)]
pub struct IntervalTicker {
    interval: Option<tokio::time::Interval>,
}

impl IntervalTicker {
    /// Create a disarmed ticker
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the next tick. Never resolves while disarmed.
    ///
    /// Cancel safe, so it can sit in a `tokio::select!` next to input.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Ticker for IntervalTicker {
    fn arm(&mut self, period: Duration) {
        let start = tokio::time::Instant::now() + period;
        self.interval = Some(tokio::time::interval_at(start, period));
    }

    fn cancel(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }
}
