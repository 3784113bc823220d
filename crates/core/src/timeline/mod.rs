use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::{Result, ShowcaseError};

/// Monotonic wall clock used by real-time drivers. Each [`PlaybackClock::lap`]
/// yields the time elapsed since the previous lap, which is what the
/// schedulers below consume.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    started: Instant,
    last_lap: Instant,
}

impl PlaybackClock {
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_lap: now,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last_lap);
        self.last_lap = now;
        delta
    }
}

/// Upper bound on intervals reported by one [`AutoplayScheduler::advance`]
/// call. Whole intervals beyond it stay pending for the next call.
pub const MAX_FIRES_PER_ADVANCE: u32 = 10_000;

/// Lifecycle of an [`AutoplayScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerStatus {
    Idle,
    Running,
    Paused,
    Stopped,
}

/// Fixed-interval ticker driven by elapsed time.
///
/// The scheduler owns no OS timer. Callers feed it elapsed time through
/// [`AutoplayScheduler::advance`] and receive the number of intervals that
/// completed while it was running, so pausing or stopping takes effect
/// before the call returns.
#[derive(Debug)]
pub struct AutoplayScheduler {
    interval: Option<Duration>,
    elapsed: Duration,
    status: SchedulerStatus,
}

impl Default for AutoplayScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoplayScheduler {
    pub fn new() -> Self {
        Self {
            interval: None,
            elapsed: Duration::ZERO,
            status: SchedulerStatus::Idle,
        }
    }

    pub fn status(&self) -> SchedulerStatus {
        self.status
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.status == SchedulerStatus::Running
    }

    /// Begins firing every `interval`. Calling it again while running or
    /// paused only updates the interval; the accumulated time is kept.
    pub fn start(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(ShowcaseError::invalid_config(
                "autoplay interval must be positive",
            ));
        }

        match self.status {
            SchedulerStatus::Stopped => {
                return Err(ShowcaseError::msg("autoplay scheduler has been stopped"))
            }
            SchedulerStatus::Idle => {
                self.elapsed = Duration::ZERO;
                self.status = SchedulerStatus::Running;
                debug!(interval_ms = interval.as_millis() as u64, "autoplay started");
            }
            SchedulerStatus::Running | SchedulerStatus::Paused => {}
        }
        self.interval = Some(interval);
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.status == SchedulerStatus::Running {
            self.status = SchedulerStatus::Paused;
            debug!("autoplay paused");
        }
    }

    /// Resumes a paused scheduler. The next fire happens one full interval
    /// from now; time accumulated before the pause is discarded.
    pub fn resume(&mut self) {
        if self.status == SchedulerStatus::Paused {
            self.elapsed = Duration::ZERO;
            self.status = SchedulerStatus::Running;
            debug!("autoplay resumed");
        }
    }

    /// Restarts the current interval without changing the status.
    pub fn restart_interval(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Cancels the scheduler for good. Later calls to `start` fail and
    /// `advance` never fires again.
    pub fn stop(&mut self) {
        if self.status != SchedulerStatus::Stopped {
            self.status = SchedulerStatus::Stopped;
            self.elapsed = Duration::ZERO;
            debug!("autoplay stopped");
        }
    }

    /// Feeds `delta` of elapsed time and returns how many intervals fired,
    /// at most [`MAX_FIRES_PER_ADVANCE`]. Elapsed time saturates rather than
    /// overflowing.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        let Some(interval) = self.interval else {
            return 0;
        };
        if self.status != SchedulerStatus::Running {
            return 0;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        let due = self.elapsed.as_nanos() / interval.as_nanos();
        let fires = u32::try_from(due)
            .unwrap_or(u32::MAX)
            .min(MAX_FIRES_PER_ADVANCE);
        self.elapsed = self
            .elapsed
            .saturating_sub(interval.saturating_mul(fires));

        if fires > 0 {
            trace!(fires, pending = (due - u128::from(fires)) as u64, "autoplay tick");
        }
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_SECONDS: Duration = Duration::from_millis(5_000);

    fn running() -> AutoplayScheduler {
        let mut scheduler = AutoplayScheduler::new();
        scheduler.start(FIVE_SECONDS).unwrap();
        scheduler
    }

    #[test]
    fn fires_once_per_interval() {
        let mut scheduler = running();
        assert_eq!(scheduler.advance(Duration::from_millis(4_999)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(scheduler.advance(Duration::from_millis(15_000)), 3);
        assert_eq!(scheduler.advance(Duration::from_millis(2_500)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(2_500)), 1);
    }

    #[test]
    fn huge_delta_saturates_instead_of_panicking() {
        let mut scheduler = running();
        assert_eq!(scheduler.advance(Duration::from_millis(2_500)), 0);
        assert_eq!(scheduler.advance(Duration::MAX), MAX_FIRES_PER_ADVANCE);
        assert_eq!(scheduler.advance(Duration::MAX), MAX_FIRES_PER_ADVANCE);
    }

    #[test]
    fn intervals_beyond_the_cap_stay_pending() {
        let mut scheduler = AutoplayScheduler::new();
        scheduler.start(Duration::from_millis(1)).unwrap();

        let mut total = u64::from(scheduler.advance(Duration::from_micros(100_000_500)));
        assert_eq!(total, u64::from(MAX_FIRES_PER_ADVANCE));
        for _ in 0..20 {
            total += u64::from(scheduler.advance(Duration::ZERO));
        }
        assert_eq!(total, 100_000);
        assert_eq!(scheduler.advance(Duration::from_micros(500)), 1);
    }

    #[test]
    fn idle_scheduler_never_fires() {
        let mut scheduler = AutoplayScheduler::new();
        assert_eq!(scheduler.advance(Duration::from_secs(60)), 0);
        assert_eq!(scheduler.status(), SchedulerStatus::Idle);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut scheduler = AutoplayScheduler::new();
        let err = scheduler.start(Duration::ZERO).unwrap_err();
        assert!(matches!(err, ShowcaseError::InvalidConfiguration(_)));
        assert_eq!(scheduler.status(), SchedulerStatus::Idle);
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut scheduler = running();
        scheduler.advance(Duration::from_millis(3_000));
        scheduler.start(FIVE_SECONDS).unwrap();
        assert_eq!(scheduler.advance(Duration::from_millis(2_000)), 1);
    }

    #[test]
    fn paused_scheduler_does_not_fire() {
        let mut scheduler = running();
        scheduler.advance(Duration::from_millis(4_000));
        scheduler.pause();
        assert_eq!(scheduler.advance(Duration::from_millis(15_000)), 0);
        assert_eq!(scheduler.status(), SchedulerStatus::Paused);
    }

    #[test]
    fn resume_starts_a_fresh_interval() {
        let mut scheduler = running();
        scheduler.advance(Duration::from_millis(4_000));
        scheduler.pause();
        scheduler.resume();
        assert_eq!(scheduler.advance(Duration::from_millis(4_000)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1_000)), 1);
    }

    #[test]
    fn stopped_scheduler_is_not_reusable() {
        let mut scheduler = running();
        scheduler.stop();
        assert_eq!(scheduler.advance(Duration::from_secs(60)), 0);
        scheduler.resume();
        assert_eq!(scheduler.status(), SchedulerStatus::Stopped);
        assert!(scheduler.start(FIVE_SECONDS).is_err());
    }

    #[test]
    fn playback_clock_laps_are_monotonic() {
        let mut clock = PlaybackClock::start();
        let lap = clock.lap();
        assert!(clock.elapsed() >= lap);
    }
}
