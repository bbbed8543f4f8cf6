//! `FrameScheduler`: fixed-rate stepping with frame skipping.
//!
//! The host reports a timestamp per refresh callback; the scheduler decides
//! whether enough time has passed for the next step at the target
//! [`FrameRate`], so the swarm moves at the same speed on any refresh rate.
//!
//! It is a plain state machine with no clock of its own, so tests drive it
//! with synthetic timestamps.

use std::time::Duration;

use swarm_core::FrameRate;

use crate::ScheduleResult;

/// What the caller should do with one host callback.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FrameDecision {
    /// Run exactly one simulation step.
    Step,
    /// Too soon since the previous step; do nothing.
    Skip,
    /// The scheduler is deactivated; do nothing.
    Inactive,
}

/// Fixed-rate step scheduler bound to a host callback stream.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
    interval:  Duration,
    active:    bool,
    /// Timing baseline.  `None` until the first callback after activation.
    last_step: Option<Duration>,
    steps:     u64,
    skipped:   u64,
}

impl FrameScheduler {
    /// Build an active scheduler for `rate`.
    pub fn new(rate: FrameRate) -> Self {
        Self {
            interval:  rate.interval(),
            active:    true,
            last_step: None,
            steps:     0,
            skipped:   0,
        }
    }

    /// Build an active scheduler from a raw steps-per-second value.
    pub fn with_steps_per_second(steps_per_second: f64) -> ScheduleResult<Self> {
        Ok(Self::new(FrameRate::new(steps_per_second)?))
    }

    /// Change the target rate.  The timing baseline is kept.
    pub fn set_rate(&mut self, rate: FrameRate) {
        self.interval = rate.interval();
    }

    /// Minimum host time between steps.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Resume stepping.  The next callback steps immediately and becomes the
    /// new timing baseline; time spent inactive is not made up.
    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.last_step = None;
        }
    }

    /// Stop stepping.  Nothing is queued; later callbacks return
    /// [`FrameDecision::Inactive`] until [`activate`](Self::activate).
    pub fn deactivate(&mut self) {
        self.active = false;
        self.last_step = None;
    }

    pub fn set_active(&mut self, active: bool) {
        if active { self.activate() } else { self.deactivate() }
    }

    /// Steps granted since construction.
    #[inline]
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// Active callbacks answered with [`FrameDecision::Skip`].
    #[inline]
    pub fn frames_skipped(&self) -> u64 {
        self.skipped
    }

    /// Decide what to do with the host callback at `now`.
    ///
    /// `now` is a monotonic timestamp from an arbitrary origin (as an
    /// animation-frame callback provides).  A timestamp earlier than the
    /// baseline resets the baseline and skips.
    pub fn on_frame(&mut self, now: Duration) -> FrameDecision {
        if !self.active {
            return FrameDecision::Inactive;
        }

        let Some(last) = self.last_step else {
            self.last_step = Some(now);
            self.steps += 1;
            return FrameDecision::Step;
        };

        if now < last {
            self.last_step = Some(now);
            self.skipped += 1;
            return FrameDecision::Skip;
        }

        let elapsed = now - last;
        if elapsed < self.interval {
            self.skipped += 1;
            return FrameDecision::Skip;
        }

        // Missed intervals are dropped, not replayed.
        self.last_step = Some(now);
        self.steps += 1;
        FrameDecision::Step
    }
}
