//! The cancellable viewport scroll task.
//!
//! A [`ScrollAnimation`] is a plain value: it is created with a start and a
//! target offset, advanced by the host's frame ticks, and either runs to
//! completion or is cancelled. It keeps both the requested delta and the
//! delta actually applied to the viewport; reversals replay the applied one.

use std::time::{Duration, Instant};

use super::easing::{lerp_eased, Easing};

/// Result of advancing a scroll animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollProgress {
    /// The animation is still moving; `offset` is the viewport offset to show.
    Running {
        /// Current viewport offset.
        offset: f32,
    },
    /// The animation reached its target on this frame.
    Finished {
        /// Final viewport offset, exactly the target.
        offset: f32,
    },
}

impl ScrollProgress {
    /// The viewport offset for this frame.
    pub fn offset(&self) -> f32 {
        match *self {
            ScrollProgress::Running { offset } | ScrollProgress::Finished { offset } => offset,
        }
    }

    /// Whether the animation is done.
    pub fn is_finished(&self) -> bool {
        matches!(self, ScrollProgress::Finished { .. })
    }
}

/// An in-flight viewport scroll.
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    current: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
    finished: bool,
}

impl ScrollAnimation {
    /// Start an animation from `from` to `to` at `now`.
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing, now: Instant) -> Self {
        Self {
            from,
            to,
            current: from,
            started_at: now,
            duration,
            easing,
            finished: false,
        }
    }

    /// Offset the animation started from.
    #[inline]
    pub fn origin(&self) -> f32 {
        self.from
    }

    /// Offset the animation is heading to.
    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset applied by the most recent frame.
    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Delta the animation was asked to scroll.
    #[inline]
    pub fn requested_delta(&self) -> f32 {
        self.to - self.from
    }

    /// Delta applied to the viewport so far.
    #[inline]
    pub fn achieved_delta(&self) -> f32 {
        self.current - self.from
    }

    /// Whether the target has been reached.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance the animation to `now`.
    ///
    /// The last frame lands exactly on the target so repeated scrolls never
    /// accumulate rounding drift.
    pub fn tick(&mut self, now: Instant) -> ScrollProgress {
        if self.finished {
            return ScrollProgress::Finished {
                offset: self.current,
            };
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        let raw_progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        if raw_progress >= 1.0 {
            self.current = self.to;
            self.finished = true;
            return ScrollProgress::Finished { offset: self.to };
        }

        self.current = lerp_eased(self.easing, self.from, self.to, raw_progress);
        ScrollProgress::Running {
            offset: self.current,
        }
    }

    /// Stop the animation where it is and return the delta it achieved.
    pub fn cancel(&mut self) -> f32 {
        self.finished = true;
        self.achieved_delta()
    }
}
