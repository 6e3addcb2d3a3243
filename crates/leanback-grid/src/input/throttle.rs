//! Rate limiting of vertical repeat input.
//!
//! Holding Up or Down on a remote produces key repeats faster than a scroll
//! animation can finish. The throttle accepts the first vertical move of a
//! burst and swallows every further one until the window since the last
//! accepted move has elapsed. Horizontal moves and activation pass through.

use std::time::{Duration, Instant};

use leanback_grid_core::logging::targets;

use crate::model::Direction;

/// Default throttle window.
pub const DEFAULT_THROTTLE_WINDOW: Duration = Duration::from_millis(300);

/// Timing gate for vertical moves.
#[derive(Debug, Clone)]
pub struct InputThrottle {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Default for InputThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_WINDOW)
    }
}

impl InputThrottle {
    /// Create a throttle with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// The throttle window.
    #[inline]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Decide whether a move in `direction` at `now` goes through.
    ///
    /// An accepted vertical move restarts the window.
    pub fn accept(&mut self, direction: Direction, now: Instant) -> bool {
        if !direction.is_vertical() {
            return true;
        }

        if let Some(last) = self.last_accepted {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < self.window {
                tracing::trace!(
                    target: targets::INPUT,
                    ?direction,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "vertical move throttled"
                );
                return false;
            }
        }

        self.last_accepted = Some(now);
        true
    }

    /// Forget the last accepted move.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
