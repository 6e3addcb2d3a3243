//! Keeps the focused row on screen.
//!
//! The coordinator owns the viewport offset. Whenever focus moves to a
//! different absolute row it starts a [`ScrollAnimation`] sized from the
//! rows currently at the top of the viewport:
//!
//! - the first move down from the very top scrolls half a row, so the row
//!   above stays partly visible;
//! - later moves down scroll by the second visible row;
//! - moves up scroll back by the first visible row.
//!
//! Near the end of the content the coordinator *anchors*: further moves down
//! that would not reveal a new row leave the viewport alone, and the first
//! move up replays the last achieved delta backwards, landing exactly on the
//! offset the viewport had before it anchored.

use std::time::{Duration, Instant};

use leanback_grid_core::logging::{span_names, targets};

use crate::animation::{Easing, ScrollAnimation, ScrollProgress};
use crate::scroll::RowLayout;

/// Scroll state of one grid viewport.
#[derive(Debug)]
pub struct ScrollCoordinator {
    rows: RowLayout,
    duration: Duration,
    easing: Easing,
    viewport_offset: f32,
    last_achieved_delta: f32,
    anchored_at_end: bool,
    last_focused_row: usize,
    animation: Option<ScrollAnimation>,
}

impl ScrollCoordinator {
    /// Create a coordinator at offset 0 with focus on absolute row 0.
    pub fn new(rows: RowLayout, duration: Duration, easing: Easing) -> Self {
        Self {
            rows,
            duration,
            easing,
            viewport_offset: 0.0,
            last_achieved_delta: 0.0,
            anchored_at_end: false,
            last_focused_row: 0,
            animation: None,
        }
    }

    /// Current viewport offset.
    #[inline]
    pub fn viewport_offset(&self) -> f32 {
        self.viewport_offset
    }

    /// Whether the viewport is pinned to the content end.
    #[inline]
    pub fn is_anchored_at_end(&self) -> bool {
        self.anchored_at_end
    }

    /// Absolute row the coordinator last scrolled for.
    #[inline]
    pub fn last_focused_row(&self) -> usize {
        self.last_focused_row
    }

    /// Delta the last finished or cancelled scroll actually applied.
    #[inline]
    pub fn last_achieved_delta(&self) -> f32 {
        self.last_achieved_delta
    }

    /// Whether a scroll animation is in flight.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The in-flight scroll, if any.
    pub fn animation(&self) -> Option<&ScrollAnimation> {
        self.animation.as_ref()
    }

    /// Row extents the coordinator scrolls over.
    pub fn rows(&self) -> &RowLayout {
        &self.rows
    }

    /// React to focus moving to absolute row `new_row`.
    ///
    /// Returns `true` if a scroll animation was started.
    #[tracing::instrument(skip(self), target = "leanback_grid::scroll", level = "trace")]
    pub fn on_focus_row_changed(&mut self, new_row: usize, now: Instant) -> bool {
        if new_row == self.last_focused_row {
            return false;
        }
        let forward = new_row > self.last_focused_row;
        self.cancel_animation();

        let current = self.viewport_offset;
        let spacing = self.rows.row_spacing();

        let target = if forward && current == 0.0 {
            let first = self.rows.first_visible_row(current);
            Some(current + (self.rows.row_size(first) + 2.0 * spacing) / 2.0)
        } else if forward {
            let second = self.rows.second_visible_row(current);
            let candidate = self
                .rows
                .clamp_offset(current + (self.rows.row_size(second) + spacing));
            if self.anchored_at_end
                && self.rows.first_visible_row(candidate) <= self.rows.first_visible_row(current)
            {
                tracing::trace!(target: targets::SCROLL, new_row, "anchored at end, not scrolling");
                None
            } else {
                Some(candidate)
            }
        } else if self.anchored_at_end {
            self.anchored_at_end = false;
            tracing::debug!(
                target: targets::SCROLL,
                delta = self.last_achieved_delta,
                "leaving end anchor"
            );
            Some(current - self.last_achieved_delta)
        } else {
            let first = self.rows.first_visible_row(current);
            Some(current - (self.rows.row_size(first) + spacing))
        };

        let started = match target {
            Some(target) => self.start_scroll(target, now),
            None => false,
        };

        if forward && new_row + 2 >= self.rows.row_count() && !self.anchored_at_end {
            tracing::debug!(target: targets::SCROLL, new_row, "anchored at end");
            self.anchored_at_end = true;
        }
        self.last_focused_row = new_row;
        started
    }

    /// Advance the in-flight scroll to `now`.
    ///
    /// Returns `true` while the animation is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        let _span = tracing::trace_span!(target: targets::SCROLL, "frame", operation = span_names::SCROLL_FRAME)
            .entered();

        match animation.tick(now) {
            ScrollProgress::Running { offset } => {
                self.viewport_offset = offset;
                true
            }
            ScrollProgress::Finished { offset } => {
                self.viewport_offset = offset;
                self.last_achieved_delta = animation.achieved_delta();
                self.animation = None;
                tracing::trace!(target: targets::SCROLL, offset, "scroll finished");
                false
            }
        }
    }

    /// Stop the in-flight scroll where it is.
    ///
    /// Returns the delta it achieved, or `None` if nothing was running.
    pub fn cancel_animation(&mut self) -> Option<f32> {
        let mut animation = self.animation.take()?;
        let achieved = animation.cancel();
        self.viewport_offset = animation.current();
        self.last_achieved_delta = achieved;
        tracing::debug!(
            target: targets::SCROLL,
            requested = animation.requested_delta(),
            achieved,
            "scroll cancelled"
        );
        Some(achieved)
    }

    /// Re-target the coordinator after the rows changed.
    ///
    /// Cancels any scroll, clamps the offset into the new content and clears
    /// the end anchor. `row` becomes the last focused absolute row.
    pub fn reset(&mut self, row: usize, rows: RowLayout) {
        self.cancel_animation();
        self.rows = rows;
        self.viewport_offset = self.rows.clamp_offset(self.viewport_offset);
        self.last_achieved_delta = 0.0;
        self.anchored_at_end = false;
        self.last_focused_row = row;
        tracing::debug!(
            target: targets::SCROLL,
            row,
            offset = self.viewport_offset,
            "scroll state reset"
        );
    }

    /// Scroll back to the top for focus on absolute row 0.
    ///
    /// Clears the end anchor. Returns `true` if a scroll animation was started.
    pub fn return_to_top(&mut self, now: Instant) -> bool {
        self.cancel_animation();
        self.anchored_at_end = false;
        self.last_focused_row = 0;
        self.start_scroll(0.0, now)
    }

    /// Start a scroll toward `target`, clamped into the content.
    ///
    /// A scroll clamped to nothing counts as a finished zero-length scroll.
    fn start_scroll(&mut self, target: f32, now: Instant) -> bool {
        let from = self.viewport_offset;
        let to = self.rows.clamp_offset(target);
        if to == from {
            tracing::trace!(target: targets::SCROLL, offset = from, "scroll clamped to nothing");
            self.last_achieved_delta = 0.0;
            return false;
        }

        tracing::debug!(target: targets::SCROLL, from, to, "scroll started");
        self.animation = Some(ScrollAnimation::new(
            from,
            to,
            self.duration,
            self.easing,
            now,
        ));
        true
    }
}
