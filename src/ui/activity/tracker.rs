// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven "active item" tracking.

use super::frame::FrameGate;
use super::geometry::{most_visible, Trackable};

/// Lifecycle of a [`Tracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Not listening; scroll, resize and frame deliveries are ignored.
    #[default]
    Idle,
    /// Listening; `last_index` is the result of the latest computation.
    Active { last_index: Option<usize> },
}

/// Tracks which item of a scrollable list is closest to the viewport center.
///
/// Scroll and resize events only schedule work; the computation runs on the
/// next frame, at most once per frame.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    state: State,
    gate: FrameGate,
    threshold: Option<f32>,
}

impl Tracker {
    #[must_use]
    pub fn new(threshold: Option<f32>) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    /// Starts listening and schedules an initial computation.
    pub fn attach(&mut self) {
        if !self.is_attached() {
            self.state = State::Active { last_index: None };
        }
        self.gate.request();
    }

    /// Stops listening. Drops any pending computation and the last result.
    pub fn detach(&mut self) {
        self.state = State::Idle;
        self.gate.cancel();
    }

    pub fn on_scroll(&mut self) {
        self.schedule();
    }

    pub fn on_resize(&mut self) {
        self.schedule();
    }

    /// Returns whether the host should deliver the next frame.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.is_attached() && self.gate.is_pending()
    }

    /// Runs the pending computation, if any, against fresh geometry.
    ///
    /// Returns `true` if the active index changed.
    pub fn on_frame<I>(&mut self, items: I, viewport_height: f32) -> bool
    where
        I: IntoIterator,
        I::Item: Trackable,
    {
        let State::Active { last_index } = self.state else {
            return false;
        };
        if !self.gate.take() {
            return false;
        }

        let index = most_visible(items, viewport_height, self.threshold);
        self.state = State::Active { last_index: index };
        if index != last_index {
            log::trace!("Active item changed: {last_index:?} -> {index:?}");
        }
        index != last_index
    }

    /// Index of the most visible item, `None` when idle or nothing is visible.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            State::Idle => None,
            State::Active { last_index } => last_index,
        }
    }

    fn schedule(&mut self) {
        if self.is_attached() {
            self.gate.request();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::activity::{Geometry, StackedLayout};

    const VIEWPORT: f32 = 800.0;

    #[test]
    fn attach_schedules_initial_computation() {
        let mut tracker = Tracker::new(None);
        tracker.attach();

        assert!(tracker.needs_frame());
        assert!(tracker.on_frame([Geometry::new(100.0, 200.0)], VIEWPORT));
        assert_eq!(tracker.active_index(), Some(0));
        assert!(!tracker.needs_frame());
    }

    #[test]
    fn frame_without_request_does_nothing() {
        let mut tracker = Tracker::new(None);
        tracker.attach();
        tracker.on_frame([Geometry::new(100.0, 200.0)], VIEWPORT);

        let moved = [Geometry::new(-500.0, 200.0)];
        assert!(!tracker.on_frame(moved, VIEWPORT));
        assert_eq!(tracker.active_index(), Some(0));
    }

    #[test]
    fn burst_of_scrolls_computes_once() {
        let mut layout = StackedLayout::uniform(10, 200.0, 0.0).with_viewport_height(400.0);
        let mut tracker = Tracker::new(None);
        tracker.attach();
        tracker.on_frame(layout.rows(), layout.viewport_height());

        for offset in [100.0, 250.0, 400.0, 800.0] {
            layout.set_scroll_offset(offset);
            tracker.on_scroll();
        }

        assert!(tracker.on_frame(layout.rows(), layout.viewport_height()));
        assert_eq!(tracker.active_index(), Some(4));
        assert!(!tracker.on_frame(layout.rows(), layout.viewport_height()));
    }

    #[test]
    fn detached_tracker_ignores_events() {
        let mut tracker = Tracker::new(None);
        tracker.attach();
        tracker.on_frame([Geometry::new(100.0, 200.0)], VIEWPORT);

        tracker.detach();
        tracker.on_scroll();
        tracker.on_resize();

        assert!(!tracker.needs_frame());
        assert!(!tracker.on_frame([Geometry::new(300.0, 200.0)], VIEWPORT));
        assert_eq!(tracker.active_index(), None);
        assert_eq!(tracker.state(), State::Idle);
    }

    #[test]
    fn detach_drops_pending_computation() {
        let mut tracker = Tracker::new(None);
        tracker.attach();
        tracker.detach();

        assert!(!tracker.on_frame([Geometry::new(100.0, 200.0)], VIEWPORT));
        assert_eq!(tracker.active_index(), None);
    }

    #[test]
    fn reattach_starts_from_scratch() {
        let mut tracker = Tracker::new(None);
        tracker.attach();
        tracker.on_frame([Geometry::new(100.0, 200.0)], VIEWPORT);
        tracker.detach();

        tracker.attach();
        assert_eq!(tracker.state(), State::Active { last_index: None });
        assert!(tracker.needs_frame());
    }

    #[test]
    fn resize_schedules_computation() {
        let mut tracker = Tracker::new(None);
        tracker.attach();
        tracker.on_frame([Geometry::new(100.0, 200.0)], VIEWPORT);

        tracker.on_resize();
        assert!(tracker.needs_frame());
    }

    #[test]
    fn threshold_is_applied() {
        let mut tracker = Tracker::new(Some(0.9));
        tracker.attach();

        // Score 0.625, below the threshold.
        assert!(!tracker.on_frame([Geometry::new(650.0, 100.0)], VIEWPORT));
        assert_eq!(tracker.active_index(), None);
    }

    #[test]
    fn nothing_visible_clears_active_index() {
        let mut tracker = Tracker::new(None);
        tracker.attach();
        tracker.on_frame([Geometry::new(100.0, 200.0)], VIEWPORT);

        tracker.on_scroll();
        assert!(tracker.on_frame([Geometry::new(-400.0, 200.0)], VIEWPORT));
        assert_eq!(tracker.active_index(), None);
    }
}
