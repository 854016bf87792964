// SPDX-License-Identifier: MPL-2.0
//! Viewport activity tracking.
//!
//! Picks the single item of a scrollable list whose vertical center is
//! closest to the viewport center, so the view can highlight it.
//!
//! - [`geometry`] - `Geometry`, the `Trackable` trait and `most_visible`
//! - [`frame`] - `FrameGate`, one recomputation per frame
//! - [`layout`] - `StackedLayout`, row geometry for fixed-height lists
//! - [`tracker`] - `Tracker`, the attach/detach lifecycle
//!
//! ```
//! use folio::ui::activity::{StackedLayout, Tracker};
//!
//! let mut layout = StackedLayout::uniform(4, 200.0, 0.0).with_viewport_height(400.0);
//! let mut tracker = Tracker::new(None);
//! tracker.attach();
//!
//! layout.set_scroll_offset(400.0);
//! tracker.on_scroll();
//! tracker.on_frame(layout.rows(), layout.viewport_height());
//! assert_eq!(tracker.active_index(), Some(2));
//! ```

pub mod frame;
pub mod geometry;
pub mod layout;
pub mod tracker;

pub use frame::FrameGate;
pub use geometry::{most_visible, Geometry, Trackable};
pub use layout::StackedLayout;
pub use tracker::{State as TrackerState, Tracker};
