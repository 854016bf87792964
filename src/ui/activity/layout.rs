// SPDX-License-Identifier: MPL-2.0
//! Geometry of a vertical list of rows inside a scrollable.
//!
//! The scrollable only reports its viewport bounds and scroll offset, so the
//! per-row geometry is derived from the same row heights the view lays out.

use super::geometry::{Geometry, Trackable};
use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;

/// A stack of rows with known heights, scrolled by `scroll_offset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackedLayout {
    rows: Vec<f32>,
    spacing: f32,
    /// Distance from the top of the content to the first row (headers, padding).
    leading: f32,
    scroll_offset: f32,
    viewport_height: f32,
}

/// One row of a [`StackedLayout`], resolved against its current scroll state.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    layout: &'a StackedLayout,
    index: usize,
}

impl Trackable for Row<'_> {
    fn geometry(&self) -> Option<Geometry> {
        self.layout.geometry(self.index)
    }
}

impl StackedLayout {
    #[must_use]
    pub fn new(rows: Vec<f32>, spacing: f32) -> Self {
        Self {
            rows,
            spacing,
            ..Self::default()
        }
    }

    /// Uniform rows of `height`.
    #[must_use]
    pub fn uniform(count: usize, height: f32, spacing: f32) -> Self {
        Self::new(vec![height; count], spacing)
    }

    #[must_use]
    pub fn with_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub fn with_viewport_height(mut self, viewport_height: f32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.max(0.0);
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
    }

    /// Applies a scrollable viewport report.
    ///
    /// Returns `true` if the viewport height changed.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) -> bool {
        let resized = (bounds.height - self.viewport_height).abs() > f32::EPSILON;
        self.set_scroll_offset(offset.y);
        self.set_viewport_height(bounds.height);
        resized
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total height of the scrollable content.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        let gaps = self.rows.len().saturating_sub(1) as f32 * self.spacing;
        self.leading + self.rows.iter().sum::<f32>() + gaps
    }

    /// Geometry of row `index` relative to the viewport top, or `None` when
    /// there is no such row.
    #[must_use]
    pub fn geometry(&self, index: usize) -> Option<Geometry> {
        let height = *self.rows.get(index)?;
        let above: f32 = self.rows[..index].iter().sum();
        let top = self.leading + above + index as f32 * self.spacing - self.scroll_offset;
        Some(Geometry::new(top, height))
    }

    /// Rows in order, each resolving its geometry on demand.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.rows.len()).map(move |index| Row {
            layout: self,
            index,
        })
    }
}
