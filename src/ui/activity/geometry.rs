// SPDX-License-Identifier: MPL-2.0
//! Item geometry and the "most visible item" selection.

/// Vertical extent of an item, relative to the top of the viewport.
///
/// Negative `top` means the item starts above the visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub top: f32,
    pub bottom: f32,
    pub height: f32,
}

impl Geometry {
    /// Builds a geometry from its top edge and height.
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height,
            height,
        }
    }

    #[must_use]
    pub fn center(&self) -> f32 {
        self.top + self.height / 2.0
    }

    /// Returns whether any part of the item lies inside `0..viewport_height`.
    #[must_use]
    pub fn overlaps(&self, viewport_height: f32) -> bool {
        self.bottom > 0.0 && self.top < viewport_height
    }

    /// Visibility score in `(-inf, 1]`: 1 when the item is centered in the
    /// viewport, decreasing linearly with the distance between the centers.
    #[must_use]
    pub fn score(&self, viewport_height: f32) -> f32 {
        let distance = (viewport_height / 2.0 - self.center()).abs();
        1.0 - distance / viewport_height
    }
}

/// Anything whose current viewport geometry can be queried.
///
/// `None` means the item is not mounted and never counts as visible.
pub trait Trackable {
    fn geometry(&self) -> Option<Geometry>;
}

impl Trackable for Geometry {
    fn geometry(&self) -> Option<Geometry> {
        Some(*self)
    }
}

impl Trackable for Option<Geometry> {
    fn geometry(&self) -> Option<Geometry> {
        *self
    }
}

impl<T: Trackable + ?Sized> Trackable for &T {
    fn geometry(&self) -> Option<Geometry> {
        (**self).geometry()
    }
}

/// Returns the index of the item whose center is closest to the viewport
/// center.
///
/// Items that do not overlap the viewport are skipped. The first item with
/// the highest score wins ties. With a `threshold`, only scores strictly
/// above it are eligible.
pub fn most_visible<I>(items: I, viewport_height: f32, threshold: Option<f32>) -> Option<usize>
where
    I: IntoIterator,
    I::Item: Trackable,
{
    if viewport_height <= 0.0 {
        return None;
    }

    let mut best: Option<(usize, f32)> = None;
    for (index, item) in items.into_iter().enumerate() {
        let Some(geometry) = item.geometry() else {
            continue;
        };
        if !geometry.overlaps(viewport_height) {
            continue;
        }

        let score = geometry.score(viewport_height);
        if threshold.is_some_and(|t| score <= t) {
            continue;
        }
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index)
}
