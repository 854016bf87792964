// SPDX-License-Identifier: MPL-2.0
//! Per-frame coalescing of recomputation requests.

/// Collapses any number of requests between two frames into one.
///
/// Scroll and resize handlers call [`FrameGate::request`]; the frame handler
/// calls [`FrameGate::take`] and recomputes only when it returns `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a recomputation as needed.
    ///
    /// Returns `true` if this is the first request since the last frame.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Consumes the pending request, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Drops a pending request without running it.
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}
