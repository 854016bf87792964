// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use std::fs;
use std::path::Path;

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{CircularBuffer, DiagnosticEvent, DiagnosticEventKind};
use crate::config::{DEFAULT_DIAGNOSTICS_CAPACITY, DIAGNOSTICS_CHANNEL_CAPACITY};
use crate::error::Result;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel so producers never block.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records an event. Drops it if the channel is full or the collector
    /// has been dropped.
    pub fn record(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTICS_CAPACITY)
    }
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::with_capacity(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Call this periodically (e.g., on each UI tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an event directly, bypassing the channel.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exports all stored events as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        serde_json::to_string_pretty(&events)
    }

    /// Writes [`export_json`](Self::export_json) to `path`.
    ///
    /// The file is written to a temporary sibling first and renamed into
    /// place, so a failed export never leaves a truncated journal behind.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, json)?;
        if let Err(err) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::new(10);
        let handle = collector.handle();

        handle.record(DiagnosticEventKind::ContactDelivered);
        handle.record(DiagnosticEventKind::Warning {
            message: "settings unreadable".into(),
        });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn handle_is_usable_from_another_thread() {
        let mut collector = DiagnosticsCollector::new(10);
        let handle = collector.handle();

        std::thread::spawn(move || {
            handle.record(DiagnosticEventKind::ScreenChanged {
                screen: "contact".into(),
            });
        })
        .join()
        .expect("thread panicked");

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::new(1000);
        let handle = collector.handle();

        for _ in 0..(DIAGNOSTICS_CHANNEL_CAPACITY + 10) {
            handle.record(DiagnosticEventKind::ContactDelivered);
        }

        collector.process_pending();
        assert_eq!(collector.len(), DIAGNOSTICS_CHANNEL_CAPACITY);
    }

    #[test]
    fn buffer_capacity_bounds_stored_events() {
        let mut collector = DiagnosticsCollector::new(2);
        collector.record(DiagnosticEventKind::ContactDelivered);
        collector.record(DiagnosticEventKind::ContactDelivered);
        collector.record(DiagnosticEventKind::ThemeChanged {
            color: "#112233".into(),
        });

        assert_eq!(collector.len(), 2);
        let last = collector.iter().last().expect("event");
        assert!(matches!(last.kind, DiagnosticEventKind::ThemeChanged { .. }));
    }

    #[test]
    fn export_json_lists_events_in_order() {
        let mut collector = DiagnosticsCollector::default();
        collector.record(DiagnosticEventKind::ScreenChanged {
            screen: "projects".into(),
        });
        collector.record(DiagnosticEventKind::ContactDelivered);

        let json = collector.export_json().expect("export");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let events = value.as_array().expect("array");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["type"], "screen_changed");
        assert_eq!(events[1]["type"], "contact_delivered");
    }

    #[test]
    fn export_to_file_writes_the_journal() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("diagnostics.json");
        let mut collector = DiagnosticsCollector::default();
        collector.record(DiagnosticEventKind::ContactDelivered);

        collector.export_to_file(&path).expect("export");

        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, collector.export_json().expect("export"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("diagnostics.json");
        let collector = DiagnosticsCollector::default();

        assert!(collector.export_to_file(&path).is_err());
    }
}
