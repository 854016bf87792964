// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the bounded toast queue: it validates and inserts new
//! toasts, evicts the oldest one when full, expires toasts whose deadline has
//! passed, and keeps removed toasts around in the `Dismissing` phase until the
//! display layer has finished fading them out.

use super::clock::{Clock, SystemClock};
use super::notification::{Kind, Notification, NotificationId, Options, Phase, Position};
use crate::config::{
    NotificationsConfig, DEFAULT_EXIT_TRANSITION_MS, DEFAULT_MAX_TOASTS,
    DEFAULT_TOAST_DURATION_MS,
};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use std::collections::{BTreeMap, VecDeque};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (close button).
    Dismiss(NotificationId),
    /// Tick for expiring toasts and finishing exit transitions.
    Tick,
}

/// Queue-wide defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Maximum number of active toasts; at least one.
    pub max_toasts: usize,
    /// Lifetime used when the producer does not give one.
    pub default_duration: Duration,
    /// Anchor used when the producer does not give one.
    pub default_position: Position,
    /// How long a removed toast stays in the `Dismissing` phase.
    pub exit_transition: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_toasts: DEFAULT_MAX_TOASTS,
            default_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            default_position: Position::default(),
            exit_transition: Duration::from_millis(DEFAULT_EXIT_TRANSITION_MS),
        }
    }
}

impl From<&NotificationsConfig> for Settings {
    fn from(config: &NotificationsConfig) -> Self {
        Self {
            max_toasts: config.effective_max_toasts(),
            default_duration: config.effective_duration(),
            default_position: config.position.unwrap_or_default(),
            exit_transition: config.effective_exit_transition(),
        }
    }
}

/// A toast that left the queue and is fading out.
#[derive(Debug, Clone)]
struct Departing {
    notification: Notification,
    since: Instant,
}

/// Manages the notification queue and its dismissal lifecycle.
#[derive(Debug)]
pub struct Manager<C: Clock = SystemClock> {
    /// Active notifications in insertion order (oldest first).
    active: VecDeque<Notification>,
    /// Removed notifications still playing their exit transition.
    dismissing: Vec<Departing>,
    settings: Settings,
    clock: C,
    /// Optional diagnostics handle for recording rejections and evictions.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager<SystemClock> {
    /// Creates a new empty notification manager with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Settings::default(), SystemClock)
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> Manager<C> {
    /// Creates a manager driven by `clock`.
    #[must_use]
    pub fn with_clock(settings: Settings, clock: C) -> Self {
        let settings = Settings {
            max_toasts: settings.max_toasts.max(1),
            ..settings
        };
        Self {
            active: VecDeque::with_capacity(settings.max_toasts),
            dismissing: Vec::new(),
            settings,
            clock,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for recording rejections and evictions.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Queues a notification.
    ///
    /// Returns `None` without touching the queue when `message` is empty or
    /// whitespace only. When the queue is full, the oldest active toast
    /// (regardless of anchor) is evicted first.
    pub fn add(
        &mut self,
        kind: Kind,
        message: impl Into<String>,
        options: Options,
    ) -> Option<NotificationId> {
        let message = message.into();
        if message.trim().is_empty() {
            log::warn!("Rejected {kind} notification with empty message");
            if let Some(handle) = &self.diagnostics {
                handle.record(DiagnosticEventKind::NotificationRejected {
                    kind: kind.to_string(),
                });
            }
            return None;
        }

        let now = self.clock.now();
        while self.active.len() >= self.settings.max_toasts {
            let Some(oldest) = self.active.pop_front() else {
                break;
            };
            log::debug!("Evicting notification {:?} (queue full)", oldest.id());
            if let Some(handle) = &self.diagnostics {
                handle.record(DiagnosticEventKind::NotificationEvicted {
                    message: oldest.message().to_string(),
                });
            }
            self.begin_exit(oldest, now);
        }

        let duration = options
            .duration
            .filter(|d| !d.is_zero())
            .unwrap_or(self.settings.default_duration);
        let position = options.position.unwrap_or(self.settings.default_position);

        let notification = Notification::new(kind, message, position, duration, now);
        let id = notification.id();
        self.active.push_back(notification);
        Some(id)
    }

    pub fn success(&mut self, message: impl Into<String>, options: Options) -> Option<NotificationId> {
        self.add(Kind::Success, message, options)
    }

    pub fn error(&mut self, message: impl Into<String>, options: Options) -> Option<NotificationId> {
        self.add(Kind::Error, message, options)
    }

    pub fn warning(&mut self, message: impl Into<String>, options: Options) -> Option<NotificationId> {
        self.add(Kind::Warning, message, options)
    }

    pub fn info(&mut self, message: impl Into<String>, options: Options) -> Option<NotificationId> {
        self.add(Kind::Info, message, options)
    }

    /// Removes a notification by its ID and cancels its expiry.
    ///
    /// Returns `true` if it was active. Unknown or already removed IDs are a no-op.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(index) = self.active.iter().position(|n| n.id() == id) else {
            return false;
        };
        if let Some(notification) = self.active.remove(index) {
            let now = self.clock.now();
            self.begin_exit(notification, now);
        }
        true
    }

    /// Removes every active notification and cancels all pending expiries.
    pub fn clear_all(&mut self) {
        let now = self.clock.now();
        let drained: Vec<Notification> = self.active.drain(..).collect();
        for notification in drained {
            self.begin_exit(notification, now);
        }
    }

    /// Expires every active notification whose deadline has passed.
    ///
    /// Expired toasts leave through the same path as [`Self::remove`], in
    /// insertion order. Returns their IDs.
    pub fn tick(&mut self) -> Vec<NotificationId> {
        let now = self.clock.now();
        let expired: Vec<NotificationId> = self
            .active
            .iter()
            .filter(|n| n.deadline() <= now)
            .map(Notification::id)
            .collect();

        for id in &expired {
            self.remove(*id);
        }
        expired
    }

    /// Earliest pending expiry, if any toast is active.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.iter().map(Notification::deadline).min()
    }

    /// Acknowledges the end of one toast's exit transition.
    ///
    /// Returns `true` if the toast was dismissing.
    pub fn finish_exit(&mut self, id: NotificationId) -> bool {
        let before = self.dismissing.len();
        self.dismissing.retain(|d| d.notification.id() != id);
        self.dismissing.len() < before
    }

    /// Drops every dismissing toast whose transition has lasted at least
    /// `transition`.
    pub fn finish_exits(&mut self, transition: Duration) {
        let now = self.clock.now();
        self.dismissing
            .retain(|d| now.saturating_duration_since(d.since) < transition);
    }

    /// Returns the display phase of a notification.
    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Phase {
        if self.active.iter().any(|n| n.id() == id) {
            Phase::Active
        } else if self.dismissing.iter().any(|d| d.notification.id() == id) {
            Phase::Dismissing
        } else {
            Phase::Gone
        }
    }

    /// Active notifications grouped by anchor, insertion order preserved
    /// within each group. Only non-empty groups are present.
    #[must_use]
    pub fn grouped_by_position(&self) -> BTreeMap<Position, Vec<&Notification>> {
        let mut groups: BTreeMap<Position, Vec<&Notification>> = BTreeMap::new();
        for notification in &self.active {
            groups
                .entry(notification.position())
                .or_default()
                .push(notification);
        }
        groups
    }

    /// Returns the active notification with `id`.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id() == id)
    }

    /// Active notifications in insertion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Notifications in their exit transition, oldest removal first.
    pub fn dismissing(&self) -> impl Iterator<Item = &Notification> {
        self.dismissing.iter().map(|d| &d.notification)
    }

    /// Number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns whether anything still needs drawing (active or dismissing).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty() || !self.dismissing.is_empty()
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(*id);
            }
            Message::Tick => {
                self.tick();
                self.finish_exits(self.settings.exit_transition);
            }
        }
    }

    fn begin_exit(&mut self, notification: Notification, now: Instant) {
        self.dismissing.push(Departing {
            notification,
            since: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::ui::notifications::ManualClock;

    fn manual(max_toasts: usize) -> (Manager<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let settings = Settings {
            max_toasts,
            ..Settings::default()
        };
        (Manager::with_clock(settings, clock.clone()), clock)
    }

    fn messages<C: Clock>(manager: &Manager<C>) -> Vec<&str> {
        manager.iter().map(Notification::message).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.len(), 0);
        assert!(!manager.has_notifications());
        assert!(manager.next_deadline().is_none());
    }

    #[test]
    fn add_returns_id_of_active_notification() {
        let mut manager = Manager::new();
        let id = manager.success("Saved", Options::default()).expect("queued");

        assert_eq!(manager.phase(id), Phase::Active);
        let notification = manager.get(id).expect("present");
        assert_eq!(notification.kind(), Kind::Success);
        assert_eq!(notification.position(), Position::BottomRight);
        assert_eq!(
            notification.duration(),
            Duration::from_millis(DEFAULT_TOAST_DURATION_MS)
        );
    }

    #[test]
    fn overflow_evicts_oldest_regardless_of_position() {
        let (mut manager, _clock) = manual(5);
        let positions = [Position::TopLeft, Position::BottomRight, Position::TopCenter];

        for i in 1..=7 {
            let options = Options::default().at(positions[i % positions.len()]);
            manager.info(i.to_string(), options);
        }

        assert_eq!(manager.len(), 5);
        assert_eq!(messages(&manager), vec!["3", "4", "5", "6", "7"]);
    }

    #[test]
    fn evicted_notifications_enter_dismissing_phase() {
        let (mut manager, _clock) = manual(1);
        let first = manager.info("first", Options::default()).expect("queued");
        manager.info("second", Options::default());

        assert_eq!(manager.phase(first), Phase::Dismissing);
        assert_eq!(manager.dismissing().count(), 1);
    }

    #[test]
    fn blank_message_is_rejected() {
        let mut manager = Manager::new();
        manager.info("kept", Options::default());

        assert!(manager.add(Kind::Error, "", Options::default()).is_none());
        assert!(manager.add(Kind::Error, "  \n\t", Options::default()).is_none());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn rejection_is_recorded_in_diagnostics() {
        let mut collector = DiagnosticsCollector::new(8);
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.warning(" ", Options::default());
        collector.process_pending();

        let event = collector.iter().next().expect("event recorded");
        assert_eq!(
            event.kind,
            DiagnosticEventKind::NotificationRejected {
                kind: "warning".into()
            }
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let mut manager = Manager::new();
        let id = manager.info("bye", Options::default()).expect("queued");
        let other = manager.info("stay", Options::default()).expect("queued");

        assert!(manager.remove(id));
        assert!(!manager.remove(id));
        assert_eq!(messages(&manager), vec!["stay"]);
        assert_eq!(manager.phase(other), Phase::Active);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut manager = Manager::new();
        manager.info("stay", Options::default());

        assert!(!manager.remove(NotificationId::new()));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.dismissing().count(), 0);
    }

    #[test]
    fn expiry_removes_after_duration() {
        let (mut manager, clock) = manual(5);
        let id = manager
            .info("short", Options::default().lasting(Duration::from_millis(100)))
            .expect("queued");

        clock.advance(Duration::from_millis(99));
        assert!(manager.tick().is_empty());
        assert_eq!(manager.phase(id), Phase::Active);

        clock.advance(Duration::from_millis(1));
        assert_eq!(manager.tick(), vec![id]);
        assert_eq!(manager.phase(id), Phase::Dismissing);

        // Already expired: a later tick must not fire it again.
        clock.advance(Duration::from_secs(1));
        assert!(manager.tick().is_empty());
    }

    #[test]
    fn each_notification_expires_on_its_own_deadline() {
        let (mut manager, clock) = manual(5);
        let fast = manager
            .info("fast", Options::default().lasting(Duration::from_millis(100)))
            .expect("queued");
        let slow = manager
            .info("slow", Options::default().lasting(Duration::from_millis(300)))
            .expect("queued");

        assert_eq!(
            manager.next_deadline(),
            Some(manager.get(fast).expect("fast").deadline())
        );

        clock.advance(Duration::from_millis(150));
        assert_eq!(manager.tick(), vec![fast]);
        assert_eq!(manager.phase(slow), Phase::Active);

        clock.advance(Duration::from_millis(150));
        assert_eq!(manager.tick(), vec![slow]);
        assert!(manager.is_empty());
    }

    #[test]
    fn removed_notification_never_expires() {
        let (mut manager, clock) = manual(5);
        let id = manager
            .info("gone", Options::default().lasting(Duration::from_millis(50)))
            .expect("queued");
        manager.remove(id);

        clock.advance(Duration::from_millis(100));
        assert!(manager.tick().is_empty());
    }

    #[test]
    fn zero_duration_falls_back_to_default() {
        let mut manager = Manager::new();
        let id = manager
            .info("x", Options::default().lasting(Duration::ZERO))
            .expect("queued");
        assert_eq!(
            manager.get(id).expect("present").duration(),
            manager.settings().default_duration
        );
    }

    #[test]
    fn clear_all_cancels_every_expiry() {
        let (mut manager, clock) = manual(5);
        manager.info("a", Options::default());
        manager.error("b", Options::default().at(Position::TopLeft));

        manager.clear_all();
        assert!(manager.is_empty());
        assert!(manager.next_deadline().is_none());

        clock.advance(Duration::from_secs(10));
        assert!(manager.tick().is_empty());
    }

    #[test]
    fn exit_transition_finishes_after_duration() {
        let (mut manager, clock) = manual(5);
        let id = manager.info("fade", Options::default()).expect("queued");
        manager.remove(id);

        manager.finish_exits(Duration::from_millis(300));
        assert_eq!(manager.phase(id), Phase::Dismissing);

        clock.advance(Duration::from_millis(300));
        manager.finish_exits(Duration::from_millis(300));
        assert_eq!(manager.phase(id), Phase::Gone);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn finish_exit_acknowledges_single_notification() {
        let mut manager = Manager::new();
        let id = manager.info("fade", Options::default()).expect("queued");

        assert!(!manager.finish_exit(id), "active toasts are not dismissing");
        manager.remove(id);
        assert!(manager.finish_exit(id));
        assert_eq!(manager.phase(id), Phase::Gone);
    }

    #[test]
    fn grouping_partitions_entries_and_keeps_order() {
        let mut manager = Manager::with_settings(Settings {
            max_toasts: 10,
            ..Settings::default()
        });
        manager.info("a", Options::default().at(Position::TopLeft));
        manager.info("b", Options::default());
        manager.info("c", Options::default().at(Position::TopLeft));
        manager.info("d", Options::default().at(Position::BottomCenter));
        manager.info("e", Options::default());

        let groups = manager.grouped_by_position();
        let texts = |p: Position| -> Vec<&str> {
            groups[&p].iter().map(|n| n.message()).collect()
        };

        assert_eq!(groups.len(), 3);
        assert_eq!(texts(Position::TopLeft), vec!["a", "c"]);
        assert_eq!(texts(Position::BottomRight), vec!["b", "e"]);
        assert_eq!(texts(Position::BottomCenter), vec!["d"]);

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, manager.len());
        for (position, group) in &groups {
            assert!(group.iter().all(|n| n.position() == *position));
        }
    }

    #[test]
    fn handle_message_dismiss_and_tick() {
        let (mut manager, clock) = manual(5);
        let id = manager.info("x", Options::default()).expect("queued");

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.phase(id), Phase::Dismissing);

        clock.advance(manager.settings().exit_transition);
        manager.handle_message(&Message::Tick);
        assert_eq!(manager.phase(id), Phase::Gone);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let (mut manager, _clock) = manual(0);
        manager.info("a", Options::default());
        manager.info("b", Options::default());
        assert_eq!(messages(&manager), vec!["b"]);
    }

    #[test]
    fn settings_follow_config() {
        let config = NotificationsConfig {
            max_toasts: Some(2),
            duration_ms: Some(1500),
            position: Some(Position::TopRight),
            exit_transition_ms: Some(120),
        };
        let settings = Settings::from(&config);
        assert_eq!(settings.max_toasts, 2);
        assert_eq!(settings.default_duration, Duration::from_millis(1500));
        assert_eq!(settings.default_position, Position::TopRight);
        assert_eq!(settings.exit_transition, Duration::from_millis(120));
    }
}
