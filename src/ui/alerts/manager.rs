// SPDX-License-Identifier: MPL-2.0
//! Alert lifecycle management.
//!
//! The `Manager` owns the plugin-wide defaults, the per-position container
//! registry and every live alert. Hosts feed it [`Message`]s (hover, close,
//! periodic ticks) and it drives each alert through its state machine,
//! detaching alerts from their container once they have faded out.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use iced::{time, Subscription};

use super::alert::{Alert, AlertState, Transition};
use super::options::{AlertOptions, AlertOverrides, PendingCompletion};
use super::registry::{Container, ContainerRegistry};
use crate::diagnostics::{AlertEventKind, DiagnosticsHandle, DismissReason, IgnoredInput};
use crate::domain::alert::{AlertId, Position};

/// Tick period while anything is animating or counting down.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Host events routed to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Pointer entered an alert box.
    HoverEnter(AlertId),
    /// Pointer left an alert box.
    HoverLeave(AlertId),
    /// Close affordance of an alert was activated.
    Close(AlertId),
    /// Periodic tick driving timers and fades.
    Tick,
}

/// Owns every live alert and the containers they are stacked in.
#[derive(Debug, Default)]
pub struct Manager {
    /// Plugin-wide defaults, layered between built-ins and per-call options.
    defaults: AlertOverrides,
    registry: ContainerRegistry,
    /// Live alerts; ids increase with creation so iteration follows call order.
    alerts: BTreeMap<AlertId, Alert>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends lifecycle events to a diagnostics collector.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Replaces the plugin-wide defaults used by subsequent `show` calls.
    pub fn set_defaults(&mut self, defaults: AlertOverrides) {
        self.defaults = defaults;
    }

    #[must_use]
    pub fn defaults(&self) -> &AlertOverrides {
        &self.defaults
    }

    /// Shows a new alert.
    ///
    /// The completion hook, if any, runs before this returns, after the
    /// alert has been inserted into its container.
    pub fn show(&mut self, options: AlertOverrides, now: Instant) {
        if let Some(completion) = self.insert(options, now) {
            completion.fire();
        }
    }

    /// Inserts a new alert and hands back its completion notification
    /// without running it.
    pub(crate) fn insert(
        &mut self,
        overrides: AlertOverrides,
        now: Instant,
    ) -> Option<PendingCompletion> {
        let mut options = AlertOptions::resolve(&self.defaults, overrides);
        let id = AlertId::next();
        let alert = Alert::new(id, &options, now);

        let created = {
            let (container, created) = self.registry.get_or_create(options.position);
            container.append(id);
            created
        };
        if created {
            self.record(
                AlertEventKind::ContainerCreated {
                    position: options.position,
                },
                now,
            );
        }
        self.record(
            AlertEventKind::Shown {
                id,
                severity: options.severity,
                position: options.position,
                sticky: options.sticky,
            },
            now,
        );

        self.alerts.insert(id, alert);
        options.take_completion()
    }

    /// Handles a host message.
    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::HoverEnter(id) => self.hover_enter(id, now),
            Message::HoverLeave(id) => self.hover_leave(id, now),
            Message::Close(id) => self.close(id, now),
            Message::Tick => self.tick(now),
        }
    }

    /// Pauses the countdown of a hovered alert.
    pub fn hover_enter(&mut self, id: AlertId, now: Instant) {
        let Some(alert) = self.alerts.get_mut(&id) else {
            self.ignore(id, IgnoredInput::HoverEnter, now);
            return;
        };
        if alert.hover_enter() {
            self.record(AlertEventKind::Paused { id }, now);
        } else if alert.state() == AlertState::Disappearing {
            self.ignore(id, IgnoredInput::HoverEnter, now);
        }
    }

    /// Restarts the full countdown of an alert the pointer left.
    pub fn hover_leave(&mut self, id: AlertId, now: Instant) {
        let Some(alert) = self.alerts.get_mut(&id) else {
            self.ignore(id, IgnoredInput::HoverLeave, now);
            return;
        };
        if alert.hover_leave(now) {
            self.record(AlertEventKind::Resumed { id }, now);
        } else if alert.state() == AlertState::Disappearing {
            self.ignore(id, IgnoredInput::HoverLeave, now);
        }
    }

    /// Starts dismissing an alert, whatever its countdown state.
    pub fn close(&mut self, id: AlertId, now: Instant) {
        let closed = self
            .alerts
            .get_mut(&id)
            .is_some_and(|alert| alert.close(now));
        if closed {
            self.record(
                AlertEventKind::Dismissed {
                    id,
                    reason: DismissReason::Closed,
                },
                now,
            );
        } else {
            self.ignore(id, IgnoredInput::Close, now);
        }
    }

    /// Runs every timer and fade due at `now`, detaching finished alerts.
    pub fn tick(&mut self, now: Instant) {
        let mut events = Vec::new();
        let mut finished = Vec::new();

        for (&id, alert) in &mut self.alerts {
            for transition in alert.advance(now) {
                match transition {
                    Transition::Shown => {}
                    Transition::Expired => events.push(AlertEventKind::Dismissed {
                        id,
                        reason: DismissReason::Expired,
                    }),
                    Transition::Removed => finished.push((id, alert.position())),
                }
            }
        }

        for (id, position) in finished {
            self.alerts.remove(&id);
            if let Some(container) = self.registry.get_mut(position) {
                container.detach(id);
            }
            events.push(AlertEventKind::Removed { id, position });
        }

        for event in events {
            self.record(event, now);
        }
    }

    /// Returns a live alert.
    #[must_use]
    pub fn alert(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.get(&id)
    }

    /// Live alerts in creation order.
    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.values()
    }

    /// Live alerts stacked at `position`, in display order.
    pub fn alerts_at(&self, position: Position) -> impl Iterator<Item = &Alert> {
        self.registry
            .get(position)
            .map(Container::alerts)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.alerts.get(id))
    }

    #[must_use]
    pub fn container(&self, position: Position) -> Option<&Container> {
        self.registry.get(position)
    }

    #[must_use]
    pub fn containers(&self) -> &ContainerRegistry {
        &self.registry
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// Earliest instant at which a tick changes something.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.alerts.values().filter_map(Alert::next_deadline).min()
    }

    /// Periodic ticks while any alert is animating or counting down.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.next_deadline().is_some() {
            time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn ignore(&self, id: AlertId, input: IgnoredInput, now: Instant) {
        log::trace!("{id}: ignoring late {input:?}");
        if let Some(handle) = &self.diagnostics {
            handle.record_at(AlertEventKind::Ignored { id, input }, now);
        }
    }

    fn record(&self, kind: AlertEventKind, now: Instant) {
        log::debug!("{kind}");
        if let Some(handle) = &self.diagnostics {
            handle.record_at(kind, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::domain::alert::Severity;
    use crate::test_utils::at;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn first_id(manager: &Manager, position: Position) -> AlertId {
        manager.container(position).expect("container exists").alerts()[0]
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.has_alerts());
        assert!(manager.containers().is_empty());
        assert_eq!(manager.next_deadline(), None);
    }

    #[test]
    fn show_creates_container_lazily() {
        let mut manager = Manager::new();
        let t0 = Instant::now();

        manager.show(AlertOverrides::new().position(Position::TopRight), t0);

        assert_eq!(manager.containers().len(), 1);
        assert_eq!(manager.container(Position::TopRight).unwrap().len(), 1);
        assert!(manager.container(Position::TopCenter).is_none());
    }

    #[test]
    fn same_position_reuses_container_in_call_order() {
        let mut manager = Manager::new();
        let t0 = Instant::now();

        manager.show(AlertOverrides::new().title("one").position(Position::BottomLeft), t0);
        manager.show(AlertOverrides::new().title("two").position(Position::BottomLeft), t0);

        assert_eq!(manager.containers().len(), 1);
        let titles: Vec<_> = manager
            .alerts_at(Position::BottomLeft)
            .map(|alert| alert.element().header.as_str())
            .collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[test]
    fn global_defaults_apply_until_replaced() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.set_defaults(AlertOverrides::new().position(Position::BottomRight));

        manager.show(AlertOverrides::new(), t0);
        manager.set_defaults(AlertOverrides::new());
        manager.show(AlertOverrides::new(), t0);

        assert_eq!(manager.container(Position::BottomRight).unwrap().len(), 1);
        assert_eq!(manager.container(Position::TopCenter).unwrap().len(), 1);
    }

    #[test]
    fn expired_alert_is_detached_but_container_stays() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.show(AlertOverrides::new().auto_hide_delay_ms(1000), t0);
        let id = first_id(&manager, Position::TopCenter);

        manager.update(Message::Tick, at(t0, 1000));
        assert_eq!(
            manager.alert(id).map(Alert::state),
            Some(AlertState::Disappearing)
        );

        manager.update(Message::Tick, at(t0, 1300));
        assert!(manager.alert(id).is_none());
        let container = manager.container(Position::TopCenter).expect("kept");
        assert!(container.is_empty());
        assert!(!manager.has_alerts());
    }

    #[test]
    fn detaching_one_alert_keeps_siblings_in_order() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        for title in ["a", "b", "c"] {
            manager.show(AlertOverrides::new().title(title).sticky(true), t0);
        }
        let ids = manager.container(Position::TopCenter).unwrap().alerts().to_vec();

        manager.update(Message::Close(ids[1]), at(t0, 500));
        manager.update(Message::Tick, at(t0, 800));

        assert_eq!(
            manager.container(Position::TopCenter).unwrap().alerts(),
            &[ids[0], ids[2]]
        );
    }

    #[test]
    fn hover_holds_alert_past_its_deadline() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.show(AlertOverrides::new().auto_hide_delay_ms(2000), t0);
        let id = first_id(&manager, Position::TopCenter);

        manager.update(Message::HoverEnter(id), at(t0, 1000));
        manager.update(Message::Tick, at(t0, 10_000));
        assert!(manager.alert(id).is_some());

        manager.update(Message::HoverLeave(id), at(t0, 10_000));
        manager.update(Message::Tick, at(t0, 11_999));
        assert!(matches!(
            manager.alert(id).map(Alert::state),
            Some(AlertState::Visible(_))
        ));
        manager.update(Message::Tick, at(t0, 12_300));
        assert!(manager.alert(id).is_none());
    }

    #[test]
    fn late_events_for_removed_alert_are_ignored() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());
        let t0 = Instant::now();
        manager.show(AlertOverrides::new().sticky(true), t0);
        let id = first_id(&manager, Position::TopCenter);

        manager.update(Message::Close(id), t0);
        manager.update(Message::Tick, at(t0, 300));
        manager.update(Message::HoverEnter(id), at(t0, 400));
        manager.update(Message::Close(id), at(t0, 500));

        assert!(!manager.has_alerts());
        collector.process_pending();
        let ignored = collector
            .kinds()
            .filter(|kind| matches!(kind, AlertEventKind::Ignored { .. }))
            .count();
        assert_eq!(ignored, 2);
    }

    #[test]
    fn lifecycle_is_recorded_in_order() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());
        let t0 = Instant::now();

        manager.show(
            AlertOverrides::new()
                .severity(Severity::Warning)
                .position(Position::BottomCenter)
                .auto_hide_delay_ms(1000),
            t0,
        );
        let id = first_id(&manager, Position::BottomCenter);
        manager.update(Message::HoverEnter(id), at(t0, 100));
        manager.update(Message::HoverLeave(id), at(t0, 200));
        manager.update(Message::Tick, at(t0, 1200));
        manager.update(Message::Tick, at(t0, 1500));

        collector.process_pending();
        let kinds: Vec<_> = collector.kinds().cloned().collect();
        assert_eq!(
            kinds,
            vec![
                AlertEventKind::ContainerCreated {
                    position: Position::BottomCenter
                },
                AlertEventKind::Shown {
                    id,
                    severity: Severity::Warning,
                    position: Position::BottomCenter,
                    sticky: false,
                },
                AlertEventKind::Paused { id },
                AlertEventKind::Resumed { id },
                AlertEventKind::Dismissed {
                    id,
                    reason: DismissReason::Expired
                },
                AlertEventKind::Removed {
                    id,
                    position: Position::BottomCenter
                },
            ]
        );
    }

    #[test]
    fn close_before_late_tick_is_recorded_as_closed() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());
        let t0 = Instant::now();

        manager.show(AlertOverrides::new().auto_hide_delay_ms(1000), t0);
        let id = first_id(&manager, Position::TopCenter);
        manager.update(Message::Tick, at(t0, 300));
        manager.update(Message::Close(id), at(t0, 1200));
        manager.update(Message::Tick, at(t0, 1250));
        manager.update(Message::Tick, at(t0, 1500));

        collector.process_pending();
        let reasons: Vec<_> = collector
            .kinds()
            .filter_map(|kind| match kind {
                AlertEventKind::Dismissed { reason, .. } => Some(*reason),
                _ => None,
            })
            .collect();
        assert_eq!(reasons, vec![DismissReason::Closed]);
        assert!(!manager.has_alerts());
    }

    #[test]
    fn completion_hook_runs_once_during_show() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut manager = Manager::new();
        let t0 = Instant::now();

        manager.show(
            AlertOverrides::new().on_complete(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
            t0,
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        manager.update(Message::Tick, at(t0, 60_000));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn paused_and_sticky_alerts_need_no_ticks() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.show(AlertOverrides::new().sticky(true), t0);
        manager.update(Message::Tick, at(t0, 300));
        assert_eq!(manager.next_deadline(), None);

        manager.show(AlertOverrides::new().auto_hide_delay_ms(1000), at(t0, 300));
        assert_eq!(manager.next_deadline(), Some(at(t0, 600)));
    }
}
