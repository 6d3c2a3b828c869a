// SPDX-License-Identifier: MPL-2.0
//! Process-wide alert entry point.
//!
//! UI work happens on a single thread, so the shared [`Manager`] lives in a
//! thread-local slot created on first use. A host wires it into its iced
//! program with [`update`], [`overlay`] and [`subscription`]. Applications
//! that own their manager directly do not need this.
//!
//! ```
//! use alert_stack::ui::alerts::{self, AlertOverrides};
//! use alert_stack::domain::alert::{Position, Severity};
//!
//! alerts::set_defaults(AlertOverrides::new().position(Position::BottomRight));
//! alerts::show(AlertOverrides::new().title("Saved").severity(Severity::Success));
//!
//! let stacked = alerts::with_manager(|manager| {
//!     manager.container(Position::BottomRight).map(|c| c.len())
//! });
//! assert_eq!(stacked, Some(1));
//! ```

use std::cell::RefCell;
use std::time::Instant;

use iced::{Element, Subscription};

use super::manager::{Manager, Message};
use super::options::AlertOverrides;
use super::view;

thread_local! {
    static MANAGER: RefCell<Manager> = RefCell::new(Manager::new());
}

/// Replaces the plugin-wide defaults for every later [`show`].
pub fn set_defaults(defaults: AlertOverrides) {
    MANAGER.with(|manager| manager.borrow_mut().set_defaults(defaults));
}

/// Shows an alert through the shared manager.
pub fn show(options: AlertOverrides) {
    show_at(options, Instant::now());
}

/// [`show`] with an explicit timestamp.
///
/// The completion hook runs after the manager is released, so it may show
/// further alerts itself.
pub fn show_at(options: AlertOverrides, now: Instant) {
    let completion = MANAGER.with(|manager| manager.borrow_mut().insert(options, now));
    if let Some(completion) = completion {
        completion.fire();
    }
}

/// Routes a host message to the shared manager.
pub fn update(message: Message, now: Instant) {
    MANAGER.with(|manager| manager.borrow_mut().update(message, now));
}

/// Renders the shared manager's alerts as of `now`.
pub fn overlay(now: Instant) -> Element<'static, Message> {
    MANAGER.with(|manager| view::view_overlay(&manager.borrow(), now))
}

/// Ticks for the shared manager while any alert needs them.
pub fn subscription() -> Subscription<Message> {
    MANAGER.with(|manager| manager.borrow().subscription())
}

/// Runs `f` with exclusive access to the shared manager.
///
/// # Panics
///
/// Panics if called re-entrantly from inside another `with_manager` closure.
pub fn with_manager<R>(f: impl FnOnce(&mut Manager) -> R) -> R {
    MANAGER.with(|manager| f(&mut manager.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::Position;
    use crate::test_utils::at;

    // Each test runs on its own thread and so sees a fresh manager.

    #[test]
    fn shared_manager_is_created_on_first_use() {
        assert!(with_manager(|manager| manager.containers().is_empty()));
        show(AlertOverrides::new().position(Position::TopLeft));
        assert_eq!(with_manager(|manager| manager.containers().len()), 1);
    }

    #[test]
    fn completion_hook_may_show_another_alert() {
        show(AlertOverrides::new().sticky(true).on_complete(|_| {
            show(AlertOverrides::new().title("follow-up").sticky(true));
        }));

        let titles: Vec<String> = with_manager(|manager| {
            manager
                .alerts_at(Position::TopCenter)
                .map(|alert| alert.element().header.clone())
                .collect()
        });
        assert_eq!(titles, vec!["Alert".to_string(), "follow-up".to_string()]);
    }

    #[test]
    fn shared_alert_is_ticked_to_removal_and_rendered() {
        let t0 = Instant::now();
        show_at(AlertOverrides::new().auto_hide_delay_ms(1000), t0);
        let _: Element<'static, Message> = overlay(t0);

        update(Message::Tick, at(t0, 300));
        update(Message::Tick, at(t0, 1000));
        assert!(with_manager(|manager| manager.has_alerts()));
        let _: Element<'static, Message> = overlay(at(t0, 1100));

        update(Message::Tick, at(t0, 1300));
        assert!(!with_manager(|manager| manager.has_alerts()));
        let _: Element<'static, Message> = overlay(at(t0, 1300));
    }

    #[test]
    fn shared_close_goes_through_update() {
        let t0 = Instant::now();
        show_at(AlertOverrides::new().sticky(true), t0);
        let id = with_manager(|manager| manager.alerts().next().map(|alert| alert.id()))
            .expect("alert shown");

        update(Message::Close(id), at(t0, 400));
        update(Message::Tick, at(t0, 700));
        assert!(with_manager(|manager| manager.alert(id).is_none()));
    }

    #[test]
    fn defaults_set_globally_reach_show() {
        set_defaults(AlertOverrides::new().position(Position::BottomCenter));
        show(AlertOverrides::new());
        assert!(with_manager(|manager| {
            manager.container(Position::BottomCenter).is_some()
        }));
    }
}
