// SPDX-License-Identifier: MPL-2.0
//! One alert instance and its lifecycle.
//!
//! ```text
//! Appearing ─► Visible(counting) ⇄ Visible(paused)
//!     │              │
//!     └──────────────┴──► Disappearing ─► Removed
//! ```
//!
//! The countdown starts at insertion, so it already runs while the alert
//! fades in. Expiry or the close affordance starts the fade-out; once it
//! completes the alert is `Removed` and every later event is ignored.

use std::time::{Duration, Instant};

use super::countdown::Countdown;
use super::options::AlertOptions;
use super::style::{resolve_style, AlertStyle};
use crate::domain::alert::{timing, AlertId, Position, Severity, ThemeKind};

/// Countdown status of a visible alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Counting,
    Paused,
    /// No countdown at all: only the close affordance dismisses it.
    Sticky,
}

/// Externally observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    Appearing,
    Visible(CountdownState),
    Disappearing,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Appearing { since: Instant },
    Visible,
    Disappearing { since: Instant, from_opacity: f32 },
    Removed,
}

/// Transition produced by [`Alert::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Fade-in finished.
    Shown,
    /// Countdown ran out; fade-out started.
    Expired,
    /// Fade-out finished; the element must be detached.
    Removed,
}

/// Visual parts of an alert box, in drawing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertElement {
    pub style: AlertStyle,
    pub header: String,
    pub body: String,
    /// Present only for non-sticky alerts with the progress bar enabled.
    pub has_progress: bool,
}

/// A single alert box.
#[derive(Debug, Clone)]
pub struct Alert {
    id: AlertId,
    position: Position,
    severity: Severity,
    theme: ThemeKind,
    element: AlertElement,
    /// `None` for sticky alerts.
    countdown: Option<Countdown>,
    phase: Phase,
}

impl Alert {
    /// Builds the alert from resolved options and starts its fade-in and,
    /// unless sticky, its countdown.
    #[must_use]
    pub fn new(id: AlertId, options: &AlertOptions, now: Instant) -> Self {
        let element = AlertElement {
            style: resolve_style(options.theme, options.severity),
            header: options.title.clone(),
            body: options.message.clone(),
            has_progress: options.shows_progress_bar(),
        };
        let countdown = (!options.sticky).then(|| Countdown::started(options.auto_hide_delay, now));

        Self {
            id,
            position: options.position,
            severity: options.severity,
            theme: options.theme,
            element,
            countdown,
            phase: Phase::Appearing { since: now },
        }
    }

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    #[must_use]
    pub fn element(&self) -> &AlertElement {
        &self.element
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.countdown.is_none()
    }

    #[must_use]
    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    #[must_use]
    pub fn state(&self) -> AlertState {
        match self.phase {
            Phase::Appearing { .. } => AlertState::Appearing,
            Phase::Visible => AlertState::Visible(self.countdown_state()),
            Phase::Disappearing { .. } => AlertState::Disappearing,
            Phase::Removed => AlertState::Removed,
        }
    }

    fn countdown_state(&self) -> CountdownState {
        match &self.countdown {
            None => CountdownState::Sticky,
            Some(countdown) if countdown.is_paused() => CountdownState::Paused,
            Some(_) => CountdownState::Counting,
        }
    }

    fn is_dismissing(&self) -> bool {
        matches!(self.phase, Phase::Disappearing { .. } | Phase::Removed)
    }

    /// Pointer entered the alert: freeze the countdown.
    ///
    /// Returns true when a running countdown was paused.
    pub fn hover_enter(&mut self) -> bool {
        if self.is_dismissing() {
            return false;
        }
        self.countdown.as_mut().is_some_and(Countdown::pause)
    }

    /// Pointer left the alert: restart the full countdown.
    ///
    /// Returns true when a countdown was restarted.
    pub fn hover_leave(&mut self, now: Instant) -> bool {
        if self.is_dismissing() {
            return false;
        }
        match self.countdown.as_mut() {
            Some(countdown) => {
                countdown.resume(now);
                true
            }
            None => false,
        }
    }

    /// Close affordance activated: start fading out right away.
    ///
    /// Returns false if the alert was already on its way out.
    pub fn close(&mut self, now: Instant) -> bool {
        self.begin_dismiss(now)
    }

    /// Applies every time-driven transition due at `now`.
    ///
    /// A single call can move several steps, e.g. when ticks were sparse.
    pub fn advance(&mut self, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();

        if let Phase::Appearing { since } = self.phase {
            if now >= since + fade_in() {
                self.phase = Phase::Visible;
                transitions.push(Transition::Shown);
            }
        }

        if !self.is_dismissing() {
            if let Some(deadline) = self.countdown.as_ref().and_then(Countdown::deadline) {
                if now >= deadline {
                    self.begin_dismiss(deadline);
                    transitions.push(Transition::Expired);
                }
            }
        }

        if let Phase::Disappearing { since, .. } = self.phase {
            if now >= since + fade_out() {
                self.phase = Phase::Removed;
                transitions.push(Transition::Removed);
            }
        }

        transitions
    }

    fn begin_dismiss(&mut self, now: Instant) -> bool {
        if self.is_dismissing() {
            return false;
        }
        let from_opacity = self.opacity(now);
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.cancel(now);
        }
        self.phase = Phase::Disappearing {
            since: now,
            from_opacity,
        };
        true
    }

    /// Opacity of the whole box at `now`, from 0.0 to 1.0.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Appearing { since } => fraction_elapsed(since, fade_in(), now),
            Phase::Visible => 1.0,
            Phase::Disappearing {
                since,
                from_opacity,
            } => from_opacity * (1.0 - fraction_elapsed(since, fade_out(), now)),
            Phase::Removed => 0.0,
        }
    }

    /// Width fraction of the progress indicator, or `None` if the alert has
    /// no indicator.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        if !self.element.has_progress {
            return None;
        }
        self.countdown
            .as_ref()
            .map(|countdown| countdown.remaining_fraction(now))
    }

    /// Next instant at which [`advance`](Self::advance) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Appearing { since } => {
                let shown = since + fade_in();
                let expiry = self.countdown.as_ref().and_then(Countdown::deadline);
                Some(expiry.map_or(shown, |expiry| expiry.min(shown)))
            }
            Phase::Visible => self.countdown.as_ref().and_then(Countdown::deadline),
            Phase::Disappearing { since, .. } => Some(since + fade_out()),
            Phase::Removed => None,
        }
    }
}

fn fade_in() -> Duration {
    Duration::from_millis(timing::FADE_IN_MS)
}

fn fade_out() -> Duration {
    Duration::from_millis(timing::FADE_OUT_MS)
}

fn fraction_elapsed(since: Instant, total: Duration, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(since);
    if elapsed >= total {
        1.0
    } else {
        elapsed.as_secs_f32() / total.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, at, F32_EPSILON};
    use crate::ui::alerts::options::AlertOverrides;

    fn alert_with(overrides: AlertOverrides, now: Instant) -> Alert {
        let options = AlertOptions::resolve(&AlertOverrides::new(), overrides);
        Alert::new(AlertId::next(), &options, now)
    }

    fn counting(now: Instant) -> Alert {
        alert_with(AlertOverrides::new().auto_hide_delay_ms(5000), now)
    }

    #[test]
    fn starts_appearing_with_zero_opacity() {
        let t0 = Instant::now();
        let alert = counting(t0);

        assert_eq!(alert.state(), AlertState::Appearing);
        assert_abs_diff_eq!(alert.opacity(t0), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(alert.opacity(at(t0, 150)), 0.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn becomes_visible_after_fade_in() {
        let t0 = Instant::now();
        let mut alert = counting(t0);

        assert!(alert.advance(at(t0, 100)).is_empty());
        assert_eq!(alert.advance(at(t0, 300)), vec![Transition::Shown]);
        assert_eq!(alert.state(), AlertState::Visible(CountdownState::Counting));
        assert_abs_diff_eq!(alert.opacity(at(t0, 400)), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn expires_then_fades_out_then_removed() {
        let t0 = Instant::now();
        let mut alert = counting(t0);
        alert.advance(at(t0, 300));

        assert_eq!(alert.advance(at(t0, 5000)), vec![Transition::Expired]);
        assert_eq!(alert.state(), AlertState::Disappearing);
        assert_abs_diff_eq!(alert.opacity(at(t0, 5150)), 0.5, epsilon = F32_EPSILON);

        assert_eq!(alert.advance(at(t0, 5300)), vec![Transition::Removed]);
        assert!(alert.is_removed());
        assert_eq!(alert.next_deadline(), None);
    }

    #[test]
    fn sparse_tick_runs_every_due_transition() {
        let t0 = Instant::now();
        let mut alert = counting(t0);

        assert_eq!(
            alert.advance(at(t0, 10_000)),
            vec![Transition::Shown, Transition::Expired, Transition::Removed]
        );
    }

    #[test]
    fn hover_pauses_and_leave_restarts_full_delay() {
        let t0 = Instant::now();
        let mut alert = counting(t0);
        alert.advance(at(t0, 300));

        assert!(alert.hover_enter());
        assert_eq!(alert.state(), AlertState::Visible(CountdownState::Paused));
        assert!(alert.advance(at(t0, 60_000)).is_empty());

        assert!(alert.hover_leave(at(t0, 60_000)));
        assert_eq!(alert.state(), AlertState::Visible(CountdownState::Counting));
        assert!(alert.advance(at(t0, 64_999)).is_empty());
        assert_eq!(alert.advance(at(t0, 65_000)), vec![Transition::Expired]);
    }

    #[test]
    fn hover_during_fade_in_still_pauses() {
        let t0 = Instant::now();
        let mut alert = counting(t0);

        assert!(alert.hover_enter());
        assert_eq!(alert.advance(at(t0, 9000)), vec![Transition::Shown]);
        assert_eq!(alert.state(), AlertState::Visible(CountdownState::Paused));
    }

    #[test]
    fn sticky_alert_never_expires_and_has_no_progress() {
        let t0 = Instant::now();
        let mut alert = alert_with(AlertOverrides::new().sticky(true).progress_bar(true), t0);

        assert!(alert.is_sticky());
        assert!(!alert.element().has_progress);
        assert_eq!(alert.progress(t0), None);
        assert!(!alert.hover_enter());
        assert!(!alert.hover_leave(t0));

        assert_eq!(alert.advance(at(t0, 3_600_000)), vec![Transition::Shown]);
        assert_eq!(alert.state(), AlertState::Visible(CountdownState::Sticky));
    }

    #[test]
    fn close_is_idempotent_and_wins_over_timer() {
        let t0 = Instant::now();
        let mut alert = counting(t0);
        alert.advance(at(t0, 300));

        assert!(alert.close(at(t0, 1000)));
        assert!(!alert.close(at(t0, 1100)));
        assert!(alert.advance(at(t0, 1200)).is_empty());
        assert_eq!(alert.advance(at(t0, 1300)), vec![Transition::Removed]);
        assert!(!alert.close(at(t0, 1400)));
    }

    #[test]
    fn close_after_missed_deadline_beats_the_late_tick() {
        let t0 = Instant::now();
        let mut alert = counting(t0);
        alert.advance(at(t0, 300));

        // Deadline at 5000 passed without a tick; the close comes first.
        assert!(alert.close(at(t0, 5100)));
        assert_eq!(alert.state(), AlertState::Disappearing);
        assert!(alert.advance(at(t0, 5200)).is_empty());
        assert_eq!(alert.advance(at(t0, 5400)), vec![Transition::Removed]);
    }

    #[test]
    fn close_works_on_sticky_alerts() {
        let t0 = Instant::now();
        let mut alert = alert_with(AlertOverrides::new().sticky(true), t0);
        alert.advance(at(t0, 300));

        assert!(alert.close(at(t0, 500)));
        assert_eq!(alert.advance(at(t0, 800)), vec![Transition::Removed]);
    }

    #[test]
    fn hover_after_dismissal_is_ignored() {
        let t0 = Instant::now();
        let mut alert = counting(t0);
        alert.close(at(t0, 400));

        assert!(!alert.hover_enter());
        assert!(!alert.hover_leave(at(t0, 500)));
        assert_eq!(alert.state(), AlertState::Disappearing);
    }

    #[test]
    fn close_during_fade_in_fades_from_current_opacity() {
        let t0 = Instant::now();
        let mut alert = counting(t0);

        alert.close(at(t0, 150));
        assert_abs_diff_eq!(alert.opacity(at(t0, 150)), 0.5, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(alert.opacity(at(t0, 300)), 0.25, epsilon = F32_EPSILON);
    }

    #[test]
    fn progress_tracks_countdown_and_resets_on_pause() {
        let t0 = Instant::now();
        let mut alert = counting(t0);

        let half = alert.progress(at(t0, 2500)).expect("progress shown");
        assert_abs_diff_eq!(half, 0.5, epsilon = F32_EPSILON);

        alert.hover_enter();
        let paused = alert.progress(at(t0, 2500)).expect("progress shown");
        assert_abs_diff_eq!(paused, 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn next_deadline_follows_phase() {
        let t0 = Instant::now();
        let mut alert = counting(t0);
        assert_eq!(alert.next_deadline(), Some(at(t0, 300)));

        alert.advance(at(t0, 300));
        assert_eq!(alert.next_deadline(), Some(at(t0, 5000)));

        alert.hover_enter();
        assert_eq!(alert.next_deadline(), None);
    }
}
