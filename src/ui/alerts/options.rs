// SPDX-License-Identifier: MPL-2.0
//! Alert options and their default layering.
//!
//! Every alert is described by a fully resolved [`AlertOptions`]. Callers
//! only supply [`AlertOverrides`], a sparse version of the same fields, and
//! resolution applies three layers in order:
//!
//! 1. built-in defaults ([`AlertOptions::default`])
//! 2. plugin-wide defaults set by the embedding application
//! 3. per-call overrides
//!
//! A `Some` field in a later layer replaces the earlier value.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::config::defaults::{DEFAULT_MESSAGE, DEFAULT_PROGRESS_BAR, DEFAULT_STICKY, DEFAULT_TITLE};
use crate::domain::alert::{AutoHideDelay, Position, Severity, ThemeKind};

/// Payload forwarded to a [`CompletionHook`].
pub type CallbackData = Value;

/// Notification invoked once per `show`, right after the alert is inserted.
///
/// Cloning shares the same closure, so a hook placed in the plugin-wide
/// defaults fires for every alert that inherits it.
#[derive(Clone)]
pub struct CompletionHook(Arc<dyn Fn(Option<&CallbackData>) + Send + Sync>);

impl CompletionHook {
    pub fn new(hook: impl Fn(Option<&CallbackData>) + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    /// Runs the hook. Panics inside the hook propagate to the caller.
    pub fn notify(&self, data: Option<&CallbackData>) {
        (self.0)(data);
    }
}

impl fmt::Debug for CompletionHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompletionHook(..)")
    }
}

/// A completion notification captured during `show`, not yet delivered.
#[derive(Debug)]
#[must_use = "a pending completion does nothing until fired"]
pub struct PendingCompletion {
    hook: CompletionHook,
    data: Option<CallbackData>,
}

impl PendingCompletion {
    /// Delivers the notification, consuming it so it runs at most once.
    pub fn fire(self) {
        self.hook.notify(self.data.as_ref());
    }
}

/// Fully resolved configuration of one alert.
#[derive(Debug, Clone)]
pub struct AlertOptions {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub position: Position,
    /// Sticky alerts never auto-hide and never show a progress bar.
    pub sticky: bool,
    pub progress_bar: bool,
    /// Only meaningful when `sticky` is false.
    pub auto_hide_delay: AutoHideDelay,
    pub theme: ThemeKind,
    pub on_complete: Option<CompletionHook>,
    pub on_complete_data: Option<CallbackData>,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            severity: Severity::default(),
            position: Position::default(),
            sticky: DEFAULT_STICKY,
            progress_bar: DEFAULT_PROGRESS_BAR,
            auto_hide_delay: AutoHideDelay::default(),
            theme: ThemeKind::default(),
            on_complete: None,
            on_complete_data: None,
        }
    }
}

impl AlertOptions {
    /// Resolves built-in defaults, then `global`, then `call`.
    #[must_use]
    pub fn resolve(global: &AlertOverrides, call: AlertOverrides) -> Self {
        let mut options = Self::default();
        options.apply(global.clone());
        options.apply(call);
        options
    }

    /// Overwrites every field that `overrides` sets.
    pub fn apply(&mut self, overrides: AlertOverrides) {
        let AlertOverrides {
            title,
            message,
            severity,
            position,
            sticky,
            progress_bar,
            auto_hide_delay,
            theme,
            on_complete,
            on_complete_data,
        } = overrides;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(message) = message {
            self.message = message;
        }
        if let Some(severity) = severity {
            self.severity = severity;
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(sticky) = sticky {
            self.sticky = sticky;
        }
        if let Some(progress_bar) = progress_bar {
            self.progress_bar = progress_bar;
        }
        if let Some(delay) = auto_hide_delay {
            self.auto_hide_delay = delay;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if on_complete.is_some() {
            self.on_complete = on_complete;
        }
        if on_complete_data.is_some() {
            self.on_complete_data = on_complete_data;
        }
    }

    /// Whether the rendered alert carries a progress indicator.
    #[must_use]
    pub fn shows_progress_bar(&self) -> bool {
        self.progress_bar && !self.sticky
    }

    /// Splits off the completion notification, if a hook is configured.
    pub(crate) fn take_completion(&mut self) -> Option<PendingCompletion> {
        let hook = self.on_complete.take()?;
        Some(PendingCompletion {
            hook,
            data: self.on_complete_data.take(),
        })
    }
}

/// Sparse alert configuration: one layer of defaults or a per-call request.
///
/// Deserializes from the `[alert]` table of the configuration file. The
/// completion hook can only be set in code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Unknown names degrade to `info`.
    #[serde(
        default,
        alias = "type",
        deserialize_with = "deserialize_severity",
        serialize_with = "serialize_display",
        skip_serializing_if = "Option::is_none"
    )]
    pub severity: Option<Severity>,

    /// Unknown names are rejected.
    #[serde(
        default,
        deserialize_with = "deserialize_position",
        serialize_with = "serialize_display",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<Position>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_bar: Option<bool>,

    #[serde(
        default,
        rename = "auto_hide_delay_ms",
        deserialize_with = "deserialize_delay",
        serialize_with = "serialize_delay",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_hide_delay: Option<AutoHideDelay>,

    /// Unknown names degrade to `immersive`.
    #[serde(
        default,
        deserialize_with = "deserialize_theme",
        serialize_with = "serialize_display",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<ThemeKind>,

    #[serde(skip)]
    pub on_complete: Option<CompletionHook>,

    #[serde(
        default,
        alias = "callback_data",
        skip_serializing_if = "Option::is_none"
    )]
    pub on_complete_data: Option<CallbackData>,
}

impl AlertOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = Some(sticky);
        self
    }

    #[must_use]
    pub fn progress_bar(mut self, progress_bar: bool) -> Self {
        self.progress_bar = Some(progress_bar);
        self
    }

    #[must_use]
    pub fn auto_hide_delay_ms(mut self, millis: u64) -> Self {
        self.auto_hide_delay = Some(AutoHideDelay::from_millis(millis));
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: ThemeKind) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn on_complete(
        mut self,
        hook: impl Fn(Option<&CallbackData>) + Send + Sync + 'static,
    ) -> Self {
        self.on_complete = Some(CompletionHook::new(hook));
        self
    }

    #[must_use]
    pub fn on_complete_data(mut self, data: CallbackData) -> Self {
        self.on_complete_data = Some(data);
        self
    }
}

// =============================================================================
// Serde helpers
// =============================================================================

fn deserialize_severity<'de, D>(deserializer: D) -> Result<Option<Severity>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Some(Severity::from_str_lossy(&raw)))
}

fn deserialize_theme<'de, D>(deserializer: D) -> Result<Option<ThemeKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Some(ThemeKind::from_str_lossy(&raw)))
}

fn deserialize_position<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map(Some).map_err(D::Error::custom)
}

fn deserialize_delay<'de, D>(deserializer: D) -> Result<Option<AutoHideDelay>, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = u64::deserialize(deserializer)?;
    Ok(Some(AutoHideDelay::from_millis(millis)))
}

fn serialize_display<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: fmt::Display,
{
    match value {
        Some(value) => serializer.collect_str(value),
        None => serializer.serialize_none(),
    }
}

fn serialize_delay<S>(value: &Option<AutoHideDelay>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(delay) => serializer.serialize_u64(delay.as_millis()),
        None => serializer.serialize_none(),
    }
}
