// SPDX-License-Identifier: MPL-2.0
//! Theme resolution: which icon and box class an alert gets.
//!
//! The lookup is a pure, total function of `(theme, severity)`. Raw strings
//! go through the lenient parsers first, so an unknown severity resolves
//! exactly like `info` and an unknown theme like `immersive`.

use crate::domain::alert::{Severity, ThemeKind};

/// Icon shown at the leading edge of an alert box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertIcon {
    RemoveCircle,
    InfoCircle,
    CheckCircle,
    WarningCircle,
}

impl AlertIcon {
    /// Icon class identifier, as understood by the icon font.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            AlertIcon::RemoveCircle => "remove circle icon",
            AlertIcon::InfoCircle => "info circle icon",
            AlertIcon::CheckCircle => "check circle icon",
            AlertIcon::WarningCircle => "warning circle icon",
        }
    }

    /// Glyph used when drawing the icon as text.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            AlertIcon::RemoveCircle => "\u{2716}",
            AlertIcon::InfoCircle => "\u{2139}",
            AlertIcon::CheckCircle => "\u{2714}",
            AlertIcon::WarningCircle => "\u{26A0}",
        }
    }
}

/// Resolved presentation of one alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertStyle {
    pub icon: AlertIcon,
    pub box_class: &'static str,
}

/// Maps a theme and severity to the alert's icon and box class.
#[must_use]
pub fn resolve_style(theme: ThemeKind, severity: Severity) -> AlertStyle {
    let icon = match severity {
        Severity::Error => AlertIcon::RemoveCircle,
        Severity::Info => AlertIcon::InfoCircle,
        Severity::Success => AlertIcon::CheckCircle,
        Severity::Warning => AlertIcon::WarningCircle,
    };

    let box_class = match (theme, severity) {
        (ThemeKind::Immersive, Severity::Error) => "ui icon message alert-stack-box__error",
        (ThemeKind::Immersive, Severity::Info) => "ui icon message alert-stack-box__info",
        (ThemeKind::Immersive, Severity::Success) => "ui icon message alert-stack-box__success",
        (ThemeKind::Immersive, Severity::Warning) => "ui icon message alert-stack-box__warning",
        (ThemeKind::Basic, Severity::Error) => "ui negative icon message",
        (ThemeKind::Basic, Severity::Info) => "ui info icon message",
        (ThemeKind::Basic, Severity::Success) => "ui positive icon message",
        (ThemeKind::Basic, Severity::Warning) => "ui warning icon message",
    };

    AlertStyle { icon, box_class }
}

/// [`resolve_style`] for raw, possibly unknown, names.
#[must_use]
pub fn resolve_style_lossy(theme: &str, severity: &str) -> AlertStyle {
    resolve_style(
        ThemeKind::from_str_lossy(theme),
        Severity::from_str_lossy(severity),
    )
}
