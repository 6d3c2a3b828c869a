// SPDX-License-Identifier: MPL-2.0
//! Alert enumerations: severity, screen position and visual theme.
//!
//! Severity and theme are parsed leniently: an unrecognized value degrades
//! to the closest known one and never fails. Positions name a physical
//! screen slot, so an unknown position is a parse error.

use std::fmt;
use std::str::FromStr;

/// Semantic category of an alert, driving its icon and colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Neutral information.
    #[default]
    Info,
    /// An operation completed successfully.
    Success,
    /// Something needs attention but nothing failed.
    Warning,
    /// An operation failed.
    Error,
}

impl Severity {
    /// All known severities, in declaration order.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];

    /// Parses a severity name, falling back to [`Severity::Info`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_str_lossy(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual styling scheme, applied independently of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKind {
    /// Plain message boxes with coloured accents.
    Basic,
    /// Solid, severity-coloured boxes.
    #[default]
    Immersive,
}

impl ThemeKind {
    /// Both known themes.
    pub const ALL: [ThemeKind; 2] = [ThemeKind::Basic, ThemeKind::Immersive];

    /// Parses a theme name; anything other than `basic` resolves to
    /// [`ThemeKind::Immersive`].
    #[must_use]
    pub fn from_str_lossy(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "basic" => ThemeKind::Basic,
            _ => ThemeKind::Immersive,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKind::Basic => "basic",
            ThemeKind::Immersive => "immersive",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal placement of a position's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
    Left,
    Center,
    Right,
}

/// Vertical placement of a position's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// Screen slot an alert stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Position {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// All six positions.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns the kebab-case key, e.g. `top-center`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    #[must_use]
    pub fn horizontal(self) -> HorizontalEdge {
        match self {
            Position::TopLeft | Position::BottomLeft => HorizontalEdge::Left,
            Position::TopCenter | Position::BottomCenter => HorizontalEdge::Center,
            Position::TopRight | Position::BottomRight => HorizontalEdge::Right,
        }
    }

    #[must_use]
    pub fn vertical(self) -> VerticalEdge {
        match self {
            Position::TopLeft | Position::TopCenter | Position::TopRight => VerticalEdge::Top,
            Position::BottomLeft | Position::BottomCenter | Position::BottomRight => {
                VerticalEdge::Bottom
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a position key is not one of the six known slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown alert position: {}", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == key)
            .ok_or(UnknownPosition(s.to_string()))
    }
}
