// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of alert stacks.
//!
//! Every screen position owns one full-window layer, always present and
//! always in the same order, stacked on top of the host content. Alerts in
//! a layer are keyed by their id so widget state (hover tracking) stays with
//! its alert when a sibling is removed.
//!
//! The returned elements own their data, so they can be built from a
//! borrowed manager (including the shared one in [`global`](super::global)).

use std::time::Instant;

use iced::widget::{button, container, keyed_column, mouse_area, Column, Container, Row, Stack, Text};
use iced::{alignment, Alignment, Background, Border, Color, Element, Length, Shadow, Theme};

use super::alert::Alert;
use super::manager::{Manager, Message};
use crate::domain::alert::{AlertId, HorizontalEdge, Position, Severity, ThemeKind, VerticalEdge};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};

/// Glyph of the close affordance.
const CLOSE_GLYPH: &str = "\u{2715}";

/// Renders every position as an overlay layer.
pub fn view_overlay(manager: &Manager, now: Instant) -> Element<'static, Message> {
    Stack::with_children(
        Position::ALL
            .into_iter()
            .map(|position| view_stack(manager, position, now)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Renders the alerts stacked at `position`, in insertion order.
fn view_stack(manager: &Manager, position: Position, now: Instant) -> Element<'static, Message> {
    let cards = keyed_column(
        stack_cards(manager, position, now)
            .into_iter()
            .map(|(id, card)| (id, card.view())),
    )
    .spacing(spacing::XS)
    .align_items(horizontal_alignment(position));

    Container::new(cards)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal_alignment(position))
        .align_y(vertical_alignment(position))
        .padding(spacing::MD)
        .into()
}

fn stack_cards(manager: &Manager, position: Position, now: Instant) -> Vec<(AlertId, AlertCard)> {
    manager
        .alerts_at(position)
        .map(|alert| (alert.id(), AlertCard::new(alert, now)))
        .collect()
}

/// Renders a single alert box: icon, content, close button and the
/// optional countdown strip.
pub fn view_alert(alert: &Alert, now: Instant) -> Element<'static, Message> {
    AlertCard::new(alert, now).view()
}

/// Everything one alert box shows at a given instant.
#[derive(Debug, Clone, PartialEq)]
struct AlertCard {
    style: CardStyle,
    glyph: &'static str,
    header: String,
    body: String,
    /// Filled width of the countdown strip, absent without a strip.
    progress_width: Option<f32>,
    on_close: Message,
    on_enter: Message,
    on_exit: Message,
}

impl AlertCard {
    fn new(alert: &Alert, now: Instant) -> Self {
        let id = alert.id();
        let element = alert.element();

        Self {
            style: CardStyle::resolve(alert.theme(), alert.severity()).faded(alert.opacity(now)),
            glyph: element.style.icon.glyph(),
            header: element.header.clone(),
            body: element.body.clone(),
            progress_width: alert
                .progress(now)
                .map(|remaining| sizing::ALERT_WIDTH * remaining.clamp(0.0, 1.0)),
            on_close: Message::Close(id),
            on_enter: Message::HoverEnter(id),
            on_exit: Message::HoverLeave(id),
        }
    }

    fn view(self) -> Element<'static, Message> {
        let style = self.style;

        let icon = Text::new(self.glyph)
            .size(sizing::ICON_MD)
            .color(style.accent);

        let content = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(
                Text::new(self.header)
                    .size(typography::TITLE_SM)
                    .color(style.text),
            )
            .push(Text::new(self.body).size(typography::BODY).color(style.text));

        let close = button(Text::new(CLOSE_GLYPH).size(sizing::ICON_SM).color(style.text))
            .on_press(self.on_close)
            .padding(spacing::XXS)
            .style(move |_theme: &Theme, status| close_button_style(style, status));

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(content)
            .push(close);

        let mut card = Column::new().push(Container::new(row).padding(spacing::SM));
        if let Some(width) = self.progress_width {
            card = card.push(progress_strip(width, style));
        }

        let card = Container::new(card)
            .width(Length::Fixed(sizing::ALERT_WIDTH))
            .style(move |_theme: &Theme| card_style(style));

        mouse_area(card)
            .on_enter(self.on_enter)
            .on_exit(self.on_exit)
            .into()
    }
}

/// Countdown strip filled up to `width`.
fn progress_strip(width: f32, style: CardStyle) -> Element<'static, Message> {
    let filled = Container::new(Text::new(""))
        .width(Length::Fixed(width))
        .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(style.accent)),
            ..Default::default()
        });

    Container::new(filled)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(style.track)),
            ..Default::default()
        })
        .into()
}

fn horizontal_alignment(position: Position) -> Alignment {
    match position.horizontal() {
        HorizontalEdge::Left => Alignment::Start,
        HorizontalEdge::Center => Alignment::Center,
        HorizontalEdge::Right => Alignment::End,
    }
}

fn vertical_alignment(position: Position) -> Alignment {
    match position.vertical() {
        VerticalEdge::Top => Alignment::Start,
        VerticalEdge::Bottom => Alignment::End,
    }
}

/// Primary colour of a severity.
#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => palette::INFO_500,
        Severity::Success => palette::SUCCESS_500,
        Severity::Warning => palette::WARNING_500,
        Severity::Error => palette::ERROR_500,
    }
}

/// Colours and border of one alert box at a given opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CardStyle {
    background: Color,
    border: Color,
    border_width: f32,
    text: Color,
    accent: Color,
    track: Color,
    shadow: Color,
}

impl CardStyle {
    fn resolve(theme: ThemeKind, severity: Severity) -> Self {
        let severity = severity_color(severity);
        let shadow = Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        };

        match theme {
            ThemeKind::Immersive => Self {
                background: severity,
                border: severity,
                border_width: border::WIDTH_SM,
                text: palette::WHITE,
                accent: palette::WHITE,
                track: Color {
                    a: opacity::PROGRESS_TRACK,
                    ..palette::WHITE
                },
                shadow,
            },
            ThemeKind::Basic => Self {
                background: palette::SURFACE_50,
                border: severity,
                border_width: border::WIDTH_MD,
                text: palette::GRAY_900,
                accent: severity,
                track: Color {
                    a: opacity::PROGRESS_TRACK,
                    ..palette::GRAY_400
                },
                shadow,
            },
        }
    }

    /// Scales every alpha channel by `opacity`.
    fn faded(self, opacity: f32) -> Self {
        let fade = |color: Color| Color {
            a: color.a * opacity,
            ..color
        };
        Self {
            background: fade(self.background),
            border: fade(self.border),
            text: fade(self.text),
            accent: fade(self.accent),
            track: fade(self.track),
            shadow: fade(self.shadow),
            ..self
        }
    }
}

fn card_style(style: CardStyle) -> container::Style {
    container::Style {
        background: Some(Background::Color(style.background)),
        border: Border {
            color: style.border,
            width: style.border_width,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: style.shadow,
            ..shadow::MD
        },
        text_color: Some(style.text),
        ..Default::default()
    }
}

fn close_button_style(style: CardStyle, status: button::Status) -> button::Style {
    let hover_background = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha * style.text.a,
            ..style.text
        }))
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: style.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color: style.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color: style.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
