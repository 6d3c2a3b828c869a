// SPDX-License-Identifier: MPL-2.0
//! Demo application showing alert stacks.
//!
//! The `App` struct drives the shared alert manager through the
//! [`alerts`] entry points next to a small control panel: one button per
//! severity, a sticky alert, and pickers for the target position and
//! theme. Defaults are read from `alerts.toml` at boot.

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use iced::widget::{button, pick_list, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Subscription, Task, Theme};
use serde_json::json;

use crate::config;
use crate::diagnostics::{DiagnosticsCollector, EventCapacity};
use crate::domain::alert::{Position, Severity, ThemeKind};
use crate::ui::alerts::{self, AlertOverrides};
use crate::ui::design_tokens::{spacing, typography};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for alerts.toml).
    /// Takes precedence over `ALERT_STACK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Alerts(alerts::Message),
    Show(Severity),
    ShowSticky,
    PositionSelected(Position),
    ThemeSelected(ThemeKind),
}

/// Root state of the demo window.
pub struct App {
    position: Position,
    theme: ThemeKind,
    diagnostics: DiagnosticsCollector,
    config_warning: Option<String>,
    shown: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("position", &self.position)
            .field("theme", &self.theme)
            .field("live_alerts", &live_count())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let diagnostics = DiagnosticsCollector::new(EventCapacity::default());
        let handle = diagnostics.handle();
        alerts::with_manager(|manager| manager.set_diagnostics(handle));

        Self {
            position: Position::default(),
            theme: ThemeKind::default(),
            diagnostics,
            config_warning: None,
            shown: 0,
        }
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(iced::Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        ))
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configured defaults and seeds the manager with them.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));
        if let Some(key) = &warning {
            log::warn!("{key}: falling back to built-in alert defaults");
        }

        let mut app = App::default();
        if let Some(position) = config.alert.position {
            app.position = position;
        }
        if let Some(theme) = config.alert.theme {
            app.theme = theme;
        }
        alerts::set_defaults(config.alert);
        app.config_warning = warning;

        (app, Task::none())
    }

    fn title(&self) -> String {
        match live_count() {
            0 => "Alert Stack".to_string(),
            n => format!("Alert Stack ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Alerts(message) => alerts::update(message, now),
            Message::Show(severity) => {
                let overrides = self
                    .base_overrides()
                    .severity(severity)
                    .title(severity_title(severity))
                    .message(format!("Alert number {} at {}", self.shown + 1, self.position));
                self.show(overrides, now);
            }
            Message::ShowSticky => {
                let overrides = self
                    .base_overrides()
                    .sticky(true)
                    .title("Sticky")
                    .message("Stays until closed");
                self.show(overrides, now);
            }
            Message::PositionSelected(position) => self.position = position,
            Message::ThemeSelected(theme) => self.theme = theme,
        }
        self.diagnostics.process_pending();
        Task::none()
    }

    fn base_overrides(&self) -> AlertOverrides {
        AlertOverrides::new()
            .position(self.position)
            .theme(self.theme)
    }

    fn show(&mut self, overrides: AlertOverrides, now: Instant) {
        self.shown += 1;
        let overrides = overrides
            .on_complete(|data| log::info!("alert shown: {data:?}"))
            .on_complete_data(json!({ "sequence": self.shown }));
        alerts::show_at(overrides, now);
    }

    fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();

        let severities = Severity::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, &severity| {
                row.push(button(Text::new(severity_title(severity))).on_press(Message::Show(severity)))
            },
        );

        let pickers = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new("Position"))
            .push(pick_list(
                &Position::ALL[..],
                Some(self.position),
                Message::PositionSelected,
            ))
            .push(Text::new("Theme"))
            .push(pick_list(
                &ThemeKind::ALL[..],
                Some(self.theme),
                Message::ThemeSelected,
            ));

        let last_event = self
            .diagnostics
            .kinds()
            .last()
            .map_or_else(|| "No events yet".to_string(), ToString::to_string);

        let mut controls = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("Alert Stack").size(typography::TITLE_SM * 1.5))
            .push(severities)
            .push(button(Text::new("Sticky")).on_press(Message::ShowSticky))
            .push(pickers)
            .push(Text::new(last_event).size(typography::BODY));

        if let Some(key) = &self.config_warning {
            controls = controls.push(Text::new(format!("Config ignored: {key}")).size(typography::BODY));
        }

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new()
            .push(content)
            .push(alerts::overlay(now).map(Message::Alerts))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        alerts::subscription().map(Message::Alerts)
    }
}

fn live_count() -> usize {
    alerts::with_manager(|manager| manager.live_count())
}

fn severity_title(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "Info",
        Severity::Success => "Success",
        Severity::Warning => "Warning",
        Severity::Error => "Error",
    }
}
