// SPDX-License-Identifier: MPL-2.0
//! Demo application: type a message, pick a kind and watch the toast fade out.
//!
//! The window owns a [`Document`] with a single notification container and a
//! [`Notifier`] on wall-clock time. A tick subscription runs while timers are
//! pending; the container is drawn as an overlay above the form.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::notifications::{Document, NotificationRequest, Notifier, SystemClock};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toast;
use iced::widget::{button, text, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Subscription, Task, Theme};

/// Kinds offered by the picker.
pub const KINDS: [&str; 5] = ["info", "success", "warning", "error", "danger"];

const APP_TITLE: &str = "Toast Notify";

/// Root state of the demo window.
pub struct App {
    notifier: Notifier<SystemClock>,
    document: Document,
    draft: String,
    kind: String,
    timeout_ms: Option<i64>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}

fn load_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not load settings, using defaults");
        Config::default()
    })
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let settings = load_config(&flags).notifier_settings();
        let document = Document::with_container(settings.container_id.clone());
        let kind = flags
            .kind
            .clone()
            .unwrap_or_else(|| settings.default_kind.clone());

        let mut app = Self {
            notifier: Notifier::new(SystemClock::new(), settings),
            document,
            draft: String::new(),
            kind,
            timeout_ms: flags.timeout_ms,
        };

        if let Some(message) = flags.message {
            app.show(message);
        }

        (app, Task::none())
    }

    fn request(&self, message: String) -> NotificationRequest {
        let request = self.notifier.request(message).with_kind(self.kind.clone());
        match self.timeout_ms {
            Some(ms) => request.with_timeout_ms(ms),
            None => request,
        }
    }

    fn show(&mut self, message: String) {
        let request = self.request(message);
        if let Err(err) = self.notifier.notify_with(&mut self.document, request) {
            tracing::error!(error = %err, "failed to show toast");
        }
    }

    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(!self.notifier.is_idle())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DraftChanged(draft) => {
                self.draft = draft;
            }
            Message::KindSelected(kind) => {
                self.kind = kind.to_string();
            }
            Message::Notify => {
                let message = std::mem::take(&mut self.draft);
                self.show(message);
            }
            Message::Tick(_instant) => {
                self.notifier.tick(&mut self.document);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let heading = Text::new(APP_TITLE).size(typography::TITLE_MD);

        let input = text_input("Message", &self.draft)
            .on_input(Message::DraftChanged)
            .on_submit(Message::Notify)
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fixed(sizing::INPUT_WIDTH));

        let kinds = KINDS.into_iter().fold(Row::new().spacing(spacing::XS), |row, kind| {
            let label = if self.kind == kind {
                format!("[{kind}]")
            } else {
                kind.to_string()
            };
            row.push(button(text(label)).on_press(Message::KindSelected(kind)))
        });

        let form = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(heading)
            .push(input)
            .push(kinds)
            .push(button(text("Notify")).on_press(Message::Notify));

        let base = Container::new(form)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG);

        let mut layers = Stack::new().push(base);
        if let Some(region) = self.document.container(&self.notifier.settings().container_id) {
            layers = layers.push(toast::view_overlay(region));
        }
        layers.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Phase;
    use std::fs;
    use tempfile::tempdir;

    fn flags_with_config(config: &Config) -> (tempfile::TempDir, Flags) {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        config::save_to_path(config, &path).expect("failed to save config");
        let flags = Flags {
            config_path: Some(path),
            ..Flags::default()
        };
        (temp_dir, flags)
    }

    fn toasts(app: &App) -> Vec<(String, String)> {
        app.document
            .container(&app.notifier.settings().container_id)
            .map(|c| {
                c.children()
                    .iter()
                    .map(|e| (e.class_name().to_string(), e.text().to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn initial_message_flag_shows_a_toast() {
        let (_dir, mut flags) = flags_with_config(&Config::default());
        flags.message = Some("Welcome".to_string());

        let (app, _task) = App::new(flags);
        assert_eq!(toasts(&app), vec![("notify info".to_string(), "Welcome".to_string())]);
        assert!(!app.notifier.is_idle());
    }

    #[test]
    fn notify_uses_selected_kind_and_clears_draft() {
        let (_dir, flags) = flags_with_config(&Config::default());
        let (mut app, _task) = App::new(flags);

        let _ = app.update(Message::DraftChanged("Saved".to_string()));
        let _ = app.update(Message::KindSelected("success"));
        let _ = app.update(Message::Notify);

        assert!(app.draft.is_empty());
        assert_eq!(toasts(&app), vec![("notify success".to_string(), "Saved".to_string())]);
    }

    #[test]
    fn configured_container_and_kind_are_used() {
        let config = Config {
            container_id: Some("toasts".to_string()),
            default_kind: Some("warning".to_string()),
            ..Config::default()
        };
        let (_dir, mut flags) = flags_with_config(&config);
        flags.message = Some("Heads up".to_string());

        let (app, _task) = App::new(flags);
        assert!(app.document.container("toasts").is_some());
        assert_eq!(toasts(&app)[0].0, "notify warning");
    }

    #[test]
    fn zero_timeout_flag_fades_on_first_tick() {
        let (_dir, mut flags) = flags_with_config(&Config::default());
        flags.message = Some("Quick".to_string());
        flags.timeout_ms = Some(-1);

        let (mut app, _task) = App::new(flags);
        let id = app
            .document
            .container(&app.notifier.settings().container_id)
            .and_then(|c| c.children().first().map(|e| e.id()))
            .expect("toast present");

        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert_eq!(app.notifier.phase(&app.document, id), Phase::Fading);
    }

    #[test]
    fn timeout_flag_sets_request_timeout() {
        let (_dir, mut flags) = flags_with_config(&Config::default());
        flags.timeout_ms = Some(1500);
        let (app, _task) = App::new(flags);
        assert_eq!(
            app.request("x".to_string()).timeout(),
            std::time::Duration::from_millis(1500)
        );
    }

    #[test]
    fn danger_kind_is_offered_by_the_picker() {
        let (_dir, flags) = flags_with_config(&Config::default());
        let (mut app, _task) = App::new(flags);

        assert!(KINDS.contains(&"danger"));
        let _ = app.update(Message::KindSelected("danger"));
        let _ = app.update(Message::DraftChanged("Denied".to_string()));
        let _ = app.update(Message::Notify);
        assert_eq!(toasts(&app), vec![("notify danger".to_string(), "Denied".to_string())]);
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "default_kind = [").expect("failed to write file");

        let flags = Flags {
            config_path: Some(path),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);
        assert_eq!(app.kind, "info");
    }

    #[test]
    fn view_builds_with_pending_toasts() {
        let (_dir, mut flags) = flags_with_config(&Config::default());
        flags.message = Some("Rendered".to_string());
        let (app, _task) = App::new(flags);
        let _ = app.view();
        assert_eq!(app.title(), "Toast Notify");
    }
}
