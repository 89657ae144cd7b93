//! Core application state and Iced Application implementation
//!
//! The window is a thin shell around [`Checker`]: messages are turned into
//! checker calls, and a submission becomes one `Task` that reports back with
//! its sequence number.

use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, text, Space};
use iced::{event, window, Background, Border, Element, Event, Length, Subscription, Task, Theme};

use crate::backend::{CheckFailure, CheckResult, PredictionClient};
use crate::checker::{Checker, Submission, UiState};
use crate::config::CheckerConfig;
use crate::ui::{theme::DarkTheme, url_bar, verdict};

// ============================================================================
// Application State
// ============================================================================

pub struct PhishCheck {
    checker: Checker,
    client: PredictionClient,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    CheckSettled {
        seq: u64,
        outcome: Result<CheckResult, CheckFailure>,
    },
    Escape,
}

impl PhishCheck {
    pub fn new(config: &CheckerConfig) -> Self {
        let client = PredictionClient::new(config);
        tracing::info!("Checking URLs against {}", client.predict_url());
        Self {
            checker: Checker::new(config.stale_policy),
            client,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(input) => {
                self.checker.set_input(input);
                Task::none()
            }

            Message::Submit => match self.checker.submit() {
                Some(Submission { seq, request }) => {
                    let client = self.client.clone();
                    Task::perform(
                        async move { client.predict(&request).await },
                        move |outcome| Message::CheckSettled { seq, outcome },
                    )
                }
                None => Task::none(),
            },

            Message::CheckSettled { seq, outcome } => {
                if let Err(failure) = &outcome {
                    tracing::warn!("Check #{} failed: {}", seq, failure);
                }
                if !self.checker.settle(seq, outcome) {
                    tracing::debug!(
                        "Dropping stale answer #{} (latest is #{})",
                        seq,
                        self.checker.latest_seq()
                    );
                }
                Task::none()
            }

            Message::Escape => {
                self.checker.clear();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("Phishing URL Checker").size(28).color(DarkTheme::TEXT),
            text("Machine-learning verdicts for suspicious links")
                .size(14)
                .color(DarkTheme::TEXT_MUTED),
        ]
        .spacing(6);

        let on_submit = (!self.checker.is_loading()).then_some(Message::Submit);
        let form = url_bar::view(self.checker.input(), Message::InputChanged, on_submit);

        let outcome: Element<'_, Message> = match self.checker.state() {
            UiState::Idle | UiState::Loading => Space::with_height(0).into(),
            UiState::Success(result) => verdict::view(result),
            UiState::Failed(message) => self.view_error(message),
        };

        container(
            column![header, Space::with_height(12), form, outcome]
                .spacing(16)
                .max_width(640),
        )
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::BACKGROUND)),
            ..Default::default()
        })
        .into()
    }

    fn view_error<'a>(&self, message: &'a str) -> Element<'a, Message> {
        container(text(message).size(15).color(DarkTheme::DANGER))
            .padding(16)
            .width(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::DANGER_SURFACE)),
                border: Border {
                    color: DarkTheme::DANGER,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Captured events are included so Escape clears even while the input has focus.
        event::listen_with(on_event)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn on_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => key_message(&key),
        _ => None,
    }
}

fn key_message(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::Escape),
        _ => None,
    }
}
