//! URL input and check button

use iced::widget::{button, column, container, text, text_input};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::DarkTheme;

/// URL bar component; `on_submit` is `None` while a check is running
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Option<Message>,
) -> Element<'a, Message> {
    let loading = on_submit.is_none();

    let mut input = text_input("https://example.com (paste a link here)", value)
        .on_input(on_input)
        .padding(Padding::new(14.0))
        .size(18)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(DarkTheme::SURFACE),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 12.0.into(),
            },
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::PRIMARY,
        });
    if let Some(message) = on_submit.clone() {
        input = input.on_submit(message);
    }

    let label = if loading { "Checking..." } else { "CHECK NOW" };
    let check = button(
        container(text(label).size(16).color(DarkTheme::TEXT))
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .on_press_maybe(on_submit)
    .padding(Padding::new(12.0))
    .width(Length::Fill)
    .style(|_theme, status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Disabled => DarkTheme::PRIMARY_DISABLED,
            _ => DarkTheme::PRIMARY,
        })),
        text_color: DarkTheme::TEXT,
        border: Border::default().rounded(12),
        ..Default::default()
    });

    column![input, check].spacing(12).into()
}
