//! Verdict card and its wording

use iced::widget::{column, container, row, text, Space};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::DarkTheme;
use crate::backend::CheckResult;

pub fn badge(result: &CheckResult) -> &'static str {
    if result.is_phishing() {
        "DETECTED PHISHING"
    } else {
        "SAFE TO VISIT"
    }
}

pub fn analysis(result: &CheckResult) -> &'static str {
    if result.is_phishing() {
        "The URL matches patterns commonly seen on fraudulent sites."
    } else {
        "The URL structure looks safe and within accepted limits."
    }
}

/// Plain-text rendering used by `phishcheck check`
pub fn summary(result: &CheckResult) -> String {
    format!(
        "{}\nURL:        {}\nConfidence: {}%\nAnalysis:   {}\nThreshold:  {}",
        badge(result),
        result.url,
        result.probability_percent(),
        analysis(result),
        result.display_threshold()
    )
}

pub fn view<'a, Message: 'a>(result: &'a CheckResult) -> Element<'a, Message> {
    let phishing = result.is_phishing();
    let (accent, surface) = if phishing {
        (DarkTheme::DANGER, DarkTheme::DANGER_SURFACE)
    } else {
        (DarkTheme::SAFE, DarkTheme::SAFE_SURFACE)
    };

    let details = column![
        container(text(badge(result)).size(20).color(accent))
            .width(Length::Fill)
            .center_x(Length::Fill),
        row![
            text("URL:").size(14).color(DarkTheme::TEXT_MUTED),
            text(&result.url).size(14).color(DarkTheme::TEXT),
        ]
        .spacing(8),
        row![
            text("Confidence Score:").size(14).color(DarkTheme::TEXT_MUTED),
            text(format!("{}%", result.probability_percent()))
                .size(18)
                .color(accent),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center),
        row![
            text("Analysis:").size(14).color(DarkTheme::TEXT_MUTED),
            text(analysis(result)).size(14).color(DarkTheme::TEXT),
        ]
        .spacing(8),
        Space::with_height(8),
        text(format!("Threshold: {}", result.display_threshold()))
            .size(12)
            .color(DarkTheme::TEXT_MUTED),
    ]
    .spacing(10);

    container(details)
        .padding(Padding::new(20.0))
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(surface)),
            border: Border {
                color: accent,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(label: &str, probability: f64, threshold: Option<f64>) -> CheckResult {
        CheckResult {
            url: "http://a.co".to_string(),
            label: label.to_string(),
            probability,
            threshold,
        }
    }

    #[test]
    fn test_badge_follows_label() {
        assert_eq!(badge(&verdict("Phishing", 0.93, None)), "DETECTED PHISHING");
        assert_eq!(badge(&verdict("legit", 0.07, None)), "SAFE TO VISIT");
    }

    #[test]
    fn test_summary() {
        let text = summary(&verdict("phishing", 0.93, Some(0.6)));
        assert!(text.starts_with("DETECTED PHISHING\n"));
        assert!(text.contains("Confidence: 93.00%"));
        assert!(text.contains("Threshold:  0.6"));
    }

    #[test]
    fn test_summary_uses_default_threshold() {
        let text = summary(&verdict("legit", 0.5, None));
        assert!(text.contains("Threshold:  0.6"));
    }
}
