use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::messages::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Success => "Done",
            LogLevel::Error => "Request failed",
            LogLevel::Info => "Working",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LogLevel::Success => "✅",
            LogLevel::Error => "⚠️",
            LogLevel::Info => "⏳",
        }
    }

    /// Stripe and heading colour; the bar itself takes the page palette.
    pub fn accent(self) -> Color {
        match self {
            LogLevel::Success => Color::from_rgb(0.30, 0.78, 0.52),
            LogLevel::Error => Color::from_rgb(0.96, 0.36, 0.26),
            LogLevel::Info => Color::from_rgb(0.45, 0.55, 0.98),
        }
    }
}

/// One status line for the alert bar above the input.
#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

/// Colours the alert bar borrows from the surrounding view.
#[derive(Debug, Clone, Copy)]
pub struct AlertColors {
    pub surface: Color,
    pub text: Color,
}

/// Alert bar for the latest status line, drawn as a card with a coloured stripe.
pub fn logger_view(messages: &[LogMessage], colors: AlertColors) -> Element<'_, Message> {
    let Some(log) = messages.last() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };

    let accent = log.level.accent();
    let stripe = Container::new(Space::new(Length::Fixed(4.0), Length::Fixed(36.0))).style(
        iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(accent)),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })),
    );

    let body = Column::new()
        .spacing(2)
        .push(
            Row::new()
                .spacing(6)
                .align_items(Alignment::Center)
                .push(Text::new(log.level.icon()).font(Font::with_name("Segoe UI Emoji")).size(13))
                .push(Text::new(log.level.label()).size(12).style(accent)),
        )
        .push(Text::new(&log.message).size(14).style(colors.text));

    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(stripe)
            .push(body),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(colors.surface)),
            text_color: Some(colors.text),
            border: iced::Border {
                width: 1.0,
                color: Color { a: 0.5, ..accent },
                radius: 10.0.into(),
            },
            shadow: iced::Shadow::default(),
        }
    })))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_distinguishable() {
        let levels = [LogLevel::Success, LogLevel::Error, LogLevel::Info];
        for (i, a) in levels.iter().enumerate() {
            for b in &levels[i + 1..] {
                assert_ne!(a.accent(), b.accent());
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
