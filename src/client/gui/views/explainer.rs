use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::{logger_view, AlertColors};
use crate::client::models::app_state::{ExplainerState, ThemeMode};
use crate::client::models::cards::{render_cards, Card};
use crate::client::models::messages::Message;

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

const ACCENT_COLOR: Color = Color::from_rgb(0.96, 0.36, 0.26); // Ember red

#[derive(Debug, Clone, Copy)]
struct Palette {
    background: Color,
    card: Color,
    input: Color,
    text_primary: Color,
    text_secondary: Color,
}

fn palette(theme: ThemeMode) -> Palette {
    match theme {
        ThemeMode::Dark => Palette {
            background: Color::from_rgb(0.06, 0.07, 0.18), // Deep navy
            card: Color::from_rgb(0.18, 0.19, 0.36),
            input: Color::from_rgb(0.12, 0.13, 0.26),
            text_primary: Color::WHITE,
            text_secondary: Color::from_rgb(0.7, 0.7, 0.7),
        },
        ThemeMode::Light => Palette {
            background: Color::from_rgb(0.96, 0.96, 0.98),
            card: Color::WHITE,
            input: Color::from_rgb(0.90, 0.91, 0.95),
            text_primary: Color::from_rgb(0.10, 0.10, 0.16),
            text_secondary: Color::from_rgb(0.40, 0.40, 0.46),
        },
    }
}

fn surface(background: Color, text: Color, radius: f32, shadow: bool) -> iced::theme::Container {
    iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| iced::widget::container::Appearance {
        background: Some(iced::Background::Color(background)),
        text_color: Some(text),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: radius.into(),
        },
        shadow: if shadow {
            iced::Shadow {
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            }
        } else {
            iced::Shadow::default()
        },
    }))
}

pub fn view(state: &ExplainerState) -> Element<'_, Message> {
    let colors = palette(state.theme);

    let alert_colors = AlertColors {
        surface: colors.card,
        text: colors.text_primary,
    };
    let logger_bar = Container::new(logger_view(&state.logger, alert_colors))
        .width(Length::Fill)
        .padding([8, 12, 0, 12]);

    let theme_icon = if state.theme.is_dark() { "☀️" } else { "🌙" };
    let theme_toggle = Button::new(Text::new(theme_icon).font(EMOJI_FONT).size(18))
        .on_press(Message::ThemeToggled)
        .style(iced::theme::Button::Text)
        .padding(6);

    let title = Row::new()
        .spacing(6)
        .align_items(Alignment::End)
        .push(Text::new("LaymanLearn").size(36).font(BOLD_FONT).style(colors.text_primary))
        .push(Text::new("Story!").size(22).font(BOLD_FONT).style(ACCENT_COLOR));

    let header = Column::new()
        .spacing(6)
        .align_items(Alignment::Center)
        .push(
            Row::new()
                .width(Length::Fill)
                .push(Space::new(Length::Fill, Length::Shrink))
                .push(theme_toggle),
        )
        .push(title)
        .push(Text::new("Understand any Concept").size(16).style(colors.text_secondary));

    let input = Container::new(
        TextInput::new("Write your topic here...", &state.topic)
            .on_input(Message::TopicChanged)
            .on_submit(Message::Submit)
            .width(Length::Fill)
            .padding(12)
            .size(15),
    )
    .width(Length::Fill)
    .style(surface(colors.input, colors.text_primary, 12.0, false));

    let submit_label: Element<Message> = if state.loading {
        Row::new()
            .spacing(6)
            .align_items(Alignment::Center)
            .push(Text::new("⏳").font(EMOJI_FONT).size(14))
            .push(Text::new("loading...").size(15))
            .into()
    } else {
        Text::new("Submit").font(BOLD_FONT).size(15).into()
    };
    let mut submit_button = Button::new(submit_label)
        .style(iced::theme::Button::Primary)
        .padding([12, 18]);
    if state.submit_enabled() {
        submit_button = submit_button.on_press(Message::Submit);
    }

    let input_row = Row::new()
        .spacing(10)
        .align_items(Alignment::Center)
        .push(input)
        .push(submit_button);

    let results: Element<Message> = match &state.result {
        Some(result) => render_cards(result)
            .into_iter()
            .fold(Column::new().spacing(14), |column, card| column.push(card_view(card, colors)))
            .into(),
        None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    let content = Column::new()
        .width(Length::Fill)
        .max_width(560.0)
        .spacing(20)
        .padding(24)
        .push(header)
        .push(input_row)
        .push(results);

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(logger_bar)
        .push(
            Scrollable::new(Container::new(content).width(Length::Fill).center_x())
                .height(Length::Fill),
        );

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(surface(colors.background, colors.text_primary, 0.0, false))
        .into()
}

fn card_view<'a>(card: Card, colors: Palette) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(8)
            .push(Text::new(card.title).size(18).font(BOLD_FONT).style(ACCENT_COLOR))
            .push(Text::new(card.body).size(15).style(colors.text_primary)),
    )
    .width(Length::Fill)
    .padding(18)
    .style(surface(colors.card, colors.text_primary, 16.0, true))
    .into()
}
