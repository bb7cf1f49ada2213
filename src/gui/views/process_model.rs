use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::models::app_state::DashboardState;
use crate::models::messages::Message;

// Consistent color palette with the other dashboard views
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const STEP_BG: Color = Color::from_rgb(0.14, 0.15, 0.30);
const ERROR_COLOR: Color = Color::from_rgb(1.0, 0.35, 0.35);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn step_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(STEP_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.2, 0.2, 0.3),
            radius: 10.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

fn icon_button<'a>(icon: &'a str, message: Option<Message>) -> Element<'a, Message> {
    let mut button = Button::new(Text::new(icon).font(EMOJI_FONT).size(14))
        .style(iced::theme::Button::Text)
        .padding([4, 8]);
    if let Some(message) = message {
        button = button.on_press(message);
    }
    button.into()
}

pub fn view(state: &DashboardState) -> Element<Message> {
    let screen = &state.process_model;
    let loading = screen.fetch.is_loading();

    let mut header = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Text::new("🧩").font(EMOJI_FONT).size(20))
        .push(Text::new("Process Modeling").font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)));

    let mut refresh_button = Button::new(
        Row::new()
            .spacing(6)
            .align_items(Alignment::Center)
            .push(Text::new("🔄").font(EMOJI_FONT).size(14))
            .push(Text::new("Refresh").size(13)),
    )
    .style(iced::theme::Button::Secondary)
    .padding([8, 12]);
    if !loading {
        refresh_button = refresh_button.on_press(Message::RefreshProcessModel);
    }
    header = header.push(refresh_button);

    let mut save_button = Button::new(
        Row::new()
            .spacing(6)
            .align_items(Alignment::Center)
            .push(Text::new("💾").font(EMOJI_FONT).size(14))
            .push(Text::new(if screen.saving { "Saving..." } else { "Save" }).size(13)),
    )
    .style(iced::theme::Button::Primary)
    .padding([8, 12]);
    if !screen.saving && !screen.steps.is_empty() {
        save_button = save_button.on_press(Message::SaveProcessModel);
    }
    header = header.push(save_button);

    let mut card = Column::new().spacing(16).push(header);

    if let Some(error) = screen.fetch.error() {
        card = card.push(Text::new(error).size(13).style(ERROR_COLOR));
    }

    let body: Element<Message> = if loading {
        Container::new(
            Column::new()
                .spacing(12)
                .align_items(Alignment::Center)
                .push(Text::new("⏳").font(EMOJI_FONT).size(32).style(TEXT_SECONDARY))
                .push(Text::new("Loading process model...").size(14).style(TEXT_SECONDARY)),
        )
        .width(Length::Fill)
        .center_x()
        .padding(40)
        .into()
    } else if screen.steps.is_empty() {
        Container::new(
            Column::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("🧩").font(EMOJI_FONT).size(40).style(TEXT_SECONDARY))
                .push(Text::new("No process steps").size(14).style(TEXT_SECONDARY))
                .push(
                    Text::new("Refresh to load the current process model from the backend.")
                        .size(12)
                        .style(TEXT_SECONDARY),
                ),
        )
        .width(Length::Fill)
        .center_x()
        .padding(40)
        .into()
    } else {
        let last = screen.steps.len() - 1;
        let mut list = Column::new().spacing(10);
        for (index, step) in screen.steps.iter().enumerate() {
            list = list.push(
                Container::new(
                    Row::new()
                        .spacing(12)
                        .align_items(Alignment::Center)
                        .push(
                            Text::new(format!("{}.", index + 1))
                                .font(BOLD_FONT)
                                .size(13)
                                .style(TEXT_SECONDARY),
                        )
                        .push(Text::new(&step.text).size(14).width(Length::Fill))
                        .push(icon_button(
                            "⬆️",
                            (index > 0).then(|| Message::MoveStepUp(index)),
                        ))
                        .push(icon_button(
                            "⬇️",
                            (index < last).then(|| Message::MoveStepDown(index)),
                        ))
                        .push(icon_button("✏️", Some(Message::EditStep(step.id.clone()))))
                        .push(icon_button("🗑️", Some(Message::DeleteStep(step.id.clone())))),
                )
                .padding([10, 14])
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(step_appearance))),
            );
        }
        list.into()
    };

    card = card.push(body);

    let content = Column::new().spacing(20).padding(24).push(
        Container::new(card)
            .padding(24)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(card_appearance))),
    );

    Scrollable::new(content.width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
