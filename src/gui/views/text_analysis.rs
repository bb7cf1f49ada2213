use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::gui::widgets::charts::{self, LineSeries};
use crate::models::app_state::DashboardState;
use crate::models::messages::Message;
use crate::models::summary::{looks_like_fallback, EmbeddingSummary};
use crate::services::payloads::fmt_opt;

// Consistent color palette with the other dashboard views
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3);
const WARNING_BG: Color = Color::from_rgb(0.45, 0.37, 0.08);
const ERROR_COLOR: Color = Color::from_rgb(1.0, 0.35, 0.35);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const MEAN_COLOR: Color = Color::from_rgb(0.29, 0.75, 0.75);
const STD_COLOR: Color = Color::from_rgb(1.0, 0.39, 0.52);

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

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

fn warning_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(WARNING_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

fn stat_cell<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(4)
        .push(Text::new(label).size(12).style(TEXT_SECONDARY))
        .push(Text::new(value).size(15).style(TEXT_PRIMARY))
        .width(Length::Fill)
        .into()
}

pub fn view(state: &DashboardState) -> Element<Message> {
    let screen = &state.text_analysis;
    let loading = screen.request.is_loading();

    let input_field = Container::new(
        TextInput::new("Enter text to analyze", &screen.text)
            .on_input(Message::AnalysisTextChanged)
            .on_submit(Message::SubmitTextAnalysis)
            .padding(14)
            .size(14),
    )
    .style(iced::theme::Container::Custom(Box::new(input_appearance)));

    let submit_label = if loading { "Analyzing..." } else { "Analyze Text" };
    let mut submit_button = Button::new(
        Container::new(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("🔎").font(EMOJI_FONT).size(16))
                .push(Text::new(submit_label).font(BOLD_FONT).size(15)),
        )
        .width(Length::Fill)
        .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .width(Length::Fill)
    .padding(14);
    if !loading {
        submit_button = submit_button.on_press(Message::SubmitTextAnalysis);
    }

    let mut form_card = Column::new()
        .spacing(16)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("📝").font(EMOJI_FONT).size(20))
                .push(Text::new("Text Analysis").font(BOLD_FONT).size(20).style(TEXT_PRIMARY)),
        )
        .push(input_field)
        .push(submit_button);

    if let Some(error) = screen.request.error() {
        form_card = form_card.push(Text::new(error).size(13).style(ERROR_COLOR));
    }
    if loading {
        form_card = form_card.push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("⏳").font(EMOJI_FONT).size(14))
                .push(Text::new("Waiting for the analysis backend...").size(13).style(ACCENT_COLOR)),
        );
    }

    let mut content = Column::new().spacing(20).padding(24).push(
        Container::new(form_card)
            .padding(24)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(card_appearance))),
    );

    if let Some(response) = screen.request.success() {
        let embeddings = response.embeddings.as_deref().unwrap_or(&[]);
        if looks_like_fallback(embeddings) {
            content = content.push(
                Container::new(
                    Row::new()
                        .spacing(8)
                        .align_items(Alignment::Center)
                        .push(Text::new("⚠️").font(EMOJI_FONT).size(16))
                        .push(
                            Text::new(
                                "Using simplified analysis due to model loading issues. \
                                 Results may be less accurate.",
                            )
                            .size(13),
                        ),
                )
                .padding([10, 16])
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(warning_appearance))),
            );
        }

        let summary = response
            .statistics
            .as_ref()
            .and_then(EmbeddingSummary::from_stats);

        let summary_card: Element<Message> = match summary {
            Some(s) => {
                let grid = Column::new()
                    .spacing(14)
                    .push(
                        Row::new()
                            .spacing(16)
                            .push(stat_cell("Mean Value", fmt_opt(Some(s.mean), 4)))
                            .push(stat_cell("Standard Deviation", fmt_opt(Some(s.std), 4))),
                    )
                    .push(
                        Row::new()
                            .spacing(16)
                            .push(stat_cell("Minimum", fmt_opt(Some(s.min), 4)))
                            .push(stat_cell("Maximum", fmt_opt(Some(s.max), 4))),
                    )
                    .push(
                        Row::new()
                            .spacing(16)
                            .push(stat_cell("Range", fmt_opt(Some(s.range), 4)))
                            .push(stat_cell("Variance", fmt_opt(Some(s.variance), 4))),
                    )
                    .push(
                        Row::new()
                            .spacing(16)
                            .push(stat_cell("Median", fmt_opt(Some(s.median), 4)))
                            .push(stat_cell("IQR", fmt_opt(Some(s.iqr), 4))),
                    );
                Column::new()
                    .spacing(12)
                    .push(Text::new("Statistical Summary").font(BOLD_FONT).size(16))
                    .push(grid)
                    .into()
            }
            None => Column::new()
                .spacing(12)
                .push(Text::new("Statistical Summary").font(BOLD_FONT).size(16))
                .push(Text::new("N/A").size(14).style(TEXT_SECONDARY))
                .into(),
        };

        let chart: Element<Message> = match &response.statistics {
            Some(stats) if !stats.mean.is_empty() => charts::line_chart(
                vec![
                    LineSeries {
                        label: "Mean Embedding Values".to_string(),
                        color: MEAN_COLOR,
                        values: stats.mean.clone(),
                    },
                    LineSeries {
                        label: "Standard Deviation".to_string(),
                        color: STD_COLOR,
                        values: stats.std.clone(),
                    },
                ],
                260.0,
            ),
            _ => Text::new("N/A").size(14).style(TEXT_SECONDARY).into(),
        };

        let chart_card = Column::new()
            .spacing(12)
            .push(Text::new("Embedding Visualization").font(BOLD_FONT).size(16))
            .push(chart);

        content = content.push(
            Row::new()
                .spacing(20)
                .push(
                    Container::new(summary_card)
                        .padding(20)
                        .width(Length::FillPortion(1))
                        .style(iced::theme::Container::Custom(Box::new(card_appearance))),
                )
                .push(
                    Container::new(chart_card)
                        .padding(20)
                        .width(Length::FillPortion(1))
                        .style(iced::theme::Container::Custom(Box::new(card_appearance))),
                ),
        );

        if let Some(first) = embeddings.first() {
            let preview = serde_json::to_string(first).unwrap_or_else(|_| "[]".to_string());
            content = content.push(
                Container::new(
                    Column::new()
                        .spacing(12)
                        .push(Text::new("Raw Embeddings").font(BOLD_FONT).size(16))
                        .push(
                            Scrollable::new(
                                Text::new(preview).size(12).font(Font::MONOSPACE).style(TEXT_SECONDARY),
                            )
                            .height(Length::Fixed(160.0)),
                        ),
                )
                .padding(20)
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(card_appearance))),
            );
        }
    } else if !loading && screen.request.error().is_none() {
        content = content.push(
            Container::new(
                Column::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("📊").font(EMOJI_FONT).size(40).style(TEXT_SECONDARY))
                    .push(Text::new("No analysis results yet").size(14).style(TEXT_SECONDARY)),
            )
            .width(Length::Fill)
            .center_x()
            .padding(40),
        );
    }

    content = content.push(Space::new(Length::Fill, Length::Fixed(12.0)));

    Scrollable::new(content.width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
