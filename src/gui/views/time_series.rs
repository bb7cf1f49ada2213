use iced::widget::{Button, Column, Container, Row, Scrollable, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::gui::widgets::charts;
use crate::models::app_state::DashboardState;
use crate::models::messages::Message;
use crate::services::payloads::fmt_opt;

// Consistent color palette with the other dashboard views
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const ERROR_COLOR: Color = Color::from_rgb(1.0, 0.35, 0.35);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const IMPACT_COLOR: Color = Color::from_rgb(1.0, 0.39, 0.52);

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

fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    Column::new()
        .spacing(8)
        .push(Text::new(label).size(13).style(TEXT_SECONDARY))
        .push(
            Container::new(
                TextInput::new(placeholder, value)
                    .on_input(on_input)
                    .on_submit(Message::SubmitTimeSeries)
                    .padding(12)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .width(Length::Fill)
        .into()
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
    let screen = &state.time_series;
    let loading = screen.request.is_loading();

    let mut params_card = Column::new()
        .spacing(16)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("📈").font(EMOJI_FONT).size(20))
                .push(Text::new("Input Parameters").font(BOLD_FONT).size(20).style(TEXT_PRIMARY)),
        )
        .push(labeled_input(
            "Time Series Data",
            r#"[{"timestamp":"2024-03-01T08:00:00","step":"casting","delay":2.5}, ...]"#,
            &screen.raw_data,
            Message::SeriesDataChanged,
        ))
        .push(
            Row::new()
                .spacing(16)
                .push(labeled_input(
                    "Window Size",
                    "5",
                    &screen.window_size,
                    Message::WindowSizeChanged,
                ))
                .push(labeled_input(
                    "Forecast Steps",
                    "3",
                    &screen.forecast_steps,
                    Message::ForecastStepsChanged,
                )),
        );

    let submit_label = if loading { "Analyzing..." } else { "Analyze Time Series" };
    let mut submit_button = Button::new(
        Container::new(Text::new(submit_label).font(BOLD_FONT).size(15))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .width(Length::Fill)
    .padding(14);
    if !loading {
        submit_button = submit_button.on_press(Message::SubmitTimeSeries);
    }
    params_card = params_card.push(submit_button);

    if let Some(error) = screen.request.error() {
        params_card = params_card.push(Text::new(error).size(13).style(ERROR_COLOR));
    }

    let results_card: Element<Message> = match screen.request.success() {
        Some(analysis) => {
            let chart: Element<Message> = match analysis.bottlenecks.as_deref() {
                Some(bottlenecks) if !bottlenecks.is_empty() => charts::bar_chart(
                    bottlenecks
                        .iter()
                        .map(|b| (b.step.clone(), b.impact))
                        .collect(),
                    IMPACT_COLOR,
                    260.0,
                ),
                _ => Text::new("No bottlenecks reported")
                    .size(14)
                    .style(TEXT_SECONDARY)
                    .into(),
            };
            Column::new()
                .spacing(12)
                .push(Text::new("Bottleneck Impact Analysis").font(BOLD_FONT).size(16))
                .push(chart)
                .into()
        }
        None => Container::new(
            Text::new(if loading { "Analyzing..." } else { "No analysis results yet" })
                .size(14)
                .style(TEXT_SECONDARY),
        )
        .width(Length::Fill)
        .height(Length::Fixed(260.0))
        .center_x()
        .center_y()
        .into(),
    };

    let mut content = Column::new().spacing(20).padding(24).push(
        Row::new()
            .spacing(20)
            .push(
                Container::new(params_card)
                    .padding(24)
                    .width(Length::FillPortion(1))
                    .style(iced::theme::Container::Custom(Box::new(card_appearance))),
            )
            .push(
                Container::new(results_card)
                    .padding(24)
                    .width(Length::FillPortion(1))
                    .style(iced::theme::Container::Custom(Box::new(card_appearance))),
            ),
    );

    if let Some(analysis) = screen.request.success() {
        if let Some(stats) = &analysis.statistics {
            let seasonality = match stats.seasonality {
                Some(true) => "Present".to_string(),
                Some(false) => "Not Present".to_string(),
                None => "N/A".to_string(),
            };
            content = content.push(
                Container::new(
                    Column::new()
                        .spacing(12)
                        .push(Text::new("Statistical Summary").font(BOLD_FONT).size(16))
                        .push(
                            Row::new()
                                .spacing(16)
                                .push(stat_cell("Mean", fmt_opt(stats.mean, 4)))
                                .push(stat_cell("Standard Deviation", fmt_opt(stats.std, 4)))
                                .push(stat_cell(
                                    "Trend",
                                    stats.trend.clone().unwrap_or_else(|| "N/A".to_string()),
                                ))
                                .push(stat_cell("Seasonality", seasonality)),
                        ),
                )
                .padding(20)
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(card_appearance))),
            );
        }

        if let Some(anomalies) = analysis.anomalies.as_deref() {
            if !anomalies.is_empty() {
                let mut list = Column::new().spacing(8);
                for anomaly in anomalies {
                    list = list.push(
                        Row::new()
                            .spacing(8)
                            .push(Text::new("⚠️").font(EMOJI_FONT).size(14))
                            .push(
                                Text::new(format!(
                                    "{}: {}",
                                    anomaly.step,
                                    anomaly.description.as_deref().unwrap_or("N/A")
                                ))
                                .size(13),
                            ),
                    );
                }
                content = content.push(
                    Container::new(
                        Column::new()
                            .spacing(12)
                            .push(Text::new("Anomalies").font(BOLD_FONT).size(16))
                            .push(list),
                    )
                    .padding(20)
                    .width(Length::Fill)
                    .style(iced::theme::Container::Custom(Box::new(card_appearance))),
                );
            }
        }

        if let Some(recommendations) = analysis.recommendations.as_deref() {
            if !recommendations.is_empty() {
                let mut list = Column::new().spacing(10);
                for rec in recommendations {
                    list = list.push(
                        Column::new()
                            .spacing(2)
                            .push(
                                Text::new(rec.title.as_deref().unwrap_or("Recommendation"))
                                    .font(BOLD_FONT)
                                    .size(13),
                            )
                            .push(
                                Text::new(rec.description.as_deref().unwrap_or("N/A"))
                                    .size(13)
                                    .style(TEXT_SECONDARY),
                            ),
                    );
                }
                content = content.push(
                    Container::new(
                        Column::new()
                            .spacing(12)
                            .push(Text::new("Recommendations").font(BOLD_FONT).size(16))
                            .push(list),
                    )
                    .padding(20)
                    .width(Length::Fill)
                    .style(iced::theme::Container::Custom(Box::new(card_appearance))),
                );
            }
        }
    }

    Scrollable::new(content.width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
