use iced::widget::{Button, Column, Container, Row, Scrollable, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::models::app_state::DashboardState;
use crate::models::messages::Message;
use crate::services::payloads::{fmt_opt, fmt_opt_count, fmt_opt_str};

// Consistent color palette with the other dashboard views
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const ROW_BG: Color = Color::from_rgb(0.14, 0.15, 0.30);
const ERROR_COLOR: Color = Color::from_rgb(1.0, 0.35, 0.35);
const HIGH_COLOR: Color = Color::from_rgb(1.0, 0.35, 0.35);
const MEDIUM_COLOR: Color = Color::from_rgb(1.0, 0.8, 0.0);
const LOW_COLOR: Color = Color::from_rgb(0.2, 0.8, 0.4);
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

fn row_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ROW_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

fn priority_color(priority: Option<&str>) -> Color {
    match priority {
        Some("high") => HIGH_COLOR,
        Some("medium") => MEDIUM_COLOR,
        Some("low") => LOW_COLOR,
        _ => TEXT_SECONDARY,
    }
}

fn kpi_card<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(6)
            .push(Text::new(label).size(13).style(TEXT_SECONDARY))
            .push(Text::new(value).font(BOLD_FONT).size(26).style(TEXT_PRIMARY)),
    )
    .padding(16)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(row_appearance)))
    .into()
}

pub fn view(state: &DashboardState) -> Element<Message> {
    let screen = &state.supply_chain;
    let loading = screen.request.is_loading();

    let file_label = match &screen.file {
        Some(file) => file.name.clone(),
        None => "No file selected".to_string(),
    };

    let pick_button = Button::new(
        Container::new(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("📁").font(EMOJI_FONT).size(15))
                .push(Text::new("Select Supply Chain Data").font(BOLD_FONT).size(14)),
        )
        .width(Length::Fill)
        .center_x(),
    )
    .style(iced::theme::Button::Secondary)
    .on_press(Message::PickSupplyChainFile)
    .width(Length::Fill)
    .padding(14);

    let submit_label = if loading { "Analyzing..." } else { "Analyze Supply Chain" };
    let mut submit_button = Button::new(
        Container::new(Text::new(submit_label).font(BOLD_FONT).size(15))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .width(Length::Fill)
    .padding(14);
    if !loading && screen.file.is_some() {
        submit_button = submit_button.on_press(Message::SubmitSupplyChain);
    }

    let mut upload_card = Column::new()
        .spacing(16)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("🚚").font(EMOJI_FONT).size(20))
                .push(
                    Text::new("Supply Chain Analysis")
                        .font(BOLD_FONT)
                        .size(20)
                        .style(TEXT_PRIMARY),
                ),
        )
        .push(pick_button)
        .push(Text::new(file_label).size(13).style(TEXT_SECONDARY))
        .push(submit_button);

    if let Some(error) = screen.request.error() {
        upload_card = upload_card.push(Text::new(error).size(13).style(ERROR_COLOR));
    }

    let mut content = Column::new().spacing(20).padding(24).push(
        Container::new(upload_card)
            .padding(24)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(card_appearance))),
    );

    if let Some(analysis) = screen.request.success() {
        let metrics = analysis.metrics.clone().unwrap_or_default();
        let date_range = metrics.date_range.clone().unwrap_or_default();
        let metrics_card = Column::new()
            .spacing(8)
            .push(Text::new("Key Metrics").font(BOLD_FONT).size(16))
            .push(
                Text::new(format!(
                    "Total Products: {}",
                    fmt_opt_count(metrics.total_products)
                ))
                .size(13),
            )
            .push(
                Text::new(format!(
                    "Total Locations: {}",
                    fmt_opt_count(metrics.total_locations)
                ))
                .size(13),
            )
            .push(
                Text::new(format!(
                    "Date Range: {} to {}",
                    fmt_opt_str(date_range.start.as_deref()),
                    fmt_opt_str(date_range.end.as_deref())
                ))
                .size(13),
            );

        let anomalies = analysis.anomalies.clone().unwrap_or_default();
        let anomalies_card = Column::new()
            .spacing(8)
            .push(Text::new("Anomalies Detected").font(BOLD_FONT).size(16))
            .push(Text::new(format!("Count: {}", anomalies.count.unwrap_or(0))).size(13))
            .push(
                Text::new(format!(
                    "Percentage: {:.2}%",
                    anomalies.percentage.unwrap_or(0.0)
                ))
                .size(13),
            );

        content = content.push(
            Row::new()
                .spacing(20)
                .push(
                    Container::new(metrics_card)
                        .padding(20)
                        .width(Length::FillPortion(1))
                        .style(iced::theme::Container::Custom(Box::new(card_appearance))),
                )
                .push(
                    Container::new(anomalies_card)
                        .padding(20)
                        .width(Length::FillPortion(1))
                        .style(iced::theme::Container::Custom(Box::new(card_appearance))),
                ),
        );

        let mut recommendations = Column::new().spacing(8).push(
            Row::new()
                .spacing(12)
                .push(Text::new("Type").font(BOLD_FONT).size(13).width(Length::FillPortion(2)))
                .push(
                    Text::new("Description")
                        .font(BOLD_FONT)
                        .size(13)
                        .width(Length::FillPortion(5)),
                )
                .push(
                    Text::new("Priority")
                        .font(BOLD_FONT)
                        .size(13)
                        .width(Length::FillPortion(1)),
                ),
        );
        match analysis.recommendations.as_deref() {
            Some(recs) if !recs.is_empty() => {
                for rec in recs {
                    recommendations = recommendations.push(
                        Container::new(
                            Row::new()
                                .spacing(12)
                                .align_items(Alignment::Center)
                                .push(
                                    Text::new(fmt_opt_str(rec.kind.as_deref()))
                                        .size(13)
                                        .width(Length::FillPortion(2)),
                                )
                                .push(
                                    Text::new(fmt_opt_str(rec.description.as_deref()))
                                        .size(13)
                                        .width(Length::FillPortion(5)),
                                )
                                .push(
                                    Text::new(fmt_opt_str(rec.priority.as_deref()))
                                        .size(13)
                                        .style(priority_color(rec.priority.as_deref()))
                                        .width(Length::FillPortion(1)),
                                ),
                        )
                        .padding([8, 12])
                        .style(iced::theme::Container::Custom(Box::new(row_appearance))),
                    );
                }
            }
            _ => {
                recommendations = recommendations.push(
                    Container::new(
                        Text::new("No recommendations available")
                            .size(13)
                            .style(TEXT_SECONDARY),
                    )
                    .width(Length::Fill)
                    .center_x()
                    .padding(16),
                );
            }
        }
        content = content.push(
            Container::new(
                Column::new()
                    .spacing(12)
                    .push(Text::new("Recommendations").font(BOLD_FONT).size(16))
                    .push(recommendations),
            )
            .padding(20)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(card_appearance))),
        );
    }

    match (screen.monitoring.success(), screen.monitoring.is_loading()) {
        (Some(monitoring), _) => {
            let kpis = monitoring.kpis.clone().unwrap_or_default();
            content = content.push(
                Container::new(
                    Column::new()
                        .spacing(12)
                        .push(Text::new("Real-time Monitoring").font(BOLD_FONT).size(16))
                        .push(
                            Row::new()
                                .spacing(16)
                                .push(kpi_card(
                                    "Inventory Turnover",
                                    fmt_opt(kpis.inventory_turnover, 2),
                                ))
                                .push(kpi_card(
                                    "Order Fulfillment Rate",
                                    match kpis.order_fulfillment_rate {
                                        Some(rate) => format!("{rate:.1}%"),
                                        None => "N/A".to_string(),
                                    },
                                ))
                                .push(kpi_card(
                                    "Supply Chain Velocity",
                                    match kpis.supply_chain_velocity {
                                        Some(days) => format!("{days:.1} days"),
                                        None => "N/A".to_string(),
                                    },
                                )),
                        ),
                )
                .padding(20)
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(card_appearance))),
            );
        }
        (None, true) => {
            content = content.push(
                Container::new(
                    Text::new("Starting monitoring...").size(13).style(TEXT_SECONDARY),
                )
                .width(Length::Fill)
                .center_x()
                .padding(12),
            );
        }
        _ => {}
    }

    Scrollable::new(content.width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
