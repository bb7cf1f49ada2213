use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::models::app_state::DashboardState;
use crate::models::goods::GoodsRecord;
use crate::models::messages::Message;
use crate::services::prediction::{DeliveryRating, Direction, QualityRating, RiskLevel};

// Consistent color palette with the other dashboard views
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const ROW_BG: Color = Color::from_rgb(0.14, 0.15, 0.30);
const ERROR_COLOR: Color = Color::from_rgb(1.0, 0.35, 0.35);
const UP_BG: Color = Color::from_rgb(0.13, 0.48, 0.26);
const DOWN_BG: Color = Color::from_rgb(0.55, 0.17, 0.2);
const GOOD_COLOR: Color = Color::from_rgb(0.2, 0.8, 0.4);
const BAD_COLOR: Color = Color::from_rgb(1.0, 0.35, 0.35);
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

fn field<'a>(
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
                    .padding(12)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .width(Length::Fill)
        .into()
}

fn chip<'a>(label: &'a str, positive: bool) -> Element<'a, Message> {
    Row::new()
        .spacing(6)
        .align_items(Alignment::Center)
        .push(
            Text::new(if positive { "✅" } else { "⚠️" })
                .font(EMOJI_FONT)
                .size(13),
        )
        .push(
            Text::new(label)
                .size(13)
                .style(if positive { GOOD_COLOR } else { BAD_COLOR }),
        )
        .into()
}

fn prediction_tile(record: &GoodsRecord) -> Element<'_, Message> {
    let mut tiles = Row::new().spacing(12);
    for point in &record.outlook.points {
        let (bg, arrow) = match point.direction {
            Direction::Up => (UP_BG, "📈"),
            Direction::Down => (DOWN_BG, "📉"),
        };
        tiles = tiles.push(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new(arrow).font(EMOJI_FONT).size(16))
                    .push(
                        Column::new()
                            .spacing(2)
                            .push(
                                Text::new(format!("{} days", point.horizon_days))
                                    .font(BOLD_FONT)
                                    .size(12)
                                    .style(TEXT_PRIMARY),
                            )
                            .push(
                                Text::new(format!("${:.2}", point.price))
                                    .size(13)
                                    .style(TEXT_PRIMARY),
                            ),
                    ),
            )
            .padding(12)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
                iced::widget::container::Appearance {
                    background: Some(iced::Background::Color(bg)),
                    text_color: Some(TEXT_PRIMARY),
                    border: iced::Border {
                        radius: 8.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }))),
        );
    }

    Container::new(
        Column::new()
            .spacing(10)
            .push(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("💰").font(EMOJI_FONT).size(14))
                    .push(Text::new(&record.goods.goods_name).font(BOLD_FONT).size(14)),
            )
            .push(tiles),
    )
    .padding(14)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(row_appearance)))
    .into()
}

pub fn view(state: &DashboardState) -> Element<Message> {
    let screen = &state.goods;
    let form = &screen.form;

    let mut form_card = Column::new()
        .spacing(16)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("➕").font(EMOJI_FONT).size(20))
                .push(Text::new("Add New Goods").font(BOLD_FONT).size(20).style(TEXT_PRIMARY)),
        )
        .push(
            Text::new(
                "Fill in all fields. The dashboard uses this data for price outlooks \
                 and supplier evaluation.",
            )
            .size(12)
            .style(TEXT_SECONDARY),
        )
        .push(
            Row::new()
                .spacing(16)
                .push(field("Goods ID", "G-001", &form.goods_id, Message::GoodsIdChanged))
                .push(field("Goods Name", "Widget", &form.goods_name, Message::GoodsNameChanged)),
        )
        .push(
            Row::new()
                .spacing(16)
                .push(field("Cost", "0.00", &form.cost, Message::GoodsCostChanged))
                .push(field("Price", "0.00", &form.price, Message::GoodsPriceChanged)),
        )
        .push(
            Row::new()
                .spacing(16)
                .push(field("Date", "YYYY-MM-DD", &form.date, Message::GoodsDateChanged))
                .push(field("Supplier ID", "S-001", &form.supplier_id, Message::SupplierIdChanged)),
        )
        .push(field(
            "Supplier Name",
            "Acme Corp",
            &form.supplier_name,
            Message::SupplierNameChanged,
        ))
        .push(
            Button::new(
                Container::new(
                    Row::new()
                        .spacing(8)
                        .align_items(Alignment::Center)
                        .push(Text::new("➕").font(EMOJI_FONT).size(15))
                        .push(Text::new("Add Goods").font(BOLD_FONT).size(15)),
                )
                .width(Length::Fill)
                .center_x(),
            )
            .style(iced::theme::Button::Primary)
            .on_press(Message::SubmitGoods)
            .width(Length::Fill)
            .padding(14),
        );

    if let Some(error) = &screen.error {
        form_card = form_card.push(Text::new(error).size(13).style(ERROR_COLOR));
    }

    let mut content = Column::new().spacing(20).padding(24).push(
        Container::new(form_card)
            .padding(24)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(card_appearance))),
    );

    // Current prices table
    let mut prices = Column::new().spacing(8).push(
        Row::new()
            .spacing(12)
            .push(Text::new("ID").font(BOLD_FONT).size(13).width(Length::FillPortion(2)))
            .push(Text::new("Name").font(BOLD_FONT).size(13).width(Length::FillPortion(3)))
            .push(
                Text::new("Current Price (USD)")
                    .font(BOLD_FONT)
                    .size(13)
                    .width(Length::FillPortion(2)),
            )
            .push(Text::new("Supplier").font(BOLD_FONT).size(13).width(Length::FillPortion(3)))
            .push(Text::new("").size(13).width(Length::Fixed(44.0))),
    );
    if screen.records.is_empty() {
        prices = prices.push(
            Container::new(Text::new("No goods added yet").size(13).style(TEXT_SECONDARY))
                .width(Length::Fill)
                .center_x()
                .padding(16),
        );
    }
    for record in &screen.records {
        prices = prices.push(
            Container::new(
                Row::new()
                    .spacing(12)
                    .align_items(Alignment::Center)
                    .push(Text::new(&record.goods.goods_id).size(13).width(Length::FillPortion(2)))
                    .push(Text::new(&record.goods.goods_name).size(13).width(Length::FillPortion(3)))
                    .push(
                        Text::new(format!("${:.2}", record.goods.price))
                            .size(13)
                            .width(Length::FillPortion(2)),
                    )
                    .push(
                        Text::new(&record.goods.supplier_name)
                            .size(13)
                            .width(Length::FillPortion(3)),
                    )
                    .push(
                        Button::new(Text::new("🗑️").font(EMOJI_FONT).size(14))
                            .style(iced::theme::Button::Destructive)
                            .on_press(Message::RemoveGoods(record.id))
                            .padding([4, 8]),
                    ),
            )
            .padding([8, 12])
            .style(iced::theme::Container::Custom(Box::new(row_appearance))),
        );
    }
    content = content.push(
        Container::new(
            Column::new()
                .spacing(12)
                .push(
                    Row::new()
                        .spacing(8)
                        .align_items(Alignment::Center)
                        .push(Text::new("💵").font(EMOJI_FONT).size(18))
                        .push(Text::new("Current Prices").font(BOLD_FONT).size(18)),
                )
                .push(prices),
        )
        .padding(20)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance))),
    );

    // Price predictions
    if !screen.records.is_empty() {
        let mut predictions = Column::new().spacing(12);
        for record in &screen.records {
            predictions = predictions.push(prediction_tile(record));
        }
        content = content.push(
            Container::new(
                Column::new()
                    .spacing(12)
                    .push(
                        Row::new()
                            .spacing(8)
                            .align_items(Alignment::Center)
                            .push(Text::new("📊").font(EMOJI_FONT).size(18))
                            .push(Text::new("Price Predictions").font(BOLD_FONT).size(18)),
                    )
                    .push(
                        Text::new("Generated by a placeholder provider, not a trained model.")
                            .size(12)
                            .style(TEXT_SECONDARY),
                    )
                    .push(predictions),
            )
            .padding(20)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(card_appearance))),
        );

        // Supplier performance table
        let mut suppliers = Column::new().spacing(8).push(
            Row::new()
                .spacing(12)
                .push(Text::new("Supplier").font(BOLD_FONT).size(13).width(Length::FillPortion(3)))
                .push(
                    Text::new("On-Time Delivery")
                        .font(BOLD_FONT)
                        .size(13)
                        .width(Length::FillPortion(2)),
                )
                .push(
                    Text::new("Quality Score")
                        .font(BOLD_FONT)
                        .size(13)
                        .width(Length::FillPortion(2)),
                )
                .push(Text::new("Risk Level").font(BOLD_FONT).size(13).width(Length::FillPortion(2))),
        );
        for record in &screen.records {
            let scorecard = &record.outlook.scorecard;
            suppliers = suppliers.push(
                Container::new(
                    Row::new()
                        .spacing(12)
                        .align_items(Alignment::Center)
                        .push(
                            Text::new(&record.goods.supplier_name)
                                .size(13)
                                .width(Length::FillPortion(3)),
                        )
                        .push(
                            Container::new(chip(
                                scorecard.on_time_delivery.label(),
                                scorecard.on_time_delivery == DeliveryRating::Good,
                            ))
                            .width(Length::FillPortion(2)),
                        )
                        .push(
                            Container::new(chip(
                                scorecard.quality.label(),
                                scorecard.quality == QualityRating::High,
                            ))
                            .width(Length::FillPortion(2)),
                        )
                        .push(
                            Container::new(chip(
                                scorecard.risk.label(),
                                scorecard.risk == RiskLevel::Low,
                            ))
                            .width(Length::FillPortion(2)),
                        ),
                )
                .padding([8, 12])
                .style(iced::theme::Container::Custom(Box::new(row_appearance))),
            );
        }
        content = content.push(
            Container::new(
                Column::new()
                    .spacing(12)
                    .push(
                        Row::new()
                            .spacing(8)
                            .align_items(Alignment::Center)
                            .push(Text::new("🚚").font(EMOJI_FONT).size(18))
                            .push(
                                Text::new("Supplier Performance & Risk Assessment")
                                    .font(BOLD_FONT)
                                    .size(18),
                            ),
                    )
                    .push(suppliers),
            )
            .padding(20)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(card_appearance))),
        );
    }

    content = content.push(Space::new(Length::Fill, Length::Fixed(12.0)));

    Scrollable::new(content.width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
