use iced::widget::{Button, Checkbox, Column, Container, PickList, Row, Scrollable, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::models::app_state::DashboardState;
use crate::models::messages::Message;
use crate::services::payloads::fmt_opt_count;

/// File formats the ingestion endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    #[default]
    Csv,
    Json,
    Xlsx,
}

const ALL_TYPES: [DataType; 3] = [DataType::Csv, DataType::Json, DataType::Xlsx];

impl DataType {
    pub fn all() -> &'static [DataType] {
        &ALL_TYPES
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataType::Csv => "CSV",
            DataType::Json => "JSON",
            DataType::Xlsx => "Excel",
        }
    }

    /// Value the backend expects in the `dataType` form field.
    pub fn wire_value(&self) -> &'static str {
        match self {
            DataType::Csv => "csv",
            DataType::Json => "json",
            DataType::Xlsx => "xlsx",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            DataType::Csv => &["csv"],
            DataType::Json => &["json"],
            DataType::Xlsx => &["xlsx", "xls"],
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Consistent color palette with the other dashboard views
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const ROW_BG: Color = Color::from_rgb(0.14, 0.15, 0.30);
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

fn summary_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
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

pub fn view(state: &DashboardState) -> Element<Message> {
    let screen = &state.ingestion;
    let loading = screen.request.is_loading();

    let type_row = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(Text::new("Data Type").size(13).style(TEXT_SECONDARY))
        .push(
            PickList::new(DataType::all(), Some(screen.data_type), Message::IngestionTypeSelected)
                .placeholder("Select data type")
                .width(Length::Fixed(140.0)),
        );

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
                .push(Text::new("Select File").font(BOLD_FONT).size(14)),
        )
        .width(Length::Fill)
        .center_x(),
    )
    .style(iced::theme::Button::Secondary)
    .on_press(Message::PickIngestionFile)
    .width(Length::Fill)
    .padding(14);

    let preprocessing = Column::new()
        .spacing(10)
        .push(Text::new("Preprocessing Options").size(13).style(TEXT_SECONDARY))
        .push(
            Row::new()
                .spacing(24)
                .push(
                    Checkbox::new("Clean Missing Values", screen.handle_missing)
                        .on_toggle(Message::ToggleHandleMissing)
                        .size(18)
                        .text_size(13),
                )
                .push(
                    Checkbox::new("Normalize Data", screen.normalize)
                        .on_toggle(Message::ToggleNormalize)
                        .size(18)
                        .text_size(13),
                )
                .push(
                    Checkbox::new("Remove Duplicates", screen.remove_duplicates)
                        .on_toggle(Message::ToggleRemoveDuplicates)
                        .size(18)
                        .text_size(13),
                ),
        );

    let submit_label = if loading { "Processing..." } else { "Process Data" };
    let mut submit_button = Button::new(
        Container::new(Text::new(submit_label).font(BOLD_FONT).size(15))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .width(Length::Fill)
    .padding(14);
    if !loading && screen.file.is_some() {
        submit_button = submit_button.on_press(Message::SubmitIngestion);
    }

    let mut upload_card = Column::new()
        .spacing(16)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("📥").font(EMOJI_FONT).size(20))
                .push(Text::new("Data Ingestion").font(BOLD_FONT).size(20).style(TEXT_PRIMARY)),
        )
        .push(type_row)
        .push(pick_button)
        .push(Text::new(file_label).size(13).style(TEXT_SECONDARY))
        .push(preprocessing)
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

    if let Some(response) = screen.request.success() {
        let summary = response.summary.clone().unwrap_or_default();
        let columns = if summary.columns.is_empty() {
            "N/A".to_string()
        } else {
            summary.columns.join(", ")
        };
        content = content.push(
            Container::new(
                Column::new()
                    .spacing(12)
                    .push(Text::new("Processing Summary").font(BOLD_FONT).size(16))
                    .push(
                        Row::new()
                            .spacing(16)
                            .push(
                                Container::new(
                                    Column::new()
                                        .spacing(4)
                                        .push(
                                            Text::new("Original Rows")
                                                .size(12)
                                                .style(TEXT_SECONDARY),
                                        )
                                        .push(
                                            Text::new(fmt_opt_count(summary.original_rows))
                                                .size(15),
                                        ),
                                )
                                .padding(12)
                                .width(Length::Fill)
                                .style(iced::theme::Container::Custom(Box::new(
                                    summary_appearance,
                                ))),
                            )
                            .push(
                                Container::new(
                                    Column::new()
                                        .spacing(4)
                                        .push(
                                            Text::new("Processed Rows")
                                                .size(12)
                                                .style(TEXT_SECONDARY),
                                        )
                                        .push(
                                            Text::new(fmt_opt_count(summary.processed_rows))
                                                .size(15),
                                        ),
                                )
                                .padding(12)
                                .width(Length::Fill)
                                .style(iced::theme::Container::Custom(Box::new(
                                    summary_appearance,
                                ))),
                            ),
                    )
                    .push(
                        Column::new()
                            .spacing(4)
                            .push(Text::new("Columns").size(12).style(TEXT_SECONDARY))
                            .push(Text::new(columns).size(13)),
                    ),
            )
            .padding(20)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(card_appearance))),
        );
    }

    Scrollable::new(content.width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_the_backend_contract() {
        assert_eq!(DataType::Csv.wire_value(), "csv");
        assert_eq!(DataType::Json.wire_value(), "json");
        assert_eq!(DataType::Xlsx.wire_value(), "xlsx");
    }

    #[test]
    fn excel_accepts_both_extensions() {
        assert_eq!(DataType::Xlsx.extensions(), &["xlsx", "xls"]);
    }
}
