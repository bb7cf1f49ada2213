use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Application, Color, Command, Element, Font, Length, Theme};
use log::info;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::gui::views;
use crate::gui::widgets::notice;
use crate::models::app_state::{DashboardState, Tab};
use crate::models::messages::Message;
use crate::services::api_client::ApiClient;
use crate::services::prediction::{PredictionProvider, RandomWalkProvider};

const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const HEADER_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

fn header_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(HEADER_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        },
    }
}

pub struct Dashboard {
    pub state: DashboardState,
    api: Arc<ApiClient>,
    predictor: Arc<dyn PredictionProvider + Send + Sync>,
}

impl Application for Dashboard {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(config: ClientConfig) -> (Self, Command<Message>) {
        info!("dashboard starting against {}", config.api_base_url);
        let app = Dashboard {
            state: DashboardState::default(),
            api: Arc::new(ApiClient::from_config(&config)),
            predictor: Arc::new(RandomWalkProvider),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Process Analysis Dashboard".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message, &self.api, self.predictor.as_ref())
    }

    fn view(&self) -> Element<Message> {
        let title_section = Column::new()
            .spacing(2)
            .push(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("📊").font(EMOJI_FONT).size(22))
                    .push(
                        Text::new("Process Analysis Dashboard")
                            .font(BOLD_FONT)
                            .size(22)
                            .style(TEXT_PRIMARY),
                    ),
            )
            .push(
                Text::new("Text, time-series and supply-chain analysis")
                    .size(12)
                    .style(TEXT_SECONDARY),
            );

        let mut tabs = Row::new().spacing(4).align_items(Alignment::Center);
        for tab in Tab::all() {
            let active = *tab == self.state.active_tab;
            let label = Text::new(tab.title())
                .size(14)
                .style(if active { TEXT_PRIMARY } else { TEXT_SECONDARY });
            let label = if active { label.font(BOLD_FONT) } else { label };
            tabs = tabs.push(
                Button::new(label)
                    .style(if active {
                        iced::theme::Button::Primary
                    } else {
                        iced::theme::Button::Text
                    })
                    .on_press(Message::TabSelected(*tab))
                    .padding([8, 14]),
            );
        }

        let header = Container::new(
            Column::new()
                .spacing(12)
                .push(
                    Row::new()
                        .align_items(Alignment::Center)
                        .push(title_section)
                        .push(Space::new(Length::Fill, Length::Fixed(0.0))),
                )
                .push(tabs),
        )
        .padding([16, 24])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(header_appearance)));

        let notice_bar = if self.state.notices.is_empty() {
            Container::new(Space::new(Length::Fill, Length::Fixed(0.0))).width(Length::Fill)
        } else {
            Container::new(notice::view(&self.state.notices))
                .width(Length::Fill)
                .padding([8, 24])
        };

        let screen = match self.state.active_tab {
            Tab::TextAnalysis => views::text_analysis::view(&self.state),
            Tab::TimeSeries => views::time_series::view(&self.state),
            Tab::Goods => views::goods::view(&self.state),
            Tab::SupplyChain => views::supply_chain::view(&self.state),
            Tab::Ingestion => views::data_ingestion::view(&self.state),
            Tab::ProcessModel => views::process_model::view(&self.state),
        };

        let main_content = Column::new()
            .push(header)
            .push(notice_bar)
            .push(screen)
            .width(Length::Fill)
            .height(Length::Fill);

        Container::new(main_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
            .into()
    }
}
