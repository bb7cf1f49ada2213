//! Transient severity-tagged banner, the desktop cousin of a snackbar.
//!
//! Notices stack in screen state; only the most recent renders, and each one
//! schedules its own expiry when pushed.

use std::time::Duration;

use iced::widget::{Button, Container, Row, Space, Text};
use iced::{Color, Element, Font, Length};

use crate::models::messages::Message;

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl NoticeLevel {
    pub fn emoji(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "✅",
            NoticeLevel::Error => "❌",
            NoticeLevel::Info => "ℹ️",
            NoticeLevel::Warning => "⚠️",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            NoticeLevel::Success => Color::from_rgb(0.2, 0.8, 0.4),
            NoticeLevel::Error => Color::from_rgb(1.0, 0.2, 0.2),
            NoticeLevel::Info => Color::from_rgb(0.2, 0.6, 1.0),
            NoticeLevel::Warning => Color::from_rgb(1.0, 0.8, 0.0),
        }
    }

    /// How long the banner stays up absent user interaction.
    pub fn dismiss_after(&self) -> Duration {
        match self {
            NoticeLevel::Success => Duration::from_millis(4000),
            NoticeLevel::Error => Duration::from_millis(6000),
            NoticeLevel::Info | NoticeLevel::Warning => Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

pub fn view(notices: &[Notice]) -> Element<'_, Message> {
    // Latest notice wins the bar, like the old single-slot alert.
    if let Some(notice) = notices.last() {
        let bg_color = notice.level.color();
        Container::new(
            Row::new()
                .spacing(12)
                .align_items(iced::Alignment::Center)
                .push(
                    Text::new(notice.level.emoji())
                        .font(EMOJI_FONT)
                        .size(18)
                        .style(Color::WHITE),
                )
                .push(Text::new(&notice.message).size(16).style(Color::WHITE))
                .push(Space::new(Length::Fill, Length::Fixed(0.0)))
                .push(
                    Button::new(Text::new("✕").size(14).style(Color::WHITE))
                        .style(iced::theme::Button::Text)
                        .on_press(Message::DismissNotice(notice.id))
                        .padding([4, 8]),
                ),
        )
        .padding([10, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg_color)),
                text_color: Some(Color::WHITE),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                },
            }
        })))
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_durations_stay_in_the_snackbar_window() {
        for level in [
            NoticeLevel::Success,
            NoticeLevel::Error,
            NoticeLevel::Info,
            NoticeLevel::Warning,
        ] {
            let ms = level.dismiss_after().as_millis();
            assert!((4000..=6000).contains(&ms), "{level:?} dismisses after {ms}ms");
        }
    }
}
