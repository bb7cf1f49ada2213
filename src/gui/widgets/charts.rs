//! Hand-drawn line and bar charts on the iced canvas.
//!
//! Purely declarative: equal-length numeric series in, styled geometry out.

use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Program, Stroke};
use iced::widget::{Column, Container, Row, Text};
use iced::{mouse, Alignment, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

use crate::models::messages::Message;

const AXIS_COLOR: Color = Color::from_rgb(0.45, 0.45, 0.55);
const GRID_COLOR: Color = Color::from_rgba(0.45, 0.45, 0.55, 0.25);
const LABEL_COLOR: Color = Color::from_rgb(0.7, 0.7, 0.7);

const MARGIN: f32 = 28.0;

#[derive(Debug, Clone)]
pub struct LineSeries {
    pub label: String,
    pub color: Color,
    pub values: Vec<f64>,
}

struct LineChart {
    series: Vec<LineSeries>,
}

impl Program<Message> for LineChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let values: Vec<f64> = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .collect();
        if values.is_empty() {
            return vec![frame.into_geometry()];
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let span = if (max - min).abs() < f64::EPSILON { 1.0 } else { max - min };

        let plot_w = (bounds.width - 2.0 * MARGIN).max(1.0);
        let plot_h = (bounds.height - 2.0 * MARGIN).max(1.0);

        draw_plot_frame(&mut frame, bounds, min, max);

        for series in &self.series {
            if series.values.len() < 2 {
                continue;
            }
            let step = plot_w / (series.values.len() - 1) as f32;
            let project = |i: usize, v: f64| -> Point {
                Point::new(
                    MARGIN + i as f32 * step,
                    MARGIN + plot_h - (((v - min) / span) as f32 * plot_h),
                )
            };

            let path = Path::new(|p| {
                p.move_to(project(0, series.values[0]));
                for (i, v) in series.values.iter().enumerate().skip(1) {
                    p.line_to(project(i, *v));
                }
            });
            frame.stroke(&path, Stroke::default().with_color(series.color).with_width(2.0));

            for (i, v) in series.values.iter().enumerate() {
                frame.fill(&Path::circle(project(i, *v), 2.5), series.color);
            }
        }

        vec![frame.into_geometry()]
    }
}

struct BarChart {
    bars: Vec<(String, f64)>,
    color: Color,
}

impl Program<Message> for BarChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let finite: Vec<f64> = self
            .bars
            .iter()
            .map(|(_, v)| *v)
            .filter(|v| v.is_finite())
            .collect();
        if finite.is_empty() {
            return vec![frame.into_geometry()];
        }

        // Bars grow up from zero; the scale always includes zero.
        let max = finite.iter().cloned().fold(0.0_f64, f64::max);
        let min = finite.iter().cloned().fold(0.0_f64, f64::min);
        let span = if (max - min).abs() < f64::EPSILON { 1.0 } else { max - min };

        let plot_w = (bounds.width - 2.0 * MARGIN).max(1.0);
        let plot_h = (bounds.height - 2.0 * MARGIN).max(1.0);

        draw_plot_frame(&mut frame, bounds, min, max);

        let slot = plot_w / self.bars.len() as f32;
        let bar_w = (slot * 0.6).max(2.0);
        let zero_y = MARGIN + plot_h - (((0.0 - min) / span) as f32 * plot_h);

        for (i, (label, value)) in self.bars.iter().enumerate() {
            let x = MARGIN + i as f32 * slot + (slot - bar_w) / 2.0;
            let top = MARGIN + plot_h - (((value - min) / span) as f32 * plot_h);
            let (y, h) = if *value >= 0.0 { (top, zero_y - top) } else { (zero_y, top - zero_y) };
            frame.fill_rectangle(Point::new(x, y), Size::new(bar_w, h.max(1.0)), self.color);

            frame.fill_text(canvas::Text {
                content: truncate_label(label),
                position: Point::new(x + bar_w / 2.0, MARGIN + plot_h + 4.0),
                color: LABEL_COLOR,
                size: 11.0.into(),
                horizontal_alignment: iced::alignment::Horizontal::Center,
                vertical_alignment: iced::alignment::Vertical::Top,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

fn draw_plot_frame(frame: &mut Frame, bounds: Rectangle, min: f64, max: f64) {
    let plot_w = (bounds.width - 2.0 * MARGIN).max(1.0);
    let plot_h = (bounds.height - 2.0 * MARGIN).max(1.0);

    let x_axis = Path::line(
        Point::new(MARGIN, MARGIN + plot_h),
        Point::new(MARGIN + plot_w, MARGIN + plot_h),
    );
    let y_axis = Path::line(Point::new(MARGIN, MARGIN), Point::new(MARGIN, MARGIN + plot_h));
    frame.stroke(&x_axis, Stroke::default().with_color(AXIS_COLOR).with_width(1.0));
    frame.stroke(&y_axis, Stroke::default().with_color(AXIS_COLOR).with_width(1.0));

    for i in 1..4 {
        let y = MARGIN + plot_h * (i as f32 / 4.0);
        let grid = Path::line(Point::new(MARGIN, y), Point::new(MARGIN + plot_w, y));
        frame.stroke(&grid, Stroke::default().with_color(GRID_COLOR).with_width(1.0));
    }

    frame.fill_text(canvas::Text {
        content: format!("{max:.2}"),
        position: Point::new(MARGIN - 4.0, MARGIN),
        color: LABEL_COLOR,
        size: 11.0.into(),
        horizontal_alignment: iced::alignment::Horizontal::Right,
        vertical_alignment: iced::alignment::Vertical::Center,
        ..canvas::Text::default()
    });
    frame.fill_text(canvas::Text {
        content: format!("{min:.2}"),
        position: Point::new(MARGIN - 4.0, MARGIN + plot_h),
        color: LABEL_COLOR,
        size: 11.0.into(),
        horizontal_alignment: iced::alignment::Horizontal::Right,
        vertical_alignment: iced::alignment::Vertical::Center,
        ..canvas::Text::default()
    });
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() > 10 {
        let head: String = label.chars().take(9).collect();
        format!("{head}…")
    } else {
        label.to_string()
    }
}

fn legend(series: &[LineSeries]) -> Element<'static, Message> {
    let mut row = Row::new().spacing(16).align_items(Alignment::Center);
    for s in series {
        row = row.push(
            Row::new()
                .spacing(6)
                .align_items(Alignment::Center)
                .push(Text::new("●").size(12).style(s.color))
                .push(Text::new(s.label.clone()).size(12).style(LABEL_COLOR)),
        );
    }
    row.into()
}

/// Line chart over one or more equal-length series, with a dot legend.
pub fn line_chart(series: Vec<LineSeries>, height: f32) -> Element<'static, Message> {
    let legend = legend(&series);
    let canvas = Canvas::new(LineChart { series })
        .width(Length::Fill)
        .height(Length::Fixed(height));
    Column::new()
        .spacing(8)
        .push(legend)
        .push(canvas)
        .into()
}

/// Bar chart over labeled values.
pub fn bar_chart(bars: Vec<(String, f64)>, color: Color, height: f32) -> Element<'static, Message> {
    Container::new(
        Canvas::new(BarChart { bars, color })
            .width(Length::Fill)
            .height(Length::Fixed(height)),
    )
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_bar_labels_are_truncated() {
        assert_eq!(truncate_label("short"), "short");
        assert_eq!(truncate_label("a very long step name"), "a very lo…");
    }
}
