/// Rating gauge
/// Draws a movie's score out of 10 as a filled bar next to the numeric label
use iced::widget::canvas::{self, Canvas};
use iced::{Color, Element, Length, Point, Rectangle, Size};

use crate::Message;

const GAUGE_WIDTH: f32 = 80.0;
const GAUGE_HEIGHT: f32 = 8.0;

/// Rating gauge data
#[derive(Debug, Clone, Copy)]
pub struct RatingGauge {
    pub rating: f64,
}

/// Share of the bar to fill, clamped to the 0..=10 scale
pub fn fill_fraction(rating: f64) -> f32 {
    if rating.is_nan() {
        return 0.0;
    }
    (rating / 10.0).clamp(0.0, 1.0) as f32
}

/// Red below 5, amber below 7.5, green above
fn gauge_color(rating: f64) -> Color {
    if rating < 5.0 {
        Color::from_rgb(0.85, 0.25, 0.2)
    } else if rating < 7.5 {
        Color::from_rgb(0.95, 0.7, 0.2)
    } else {
        Color::from_rgb(0.3, 0.75, 0.35)
    }
}

impl canvas::Program<Message> for RatingGauge {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Track
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgba(1.0, 1.0, 1.0, 0.15),
        );

        let filled = fill_fraction(self.rating) * bounds.width;
        if filled > 0.0 {
            frame.fill_rectangle(
                Point::ORIGIN,
                Size::new(filled, bounds.height),
                gauge_color(self.rating),
            );
        }

        vec![frame.into_geometry()]
    }
}

pub fn gauge<'a>(rating: f64) -> Element<'a, Message> {
    Canvas::new(RatingGauge { rating })
        .width(Length::Fixed(GAUGE_WIDTH))
        .height(Length::Fixed(GAUGE_HEIGHT))
        .into()
}
