use std::path::PathBuf;

use iced::widget::{button, column, row, scrollable, text};
use iced::{Alignment, Element, Length};

use super::rating;
use crate::state::movie::Movie;
use crate::Message;

const POSTER_WIDTH: f32 = 240.0;

/// Full details of the movie handed over from the list
pub fn view<'a>(movie: &'a Movie, poster: Option<&'a PathBuf>) -> Element<'a, Message> {
    let categories = if movie.categories.is_empty() {
        "No categories".to_string()
    } else {
        movie.categories_label()
    };

    let mut info = column![
        text(&movie.title).size(32),
        text(&movie.duration_text).size(16),
        row![
            rating::gauge(movie.rating),
            text(format!("{} / 10", movie.rating_label())).size(16),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
        text(categories).size(16),
    ]
    .spacing(10)
    .width(Length::Fill);

    if !movie.summary.is_empty() {
        info = info.push(text(&movie.summary).size(16));
    }

    let body: Element<'a, Message> = match poster {
        Some(path) => row![
            iced::widget::image(iced::widget::image::Handle::from_path(path.clone()))
                .width(Length::Fixed(POSTER_WIDTH)),
            info,
        ]
        .spacing(24)
        .into(),
        None => info.into(),
    };

    column![
        button("← Back").on_press(Message::Back).padding(8),
        scrollable(body).height(Length::Fill),
    ]
    .spacing(16)
    .padding(24)
    .into()
}
