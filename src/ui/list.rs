use std::collections::HashMap;
use std::path::PathBuf;

use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

use super::{centered, rating};
use crate::state::list::MovieList;
use crate::state::movie::Movie;
use crate::Message;

/// Placeholder shown when every movie has been removed (or the catalog is empty)
pub const EMPTY_PLACEHOLDER: &str = "No movies";

const POSTER_WIDTH: f32 = 64.0;

pub fn view<'a>(
    movies: &'a MovieList,
    thumbnails: &'a HashMap<String, PathBuf>,
    status: &'a str,
) -> Element<'a, Message> {
    let header = row![
        text(format!("Movies ({})", movies.count())).size(28),
        horizontal_space(),
        button("Open catalog…")
            .on_press(Message::OpenCatalog)
            .padding(8),
    ]
    .align_y(Alignment::Center);

    let body: Element<'a, Message> = if movies.is_empty() {
        centered(text(EMPTY_PLACEHOLDER).size(18))
    } else {
        let rows = movies
            .iter()
            .enumerate()
            .fold(Column::new().spacing(12), |rows, (index, movie)| {
                rows.push(movie_row(index, movie, thumbnails.get(&movie.image_reference)))
            });

        scrollable(rows).height(Length::Fill).into()
    };

    column![header, body, text(status).size(14)]
        .spacing(16)
        .padding(24)
        .into()
}

fn movie_row<'a>(
    index: usize,
    movie: &'a Movie,
    thumbnail: Option<&'a PathBuf>,
) -> Element<'a, Message> {
    let poster: Element<'a, Message> = match thumbnail {
        Some(path) => iced::widget::image(iced::widget::image::Handle::from_path(path.clone()))
            .width(Length::Fixed(POSTER_WIDTH))
            .into(),
        None => container(text("🎞").size(28))
            .center_x(Length::Fixed(POSTER_WIDTH))
            .into(),
    };

    let details = column![
        text(&movie.title).size(18),
        row![
            rating::gauge(movie.rating),
            text(movie.rating_label()).size(14),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
        text(&movie.summary).size(14),
    ]
    .spacing(4)
    .width(Length::Fill);

    let open = button(row![poster, details].spacing(12).align_y(Alignment::Center))
        .on_press(Message::Select(index))
        .style(button::text)
        .width(Length::Fill);

    row![
        open,
        button("Delete")
            .on_press(Message::Delete(index))
            .style(button::danger)
            .padding(8),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
