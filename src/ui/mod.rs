/// UI module
///
/// View functions for each screen. They only read state and emit
/// `Message`s; all mutation happens in `MoviesLib::update`.

pub mod detail;
pub mod list;
pub mod rating;

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::error::CatalogError;
use crate::Message;

/// Fill the window and center `content` in it
pub fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

pub fn loading<'a>() -> Element<'a, Message> {
    centered(text("Loading movies…").size(20))
}

/// Shown instead of the list when the catalog could not be loaded
pub fn failed(error: &CatalogError) -> Element<'_, Message> {
    let content = column![
        text("Could not load movies").size(28),
        text(error.to_string()).size(16),
        button("Open catalog…")
            .on_press(Message::OpenCatalog)
            .padding(10),
    ]
    .spacing(20)
    .padding(40)
    .align_x(Alignment::Center);

    centered(content)
}
